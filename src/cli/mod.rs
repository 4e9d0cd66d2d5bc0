//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod apply;
pub mod args;
pub mod completions;
pub mod context;
pub mod delete;
pub mod get;
pub mod kinds;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::resources::Kind;

/// pccop - declarative resource management for the Compute console
#[derive(Parser, Debug)]
#[command(name = "pccop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (yaml, json, table)
    #[arg(
        long,
        global = true,
        env = "PCC_FORMAT",
        default_value = "yaml",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true, env = "PCC_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Override config file location
    #[arg(long, global = true, env = "PCC_CONFIG_FILE", hide_env = true)]
    pub config_file: Option<String>,

    /// Console URL, e.g. https://console.example.com:8083
    #[arg(long, global = true, env = "PCC_CONSOLE_URL", hide_env = true)]
    pub console_url: Option<String>,

    /// Project to scope every request to
    #[arg(long, global = true, env = "PCC_PROJECT", hide_env = true)]
    pub project: Option<String>,

    /// Console username or access key
    #[arg(long, global = true, env = "PCC_USERNAME", hide_env = true)]
    pub username: Option<String>,

    /// Console password or secret key
    #[arg(long, global = true, env = "PCC_PASSWORD", hide_env = true)]
    pub password: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long, global = true, env = "PCC_SKIP_CERT_VERIFICATION", hide_env = true)]
    pub skip_cert_verification: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show resolved configuration (no network access)
    Status,

    /// Create or update every resource document in a file
    #[command(after_help = "EXAMPLES:\n  \
            pccop apply -f policies.yaml\n  \
            cat tags.json | pccop apply -f - --format json")]
    Apply {
        /// YAML or JSON file of resource documents ("-" for stdin)
        #[arg(long, short = 'f')]
        file: String,
    },

    /// Read one resource and print it as a document
    Get {
        #[arg(value_enum, hide_possible_values = true)]
        kind: Kind,

        /// Resource id (see `pccop kinds`)
        id: String,
    },

    /// Read an existing resource by import id and print it as a document
    #[command(after_help = "EXAMPLES:\n  \
            pccop import tag ops\n  \
            pccop import custom_rule curl-in-container:12\n  \
            pccop import admission_policy admission")]
    Import {
        #[arg(value_enum, hide_possible_values = true)]
        kind: Kind,

        /// Import id (see `pccop kinds`)
        id: String,
    },

    /// Delete one resource
    Delete {
        #[arg(value_enum, hide_possible_values = true)]
        kind: Kind,

        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List supported resource kinds
    Kinds,

    /// Generate shell completions
    #[command(after_help = "\
  bash:   pccop completions bash > /etc/bash_completion.d/pccop
  zsh:    pccop completions zsh > \"${fpath[1]}/_pccop\"
  fish:   pccop completions fish > ~/.config/fish/completions/pccop.fish")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delete_with_yes() {
        let cli = Cli::parse_from(["pccop", "delete", "tag", "ops", "--yes"]);
        match cli.command {
            Commands::Delete { kind, id, yes } => {
                assert_eq!(kind, Kind::Tag);
                assert_eq!(id, "ops");
                assert!(yes);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "pccop",
            "get",
            "waas_container_policy",
            "containerAppFirewall",
            "--format",
            "json",
            "--project",
            "central",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.project.as_deref(), Some("central"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(Cli::try_parse_from(["pccop", "get", "spaceship", "x"]).is_err());
    }
}
