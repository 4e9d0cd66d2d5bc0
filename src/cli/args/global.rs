//! Global CLI options shared across all commands
//!
//! Captures the flag/environment layer of the configuration. The config file
//! layer is merged later by `CommandContext`.

use crate::cli::{Cli, OutputFormat};
use crate::config::Overrides;

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.pccop/config.json)
    pub config_file: Option<String>,

    pub console_url: Option<String>,
    pub project: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub skip_cert_verification: bool,
}

impl GlobalOptions {
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config_file: cli.config_file.clone(),
            console_url: cli.console_url.clone(),
            project: cli.project.clone(),
            username: cli.username.clone(),
            password: cli.password.clone(),
            skip_cert_verification: cli.skip_cert_verification,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config_file.as_deref()
    }

    /// Connection settings given on the command line or in the environment
    pub fn overrides(&self) -> Overrides {
        Overrides {
            console_url: self.console_url.clone(),
            project: self.project.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            skip_cert_verification: self.skip_cert_verification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_copy_connection_flags() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            config_file: Some("/custom/config.json".to_string()),
            console_url: Some("https://console:8083".to_string()),
            project: Some("central".to_string()),
            username: Some("admin".to_string()),
            password: None,
            skip_cert_verification: true,
        };

        assert_eq!(opts.config_ref(), Some("/custom/config.json"));

        let overrides = opts.overrides();
        assert_eq!(overrides.console_url.as_deref(), Some("https://console:8083"));
        assert_eq!(overrides.project.as_deref(), Some("central"));
        assert_eq!(overrides.password, None);
        assert!(overrides.skip_cert_verification);
    }

    #[test]
    fn test_defaults() {
        let opts = GlobalOptions::default();
        assert_eq!(opts.format, OutputFormat::Yaml);
        assert_eq!(opts.config_ref(), None);
        assert!(!opts.overrides().skip_cert_verification);
    }
}
