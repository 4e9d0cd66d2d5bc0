//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::ConfigFile;
use crate::error::Result;
use crate::output::json::format_json;

/// Where a setting came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Source {
    Flag,
    File,
    Unset,
}

#[derive(Debug, Serialize)]
struct Setting {
    name: &'static str,
    value: Option<String>,
    source: Source,
}

fn setting(name: &'static str, flag: Option<String>, file: Option<String>) -> Setting {
    let flag = flag.filter(|v| !v.is_empty());
    let file = file.filter(|v| !v.is_empty());
    match (flag, file) {
        (Some(value), _) => Setting {
            name,
            value: Some(value),
            source: Source::Flag,
        },
        (None, Some(value)) => Setting {
            name,
            value: Some(value),
            source: Source::File,
        },
        (None, None) => Setting {
            name,
            value: None,
            source: Source::Unset,
        },
    }
}

fn mask(setting: Setting) -> Setting {
    Setting {
        value: setting.value.map(|_| "********".to_string()),
        ..setting
    }
}

/// Report each connection setting and where it was resolved from.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = match opts.config_ref() {
        Some(p) => std::path::PathBuf::from(p),
        None => ConfigFile::default_path()?,
    };
    let file = ConfigFile::load_at(opts.config_ref())?;

    let skip = if opts.skip_cert_verification {
        setting("skip_cert_verification", Some("true".to_string()), None)
    } else {
        setting(
            "skip_cert_verification",
            None,
            file.skip_cert_verification.map(|b| b.to_string()),
        )
    };
    let settings = vec![
        setting("console_url", opts.console_url.clone(), file.console_url),
        setting("project", opts.project.clone(), file.project),
        setting("username", opts.username.clone(), file.username),
        mask(setting("password", opts.password.clone(), file.password)),
        skip,
    ];

    if opts.format == OutputFormat::Json {
        println!("{}", format_json(&settings)?);
        return Ok(());
    }

    println!("{}\n", "pccop Configuration Status".bold());
    let file_note = if path.exists() {
        path.display().to_string().cyan()
    } else {
        format!("{} (not found)", path.display()).dimmed()
    };
    println!("Config file: {}\n", file_note);

    for s in &settings {
        match (&s.value, s.source) {
            (Some(value), Source::Flag) => {
                println!("{} {}: {}", "✓".green(), s.name, value)
            }
            (Some(value), _) => println!(
                "{} {}: {} {}",
                "✓".green(),
                s.name,
                value,
                "(config file)".dimmed()
            ),
            (None, _) if s.name == "project" || s.name == "skip_cert_verification" => {
                println!("{} {}: not set", "○".dimmed(), s.name)
            }
            (None, _) => println!("{} {}: not configured", "✗".red(), s.name),
        }
    }
    println!();

    Ok(())
}
