//! Connection configuration for the Compute console
//!
//! Settings come from three places. Precedence is:
//! CLI flag > environment variable > JSON config file.
//! Flags and environment variables are handled by clap (see `cli::args`);
//! this module owns the file layer and the final resolution.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Resolved settings the API client is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Console base URL, e.g. `https://console.example.com:8083`
    pub console_url: String,

    /// Project scope. `None` means no `project=` query parameter at all.
    pub project: Option<String>,

    pub username: String,

    pub password: String,

    /// Disable TLS certificate verification
    pub skip_cert_verification: bool,
}

/// On-disk JSON configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verification: Option<bool>,
}

/// Settings supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub console_url: Option<String>,
    pub project: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub skip_cert_verification: bool,
}

impl ConfigFile {
    /// Default config file location (`~/.pccop/config.json`)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".pccop").join("config.json"))
    }

    /// Load a config file from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&contents).map_err(ConfigError::from)?;

        Ok(file)
    }

    /// Load the explicitly requested file, or the default one if it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just yields an empty configuration.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Treat empty strings from the environment the same as unset values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ClientConfig {
    /// Merge command-line/environment overrides over the file layer.
    pub fn resolve(overrides: Overrides, file: ConfigFile) -> Result<Self> {
        let console_url = non_empty(overrides.console_url)
            .or(non_empty(file.console_url))
            .ok_or(ConfigError::Missing(
                "Console URL",
                "console-url",
                "PCC_CONSOLE_URL",
            ))?;
        let username = non_empty(overrides.username)
            .or(non_empty(file.username))
            .ok_or(ConfigError::Missing("Username", "username", "PCC_USERNAME"))?;
        let password = non_empty(overrides.password)
            .or(non_empty(file.password))
            .ok_or(ConfigError::Missing("Password", "password", "PCC_PASSWORD"))?;
        let project = non_empty(overrides.project).or(non_empty(file.project));
        let skip_cert_verification =
            overrides.skip_cert_verification || file.skip_cert_verification.unwrap_or(false);

        if !console_url.starts_with("http://") && !console_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "console URL must start with http:// or https://, got {}",
                console_url
            ))
            .into());
        }

        Ok(Self {
            console_url,
            project,
            username,
            password,
            skip_cert_verification,
        })
    }
}
