//! Command execution context
//!
//! Loads the config file, merges it under the flag/environment layer and
//! logs in, so handlers start from a ready client.

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::ComputeClient;
use crate::config::{ClientConfig, ConfigFile};
use crate::error::Result;

/// Context for command execution containing the client and output format.
pub struct CommandContext {
    pub client: ComputeClient,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Resolve configuration and authenticate.
    ///
    /// # Errors
    /// Returns error if a required setting is missing or login fails.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;
        debug!(
            "Connecting to {} (project: {})",
            config.console_url,
            config.project.as_deref().unwrap_or("none")
        );
        let client = ComputeClient::connect(&config).await?;

        Ok(Self {
            client,
            format: opts.format,
        })
    }
}

/// Merge the flag/environment layer over the config file.
pub fn resolve_config(opts: &GlobalOptions) -> Result<ClientConfig> {
    let file = ConfigFile::load_at(opts.config_ref())?;
    ClientConfig::resolve(opts.overrides(), file)
}
