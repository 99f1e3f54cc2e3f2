//! Builder for creating and configuring Client instances.

use std::path::{Path, PathBuf};

use super::Client;
use crate::{
    config::{ConnectionConfig, ConnectionParams},
    db::CockroachConnector,
    error::Result,
};

/// Builder for creating and configuring Client instances.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    config_path: Option<PathBuf>,
    overrides: ConnectionConfig,
}

impl ClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit config file, which then has to exist.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/roachctl/config.toml` or
    /// `~/.config/roachctl/config.toml`, when present.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the settings that take precedence over the config file.
    pub fn with_overrides(mut self, overrides: ConnectionConfig) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolves the connection parameters without building a client.
    ///
    /// # Errors
    ///
    /// Returns `RoachError::FileSystem` if the config file cannot be read
    /// Returns `RoachError::Configuration` if the settings are invalid
    pub fn resolve(&self) -> Result<ConnectionParams> {
        ConnectionConfig::load(self.config_path.as_deref())?
            .merge(self.overrides.clone())
            .resolve()
    }

    /// Builds a client for the resolved CockroachDB connection.
    ///
    /// No connection is opened here; each handler call connects on its own.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ClientBuilder::resolve`].
    pub fn build(self) -> Result<Client> {
        let params = self.resolve()?;
        log::debug!("Resolved connection parameters: {params:?}");
        Ok(Client::with_connector(CockroachConnector::new(params)))
    }
}
