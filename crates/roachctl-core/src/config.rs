//! Connection configuration.
//!
//! Parameters resolve in layers: built-in defaults, then a TOML file, then
//! whatever the caller supplies as overrides (environment variables and
//! command-line flags in the CLI). Later layers win field by field.
//!
//! ```rust
//! use roachctl_core::config::{ConnectionConfig, SslMode};
//!
//! let file = ConnectionConfig::from_toml_str("host = \"db.internal\"\nport = 26000\n").unwrap();
//! let flags = ConnectionConfig { port: Some(26257), ..Default::default() };
//!
//! let params = file.merge(flags).resolve().unwrap();
//! assert_eq!(params.host, "db.internal");
//! assert_eq!(params.port, 26257);
//! assert_eq!(params.ssl_mode, SslMode::Prefer);
//! ```

use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::error::{ConfigResultExt, RoachError, Result};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 26257;
const DEFAULT_DATABASE: &str = "defaultdb";
const DEFAULT_USER: &str = "root";
const DEFAULT_APPLICATION_NAME: &str = "roachctl";
const CONFIG_FILE_NAME: &str = "config.toml";

/// TLS negotiation mode, as understood by libpq-compatible clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    Disable,
    Allow,
    #[default]
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl FromStr for SslMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            _ => Err(format!(
                "Invalid ssl mode: {s} (expected disable, allow, prefer, require, verify-ca or verify-full)"
            )),
        }
    }
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

/// One layer of connection settings. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub ssl_mode: Option<String>,
    pub ssl_root_cert: Option<PathBuf>,
    pub ssl_cert: Option<PathBuf>,
    pub ssl_key: Option<PathBuf>,
    pub application_name: Option<String>,
}

impl ConnectionConfig {
    /// Loads the file layer.
    ///
    /// An explicit `path` must exist. Without one, the XDG config location
    /// (`$XDG_CONFIG_HOME/roachctl/config.toml`) is used when present and an
    /// empty layer is returned otherwise.
    ///
    /// # Errors
    ///
    /// Returns `RoachError::FileSystem` if the file cannot be read and
    /// `RoachError::Configuration` if it is not valid TOML for this layer.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|e| RoachError::FileSystem {
            path: path.clone(),
            source: e,
        })?;

        log::debug!("Loaded connection settings from {}", path.display());
        toml::from_str(&content)
            .config_context(&format!("Failed to parse TOML config {}", path.display()))
    }

    /// Parses a TOML document into a configuration layer.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).config_context("Failed to parse TOML config")
    }

    /// Location of the default config file, if one exists.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("roachctl").find_config_file(CONFIG_FILE_NAME)
    }

    /// Overlays `overrides` on top of `self`, field by field.
    pub fn merge(self, overrides: ConnectionConfig) -> Self {
        Self {
            host: overrides.host.or(self.host),
            port: overrides.port.or(self.port),
            database: overrides.database.or(self.database),
            user: overrides.user.or(self.user),
            password: overrides.password.or(self.password),
            ssl_mode: overrides.ssl_mode.or(self.ssl_mode),
            ssl_root_cert: overrides.ssl_root_cert.or(self.ssl_root_cert),
            ssl_cert: overrides.ssl_cert.or(self.ssl_cert),
            ssl_key: overrides.ssl_key.or(self.ssl_key),
            application_name: overrides.application_name.or(self.application_name),
        }
    }

    /// Applies the built-in defaults and validates the result.
    ///
    /// # Errors
    ///
    /// Returns `RoachError::Configuration` for an unknown ssl mode.
    pub fn resolve(self) -> Result<ConnectionParams> {
        let ssl_mode = match self.ssl_mode {
            Some(mode) => mode.parse::<SslMode>().map_err(RoachError::configuration)?,
            None => SslMode::default(),
        };

        Ok(ConnectionParams {
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            database: self.database.unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            user: self.user.unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: self.password,
            ssl_mode,
            ssl_root_cert: self.ssl_root_cert,
            ssl_cert: self.ssl_cert,
            ssl_key: self.ssl_key,
            application_name: self
                .application_name
                .unwrap_or_else(|| DEFAULT_APPLICATION_NAME.to_string()),
        })
    }
}

/// Fully resolved connection parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
    pub ssl_mode: SslMode,
    pub ssl_root_cert: Option<PathBuf>,
    pub ssl_cert: Option<PathBuf>,
    pub ssl_key: Option<PathBuf>,
    pub application_name: String,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        ConnectionParams {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            user: DEFAULT_USER.to_string(),
            password: None,
            ssl_mode: SslMode::default(),
            ssl_root_cert: None,
            ssl_cert: None,
            ssl_key: None,
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
        }
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("ssl_mode", &self.ssl_mode)
            .field("ssl_root_cert", &self.ssl_root_cert)
            .field("ssl_cert", &self.ssl_cert)
            .field("ssl_key", &self.ssl_key)
            .field("application_name", &self.application_name)
            .finish()
    }
}

impl fmt::Display for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}:{}/{} (sslmode={})",
            self.user,
            self.host,
            self.port,
            self.database,
            self.ssl_mode.as_str()
        )
    }
}
