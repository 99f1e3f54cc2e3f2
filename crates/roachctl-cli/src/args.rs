use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use roachctl_core::ConnectionConfig;

use crate::cli::{DbArgs, QueryArgs};

/// Manage CockroachDB databases and run parameterized queries
///
/// roachctl reconciles databases to a desired state (create, change owner,
/// drop) and executes SQL statements with safely escaped arguments. Results are
/// printed as a JSON envelope by default so that orchestration tools can
/// consume them, or as formatted text with `--output text`.
#[derive(Parser)]
#[command(version, about, name = "roachctl")]
pub struct Args {
    /// Path to a TOML file with connection settings. Defaults to
    /// $XDG_CONFIG_HOME/roachctl/config.toml when present
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format of the result
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create, change the owner of, or drop a database
    Db(DbArgs),
    /// Execute a SQL statement and print its result set
    #[command(alias = "q")]
    Query(QueryArgs),
}

/// Connection flags. Each one can also be set through its environment
/// variable; unset flags fall back to the config file, then to defaults.
#[derive(ClapArgs, Debug, Default)]
pub struct ConnectionArgs {
    /// Host name or address of a cluster node [default: localhost]
    #[arg(long, global = true, env = "ROACHCTL_HOST")]
    pub host: Option<String>,

    /// SQL port [default: 26257]
    #[arg(long, global = true, env = "ROACHCTL_PORT")]
    pub port: Option<u16>,

    /// Database to connect to [default: defaultdb]
    #[arg(long, global = true, env = "ROACHCTL_DATABASE")]
    pub database: Option<String>,

    /// User to authenticate as [default: root]
    #[arg(long, global = true, env = "ROACHCTL_USER")]
    pub user: Option<String>,

    /// Password for password authentication
    #[arg(long, global = true, env = "ROACHCTL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// TLS mode: disable, allow, prefer, require, verify-ca or verify-full
    /// [default: prefer]
    #[arg(long, global = true, env = "ROACHCTL_SSL_MODE")]
    pub ssl_mode: Option<String>,

    /// CA certificate used to verify the server
    #[arg(long, global = true, env = "ROACHCTL_SSL_ROOT_CERT", value_name = "PATH")]
    pub ssl_root_cert: Option<PathBuf>,

    /// Client certificate for certificate authentication
    #[arg(long, global = true, env = "ROACHCTL_SSL_CERT", value_name = "PATH")]
    pub ssl_cert: Option<PathBuf>,

    /// Private key of the client certificate
    #[arg(long, global = true, env = "ROACHCTL_SSL_KEY", value_name = "PATH")]
    pub ssl_key: Option<PathBuf>,
}

impl From<ConnectionArgs> for ConnectionConfig {
    fn from(val: ConnectionArgs) -> Self {
        ConnectionConfig {
            host: val.host,
            port: val.port,
            database: val.database,
            user: val.user,
            password: val.password,
            ssl_mode: val.ssl_mode,
            ssl_root_cert: val.ssl_root_cert,
            ssl_cert: val.ssl_cert,
            ssl_key: val.ssl_key,
            application_name: None,
        }
    }
}

/// How results and failures are printed
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON envelope on stdout
    Json,
    /// Markdown rendered for the terminal
    Text,
}
