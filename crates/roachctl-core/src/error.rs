//! Error types for the roachctl library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all roachctl operations.
#[derive(Error, Debug)]
pub enum RoachError {
    /// The server could not be reached or refused the credentials
    #[error("Unable to connect to database: {message}")]
    Connection { message: String },
    /// Listing the databases in the catalog failed
    #[error("Cannot read database catalog: {message}")]
    CatalogRead { message: String },
    /// A DDL statement or a user query failed to execute
    #[error("Cannot execute query \"{statement}\": {message}")]
    StatementExecution { statement: String, message: String },
    /// Reading rows after a successful execution failed
    #[error("Cannot fetch rows from cursor: {message}")]
    RowFetch { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Builder for statement execution errors.
pub struct StatementErrorBuilder {
    statement: String,
}

impl StatementErrorBuilder {
    /// Create a new builder for the statement that failed.
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
        }
    }

    /// Build the error with the driver's message.
    pub fn with_message(self, message: impl Into<String>) -> RoachError {
        RoachError::StatementExecution {
            statement: self.statement,
            message: message.into(),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RoachError {
        RoachError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RoachError {
    /// Creates a builder for statement execution errors.
    pub fn statement(statement: impl Into<String>) -> StatementErrorBuilder {
        StatementErrorBuilder::new(statement)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Returns the message the server attached to a driver error, or the driver's
/// own description when the failure happened client side.
pub fn driver_message(error: &sqlx::Error) -> String {
    match error.as_database_error() {
        Some(db_error) => db_error.message().to_string(),
        None => error.to_string(),
    }
}

/// Specialized extension trait for driver Results.
pub trait DriverResultExt<T> {
    /// Map connection failures.
    fn connect_context(self) -> Result<T>;

    /// Map catalog listing failures.
    fn catalog_context(self) -> Result<T>;

    /// Map failures of the given statement.
    fn statement_context(self, statement: &str) -> Result<T>;

    /// Map failures while decoding fetched rows.
    fn fetch_context(self) -> Result<T>;
}

impl<T> DriverResultExt<T> for std::result::Result<T, sqlx::Error> {
    fn connect_context(self) -> Result<T> {
        self.map_err(|e| RoachError::Connection {
            message: driver_message(&e),
        })
    }

    fn catalog_context(self) -> Result<T> {
        self.map_err(|e| RoachError::CatalogRead {
            message: driver_message(&e),
        })
    }

    fn statement_context(self, statement: &str) -> Result<T> {
        self.map_err(|e| RoachError::statement(statement).with_message(driver_message(&e)))
    }

    fn fetch_context(self) -> Result<T> {
        self.map_err(|e| RoachError::RowFetch {
            message: driver_message(&e),
        })
    }
}

/// Extension trait for configuration-related Results.
pub trait ConfigResultExt<T> {
    /// Map any error into a configuration error with a message.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RoachError::Configuration {
            message: format!("{message}: {e}"),
        })
    }
}

/// Result type alias for roachctl operations
pub type Result<T> = std::result::Result<T, RoachError>;
