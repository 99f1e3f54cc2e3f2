//! Database sessions.
//!
//! This module defines the seam between the command handlers and the
//! server: a [`Connect`] implementation opens a [`Session`], the handlers use
//! it for exactly one operation, and the session is closed afterwards.
//!
//! - [`connection`]: the CockroachDB implementation over a sqlx `PgConnection`
//! - [`catalog`]: decoding of the `SHOW DATABASES` listing
//! - [`rows`]: decoding of result set columns into [`RawValue`]s
//! - [`interval`]: parsing of `INTERVAL` text
//! - [`temporal`]: date/time column rendering
//!
//! [`RawValue`]: crate::models::RawValue

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{DatabaseDescriptor, RawRow},
};

pub mod catalog;
pub mod connection;
pub mod interval;
pub mod rows;
pub mod temporal;

pub use connection::{CockroachConnector, CockroachSession};

/// Rows and counters produced by one executed statement text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// Decoded rows; empty when no statement returned any
    pub rows: Vec<RawRow>,
    /// Rows affected (DML) or returned (queries), summed over every
    /// statement in the text
    pub rows_affected: u64,
}

/// A live, authenticated session with autocommit semantics.
#[async_trait]
pub trait Session: Send {
    /// Lists every database with its owner and region attributes.
    ///
    /// # Errors
    ///
    /// Returns `RoachError::CatalogRead` when the listing fails.
    async fn list_databases(&mut self) -> Result<Vec<DatabaseDescriptor>>;

    /// Executes a statement without parameters.
    ///
    /// # Errors
    ///
    /// Returns `RoachError::StatementExecution` carrying `sql`.
    async fn execute(&mut self, sql: &str) -> Result<()>;

    /// Executes statement text (one statement or a `;`-separated script)
    /// and fetches whatever it returns.
    ///
    /// # Errors
    ///
    /// Returns `RoachError::StatementExecution` when the server rejects a
    /// statement and `RoachError::RowFetch` when a returned row cannot be
    /// decoded.
    async fn query(&mut self, sql: &str) -> Result<ResultSet>;

    /// Closes the session.
    async fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// Opens sessions.
#[async_trait]
pub trait Connect: Send + Sync {
    type Session: Session;

    /// # Errors
    ///
    /// Returns `RoachError::Connection` when the server cannot be reached or
    /// refuses the credentials.
    async fn connect(&self) -> Result<Self::Session>;
}
