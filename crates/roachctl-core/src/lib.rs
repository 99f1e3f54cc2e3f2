//! Core library for the roachctl CockroachDB automation tool.
//!
//! This crate provides the two command handlers, database reconciliation and
//! parameterized query execution, together with connection configuration,
//! data models and error handling.
//!
//! # Architecture
//!
//! - **Configuration** ([`config`]): layered connection settings
//! - **Sessions** ([`db`]): the [`Connect`]/[`Session`] seam and its
//!   CockroachDB implementation
//! - **SQL** ([`sql`]): DDL builder, placeholder templates, status tags
//! - **Logic** ([`reconciler`], [`executor`], [`normalize`]): what each
//!   command does with a session
//! - **Client** ([`client`]): validation, session lifecycle, entry points
//! - **Display** ([`display`]): markdown formatting of results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use roachctl_core::{params::ExecuteQuery, ClientBuilder, Param};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new().build()?;
//!
//! let params = ExecuteQuery {
//!     query: "SELECT * FROM test WHERE id = %(id_val)s".to_string(),
//!     named_args: Some([("id_val".to_string(), Param::Int(1))].into()),
//!     ..Default::default()
//! };
//!
//! let result = client.execute_query(&params).await?;
//! println!("{}", result);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod executor;
pub mod models;
pub mod normalize;
pub mod params;
pub mod reconciler;
pub mod sql;

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{ConnectionConfig, ConnectionParams, SslMode};
pub use db::{CockroachConnector, Connect, ResultSet, Session};
pub use display::{OperationStatus, RowTable};
pub use error::{Result, RoachError};
pub use models::{
    DatabaseDescriptor, DatabaseState, ExecutedStatement, ExecutionMode, Param, QueryResult,
    ReconcileOutcome, Row, Value,
};
pub use params::{ExecuteQuery, ReconcileDatabase};
