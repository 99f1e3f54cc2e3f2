//! High-level client API.
//!
//! A [`Client`] owns a [`Connect`] implementation and exposes the two command
//! handlers. Every handler call opens its own session, runs exactly one
//! operation on it and closes it again, whether the operation succeeded or
//! not:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │  Reconciler /   │    │    Session      │
//! │ (reconcile_     │───▶│  Executor       │───▶│   (via db/)     │
//! │  database, ...) │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  validate, connect,     Business logic         Wire protocol
//!  release
//! ```
//!
//! - [`builder`]: resolves connection settings and builds a [`Client`]
//! - [`handlers`]: `reconcile_database` and `execute_query`
//!
//! # Usage
//!
//! ```rust,no_run
//! use roachctl_core::{ClientBuilder, ExecutionMode, params::ReconcileDatabase};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new().build()?;
//!
//! let params = ReconcileDatabase {
//!     name: "test_db".to_string(),
//!     ..Default::default()
//! };
//! let outcome = client.reconcile_database(&params, ExecutionMode::Apply).await?;
//! println!("changed: {}", outcome.changed);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod handlers;

pub use builder::ClientBuilder;

use crate::db::{CockroachConnector, Connect, Session};

/// Entry point for running commands against a cluster.
pub struct Client<C = CockroachConnector> {
    connector: C,
}

impl<C: Connect> Client<C> {
    /// Creates a client around any session provider.
    pub fn with_connector(connector: C) -> Self {
        Self { connector }
    }
}

/// Closes a session, logging instead of failing when the close itself fails.
async fn release<S: Session>(session: S) {
    if let Err(e) = session.close().await {
        log::warn!("Failed to close session: {e}");
    }
}
