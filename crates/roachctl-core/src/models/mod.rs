//! Data models for catalog state, executed statements and query results.
//!
//! This module contains the domain types shared by the database reconciler
//! and the query executor. Display implementations for these models are
//! located in [`crate::display`] to keep data structures separate from
//! presentation.
//!
//! # Value Pipeline
//!
//! Values fetched from the server pass through two closed types:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Wire column   │    │    RawValue     │    │      Value      │
//! │  (server type)  │───▶│ (decoded kind)  │───▶│  (serializable) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!       db::rows              normalize             QueryResult
//! ```
//!
//! [`RawValue`] keeps the driver kinds that have no faithful serialized
//! form (decimals, intervals); [`crate::normalize`] resolves them once into
//! [`Value`].
//!
//! # Examples
//!
//! ```rust
//! use roachctl_core::models::{DatabaseDescriptor, DatabaseState};
//!
//! let missing = DatabaseDescriptor::absent("test_db");
//! assert!(!missing.exists);
//! assert_eq!(missing.owner, None);
//!
//! assert_eq!("absent".parse::<DatabaseState>(), Ok(DatabaseState::Absent));
//! ```

pub mod descriptor;
pub mod result;
pub mod state;
pub mod statement;
pub mod value;


// Re-export all public types at the models level
pub use descriptor::DatabaseDescriptor;
pub use result::{QueryResult, ReconcileOutcome};
pub use state::{DatabaseState, ExecutionMode};
pub use statement::{ExecutedStatement, StatementLog};
pub use value::{Interval, Numeric, Param, RawRow, RawValue, Row, Value};
