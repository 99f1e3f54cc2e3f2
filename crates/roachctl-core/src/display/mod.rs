//! Markdown formatting for command results.
//!
//! Result types implement [`std::fmt::Display`] directly; collections that
//! need context of their own get a newtype wrapper. Everything produces
//! markdown, which the CLI renders through its terminal renderer when text
//! output is requested.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Result Models  │    │ Display impls & │    │   Formatted     │
//! │ (Outcome, Rows) │───▶│ Wrapper Types   │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for results and values
//! - [`table`]: Markdown table wrapper for result rows ([`RowTable`])
//! - [`status`]: Success and failure messages ([`OperationStatus`])
//!
//! ## Usage Examples
//!
//! ```rust
//! use roachctl_core::{
//!     display::RowTable,
//!     models::{Row, Value},
//! };
//!
//! let mut row = Row::new();
//! row.push("id", Value::Int(1));
//! row.push("name", Value::Text("a|b".to_string()));
//!
//! let output = RowTable(&[row]).to_string();
//! assert!(output.contains("| id | name |"));
//! assert!(output.contains("| 1 | a\\|b |"));
//! ```

pub mod models;
pub mod status;
pub mod table;

pub use status::OperationStatus;
pub use table::RowTable;
