//! SQL text construction.
//!
//! - [`statement`]: DDL builder for database-level statements
//! - [`template`]: placeholder templates rendered with escaped literals
//! - [`tag`]: command tag reconstruction for the status message

pub mod statement;
pub mod tag;
pub mod template;

pub use statement::{
    is_plain_identifier, quote_database_name, stored_role_name, DatabaseStatement,
};
pub use tag::{command_tag, counts_rows};
pub use template::{Payload, Template};
