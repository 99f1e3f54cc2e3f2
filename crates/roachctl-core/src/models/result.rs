//! Results returned to the caller by the two command handlers.

use serde::Serialize;

use super::{ExecutedStatement, Row};

/// Outcome of a database reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconcileOutcome {
    /// Whether the desired state required a change
    pub changed: bool,

    /// Statements actually executed (always empty in check mode)
    pub executed_statements: Vec<ExecutedStatement>,
}

impl ReconcileOutcome {
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            executed_statements: Vec::new(),
        }
    }
}

/// Outcome of a query execution.
///
/// `changed` is always true: the executor cannot tell whether arbitrary SQL
/// modified anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub changed: bool,

    /// Status reported for the statement, e.g. `SELECT 2` or `INSERT 0 1`
    pub status_message: Option<String>,

    /// Number of rows returned or affected
    pub row_count: Option<i64>,

    /// Normalized rows, empty for statements without a result set
    #[serde(rename = "query_result")]
    pub rows: Vec<Row>,

    /// Statement text with the arguments substituted
    pub query: String,
}

impl QueryResult {
    pub fn new(
        query: String,
        status_message: Option<String>,
        row_count: Option<i64>,
        rows: Vec<Row>,
    ) -> Self {
        Self {
            changed: true,
            status_message,
            row_count,
            rows,
            query,
        }
    }
}
