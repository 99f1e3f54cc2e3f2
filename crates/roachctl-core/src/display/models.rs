//! Display implementations for result models and values.

use std::fmt;

use super::table::RowTable;
use crate::models::{DatabaseState, ExecutionMode, QueryResult, ReconcileOutcome, Value};

impl fmt::Display for DatabaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Apply => write!(f, "apply"),
            ExecutionMode::Check => write!(f, "check"),
        }
    }
}

/// Values print the way `psql` shows them: `NULL` for nulls, arrays in
/// brace notation and JSON in compact form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Json(json) => write!(f, "{json}"),
            Value::Array(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changed {
            writeln!(f, "# Database changed")?;
        } else {
            writeln!(f, "# Database unchanged")?;
        }
        writeln!(f)?;

        if self.executed_statements.is_empty() {
            if self.changed {
                writeln!(f, "No statements executed (check mode).")?;
            } else {
                writeln!(f, "Already in the desired state.")?;
            }
            return Ok(());
        }

        writeln!(f, "## Executed statements")?;
        writeln!(f)?;
        writeln!(f, "```sql")?;
        for statement in &self.executed_statements {
            writeln!(f, "{}", statement.sql)?;
        }
        writeln!(f, "```")
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {}",
            self.status_message.as_deref().unwrap_or("Query executed")
        )?;
        writeln!(f)?;

        if let Some(count) = self.row_count {
            writeln!(f, "- Rows: {count}")?;
            writeln!(f)?;
        }

        writeln!(f, "```sql")?;
        writeln!(f, "{}", self.query)?;
        writeln!(f, "```")?;
        writeln!(f)?;

        write!(f, "{}", RowTable(&self.rows))
    }
}
