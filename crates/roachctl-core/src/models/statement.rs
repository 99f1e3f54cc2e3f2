//! Executed statement records and the per-invocation statement log.

use serde::ser::{Serialize, SerializeTuple, Serializer};

use super::Param;

/// One statement that was sent to the server.
///
/// Serialized as a two-element array `[sql_text, parameters]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedStatement {
    /// SQL text as executed
    pub sql: String,

    /// Bound parameters (empty for DDL)
    pub parameters: Vec<Param>,
}

impl ExecutedStatement {
    /// A statement executed without parameters.
    pub fn bare(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            parameters: Vec::new(),
        }
    }
}

impl Serialize for ExecutedStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.sql)?;
        tuple.serialize_element(&self.parameters)?;
        tuple.end()
    }
}

/// Append-only log of the statements executed during one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementLog {
    entries: Vec<ExecutedStatement>,
}

impl StatementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a statement that has been executed.
    pub fn record(&mut self, statement: ExecutedStatement) {
        self.entries.push(statement);
    }

    pub fn into_entries(self) -> Vec<ExecutedStatement> {
        self.entries
    }
}
