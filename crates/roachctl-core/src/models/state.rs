//! Desired-state and execution-mode enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the desired database states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseState {
    /// Database must exist (created or modified)
    #[default]
    Present,

    /// Database must not exist (dropped)
    Absent,
}

impl FromStr for DatabaseState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "present" => Ok(DatabaseState::Present),
            "absent" => Ok(DatabaseState::Absent),
            _ => Err(format!("Invalid database state: {s}")),
        }
    }
}

impl DatabaseState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseState::Present => "present",
            DatabaseState::Absent => "absent",
        }
    }
}

/// Whether statements are executed or only planned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Execute statements against the server
    #[default]
    Apply,

    /// Dry run: compute the verdict, execute nothing
    Check,
}

impl ExecutionMode {
    /// Builds the mode from a `--check` style flag.
    pub fn from_check_flag(check: bool) -> Self {
        if check {
            ExecutionMode::Check
        } else {
            ExecutionMode::Apply
        }
    }

    pub fn is_check(&self) -> bool {
        matches!(self, ExecutionMode::Check)
    }
}
