//! Command argument wrappers and command execution
//!
//! Argument structures carry the clap derives and convert into the core
//! parameter types, which stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Client handlers
//! ```
//!
//! Parse-time checks (value enums, conflicting flags) live here; checks that
//! every caller of the core needs (empty names, exclusive argument kinds) are
//! repeated by the core before it connects.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, ValueEnum};
use roachctl_core::{
    params::{parse_argument, parse_named_argument},
    Client, DatabaseState, ExecuteQuery, ExecutionMode, ReconcileDatabase, RoachError,
};

use crate::renderer::TerminalRenderer;

/// Reconcile a database to the desired state
///
/// Creates the database when it should be present and is missing, changes
/// its owner when `--owner` differs from the current one, and drops it when
/// it should be absent. Running the same command twice changes nothing the
/// second time.
#[derive(Args)]
pub struct DbArgs {
    /// Name of the database to create, modify or delete
    pub name: String,

    /// Desired state of the database
    #[arg(long, value_enum, default_value_t = StateArg::Present)]
    pub state: StateArg,

    /// Role that should own the database, passed to the server unquoted
    #[arg(long)]
    pub owner: Option<String>,

    /// Report what would change without executing anything
    #[arg(long)]
    pub check: bool,
}

impl From<DbArgs> for ReconcileDatabase {
    fn from(val: DbArgs) -> Self {
        ReconcileDatabase {
            name: val.name,
            state: val.state.into(),
            owner: val.owner,
        }
    }
}

/// Command-line representation of the desired database state
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    /// Database must exist
    Present,
    /// Database must not exist
    Absent,
}

impl From<StateArg> for DatabaseState {
    fn from(val: StateArg) -> Self {
        match val {
            StateArg::Present => DatabaseState::Present,
            StateArg::Absent => DatabaseState::Absent,
        }
    }
}

impl std::fmt::Display for StateArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DatabaseState::from(*self).as_str())
    }
}

/// Execute a SQL statement
///
/// Placeholders are `%s` for positional arguments and `%(name)s` for named
/// ones; `%%` is a literal percent sign when arguments are given. Argument
/// values that parse as JSON scalars (`1`, `2.5`, `true`, `null`, `"text"`)
/// keep their type, anything else is sent as a string.
#[derive(Args)]
pub struct QueryArgs {
    /// SQL statement to execute
    pub query: String,

    /// Value for the next `%s` placeholder (repeatable)
    #[arg(
        long = "positional-arg",
        value_name = "VALUE",
        allow_hyphen_values = true,
        conflicts_with = "named_args"
    )]
    pub positional_args: Vec<String>,

    /// Value for a `%(KEY)s` placeholder (repeatable)
    #[arg(long = "named-arg", value_name = "KEY=VALUE", allow_hyphen_values = true)]
    pub named_args: Vec<String>,
}

impl TryFrom<QueryArgs> for ExecuteQuery {
    type Error = RoachError;

    fn try_from(val: QueryArgs) -> Result<Self, Self::Error> {
        let positional_args = (!val.positional_args.is_empty())
            .then(|| val.positional_args.iter().map(|raw| parse_argument(raw)).collect());

        let named_args = if val.named_args.is_empty() {
            None
        } else {
            Some(
                val.named_args
                    .iter()
                    .map(|raw| parse_named_argument(raw))
                    .collect::<Result<BTreeMap<_, _>, _>>()?,
            )
        };

        Ok(ExecuteQuery {
            query: val.query,
            positional_args,
            named_args,
        })
    }
}

/// Runs commands against a client and prints their results.
pub struct Cli<'a> {
    client: Client,
    renderer: &'a TerminalRenderer,
}

impl<'a> Cli<'a> {
    pub fn new(client: Client, renderer: &'a TerminalRenderer) -> Self {
        Self { client, renderer }
    }

    pub async fn reconcile_database(&self, args: DbArgs) -> Result<()> {
        let mode = ExecutionMode::from_check_flag(args.check);
        let params = ReconcileDatabase::from(args);

        let outcome = self.client.reconcile_database(&params, mode).await?;
        self.renderer.render_result(&outcome)
    }

    pub async fn execute_query(&self, args: QueryArgs) -> Result<()> {
        let params = ExecuteQuery::try_from(args)?;

        let result = self.client.execute_query(&params).await?;
        self.renderer.render_result(&result)
    }
}

#[cfg(test)]
mod tests {
    use roachctl_core::Param;

    use super::*;

    fn query_args(positional: &[&str], named: &[&str]) -> QueryArgs {
        QueryArgs {
            query: "SELECT %s".to_string(),
            positional_args: positional.iter().map(|s| s.to_string()).collect(),
            named_args: named.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_query_args_conversion() {
        let params = ExecuteQuery::try_from(query_args(&["1", "test", "-2"], &[])).unwrap();
        assert_eq!(
            params.positional_args,
            Some(vec![
                Param::Int(1),
                Param::Text("test".to_string()),
                Param::Int(-2)
            ])
        );
        assert_eq!(params.named_args, None);

        let params = ExecuteQuery::try_from(query_args(&[], &["id_val=1"])).unwrap();
        assert_eq!(params.positional_args, None);
        assert_eq!(
            params.named_args.unwrap().get("id_val"),
            Some(&Param::Int(1))
        );
    }

    #[test]
    fn test_malformed_named_arg() {
        assert!(ExecuteQuery::try_from(query_args(&[], &["oops"])).is_err());
    }

    #[test]
    fn test_db_args_conversion() {
        let params = ReconcileDatabase::from(DbArgs {
            name: "test_db".to_string(),
            state: StateArg::Absent,
            owner: None,
            check: true,
        });
        assert_eq!(params.state, DatabaseState::Absent);
        assert_eq!(StateArg::Absent.to_string(), "absent");
    }
}
