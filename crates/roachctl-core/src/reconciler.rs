//! Database reconciliation.
//!
//! Compares the desired state of one database against a fresh catalog listing
//! and issues at most one DDL statement to converge:
//!
//! | desired   | current                   | statement                       |
//! |-----------|---------------------------|---------------------------------|
//! | `present` | missing                   | `CREATE DATABASE "n" [OWNER o]` |
//! | `present` | exists, owner differs     | `ALTER DATABASE "n" OWNER TO o` |
//! | `present` | exists, owner matches     | none                            |
//! | `absent`  | exists                    | `DROP DATABASE "n"`             |
//! | `absent`  | missing                   | none                            |
//!
//! In check mode the verdict is computed the same way but nothing is executed
//! or recorded.

use crate::{
    db::Session,
    error::Result,
    models::{
        DatabaseDescriptor, DatabaseState, ExecutedStatement, ExecutionMode, ReconcileOutcome,
        StatementLog,
    },
    params::ReconcileDatabase,
    sql::{is_plain_identifier, DatabaseStatement},
};

/// Decides which statement, if any, moves `current` to the desired state.
pub fn plan<'a>(
    current: &DatabaseDescriptor,
    params: &'a ReconcileDatabase,
) -> Option<DatabaseStatement<'a>> {
    let name = params.name.as_str();
    let owner = params.owner();

    match (params.state, current.exists) {
        (DatabaseState::Present, false) => Some(DatabaseStatement::Create { name, owner }),
        (DatabaseState::Present, true) => owner
            .filter(|&wanted| current.owner_differs(Some(wanted)))
            .map(|owner| DatabaseStatement::AlterOwner { name, owner }),
        (DatabaseState::Absent, true) => Some(DatabaseStatement::Drop { name }),
        (DatabaseState::Absent, false) => None,
    }
}

/// Brings one database to the desired state.
///
/// # Errors
///
/// Returns `RoachError::InvalidInput` for invalid parameters,
/// `RoachError::CatalogRead` when the listing fails and
/// `RoachError::StatementExecution` when the DDL statement fails.
pub async fn reconcile<S: Session>(
    session: &mut S,
    params: &ReconcileDatabase,
    mode: ExecutionMode,
) -> Result<ReconcileOutcome> {
    params.validate()?;

    if let Some(owner) = params.owner().filter(|owner| !is_plain_identifier(owner)) {
        log::warn!("Owner '{owner}' is not a plain identifier and is passed to the server unquoted");
    }

    let listing = session.list_databases().await?;
    let current = DatabaseDescriptor::locate(listing, &params.name);

    let Some(statement) = plan(&current, params) else {
        log::debug!(
            "Database '{}' already {}",
            params.name,
            params.state.as_str()
        );
        return Ok(ReconcileOutcome::unchanged());
    };

    let sql = statement.to_string();
    let mut statements = StatementLog::new();
    if mode.is_check() {
        log::debug!("Check mode, skipping: {sql}");
    } else {
        log::debug!("Executing: {sql}");
        session.execute(&sql).await?;
        statements.record(ExecutedStatement::bare(sql));
    }

    Ok(ReconcileOutcome {
        changed: true,
        executed_statements: statements.into_entries(),
    })
}
