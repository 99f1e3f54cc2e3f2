//! Command handlers for the Client.

use super::{release, Client};
use crate::{
    db::Connect,
    error::Result,
    executor,
    models::{ExecutionMode, QueryResult, ReconcileOutcome},
    params::{ExecuteQuery, ReconcileDatabase},
    reconciler,
};

impl<C: Connect> Client<C> {
    /// Handle creating, altering the owner of or dropping a database.
    ///
    /// Parameters are validated before connecting. The session is closed
    /// before returning, on success and on failure.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use roachctl_core::{params::ReconcileDatabase, ClientBuilder, DatabaseState, ExecutionMode};
    /// # async {
    /// let client = ClientBuilder::new().build()?;
    /// let params = ReconcileDatabase {
    ///     name: "test_db".to_string(),
    ///     state: DatabaseState::Absent,
    ///     owner: None,
    /// };
    /// let outcome = client.reconcile_database(&params, ExecutionMode::Check).await?;
    /// # Result::<(), roachctl_core::RoachError>::Ok(())
    /// # };
    /// ```
    pub async fn reconcile_database(
        &self,
        params: &ReconcileDatabase,
        mode: ExecutionMode,
    ) -> Result<ReconcileOutcome> {
        params.validate()?;
        log::info!(
            "Reconciling database '{}' to state {}",
            params.name,
            params.state.as_str()
        );

        let mut session = self.connector.connect().await?;
        let outcome = reconciler::reconcile(&mut session, params, mode).await;
        release(session).await;
        outcome
    }

    /// Handle executing one parameterized statement.
    ///
    /// Conflicting arguments are rejected before connecting. The session is
    /// closed before returning, on success and on failure.
    pub async fn execute_query(&self, params: &ExecuteQuery) -> Result<QueryResult> {
        params.validate()?;
        log::info!("Executing query");

        let mut session = self.connector.connect().await?;
        let result = executor::execute_query(&mut session, params).await;
        release(session).await;
        result
    }
}
