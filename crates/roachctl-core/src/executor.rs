//! Query execution.
//!
//! The template is rendered once, with every placeholder replaced by an
//! escaped literal; that text is what the server executes and what is
//! reported back as `query`.

use crate::{
    db::Session,
    error::Result,
    models::QueryResult,
    normalize::normalize_row,
    params::ExecuteQuery,
    sql::{command_tag, counts_rows, Template},
};

/// Executes one statement and normalizes what it returns.
///
/// # Errors
///
/// Returns `RoachError::InvalidInput` when both positional and named
/// arguments are supplied, `RoachError::StatementExecution` when the template
/// cannot be expanded or the server rejects the statement, and
/// `RoachError::RowFetch` when a returned row cannot be decoded.
pub async fn execute_query<S: Session>(session: &mut S, params: &ExecuteQuery) -> Result<QueryResult> {
    params.validate()?;

    let rendered = Template::new(&params.query).render(&params.payload())?;

    log::debug!("Executing: {rendered}");
    let result_set = session.query(&rendered).await?;

    let count = result_set
        .rows_affected
        .max(result_set.rows.len() as u64);
    let status_message = command_tag(&rendered, count);
    let row_count = if counts_rows(&rendered) {
        i64::try_from(count).ok()
    } else {
        None
    };
    let rows = result_set.rows.into_iter().map(normalize_row).collect();

    Ok(QueryResult::new(rendered, status_message, row_count, rows))
}
