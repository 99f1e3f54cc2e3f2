mod common;

use std::collections::BTreeMap;

use common::FakeCluster;
use roachctl_core::{
    models::{Interval, Numeric, RawValue},
    ExecuteQuery, Param, ResultSet, RoachError, Value,
};
use rust_decimal::Decimal;

fn named(query: &str, args: &[(&str, Param)]) -> ExecuteQuery {
    ExecuteQuery {
        query: query.to_string(),
        named_args: Some(
            args.iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        ),
        ..Default::default()
    }
}

fn positional(query: &str, args: Vec<Param>) -> ExecuteQuery {
    ExecuteQuery {
        query: query.to_string(),
        positional_args: Some(args),
        ..Default::default()
    }
}

fn test_table_rows() -> ResultSet {
    ResultSet {
        rows: vec![vec![
            ("id".to_string(), RawValue::Int(1)),
            ("name".to_string(), RawValue::Text("first".to_string())),
        ]],
        rows_affected: 1,
    }
}

#[tokio::test]
async fn test_named_query_end_to_end() {
    let cluster = FakeCluster::new().with_response(test_table_rows());

    let result = cluster
        .client()
        .execute_query(&named(
            "SELECT * FROM test WHERE id = %(id_val)s",
            &[("id_val", Param::Int(1))],
        ))
        .await
        .expect("query failed");

    assert!(result.changed);
    assert_eq!(result.query, "SELECT * FROM test WHERE id = 1");
    assert_eq!(result.status_message.as_deref(), Some("SELECT 1"));
    assert_eq!(result.row_count, Some(1));
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].get("id"), Some(&Value::Int(1)));

    let state = cluster.state();
    assert_eq!(state.queries, vec!["SELECT * FROM test WHERE id = 1"]);
    assert_eq!(state.closes, 1);
}

#[tokio::test]
async fn test_positional_query_renders_in_order() {
    let cluster = FakeCluster::new();

    let result = cluster
        .client()
        .execute_query(&positional(
            "INSERT INTO test (id, name) VALUES (%s, %s)",
            vec![Param::Int(2), Param::Text("O'Reilly".to_string())],
        ))
        .await
        .expect("query failed");

    assert_eq!(
        result.query,
        "INSERT INTO test (id, name) VALUES (2, 'O''Reilly')"
    );

    assert_eq!(cluster.state().queries, vec![result.query.clone()]);
    assert_eq!(result.status_message.as_deref(), Some("INSERT 0 0"));
}

#[tokio::test]
async fn test_strings_and_null_are_sent_as_untyped_literals() {
    let cluster = FakeCluster::new();

    cluster
        .client()
        .execute_query(&positional(
            "UPDATE test SET ts = %s WHERE ts > %s AND u = %s",
            vec![
                Param::Null,
                Param::Text("2024-01-01".to_string()),
                Param::Text("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11".to_string()),
            ],
        ))
        .await
        .expect("query failed");

    assert_eq!(
        cluster.state().queries,
        vec![
            "UPDATE test SET ts = NULL WHERE ts > '2024-01-01' \
             AND u = 'a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11'"
        ]
    );
}

#[tokio::test]
async fn test_positional_and_named_rejected_before_connecting() {
    let cluster = FakeCluster::new();
    let mut params = named("SELECT %s", &[("a", Param::Int(1))]);
    params.positional_args = Some(vec![Param::Int(1)]);

    let err = cluster.client().execute_query(&params).await.unwrap_err();

    assert!(matches!(err, RoachError::InvalidInput { .. }));
    assert!(err.to_string().contains("mutually exclusive"));
    assert_eq!(cluster.state().connects, 0);
}

#[tokio::test]
async fn test_rows_are_normalized() {
    let cluster = FakeCluster::new().with_response(ResultSet {
        rows: vec![vec![
            ("price".to_string(), RawValue::Decimal(Numeric::Exact(Decimal::new(1250, 2)))),
            (
                "elapsed".to_string(),
                RawValue::Interval(Interval {
                    months: 0,
                    days: 1,
                    microseconds: 7_200_000_000,
                }),
            ),
            ("note".to_string(), RawValue::Null),
        ]],
        rows_affected: 1,
    });

    let result = cluster
        .client()
        .execute_query(&ExecuteQuery {
            query: "SELECT price, elapsed, note FROM orders".to_string(),
            ..Default::default()
        })
        .await
        .expect("query failed");

    let row = &result.rows[0];
    assert_eq!(row.get("price"), Some(&Value::Float(12.5)));
    assert_eq!(
        row.get("elapsed"),
        Some(&Value::Text("1 day, 2:00:00".to_string()))
    );
    assert_eq!(row.get("note"), Some(&Value::Null));
    assert_eq!(
        row.column_names().collect::<Vec<_>>(),
        vec!["price", "elapsed", "note"]
    );
}

#[tokio::test]
async fn test_statement_without_result_set() {
    let cluster = FakeCluster::new();

    let result = cluster
        .client()
        .execute_query(&ExecuteQuery {
            query: "CREATE DATABASE \"x\"".to_string(),
            ..Default::default()
        })
        .await
        .expect("DDL must not fail on the missing result set");

    assert!(result.rows.is_empty());
    assert_eq!(result.status_message.as_deref(), Some("CREATE DATABASE"));
    assert_eq!(result.row_count, None);
}

#[tokio::test]
async fn test_empty_select_counts_zero_rows() {
    let cluster = FakeCluster::new();

    let result = cluster
        .client()
        .execute_query(&ExecuteQuery {
            query: "-- nothing matches\nSELECT * FROM test WHERE false".to_string(),
            ..Default::default()
        })
        .await
        .expect("query failed");

    assert_eq!(result.status_message.as_deref(), Some("SELECT 0"));
    assert_eq!(result.row_count, Some(0));
}

#[tokio::test]
async fn test_modulo_without_arguments_is_untouched() {
    let cluster = FakeCluster::new();

    let result = cluster
        .client()
        .execute_query(&ExecuteQuery {
            query: "SELECT 5 % 2".to_string(),
            ..Default::default()
        })
        .await
        .expect("query failed");

    assert_eq!(result.query, "SELECT 5 % 2");
    assert_eq!(cluster.state().queries, vec!["SELECT 5 % 2"]);
}

#[tokio::test]
async fn test_fetch_failure_is_distinct() {
    let cluster = FakeCluster::new();
    cluster.state().fail_fetch = Some("unexpected EOF".to_string());

    let err = cluster
        .client()
        .execute_query(&ExecuteQuery {
            query: "SELECT 1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RoachError::RowFetch { .. }));
    assert_eq!(
        err.to_string(),
        "Cannot fetch rows from cursor: unexpected EOF"
    );
    cluster.assert_released();
}

#[tokio::test]
async fn test_execution_failure_carries_statement() {
    let cluster = FakeCluster::new();
    cluster.state().fail_statement = Some("relation \"missing\" does not exist".to_string());

    let err = cluster
        .client()
        .execute_query(&ExecuteQuery {
            query: "SELECT * FROM missing".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RoachError::StatementExecution { ref statement, .. } if statement == "SELECT * FROM missing"
    ));
    cluster.assert_released();
}

#[tokio::test]
async fn test_argument_count_mismatch_fails_without_executing() {
    let cluster = FakeCluster::new();

    let err = cluster
        .client()
        .execute_query(&positional("SELECT %s, %s", vec![Param::Int(1)]))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("not enough arguments"));
    assert!(cluster.state().queries.is_empty());
    cluster.assert_released();
}

#[tokio::test]
async fn test_result_envelope() {
    let cluster = FakeCluster::new().with_response(test_table_rows());

    let result = cluster
        .client()
        .execute_query(&named(
            "SELECT * FROM test WHERE id = %(id_val)s",
            &[("id_val", Param::Int(1))],
        ))
        .await
        .expect("query failed");

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "changed": true,
            "status_message": "SELECT 1",
            "row_count": 1,
            "query_result": [{"id": 1, "name": "first"}],
            "query": "SELECT * FROM test WHERE id = 1"
        })
    );
}
