//! Parameter structures for roachctl operations
//!
//! These structures are shared by every interface (the CLI today, any
//! embedding program tomorrow) and carry no framework-specific derives.
//! Interface layers define their own argument types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Handlers     │
//! │  (clap derives) │───▶│ (validation)    │───▶│ (reconcile,     │
//! │                 │    │                 │    │  execute_query) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation that must happen before a connection is opened (for example
//! the exclusivity of positional and named arguments) lives here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{RoachError, Result},
    models::{DatabaseState, Param},
    sql::Payload,
};

/// Parameters for reconciling one database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconcileDatabase {
    /// Database name to create, modify or delete (required)
    pub name: String,
    /// Desired state, `present` by default
    #[serde(default)]
    pub state: DatabaseState,
    /// Desired owner; passed to the server unquoted
    pub owner: Option<String>,
}

impl ReconcileDatabase {
    /// Requested owner, treating an empty string as no owner.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref().filter(|owner| !owner.is_empty())
    }

    /// # Errors
    ///
    /// Returns `RoachError::InvalidInput` for an empty database name.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(RoachError::invalid_input("name").with_reason("database name is required"));
        }
        Ok(())
    }
}

/// Parameters for executing one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteQuery {
    /// SQL template using `%s` or `%(name)s` placeholders
    pub query: String,
    /// Values for `%s` placeholders; mutually exclusive with `named_args`
    pub positional_args: Option<Vec<Param>>,
    /// Values for `%(name)s` placeholders; mutually exclusive with
    /// `positional_args`
    pub named_args: Option<BTreeMap<String, Param>>,
}

impl ExecuteQuery {
    /// # Errors
    ///
    /// Returns `RoachError::InvalidInput` when the query is empty or when both
    /// positional and named arguments are supplied.
    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(RoachError::invalid_input("query").with_reason("query text is required"));
        }

        let has_positional = self.positional_args.as_ref().is_some_and(|a| !a.is_empty());
        let has_named = self.named_args.as_ref().is_some_and(|a| !a.is_empty());
        if has_positional && has_named {
            return Err(RoachError::invalid_input("named_args")
                .with_reason("parameters are mutually exclusive: positional_args|named_args"));
        }
        Ok(())
    }

    /// Arguments to substitute: positional if any, else named if any, else none.
    pub fn payload(&self) -> Payload {
        Payload::select(self.positional_args.clone(), self.named_args.clone())
    }
}

/// Interprets a textual argument value.
///
/// Valid JSON scalars (`1`, `2.5`, `true`, `null`, `"quoted"`) keep their
/// type; anything else, including JSON arrays and objects, is taken as a raw
/// string.
///
/// ```rust
/// use roachctl_core::{models::Param, params::parse_argument};
///
/// assert_eq!(parse_argument("1"), Param::Int(1));
/// assert_eq!(parse_argument("null"), Param::Null);
/// assert_eq!(parse_argument("\"1\""), Param::Text("1".to_string()));
/// assert_eq!(parse_argument("test"), Param::Text("test".to_string()));
/// ```
pub fn parse_argument(raw: &str) -> Param {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| Param::from_json("argument", value).ok())
        .unwrap_or_else(|| Param::Text(raw.to_string()))
}

/// Splits a `KEY=VALUE` pair and interprets the value with [`parse_argument`].
///
/// # Errors
///
/// Returns `RoachError::InvalidInput` when there is no `=` or the key is
/// empty.
pub fn parse_named_argument(raw: &str) -> Result<(String, Param)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), parse_argument(value))),
        _ => Err(RoachError::invalid_input("named_args")
            .with_reason(format!("expected KEY=VALUE, got '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_with(positional: Option<Vec<Param>>, named: Option<Vec<(&str, Param)>>) -> ExecuteQuery {
        ExecuteQuery {
            query: "SELECT %s".to_string(),
            positional_args: positional,
            named_args: named.map(|pairs| {
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect()
            }),
        }
    }

    #[test]
    fn test_positional_and_named_are_exclusive() {
        let params = query_with(Some(vec![Param::Int(1)]), Some(vec![("a", Param::Int(2))]));

        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_empty_collections_do_not_conflict() {
        let params = query_with(Some(vec![]), Some(vec![("a", Param::Int(2))]));
        assert!(params.validate().is_ok());
        assert!(matches!(params.payload(), Payload::Named(_)));

        let params = query_with(None, None);
        assert!(params.validate().is_ok());
        assert_eq!(params.payload(), Payload::None);
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let params = ExecuteQuery {
            query: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(RoachError::InvalidInput { field, .. }) if field == "query"
        ));
    }

    #[test]
    fn test_reconcile_owner_and_validation() {
        let params = ReconcileDatabase {
            name: "test_db".to_string(),
            state: DatabaseState::Present,
            owner: Some(String::new()),
        };
        assert_eq!(params.owner(), None);
        assert!(params.validate().is_ok());

        let nameless = ReconcileDatabase::default();
        assert!(nameless.validate().is_err());
    }

    #[test]
    fn test_parse_argument_types() {
        assert_eq!(parse_argument("42"), Param::Int(42));
        assert_eq!(parse_argument("-1.5"), Param::Float(-1.5));
        assert_eq!(parse_argument("false"), Param::Bool(false));
        assert_eq!(parse_argument("[1,2]"), Param::Text("[1,2]".to_string()));
        assert_eq!(parse_argument(""), Param::Text(String::new()));
    }

    #[test]
    fn test_parse_named_argument() {
        assert_eq!(
            parse_named_argument("id_val=1").unwrap(),
            ("id_val".to_string(), Param::Int(1))
        );
        assert_eq!(
            parse_named_argument("expr=a=b").unwrap(),
            ("expr".to_string(), Param::Text("a=b".to_string()))
        );
        assert!(parse_named_argument("novalue").is_err());
        assert!(parse_named_argument("=1").is_err());
    }
}
