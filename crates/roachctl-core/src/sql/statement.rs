//! Builder for `CREATE`/`ALTER`/`DROP DATABASE` statements.

use std::fmt;

/// DDL statement targeting one database.
///
/// Database names are always double-quoted. Owner names are emitted
/// verbatim and must already be valid unquoted identifiers.
///
/// # Examples
///
/// ```rust
/// use roachctl_core::sql::DatabaseStatement;
///
/// let create = DatabaseStatement::Create { name: "test_db", owner: Some("alice") };
/// assert_eq!(create.to_string(), r#"CREATE DATABASE "test_db" OWNER alice"#);
///
/// let drop = DatabaseStatement::Drop { name: "Mixed Case" };
/// assert_eq!(drop.to_string(), r#"DROP DATABASE "Mixed Case""#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatement<'a> {
    Create {
        name: &'a str,
        owner: Option<&'a str>,
    },
    AlterOwner {
        name: &'a str,
        owner: &'a str,
    },
    Drop {
        name: &'a str,
    },
}

impl fmt::Display for DatabaseStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseStatement::Create { name, owner } => {
                write!(f, "CREATE DATABASE {}", quote_database_name(name))?;
                if let Some(owner) = owner {
                    write!(f, " OWNER {owner}")?;
                }
                Ok(())
            }
            DatabaseStatement::AlterOwner { name, owner } => {
                write!(
                    f,
                    "ALTER DATABASE {} OWNER TO {owner}",
                    quote_database_name(name)
                )
            }
            DatabaseStatement::Drop { name } => {
                write!(f, "DROP DATABASE {}", quote_database_name(name))
            }
        }
    }
}

/// Wraps a database name in double quotes, doubling embedded quotes.
pub fn quote_database_name(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// True for names the server accepts unquoted without case folding:
/// a lowercase letter or underscore followed by lowercase letters, digits,
/// underscores or dollar signs.
/// The role name the server stores for an owner emitted verbatim.
///
/// Unquoted identifiers fold to lower case (`Alice` becomes `alice`); a
/// double-quoted identifier keeps its case with `""` unescaped.
pub fn stored_role_name(owner: &str) -> String {
    match owner.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(quoted) if !quoted.is_empty() => quoted.replace("\"\"", "\""),
        _ => owner.to_lowercase(),
    }
}

pub fn is_plain_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '_' => chars
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$'),
        _ => false,
    }
}
