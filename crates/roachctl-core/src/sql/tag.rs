//! Command tag reconstruction.
//!
//! The driver reports how many rows a statement affected but not the tag the
//! server sent with it, so the status message is rebuilt from the statement's
//! leading keywords in the server's format.

/// Builds the command tag for `sql` given the affected/returned row count.
///
/// Returns `None` for an empty statement.
///
/// # Examples
///
/// ```rust
/// use roachctl_core::sql::command_tag;
///
/// assert_eq!(command_tag("select 1", 1).as_deref(), Some("SELECT 1"));
/// assert_eq!(command_tag("INSERT INTO t VALUES (1)", 1).as_deref(), Some("INSERT 0 1"));
/// assert_eq!(command_tag("create database x", 0).as_deref(), Some("CREATE DATABASE"));
/// ```
pub fn command_tag(sql: &str, rows: u64) -> Option<String> {
    let mut words = leading_words(sql);

    let verb = words.next()?;
    let tag = match verb.as_str() {
        "SELECT" | "TABLE" | "VALUES" | "WITH" => format!("SELECT {rows}"),
        "INSERT" | "UPSERT" => format!("INSERT 0 {rows}"),
        "UPDATE" | "DELETE" | "SHOW" | "FETCH" | "MOVE" | "COPY" => format!("{verb} {rows}"),
        "CREATE" | "DROP" | "ALTER" => match words.next() {
            Some(object) => format!("{verb} {object}"),
            None => verb,
        },
        _ => verb,
    };
    Some(tag)
}

/// Whether the tag for `sql` carries a row count.
///
/// DDL and session statements report none, so their `row_count` is absent
/// rather than zero.
pub fn counts_rows(sql: &str) -> bool {
    leading_words(sql).next().is_some_and(|verb| {
        matches!(
            verb.as_str(),
            "SELECT"
                | "TABLE"
                | "VALUES"
                | "WITH"
                | "INSERT"
                | "UPSERT"
                | "UPDATE"
                | "DELETE"
                | "SHOW"
                | "FETCH"
                | "MOVE"
                | "COPY"
        )
    })
}

fn leading_words(sql: &str) -> impl Iterator<Item = String> + '_ {
    skip_comments(sql)
        .split(|c: char| c.is_whitespace() || c == '(' || c == ';')
        .filter(|word| !word.is_empty())
        .map(str::to_uppercase)
}

/// Drops leading `--` line comments and (nested) `/* */` block comments.
fn skip_comments(mut sql: &str) -> &str {
    loop {
        sql = sql.trim_start();
        if let Some(rest) = sql.strip_prefix("--") {
            sql = rest.split_once('\n').map_or("", |(_, tail)| tail);
        } else if sql.starts_with("/*") {
            let mut depth = 0usize;
            let mut end = sql.len();
            let mut i = 0;
            let bytes = sql.as_bytes();
            while i + 1 < bytes.len() {
                match &bytes[i..i + 2] {
                    b"/*" => {
                        depth += 1;
                        i += 2;
                    }
                    b"*/" => {
                        depth -= 1;
                        i += 2;
                        if depth == 0 {
                            end = i;
                            break;
                        }
                    }
                    _ => i += 1,
                }
            }
            sql = &sql[end..];
        } else {
            return sql;
        }
    }
}
