//! Markdown table wrapper for query result rows.

use std::fmt;

use crate::models::Row;

/// Newtype wrapper rendering rows as a markdown table.
///
/// Column headers come from the first row; every row of one result set has
/// the same columns. Pipes and newlines inside values are escaped so they
/// cannot break the table.
pub struct RowTable<'a>(pub &'a [Row]);

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl fmt::Display for RowTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.0.first() else {
            return writeln!(f, "No rows returned.");
        };

        let columns: Vec<&str> = first.column_names().collect();
        if columns.is_empty() {
            return writeln!(f, "{} row(s) without columns.", self.0.len());
        }

        writeln!(f, "| {} |", columns.iter().map(|c| cell(c)).collect::<Vec<_>>().join(" | "))?;
        writeln!(f, "|{}", "---|".repeat(columns.len()))?;
        for row in self.0 {
            let cells: Vec<String> = row.iter().map(|(_, value)| cell(&value.to_string())).collect();
            writeln!(f, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}
