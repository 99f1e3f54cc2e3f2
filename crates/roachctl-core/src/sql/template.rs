//! Placeholder templates in `%s` / `%(name)s` syntax.
//!
//! Every placeholder is replaced by an SQL literal escaped with `pg_escape`;
//! the rendered text is both what runs on the server and what is reported
//! back as `query`.
//!
//! Without a payload the template is passed through untouched, so a bare `%`
//! (e.g. the modulo operator) needs no escaping.

use std::collections::BTreeMap;

use pg_escape::quote_literal;

use crate::{
    error::{RoachError, Result},
    models::Param,
};

/// Arguments supplied for a template.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    None,
    Positional(Vec<Param>),
    Named(BTreeMap<String, Param>),
}

impl Payload {
    /// Picks the positional arguments if any, else the named arguments if
    /// any, else no payload.
    pub fn select(
        positional: Option<Vec<Param>>,
        named: Option<BTreeMap<String, Param>>,
    ) -> Self {
        match (positional, named) {
            (Some(args), _) if !args.is_empty() => Payload::Positional(args),
            (_, Some(args)) if !args.is_empty() => Payload::Named(args),
            _ => Payload::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Piece<'a> {
    Text(&'a str),
    Percent,
    Positional,
    Named(&'a str),
}

/// A statement template with `%s`, `%(name)s` and `%%` directives.
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    source: &'a str,
}

impl<'a> Template<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Substitutes an escaped literal for every placeholder.
    ///
    /// Literals carry no type of their own, so the server resolves each one
    /// from the context it appears in (`ts > '2024-01-01'` compares
    /// timestamps, `SET ts = NULL` assigns a typed NULL).
    ///
    /// # Errors
    ///
    /// Returns `RoachError::StatementExecution` when the template and the
    /// payload do not fit together.
    pub fn render(&self, payload: &Payload) -> Result<String> {
        let mut sql = String::with_capacity(self.source.len());

        match payload {
            Payload::None => return Ok(self.source.to_string()),
            Payload::Positional(args) => {
                let mut used = 0;
                for piece in self.pieces()? {
                    match piece {
                        Piece::Text(text) => sql.push_str(text),
                        Piece::Percent => sql.push('%'),
                        Piece::Positional => {
                            let arg = args
                                .get(used)
                                .ok_or_else(|| self.error("not enough arguments for format string"))?;
                            sql.push_str(&literal(arg));
                            used += 1;
                        }
                        Piece::Named(name) => {
                            return Err(self.error(format!(
                                "placeholder %({name})s requires named arguments"
                            )))
                        }
                    }
                }
                if used < args.len() {
                    return Err(
                        self.error("not all arguments converted during string formatting")
                    );
                }
            }
            Payload::Named(args) => {
                for piece in self.pieces()? {
                    match piece {
                        Piece::Text(text) => sql.push_str(text),
                        Piece::Percent => sql.push('%'),
                        Piece::Named(name) => {
                            let arg = args.get(name).ok_or_else(|| {
                                self.error(format!("missing value for named argument '{name}'"))
                            })?;
                            sql.push_str(&literal(arg));
                        }
                        Piece::Positional => {
                            return Err(self.error("placeholder %s requires positional arguments"))
                        }
                    }
                }
            }
        }

        Ok(sql)
    }

    fn pieces(&self) -> Result<Vec<Piece<'a>>> {
        let source = self.source;
        let bytes = source.as_bytes();
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'%' {
                i += 1;
                continue;
            }
            if start < i {
                pieces.push(Piece::Text(&source[start..i]));
            }
            match bytes.get(i + 1) {
                Some(b'%') => {
                    pieces.push(Piece::Percent);
                    i += 2;
                }
                Some(b's') => {
                    pieces.push(Piece::Positional);
                    i += 2;
                }
                Some(b'(') => {
                    let name_start = i + 2;
                    let close = source[name_start..]
                        .find(')')
                        .map(|offset| name_start + offset)
                        .ok_or_else(|| self.error("incomplete placeholder: missing ')'"))?;
                    let name = &source[name_start..close];
                    if bytes.get(close + 1) != Some(&b's') {
                        return Err(self.error(format!(
                            "unsupported format character after %({name})"
                        )));
                    }
                    pieces.push(Piece::Named(name));
                    i = close + 2;
                }
                Some(_) => {
                    let found = source[i + 1..].chars().next().unwrap_or('%');
                    return Err(self.error(format!(
                        "unsupported format character '{found}' at index {}",
                        i + 1
                    )));
                }
                None => return Err(self.error("incomplete format")),
            }
            start = i;
        }
        if start < bytes.len() {
            pieces.push(Piece::Text(&source[start..]));
        }

        let positional = pieces.iter().any(|p| matches!(p, Piece::Positional));
        let named = pieces.iter().any(|p| matches!(p, Piece::Named(_)));
        if positional && named {
            return Err(self.error("argument formats can't be mixed"));
        }

        Ok(pieces)
    }

    fn error(&self, message: impl Into<String>) -> RoachError {
        RoachError::statement(self.source).with_message(message)
    }
}

/// Renders a parameter as an SQL literal.
///
/// Negative numbers get a leading space so that `1-%s` can never turn into a
/// `--` comment.
pub fn literal(param: &Param) -> String {
    match param {
        Param::Null => "NULL".to_string(),
        Param::Bool(true) => "true".to_string(),
        Param::Bool(false) => "false".to_string(),
        Param::Int(i) if *i < 0 => format!(" {i}"),
        Param::Int(i) => i.to_string(),
        Param::Float(f) if f.is_nan() => "'NaN'::float".to_string(),
        Param::Float(f) if f.is_infinite() && *f > 0.0 => "'Infinity'::float".to_string(),
        Param::Float(f) if f.is_infinite() => "'-Infinity'::float".to_string(),
        Param::Float(f) if f.is_sign_negative() => format!(" {f:?}"),
        Param::Float(f) => format!("{f:?}"),
        Param::Text(s) => quote_literal(s).to_string(),
    }
}
