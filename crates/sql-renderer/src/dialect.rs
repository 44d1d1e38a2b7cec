//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::TranslateError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (a column name) in the correct quotation marks for
    /// the dialect, doubling any embedded quote character.
    ///
    /// - PostgreSQL and SQLite use double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for the parameter at `index` (zero-based).
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL and SQLite use `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Literal for a constant boolean condition.
    fn bool_literal(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }

    /// Operator comparing two values where `NULL` equals `NULL`.
    fn null_safe_equals(&self) -> &'static str {
        "IS NOT DISTINCT FROM"
    }

    /// Clause appended to `LIKE` so that `\` escapes the pattern
    /// metacharacters. Empty where backslash is already the default escape.
    fn like_escape(&self) -> &'static str {
        ""
    }

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn null_safe_equals(&self) -> &'static str {
        "<=>"
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        // SQLite has no boolean type
        if value { "1" } else { "0" }
    }

    fn null_safe_equals(&self) -> &'static str {
        "IS"
    }

    fn like_escape(&self) -> &'static str {
        r" ESCAPE '\'"
    }

    fn name(&self) -> String {
        "SQLite".into()
    }
}

/// Dialect selector for configuration files.
///
/// Parsed the same way from config and from strings: case-insensitive
/// `postgres` (`pg`, `postgresql`), `mysql` (`mariadb`) or `sqlite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DialectKind {
    Postgres,
    MySql,
    Sqlite,
}

impl DialectKind {
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectKind::Postgres => &Postgres,
            DialectKind::MySql => &MySql,
            DialectKind::Sqlite => &Sqlite,
        }
    }
}

impl FromStr for DialectKind {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pg" | "postgres" | "postgresql" => Ok(DialectKind::Postgres),
            "mysql" | "mariadb" => Ok(DialectKind::MySql),
            "sqlite" => Ok(DialectKind::Sqlite),
            _ => Err(TranslateError::UnknownDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for DialectKind {
    type Error = TranslateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DialectKind::Postgres => "postgres",
            DialectKind::MySql => "mysql",
            DialectKind::Sqlite => "sqlite",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoting_and_placeholders() {
        assert_eq!(Postgres.quote_identifier("age"), r#""age""#);
        assert_eq!(Postgres.quote_identifier(r#"we"ird"#), r#""we""ird""#);
        assert_eq!(MySql.quote_identifier("age"), "`age`");
        assert_eq!(Sqlite.quote_identifier("age"), r#""age""#);

        assert_eq!(Postgres.get_placeholder(0), "$1");
        assert_eq!(Postgres.get_placeholder(4), "$5");
        assert_eq!(MySql.get_placeholder(4), "?");
        assert_eq!(Sqlite.get_placeholder(4), "?");
    }

    #[test]
    fn test_null_safe_equality() {
        assert_eq!(Postgres.null_safe_equals(), "IS NOT DISTINCT FROM");
        assert_eq!(MySql.null_safe_equals(), "<=>");
        assert_eq!(Sqlite.null_safe_equals(), "IS");
    }

    #[test]
    fn test_bool_literals() {
        assert_eq!(Postgres.bool_literal(true), "TRUE");
        assert_eq!(MySql.bool_literal(false), "FALSE");
        assert_eq!(Sqlite.bool_literal(true), "1");
        assert_eq!(Sqlite.bool_literal(false), "0");
    }

    #[test]
    fn test_dialect_kind_from_str() {
        assert_eq!("Postgres".parse::<DialectKind>(), Ok(DialectKind::Postgres));
        assert_eq!("mariadb".parse::<DialectKind>(), Ok(DialectKind::MySql));
        assert_eq!("sqlite".parse::<DialectKind>(), Ok(DialectKind::Sqlite));
        assert_eq!(
            "oracle".parse::<DialectKind>(),
            Err(TranslateError::UnknownDialect("oracle".into()))
        );
    }

    #[test]
    fn test_dialect_kind_resolves_dialect() {
        assert_eq!(DialectKind::Postgres.dialect().name(), "PostgreSQL");
        assert_eq!(DialectKind::MySql.dialect().name(), "MySQL");
        assert_eq!(DialectKind::Sqlite.dialect().name(), "SQLite");
        assert_eq!(DialectKind::MySql.to_string(), "mysql");
    }
}
