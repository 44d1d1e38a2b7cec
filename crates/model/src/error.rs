use crate::core::identifiers::FieldKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("no symbolic name registered for field '{key}' on {root}")]
    MissingSymbolicName { root: &'static str, key: FieldKey },

    /// SQL comparisons against NULL are never true, while `Option` orders
    /// `None` below every `Some`.
    #[error("ordering comparison '{operator}' on nullable field '{key}' of {root} has no SQL equivalent")]
    NullableOrdering {
        root: &'static str,
        key: FieldKey,
        operator: &'static str,
    },

    #[error("unknown SQL dialect: {0}")]
    UnknownDialect(String),
}

pub type Result<T> = std::result::Result<T, TranslateError>;
