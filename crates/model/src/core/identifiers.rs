use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// Stable identity of a field accessor.
///
/// Closures cannot be compared, so every accessor carries a key that the
/// symbolic-name registry uses to look up its external name. Composed paths
/// join their segments with `.`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldKey(Arc<str>);

impl FieldKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Arc::from(key.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of the path `self` followed by `next`.
    pub fn join(&self, next: &FieldKey) -> Self {
        Self::new(format!("{}.{}", self.0, next.0))
    }
}

impl From<String> for FieldKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&FieldKey> for FieldKey {
    fn from(key: &FieldKey) -> Self {
        key.clone()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
