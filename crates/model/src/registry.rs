//! Symbolic-name registry.
//!
//! Translation backends never see field accessors as closures; they look up
//! the accessor's [`FieldKey`] in the registry of the predicate's root type
//! and use the registered name as the column / key in the rendered output.

use crate::{
    core::identifiers::FieldKey,
    error::{Result, TranslateError},
};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A root type that can be translated: it owns a static table mapping field
/// keys to external names.
///
/// Usually implemented through [`field_names!`](crate::field_names).
pub trait Keyed {
    fn registry() -> &'static FieldRegistry;
}

#[derive(Debug, Clone)]
pub struct FieldRegistry {
    root: &'static str,
    names: HashMap<FieldKey, String>,
}

impl FieldRegistry {
    pub fn builder(root: &'static str) -> FieldRegistryBuilder {
        FieldRegistryBuilder {
            root,
            names: HashMap::new(),
        }
    }

    /// Name of the root type this registry belongs to.
    pub fn root(&self) -> &'static str {
        self.root
    }

    pub fn get(&self, key: &FieldKey) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// Resolves the symbolic name of `key`, failing when it was never
    /// registered. A missing name must never be skipped by a backend.
    pub fn name_of(&self, key: &FieldKey) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            warn!(root = self.root, key = %key, "field has no symbolic name");
            TranslateError::MissingSymbolicName {
                root: self.root,
                key: key.clone(),
            }
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug)]
pub struct FieldRegistryBuilder {
    root: &'static str,
    names: HashMap<FieldKey, String>,
}

impl FieldRegistryBuilder {
    /// Registers `name` for `key`. Registering the same key twice keeps the
    /// later name.
    pub fn name(mut self, key: impl Into<FieldKey>, name: impl Into<String>) -> Self {
        let key = key.into();
        let name = name.into();
        if let Some(previous) = self.names.insert(key.clone(), name.clone()) {
            warn!(
                root = self.root,
                key = %key,
                previous = %previous,
                name = %name,
                "field registered twice, keeping the later name"
            );
        }
        self
    }

    pub fn build(self) -> FieldRegistry {
        debug!(root = self.root, fields = self.names.len(), "field registry built");
        FieldRegistry {
            root: self.root,
            names: self.names,
        }
    }
}
