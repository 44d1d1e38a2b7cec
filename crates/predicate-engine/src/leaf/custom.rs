use crate::Predicate;
use std::{fmt, sync::Arc};

type Extractor<Root, V> = Arc<dyn Fn(&Root) -> V + Send + Sync>;
type Comparator<V> = Arc<dyn Fn(&V, &V) -> bool + Send + Sync>;

/// Leaf with a caller-supplied comparison:
/// `comparator(&extractor(instance), &value)`.
///
/// Has no field key, so translation backends cannot express it.
pub struct Custom<Root, V> {
    extractor: Extractor<Root, V>,
    value: V,
    comparator: Comparator<V>,
}

impl<Root, V> Custom<Root, V> {
    pub fn new<E, C>(extractor: E, value: V, comparator: C) -> Self
    where
        E: Fn(&Root) -> V + Send + Sync + 'static,
        C: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        Self {
            extractor: Arc::new(extractor),
            value,
            comparator: Arc::new(comparator),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<Root, V> Predicate for Custom<Root, V> {
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        (self.comparator)(&(self.extractor)(instance), &self.value)
    }
}

impl<Root, V: Clone> Clone for Custom<Root, V> {
    fn clone(&self) -> Self {
        Self {
            extractor: Arc::clone(&self.extractor),
            value: self.value.clone(),
            comparator: Arc::clone(&self.comparator),
        }
    }
}

impl<Root, V: fmt::Debug> fmt::Debug for Custom<Root, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

crate::impl_predicate_ops!([Root, V] Custom<Root, V>);
