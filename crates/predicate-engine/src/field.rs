//! Typed field accessors.
//!
//! A [`Field`] pairs an extraction function with a [`FieldKey`]. The function
//! is what evaluation calls; the key is what translation backends resolve to a
//! symbolic name.

use model::FieldKey;
use std::{borrow::Cow, fmt, sync::Arc};

/// A value produced by an accessor: borrowed from the instance, or derived.
enum Resolved<'a, V> {
    Borrowed(&'a V),
    Owned(V),
}

trait Getter<Root, V>: Send + Sync {
    fn resolve<'a>(&self, root: &'a Root) -> Resolved<'a, V>;
}

struct Borrowed<F>(F);

impl<Root, V, F> Getter<Root, V> for Borrowed<F>
where
    F: Fn(&Root) -> &V + Send + Sync,
{
    fn resolve<'a>(&self, root: &'a Root) -> Resolved<'a, V> {
        Resolved::Borrowed((self.0)(root))
    }
}

struct Computed<F>(F);

impl<Root, V, F> Getter<Root, V> for Computed<F>
where
    F: Fn(&Root) -> V + Send + Sync,
{
    fn resolve<'a>(&self, root: &'a Root) -> Resolved<'a, V> {
        Resolved::Owned((self.0)(root))
    }
}

struct Then<Root, Mid, V> {
    first: Field<Root, Mid>,
    second: Field<Mid, V>,
}

impl<Root, Mid, V> Getter<Root, V> for Then<Root, Mid, V>
where
    Mid: 'static,
    V: Clone,
{
    fn resolve<'a>(&self, root: &'a Root) -> Resolved<'a, V> {
        match self.first.getter.resolve(root) {
            Resolved::Borrowed(mid) => self.second.getter.resolve(mid),
            // the intermediate value dies here, so the result must be owned
            Resolved::Owned(mid) => match self.second.getter.resolve(&mid) {
                Resolved::Borrowed(value) => Resolved::Owned(value.clone()),
                Resolved::Owned(value) => Resolved::Owned(value),
            },
        }
    }
}

/// Path from a `Root` instance to one of its values.
///
/// Accessors must be deterministic and free of side effects: evaluating the
/// same instance twice has to yield the same value.
pub struct Field<Root, V> {
    key: FieldKey,
    getter: Arc<dyn Getter<Root, V>>,
}

impl<Root, V> Field<Root, V>
where
    Root: 'static,
    V: 'static,
{
    /// Accessor that borrows the value out of the instance.
    ///
    /// ```ignore
    /// let age = Field::new("age", |p: &Person| &p.age);
    /// ```
    pub fn new<F>(key: impl Into<FieldKey>, getter: F) -> Self
    where
        F: Fn(&Root) -> &V + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            getter: Arc::new(Borrowed(getter)),
        }
    }

    /// Accessor that derives the value, e.g. a length or a projection that
    /// does not exist as a stored field.
    pub fn computed<F>(key: impl Into<FieldKey>, getter: F) -> Self
    where
        F: Fn(&Root) -> V + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            getter: Arc::new(Computed(getter)),
        }
    }

    /// Extends this path with `next`. The composed key joins both keys with `.`.
    ///
    /// The intermediate type needs no `Clone`; only the final value is cloned,
    /// and only when it hangs off a computed intermediate.
    pub fn then<W>(&self, next: &Field<V, W>) -> Field<Root, W>
    where
        W: Clone + 'static,
    {
        Field {
            key: self.key.join(&next.key),
            getter: Arc::new(Then {
                first: self.clone(),
                second: next.clone(),
            }),
        }
    }
}

impl<Root, V> Field<Root, V> {
    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    pub fn get<'a>(&self, root: &'a Root) -> Cow<'a, V>
    where
        V: Clone,
    {
        match self.getter.resolve(root) {
            Resolved::Borrowed(value) => Cow::Borrowed(value),
            Resolved::Owned(value) => Cow::Owned(value),
        }
    }
}

impl<Root, V> Clone for Field<Root, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            getter: Arc::clone(&self.getter),
        }
    }
}

impl<Root, V> fmt::Debug for Field<Root, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.key.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Field;
    use crate::Predicate;
    use std::borrow::Cow;

    struct Address {
        city: String,
    }

    struct Person {
        age: u32,
        tags: Vec<String>,
        address: Address,
    }

    fn person() -> Person {
        Person {
            age: 30,
            tags: vec!["a".into(), "b".into()],
            address: Address {
                city: "Oslo".into(),
            },
        }
    }

    #[test]
    fn test_borrowed_field_does_not_clone() {
        let age = Field::new("age", |p: &Person| &p.age);
        let p = person();
        assert!(matches!(age.get(&p), Cow::Borrowed(30)));
        assert_eq!(age.key().as_str(), "age");
    }

    #[test]
    fn test_computed_field() {
        let tag_count = Field::computed("tags.count", |p: &Person| p.tags.len());
        assert_eq!(*tag_count.get(&person()), 2);
    }

    #[test]
    fn test_then_composes_paths_and_keys() {
        let address = Field::new("address", |p: &Person| &p.address);
        let city = Field::new("city", |a: &Address| &a.city);
        let person_city = address.then(&city);

        assert_eq!(person_city.key().as_str(), "address.city");
        assert_eq!(person_city.get(&person()).as_str(), "Oslo");
    }

    #[test]
    fn test_then_through_non_clone_intermediate_in_a_leaf() {
        let address = Field::new("address", |p: &Person| &p.address);
        let city_len = Field::computed("city_len", |a: &Address| a.city.len());
        let city = Field::new("city", |a: &Address| &a.city);

        let p = person();
        assert!(address.then(&city).eq("Oslo".into()).evaluate(&p));
        assert!(matches!(address.then(&city).get(&p), Cow::Borrowed(_)));
        assert!(address.then(&city_len).eq(4).evaluate(&p));
    }

    #[test]
    fn test_then_through_computed_value() {
        let first_tag = Field::computed("first_tag", |p: &Person| {
            p.tags.first().cloned().unwrap_or_default()
        });
        let len = Field::computed("len", |s: &String| s.len());
        let composed = first_tag.then(&len);
        assert_eq!(*composed.get(&person()), 1);
    }

    #[test]
    fn test_debug_shows_key() {
        let age = Field::new("age", |p: &Person| &p.age);
        assert_eq!(format!("{age:?}"), r#"Field("age")"#);
    }
}
