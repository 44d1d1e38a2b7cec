//! Membership leaves over container-typed fields.

use crate::{Predicate, field::Field};
use std::{
    collections::{BTreeSet, HashSet},
    fmt,
    hash::{BuildHasher, Hash},
};

/// `value` is an element of the sequence behind `field`.
///
/// Works for any field type that can be viewed as a slice (`Vec<E>`,
/// `[E; N]`, `Box<[E]>`).
pub struct Contains<Root, C, E> {
    field: Field<Root, C>,
    value: E,
}

impl<Root, C, E> Contains<Root, C, E> {
    pub fn new(field: Field<Root, C>, value: E) -> Self {
        Self { field, value }
    }

    pub fn field(&self) -> &Field<Root, C> {
        &self.field
    }

    pub fn value(&self) -> &E {
        &self.value
    }
}

impl<Root, C, E> Predicate for Contains<Root, C, E>
where
    C: Clone + AsRef<[E]>,
    E: PartialEq,
{
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        let container = self.field.get(instance);
        AsRef::<[E]>::as_ref(&*container).contains(&self.value)
    }
}

impl<Root, C, E: Clone> Clone for Contains<Root, C, E> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            value: self.value.clone(),
        }
    }
}

impl<Root, C, E: fmt::Debug> fmt::Debug for Contains<Root, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contains")
            .field("field", &self.field)
            .field("value", &self.value)
            .finish()
    }
}

crate::impl_predicate_ops!([Root, C, E] Contains<Root, C, E>);

/// Set types usable with [`ContainsSet`].
pub trait SetMembership<E> {
    fn has_member(&self, element: &E) -> bool;
}

impl<E: Eq + Hash, S: BuildHasher> SetMembership<E> for HashSet<E, S> {
    fn has_member(&self, element: &E) -> bool {
        self.contains(element)
    }
}

impl<E: Ord> SetMembership<E> for BTreeSet<E> {
    fn has_member(&self, element: &E) -> bool {
        self.contains(element)
    }
}

/// `value` is a member of the set behind `field`. Same semantics as
/// [`Contains`], resolved through the set's own lookup.
pub struct ContainsSet<Root, S, E> {
    field: Field<Root, S>,
    value: E,
}

impl<Root, S, E> ContainsSet<Root, S, E> {
    pub fn new(field: Field<Root, S>, value: E) -> Self {
        Self { field, value }
    }

    pub fn field(&self) -> &Field<Root, S> {
        &self.field
    }

    pub fn value(&self) -> &E {
        &self.value
    }
}

impl<Root, S, E> Predicate for ContainsSet<Root, S, E>
where
    S: Clone + SetMembership<E>,
{
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        self.field.get(instance).has_member(&self.value)
    }
}

impl<Root, S, E: Clone> Clone for ContainsSet<Root, S, E> {
    fn clone(&self) -> Self {
        Self::new(self.field.clone(), self.value.clone())
    }
}

impl<Root, S, E: fmt::Debug> fmt::Debug for ContainsSet<Root, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainsSet")
            .field("field", &self.field)
            .field("value", &self.value)
            .finish()
    }
}

crate::impl_predicate_ops!([Root, S, E] ContainsSet<Root, S, E>);

impl<Root, E> Field<Root, Vec<E>> {
    pub fn contains(&self, value: E) -> Contains<Root, Vec<E>, E> {
        Contains::new(self.clone(), value)
    }
}

impl<Root, E, S> Field<Root, HashSet<E, S>> {
    pub fn contains(&self, value: E) -> ContainsSet<Root, HashSet<E, S>, E> {
        ContainsSet::new(self.clone(), value)
    }
}

impl<Root, E> Field<Root, BTreeSet<E>> {
    pub fn contains(&self, value: E) -> ContainsSet<Root, BTreeSet<E>, E> {
        ContainsSet::new(self.clone(), value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Field, Predicate};
    use std::collections::{BTreeSet, HashSet};

    struct Post {
        scores: Vec<i32>,
        tags: HashSet<String>,
        ordered_tags: BTreeSet<String>,
        fixed: [u8; 3],
    }

    fn post() -> Post {
        Post {
            scores: vec![1, 4, 6],
            tags: ["rust", "db"].into_iter().map(String::from).collect(),
            ordered_tags: ["b", "a"].into_iter().map(String::from).collect(),
            fixed: [7, 8, 9],
        }
    }

    #[test]
    fn test_sequence_membership() {
        let scores = Field::new("scores", |p: &Post| &p.scores);
        assert!(scores.contains(4).evaluate(&post()));
        assert!(!scores.contains(5).evaluate(&post()));
    }

    #[test]
    fn test_array_membership_through_new() {
        let fixed = Field::new("fixed", |p: &Post| &p.fixed);
        let pred = super::Contains::new(fixed, 8u8);
        assert!(pred.evaluate(&post()));
    }

    #[test]
    fn test_set_membership() {
        let tags = Field::new("tags", |p: &Post| &p.tags);
        let ordered = Field::new("ordered_tags", |p: &Post| &p.ordered_tags);

        assert!(tags.contains("rust".into()).evaluate(&post()));
        assert!(!tags.contains("go".into()).evaluate(&post()));
        assert!(ordered.contains("a".into()).evaluate(&post()));
        assert!(!ordered.contains("c".into()).evaluate(&post()));
    }

    #[test]
    fn test_empty_sequence_contains_nothing() {
        let scores = Field::new("scores", |p: &Post| &p.scores);
        let empty = Post {
            scores: vec![],
            ..post()
        };
        assert!(!scores.contains(1).evaluate(&empty));
    }
}
