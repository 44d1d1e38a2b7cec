use crate::{Predicate, field::Field};
use std::{
    fmt,
    ops::{Range, RangeInclusive},
};

/// `range.start <= field < range.end`.
///
/// The lower bound is inclusive, the upper bound exclusive. An empty range
/// (`start >= end`) matches nothing.
pub struct InRange<Root, V> {
    field: Field<Root, V>,
    range: Range<V>,
}

impl<Root, V> InRange<Root, V> {
    pub fn new(field: Field<Root, V>, range: Range<V>) -> Self {
        Self { field, range }
    }

    pub fn field(&self) -> &Field<Root, V> {
        &self.field
    }

    pub fn range(&self) -> &Range<V> {
        &self.range
    }
}

impl<Root, V> Predicate for InRange<Root, V>
where
    V: Clone + PartialOrd,
{
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        self.range.contains(&*self.field.get(instance))
    }
}

impl<Root, V: Clone> Clone for InRange<Root, V> {
    fn clone(&self) -> Self {
        Self::new(self.field.clone(), self.range.clone())
    }
}

impl<Root, V: fmt::Debug> fmt::Debug for InRange<Root, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InRange")
            .field("field", &self.field)
            .field("range", &self.range)
            .finish()
    }
}

crate::impl_predicate_ops!([Root, V] InRange<Root, V>);

/// `range.start() <= field <= range.end()`.
pub struct InRangeInclusive<Root, V> {
    field: Field<Root, V>,
    range: RangeInclusive<V>,
}

impl<Root, V> InRangeInclusive<Root, V> {
    pub fn new(field: Field<Root, V>, range: RangeInclusive<V>) -> Self {
        Self { field, range }
    }

    pub fn field(&self) -> &Field<Root, V> {
        &self.field
    }

    pub fn range(&self) -> &RangeInclusive<V> {
        &self.range
    }
}

impl<Root, V> Predicate for InRangeInclusive<Root, V>
where
    V: Clone + PartialOrd,
{
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        self.range.contains(&*self.field.get(instance))
    }
}

impl<Root, V: Clone> Clone for InRangeInclusive<Root, V> {
    fn clone(&self) -> Self {
        Self::new(self.field.clone(), self.range.clone())
    }
}

impl<Root, V: fmt::Debug> fmt::Debug for InRangeInclusive<Root, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InRangeInclusive")
            .field("field", &self.field)
            .field("range", &self.range)
            .finish()
    }
}

crate::impl_predicate_ops!([Root, V] InRangeInclusive<Root, V>);

impl<Root, V> Field<Root, V>
where
    Root: 'static,
    V: Clone + PartialOrd + 'static,
{
    pub fn in_range(&self, range: Range<V>) -> InRange<Root, V> {
        InRange::new(self.clone(), range)
    }

    pub fn in_range_inclusive(&self, range: RangeInclusive<V>) -> InRangeInclusive<Root, V> {
        InRangeInclusive::new(self.clone(), range)
    }
}
