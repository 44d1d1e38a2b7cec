use crate::{Predicate, field::Field};
use std::{fmt, marker::PhantomData};

/// Constant predicate: ignores the instance and yields `value`.
///
/// `BoolLiteral::new(true)` is the identity of `&`, `BoolLiteral::new(false)`
/// the identity of `|`. Raw booleans combined with predicates through the
/// operator sugar are wrapped in this node.
pub struct BoolLiteral<Root> {
    value: bool,
    _root: PhantomData<fn(&Root)>,
}

impl<Root> BoolLiteral<Root> {
    pub const fn new(value: bool) -> Self {
        Self {
            value,
            _root: PhantomData,
        }
    }

    pub const fn value(&self) -> bool {
        self.value
    }
}

impl<Root> Predicate for BoolLiteral<Root> {
    type Root = Root;

    fn evaluate(&self, _instance: &Root) -> bool {
        self.value
    }
}

impl<Root> From<bool> for BoolLiteral<Root> {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl<Root> Clone for BoolLiteral<Root> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Root> Copy for BoolLiteral<Root> {}

impl<Root> fmt::Debug for BoolLiteral<Root> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoolLiteral").field(&self.value).finish()
    }
}

crate::impl_predicate_ops!([Root] BoolLiteral<Root>);

/// A boolean field is a leaf on its own: it holds when the field is `true`.
impl<Root> Predicate for Field<Root, bool> {
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        *self.get(instance)
    }
}

crate::impl_predicate_ops!([Root] Field<Root, bool>);
