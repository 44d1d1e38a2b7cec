//! Logical connectives over predicate sub-trees.

use crate::{DynPredicate, Predicate, leaf::boolean::BoolLiteral};

/// Negation of `base`.
#[derive(Clone, Debug)]
pub struct Not<P> {
    base: P,
}

impl<P: Predicate> Not<P> {
    pub fn new(base: P) -> Self {
        Self { base }
    }
}

impl<P> Not<P> {
    pub fn base(&self) -> &P {
        &self.base
    }
}

impl<P: Predicate> Predicate for Not<P> {
    type Root = P::Root;

    fn evaluate(&self, instance: &Self::Root) -> bool {
        !self.base.evaluate(instance)
    }
}

/// Conjunction. `rhs` is not evaluated when `lhs` is false.
#[derive(Clone, Debug)]
pub struct And<L, R> {
    lhs: L,
    rhs: R,
}

/// Disjunction. `rhs` is not evaluated when `lhs` is true.
#[derive(Clone, Debug)]
pub struct Or<L, R> {
    lhs: L,
    rhs: R,
}

macro_rules! binary_op {
    ($name:ident, $op:tt) => {
        impl<L, R> $name<L, R>
        where
            L: Predicate,
            R: Predicate<Root = L::Root>,
        {
            pub fn new(lhs: L, rhs: R) -> Self {
                Self { lhs, rhs }
            }
        }

        impl<L, R> $name<L, R> {
            pub fn lhs(&self) -> &L {
                &self.lhs
            }

            pub fn rhs(&self) -> &R {
                &self.rhs
            }
        }

        impl<L, R> Predicate for $name<L, R>
        where
            L: Predicate,
            R: Predicate<Root = L::Root>,
        {
            type Root = L::Root;

            fn evaluate(&self, instance: &Self::Root) -> bool {
                self.lhs.evaluate(instance) $op self.rhs.evaluate(instance)
            }
        }

        crate::impl_predicate_ops!([L, R] $name<L, R>);
    };
}

binary_op!(And, &&);
binary_op!(Or, ||);

crate::impl_predicate_ops!([P] Not<P>);

/// Anything that can stand as an operand of a connective: every predicate,
/// and raw booleans (wrapped in [`BoolLiteral`]).
pub trait IntoPredicate<Root> {
    type Predicate: Predicate<Root = Root>;

    fn into_predicate(self) -> Self::Predicate;
}

impl<P: Predicate> IntoPredicate<P::Root> for P {
    type Predicate = P;

    fn into_predicate(self) -> P {
        self
    }
}

impl<Root> IntoPredicate<Root> for bool {
    type Predicate = BoolLiteral<Root>;

    fn into_predicate(self) -> BoolLiteral<Root> {
        BoolLiteral::new(self)
    }
}

/// Named combinators, usable where the operators are not: on references,
/// boxed trees, or in method chains.
pub trait PredicateExt: Predicate + Sized {
    fn and<Q>(self, rhs: Q) -> And<Self, Q::Predicate>
    where
        Q: IntoPredicate<Self::Root>,
    {
        And::new(self, rhs.into_predicate())
    }

    fn or<Q>(self, rhs: Q) -> Or<Self, Q::Predicate>
    where
        Q: IntoPredicate<Self::Root>,
    {
        Or::new(self, rhs.into_predicate())
    }

    fn negate(self) -> Not<Self> {
        Not::new(self)
    }

    /// Erases the tree's type so trees of different shapes can be stored
    /// together.
    fn boxed(self) -> DynPredicate<Self::Root>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<P: Predicate> PredicateExt for P {}
