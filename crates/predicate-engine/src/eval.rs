use std::sync::Arc;

/// A boolean condition over instances of [`Predicate::Root`].
///
/// Every node of a predicate tree implements this trait, so evaluating a tree
/// is a recursive descent that is resolved statically by the node types.
/// Evaluation is pure and total: it never fails and has no side effects other
/// than those of user-supplied accessor closures.
pub trait Predicate {
    type Root;

    fn evaluate(&self, instance: &Self::Root) -> bool;
}

/// Evaluates `predicate` against `instance`.
pub fn evaluate<P>(predicate: &P, instance: &P::Root) -> bool
where
    P: Predicate + ?Sized,
{
    predicate.evaluate(instance)
}

/// Type-erased predicate tree, for trees assembled at runtime.
pub type DynPredicate<Root> = Box<dyn Predicate<Root = Root> + Send + Sync>;

impl<P: Predicate + ?Sized> Predicate for &P {
    type Root = P::Root;

    fn evaluate(&self, instance: &Self::Root) -> bool {
        (**self).evaluate(instance)
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    type Root = P::Root;

    fn evaluate(&self, instance: &Self::Root) -> bool {
        (**self).evaluate(instance)
    }
}

impl<P: Predicate + ?Sized> Predicate for Arc<P> {
    type Root = P::Root;

    fn evaluate(&self, instance: &Self::Root) -> bool {
        (**self).evaluate(instance)
    }
}
