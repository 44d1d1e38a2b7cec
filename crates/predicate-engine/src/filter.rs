//! Applying a predicate to collections.

use crate::Predicate;
use std::borrow::Borrow;
use tracing::trace;

/// Keeps the items for which `predicate` holds, in their original order.
///
/// Items may be owned roots or anything borrowing one (`&Root`, `Box<Root>`,
/// `Arc<Root>`).
pub fn filter<I, P>(items: I, predicate: &P) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Borrow<P::Root>,
    P: Predicate + ?Sized,
{
    let mut total = 0usize;
    let matched: Vec<_> = items
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|item| predicate.evaluate(Borrow::<P::Root>::borrow(item)))
        .collect();

    trace!(total, matched = matched.len(), "Filtered collection");
    matched
}

/// Lazy counterpart of [`filter`], returned by [`FilterExt::matching`].
pub struct Matching<'p, I, P: ?Sized> {
    iter: I,
    predicate: &'p P,
}

impl<I, P> Iterator for Matching<'_, I, P>
where
    I: Iterator,
    I::Item: Borrow<P::Root>,
    P: Predicate + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = self.predicate;
        self.iter
            .by_ref()
            .find(|item| predicate.evaluate(Borrow::<P::Root>::borrow(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

pub trait FilterExt: Iterator + Sized {
    /// Yields only the items for which `predicate` holds.
    fn matching<P>(self, predicate: &P) -> Matching<'_, Self, P>
    where
        Self::Item: Borrow<P::Root>,
        P: Predicate + ?Sized,
    {
        Matching {
            iter: self,
            predicate,
        }
    }
}

impl<I: Iterator> FilterExt for I {}
