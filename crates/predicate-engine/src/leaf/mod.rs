//! Leaf predicates: the relations that read an instance.

pub mod boolean;
pub mod collection;
pub mod compare;
pub mod custom;
#[cfg(feature = "pattern")]
pub mod pattern;
pub mod range;
pub mod string;

pub use boolean::BoolLiteral;
pub use collection::{Contains, ContainsSet, SetMembership};
pub use compare::{Equals, GreaterOrEqual, GreaterThan, LessOrEqual, LessThan};
pub use custom::Custom;
#[cfg(feature = "pattern")]
pub use pattern::MatchesPattern;
pub use range::{InRange, InRangeInclusive};
pub use string::{HasPrefix, HasSuffix, StringContains, fold_case};
