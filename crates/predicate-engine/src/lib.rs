//! Typed predicate trees over Rust values.
//!
//! Leaves read a [`Field`] of a root instance and compare it against a
//! literal; connectives combine sub-trees with `&`, `|` and `!`. A tree can be
//! evaluated against an instance, used to filter collections, or handed to a
//! translation backend.
//!
//! ```
//! use predicate_engine::{Field, Predicate};
//!
//! struct Person { age: u32, dead: bool }
//!
//! let age = Field::new("age", |p: &Person| &p.age);
//! let dead = Field::new("dead", |p: &Person| &p.dead);
//!
//! let at_risk = (age.lt(18) | age.gt(65)) & !dead;
//! assert!(at_risk.evaluate(&Person { age: 70, dead: false }));
//! assert!(!at_risk.evaluate(&Person { age: 30, dead: false }));
//! ```
//!
//! Both operands of a connective must read the same root type:
//!
//! ```compile_fail
//! use predicate_engine::Field;
//!
//! struct Person { age: u32 }
//! struct Car { age: u32 }
//!
//! let person_age = Field::new("age", |p: &Person| &p.age);
//! let car_age = Field::new("age", |c: &Car| &c.age);
//! let _ = person_age.gt(18) & car_age.lt(5);
//! ```

mod macros;

pub mod eval;
pub mod field;
pub mod filter;
pub mod leaf;
pub mod ops;

pub use eval::{DynPredicate, Predicate, evaluate};
pub use field::Field;
pub use filter::{FilterExt, Matching, filter};
pub use leaf::*;
pub use ops::{And, IntoPredicate, Not, Or, PredicateExt};
