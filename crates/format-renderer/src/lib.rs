//! Renders predicate trees as `NSPredicate`-style format strings.
//!
//! ```
//! use format_renderer::to_format;
//! use predicate_engine::Field;
//!
//! struct Person { age: u32 }
//! model::field_names!(Person { "age" => "age" });
//!
//! let age = Field::new("age", |p: &Person| &p.age);
//! let rendered = to_format(&(age.gte(18) & age.lt(65))).unwrap();
//! assert_eq!(rendered.format, "(age >= %@ AND age < %@)");
//! assert_eq!(rendered.to_string(), "(age >= 18 AND age < 65)");
//! ```
//!
//! Leaves built from arbitrary closures have no format representation:
//!
//! ```compile_fail
//! use format_renderer::to_format;
//! use predicate_engine::Custom;
//!
//! struct Person { age: u32 }
//! model::field_names!(Person { "age" => "age" });
//!
//! let odd = Custom::new(|p: &Person| p.age % 2, 1, |a: &u32, b: &u32| a == b);
//! let _ = to_format(&odd);
//! ```

mod leaf;
mod ops;
pub mod renderer;

pub use renderer::{ARGUMENT_SLOT, FormatPredicate, FormatRenderer, ToFormat, to_format};
