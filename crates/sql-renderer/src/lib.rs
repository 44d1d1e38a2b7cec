//! Renders predicate trees as parameterized SQL conditions.
//!
//! ```
//! use predicate_engine::Field;
//! use sql_renderer::{DialectKind, to_sql};
//!
//! struct Person { age: u32, name: String }
//! model::field_names!(Person { "age" => "age", "name" => "full_name" });
//!
//! let age = Field::new("age", |p: &Person| &p.age);
//! let name = Field::new("name", |p: &Person| &p.name);
//!
//! let tree = age.gte(18) & name.has_prefix("A");
//! let fragment = to_sql(&tree, DialectKind::Postgres.dialect()).unwrap();
//! assert_eq!(fragment.sql, r#"("age" >= $1 AND "full_name" LIKE $2)"#);
//! ```
//!
//! Membership tests have no SQL rendering, so a tree containing one does not
//! compile:
//!
//! ```compile_fail
//! use predicate_engine::Field;
//! use sql_renderer::{Postgres, to_sql};
//!
//! struct Post { tags: Vec<String> }
//! model::field_names!(Post { "tags" => "tags" });
//!
//! let tags = Field::new("tags", |p: &Post| &p.tags);
//! let _ = to_sql(&tags.contains("rust".to_string()), &Postgres);
//! ```
//!
//! Neither do caller-supplied comparisons:
//!
//! ```compile_fail
//! use predicate_engine::Custom;
//! use sql_renderer::{Postgres, to_sql};
//!
//! struct Post { score: i32 }
//! model::field_names!(Post {});
//!
//! let odd = Custom::new(|p: &Post| p.score % 2, 1, |a: &i32, b: &i32| a == b);
//! let _ = to_sql(&odd, &Postgres);
//! ```

pub mod dialect;
mod leaf;
pub mod like;
mod ops;
pub mod renderer;

pub use dialect::{Dialect, DialectKind, MySql, Postgres, Sqlite};
pub use renderer::{RenderSql, Renderer, SqlFragment, to_sql};
