pub mod core;
pub mod error;
pub mod macros;
pub mod registry;

pub use crate::core::{
    identifiers::FieldKey,
    value::{ToValue, Value},
};
pub use error::{Result, TranslateError};
pub use registry::{FieldRegistry, FieldRegistryBuilder, Keyed};

#[doc(hidden)]
pub mod __private {
    pub use lazy_static::lazy_static;
}
