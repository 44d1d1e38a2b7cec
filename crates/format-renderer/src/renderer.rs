//! Rendering context for format predicates.

use model::{FieldKey, Keyed, Result, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Token marking an argument slot in [`FormatPredicate::format`].
pub const ARGUMENT_SLOT: &str = "%@";

/// A predicate node that can be written as a format string.
///
/// Implemented per node type; a tree containing a node without an
/// implementation cannot be rendered.
pub trait ToFormat {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()>;
}

impl<P: ToFormat + ?Sized> ToFormat for &P {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        (**self).render_format(r)
    }
}

/// Format string with positional arguments, one per [`ARGUMENT_SLOT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatPredicate {
    pub format: String,
    pub arguments: Vec<Value>,
}

/// Shows the format with every slot replaced by its argument.
impl fmt::Display for FormatPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arguments = self.arguments.iter();
        let mut pieces = self.format.split(ARGUMENT_SLOT).peekable();
        while let Some(piece) = pieces.next() {
            f.write_str(piece)?;
            if pieces.peek().is_some() {
                match arguments.next() {
                    Some(argument) => write!(f, "{argument}")?,
                    None => f.write_str(ARGUMENT_SLOT)?,
                }
            }
        }
        Ok(())
    }
}

/// Accumulates the format string and its arguments while a tree is walked.
#[derive(Debug, Default)]
pub struct FormatRenderer {
    pub format: String,
    pub arguments: Vec<Value>,
}

impl FormatRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> FormatPredicate {
        FormatPredicate {
            format: self.format,
            arguments: self.arguments,
        }
    }

    pub fn add_argument(&mut self, value: Value) {
        self.arguments.push(value);
        self.format.push_str(ARGUMENT_SLOT);
    }

    /// Writes `(lhs <keyword> rhs)`.
    pub(crate) fn binary(
        &mut self,
        keyword: &str,
        lhs: &impl ToFormat,
        rhs: &impl ToFormat,
    ) -> Result<()> {
        self.format.push('(');
        lhs.render_format(self)?;
        self.format.push(' ');
        self.format.push_str(keyword);
        self.format.push(' ');
        rhs.render_format(self)?;
        self.format.push(')');
        Ok(())
    }
}

/// Symbolic name of `key` in the registry of `Root`.
pub(crate) fn field_name<Root: Keyed>(key: &FieldKey) -> Result<&'static str> {
    Root::registry().name_of(key)
}

/// Renders `predicate` into a [`FormatPredicate`].
///
/// Fails with [`MissingSymbolicName`](model::TranslateError::MissingSymbolicName)
/// as soon as a field of the tree has no registered name; no partial output is
/// returned.
pub fn to_format<P: ToFormat + ?Sized>(predicate: &P) -> Result<FormatPredicate> {
    let mut renderer = FormatRenderer::new();
    predicate.render_format(&mut renderer)?;
    let rendered = renderer.finish();

    trace!(
        format = %rendered.format,
        arguments = rendered.arguments.len(),
        "Rendered format predicate"
    );
    Ok(rendered)
}
