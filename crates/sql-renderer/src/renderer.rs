//! Defines the core rendering trait and context for converting predicate trees
//! to SQL conditions.

use crate::dialect::Dialect;
use model::{FieldKey, Keyed, Result, Value};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A predicate node that can be rendered into a SQL condition.
///
/// Implemented per node type; a tree containing a node without an
/// implementation cannot be rendered.
pub trait RenderSql {
    fn render_sql(&self, r: &mut Renderer) -> Result<()>;
}

impl<P: RenderSql + ?Sized> RenderSql for &P {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        (**self).render_sql(r)
    }
}

/// A parameterized SQL condition, ready to follow `WHERE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlFragment {
    pub sql: String,
    pub params: Vec<Value>,
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> SqlFragment {
        SqlFragment {
            sql: self.sql,
            params: self.params,
        }
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    /// Writes the quoted column registered for `key` on `Root`.
    pub fn render_column<Root: Keyed>(&mut self, key: &FieldKey) -> Result<()> {
        let name = Root::registry().name_of(key)?;
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
        Ok(())
    }

    /// Writes `(lhs <keyword> rhs)`.
    pub(crate) fn binary(
        &mut self,
        keyword: &str,
        lhs: &impl RenderSql,
        rhs: &impl RenderSql,
    ) -> Result<()> {
        self.sql.push('(');
        lhs.render_sql(self)?;
        self.sql.push(' ');
        self.sql.push_str(keyword);
        self.sql.push(' ');
        rhs.render_sql(self)?;
        self.sql.push(')');
        Ok(())
    }
}

/// Renders `predicate` as a SQL condition in `dialect`.
///
/// Literals become bound parameters. Fails with
/// [`MissingSymbolicName`](model::TranslateError::MissingSymbolicName) as soon
/// as a field of the tree has no registered column; no partial output is
/// returned.
pub fn to_sql<P: RenderSql + ?Sized>(predicate: &P, dialect: &dyn Dialect) -> Result<SqlFragment> {
    let mut renderer = Renderer::new(dialect);
    predicate.render_sql(&mut renderer)?;
    let fragment = renderer.finish();

    trace!(
        dialect = %dialect.name(),
        sql = %fragment.sql,
        params = fragment.params.len(),
        "Rendered SQL condition"
    );
    Ok(fragment)
}
