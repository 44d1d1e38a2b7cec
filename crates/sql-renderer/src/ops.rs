use crate::renderer::{RenderSql, Renderer};
use model::Result;
use predicate_engine::{And, Not, Or};

impl<P: RenderSql> RenderSql for Not<P> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        r.sql.push_str("NOT (");
        self.base().render_sql(r)?;
        r.sql.push(')');
        Ok(())
    }
}

impl<L: RenderSql, R: RenderSql> RenderSql for And<L, R> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        r.binary("AND", self.lhs(), self.rhs())
    }
}

impl<L: RenderSql, R: RenderSql> RenderSql for Or<L, R> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        r.binary("OR", self.lhs(), self.rhs())
    }
}
