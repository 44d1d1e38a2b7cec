use crate::renderer::{FormatRenderer, ToFormat};
use model::Result;
use predicate_engine::{And, Not, Or};

impl<P: ToFormat> ToFormat for Not<P> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        r.format.push_str("NOT (");
        self.base().render_format(r)?;
        r.format.push(')');
        Ok(())
    }
}

impl<L: ToFormat, R: ToFormat> ToFormat for And<L, R> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        r.binary("AND", self.lhs(), self.rhs())
    }
}

impl<L: ToFormat, R: ToFormat> ToFormat for Or<L, R> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        r.binary("OR", self.lhs(), self.rhs())
    }
}
