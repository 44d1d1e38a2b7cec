use crate::{
    like::{LikePosition, like_pattern},
    renderer::{RenderSql, Renderer},
};
use model::{FieldKey, Keyed, Result, ToValue, TranslateError, Value};
use predicate_engine::{
    BoolLiteral, Equals, Field, GreaterOrEqual, GreaterThan, HasPrefix, HasSuffix, InRange,
    InRangeInclusive, LessOrEqual, LessThan, StringContains,
};

/// Rejects ordering on a nullable literal type before anything is written.
fn check_orderable<Root: Keyed, V: ToValue>(
    key: &FieldKey,
    operator: &'static str,
    literals: &[&V],
) -> Result<()> {
    if V::NULLABLE || literals.iter().any(|v| v.to_value().is_null()) {
        return Err(TranslateError::NullableOrdering {
            root: Root::registry().root(),
            key: key.clone(),
            operator,
        });
    }
    Ok(())
}

impl<Root: Keyed, V: ToValue> RenderSql for Equals<Root, V> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        let value = self.value().to_value();
        r.render_column::<Root>(self.field().key())?;
        if value.is_null() {
            r.sql.push_str(" IS NULL");
            return Ok(());
        }
        // `=` against a NULL column is unknown, but evaluation says false.
        if V::NULLABLE {
            r.sql.push(' ');
            r.sql.push_str(r.dialect.null_safe_equals());
            r.sql.push(' ');
        } else {
            r.sql.push_str(" = ");
        }
        r.add_param(value);
        Ok(())
    }
}

macro_rules! ordering_sql {
    ($($node:ident => $op:literal),* $(,)?) => {
        $(
            impl<Root: Keyed, V: ToValue> RenderSql for $node<Root, V> {
                fn render_sql(&self, r: &mut Renderer) -> Result<()> {
                    check_orderable::<Root, V>(self.field().key(), $op, &[self.value()])?;
                    r.render_column::<Root>(self.field().key())?;
                    r.sql.push_str(concat!(" ", $op, " "));
                    r.add_param(self.value().to_value());
                    Ok(())
                }
            }
        )*
    };
}

ordering_sql! {
    GreaterThan => ">",
    LessThan => "<",
    GreaterOrEqual => ">=",
    LessOrEqual => "<=",
}

fn render_like<Root: Keyed>(
    r: &mut Renderer,
    field: &Field<Root, String>,
    literal: &str,
    position: LikePosition,
    case_sensitive: bool,
) -> Result<()> {
    if case_sensitive {
        r.render_column::<Root>(field.key())?;
    } else {
        r.sql.push_str("UPPER(");
        r.render_column::<Root>(field.key())?;
        r.sql.push(')');
    }
    r.sql.push_str(" LIKE ");
    r.add_param(Value::String(like_pattern(
        literal,
        position,
        !case_sensitive,
    )));
    r.sql.push_str(r.dialect.like_escape());
    Ok(())
}

impl<Root: Keyed> RenderSql for StringContains<Root> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        render_like(
            r,
            self.field(),
            self.value(),
            LikePosition::Anywhere,
            self.case_sensitive(),
        )
    }
}

impl<Root: Keyed> RenderSql for HasPrefix<Root> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        render_like(r, self.field(), self.value(), LikePosition::Start, true)
    }
}

impl<Root: Keyed> RenderSql for HasSuffix<Root> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        render_like(r, self.field(), self.value(), LikePosition::End, true)
    }
}

/// Writes `("col" >= start AND "col" <upper> end)`.
fn render_bounds<Root: Keyed>(
    r: &mut Renderer,
    key: &FieldKey,
    start: Value,
    end: Value,
    upper: &str,
) -> Result<()> {
    r.sql.push('(');
    r.render_column::<Root>(key)?;
    r.sql.push_str(" >= ");
    r.add_param(start);
    r.sql.push_str(" AND ");
    r.render_column::<Root>(key)?;
    r.sql.push(' ');
    r.sql.push_str(upper);
    r.sql.push(' ');
    r.add_param(end);
    r.sql.push(')');
    Ok(())
}

impl<Root: Keyed, V: ToValue> RenderSql for InRange<Root, V> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        let key = self.field().key();
        let range = self.range();
        check_orderable::<Root, V>(key, "IN RANGE", &[&range.start, &range.end])?;
        render_bounds::<Root>(r, key, range.start.to_value(), range.end.to_value(), "<")
    }
}

impl<Root: Keyed, V: ToValue> RenderSql for InRangeInclusive<Root, V> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        let key = self.field().key();
        let range = self.range();
        check_orderable::<Root, V>(key, "IN RANGE", &[range.start(), range.end()])?;
        render_bounds::<Root>(r, key, range.start().to_value(), range.end().to_value(), "<=")
    }
}

impl<Root> RenderSql for BoolLiteral<Root> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        r.sql.push_str(r.dialect.bool_literal(self.value()));
        Ok(())
    }
}

impl<Root: Keyed> RenderSql for Field<Root, bool> {
    fn render_sql(&self, r: &mut Renderer) -> Result<()> {
        r.render_column::<Root>(self.key())
    }
}
