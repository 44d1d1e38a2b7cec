use crate::renderer::{FormatRenderer, ToFormat, field_name};
use model::{Keyed, Result, ToValue, Value};
use predicate_engine::{
    BoolLiteral, Contains, ContainsSet, Equals, Field, GreaterOrEqual, GreaterThan, HasPrefix,
    HasSuffix, InRange, InRangeInclusive, LessOrEqual, LessThan, StringContains,
};

macro_rules! comparison_format {
    ($($node:ident => $op:literal),* $(,)?) => {
        $(
            impl<Root: Keyed, V: ToValue> ToFormat for $node<Root, V> {
                fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
                    let name = field_name::<Root>(self.field().key())?;
                    r.format.push_str(name);
                    r.format.push_str(concat!(" ", $op, " "));
                    r.add_argument(self.value().to_value());
                    Ok(())
                }
            }
        )*
    };
}

comparison_format! {
    Equals => "=",
    GreaterThan => ">",
    LessThan => "<",
    GreaterOrEqual => ">=",
    LessOrEqual => "<=",
}

fn render_membership<Root: Keyed, C>(
    r: &mut FormatRenderer,
    field: &Field<Root, C>,
    element: Value,
) -> Result<()> {
    let name = field_name::<Root>(field.key())?;
    r.add_argument(element);
    r.format.push_str(" IN ");
    r.format.push_str(name);
    Ok(())
}

impl<Root: Keyed, C, E: ToValue> ToFormat for Contains<Root, C, E> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        render_membership(r, self.field(), self.value().to_value())
    }
}

impl<Root: Keyed, S, E: ToValue> ToFormat for ContainsSet<Root, S, E> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        render_membership(r, self.field(), self.value().to_value())
    }
}

fn render_text_relation<Root: Keyed>(
    r: &mut FormatRenderer,
    field: &Field<Root, String>,
    operator: &str,
    value: &str,
) -> Result<()> {
    let name = field_name::<Root>(field.key())?;
    r.format.push_str(name);
    r.format.push(' ');
    r.format.push_str(operator);
    r.format.push(' ');
    r.add_argument(Value::String(value.to_string()));
    Ok(())
}

impl<Root: Keyed> ToFormat for StringContains<Root> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        let operator = if self.case_sensitive() {
            "CONTAINS"
        } else {
            "CONTAINS[c]"
        };
        render_text_relation(r, self.field(), operator, self.value())
    }
}

impl<Root: Keyed> ToFormat for HasPrefix<Root> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        render_text_relation(r, self.field(), "BEGINSWITH", self.value())
    }
}

impl<Root: Keyed> ToFormat for HasSuffix<Root> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        render_text_relation(r, self.field(), "ENDSWITH", self.value())
    }
}

/// `MATCHES` tests the whole string, while evaluation searches for the pattern
/// anywhere; the argument is wrapped so both accept the same strings.
#[cfg(feature = "pattern")]
impl<Root: Keyed> ToFormat for predicate_engine::MatchesPattern<Root> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        let search = format!("(?s).*(?:{}).*", self.pattern().as_str());
        render_text_relation(r, self.field(), "MATCHES", &search)
    }
}

fn render_bounds<Root: Keyed, V: ToValue>(
    r: &mut FormatRenderer,
    field: &Field<Root, V>,
    start: &V,
    end: &V,
    upper: &str,
) -> Result<()> {
    let name = field_name::<Root>(field.key())?;
    r.format.push('(');
    r.format.push_str(name);
    r.format.push_str(" >= ");
    r.add_argument(start.to_value());
    r.format.push_str(" AND ");
    r.format.push_str(name);
    r.format.push(' ');
    r.format.push_str(upper);
    r.format.push(' ');
    r.add_argument(end.to_value());
    r.format.push(')');
    Ok(())
}

impl<Root: Keyed, V: ToValue> ToFormat for InRange<Root, V> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        let range = self.range();
        render_bounds(r, self.field(), &range.start, &range.end, "<")
    }
}

impl<Root: Keyed, V: ToValue> ToFormat for InRangeInclusive<Root, V> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        let range = self.range();
        render_bounds(r, self.field(), range.start(), range.end(), "<=")
    }
}

impl<Root> ToFormat for BoolLiteral<Root> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        r.format.push_str(if self.value() {
            "TRUEPREDICATE"
        } else {
            "FALSEPREDICATE"
        });
        Ok(())
    }
}

impl<Root: Keyed> ToFormat for Field<Root, bool> {
    fn render_format(&self, r: &mut FormatRenderer) -> Result<()> {
        let name = field_name::<Root>(self.key())?;
        r.format.push_str(name);
        r.format.push_str(" = ");
        r.add_argument(Value::Boolean(true));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::to_format;
    use model::{FieldKey, TranslateError, Value};
    use predicate_engine::{BoolLiteral, Field};
    use std::collections::BTreeSet;

    struct Book {
        title: String,
        pages: u32,
        tags: Vec<String>,
        shelves: BTreeSet<u8>,
        available: bool,
        isbn: String,
    }

    model::field_names!(Book {
        "title" => "title",
        "pages" => "pageCount",
        "tags" => "tags",
        "shelves" => "shelves",
        "available" => "isAvailable",
    });

    fn title() -> Field<Book, String> {
        Field::new("title", |b: &Book| &b.title)
    }

    fn pages() -> Field<Book, u32> {
        Field::new("pages", |b: &Book| &b.pages)
    }

    #[test]
    fn test_comparisons() {
        let cases = [
            (to_format(&pages().eq(10)), "pageCount = %@"),
            (to_format(&pages().gt(10)), "pageCount > %@"),
            (to_format(&pages().lt(10)), "pageCount < %@"),
            (to_format(&pages().gte(10)), "pageCount >= %@"),
            (to_format(&pages().lte(10)), "pageCount <= %@"),
        ];
        for (rendered, expected) in cases {
            let rendered = rendered.unwrap();
            assert_eq!(rendered.format, expected);
            assert_eq!(rendered.arguments, vec![Value::Uint(10)]);
        }
    }

    #[test]
    fn test_membership() {
        let tags = Field::new("tags", |b: &Book| &b.tags);
        let shelves = Field::new("shelves", |b: &Book| &b.shelves);

        let rendered = to_format(&tags.contains("sf".to_string())).unwrap();
        assert_eq!(rendered.format, "%@ IN tags");
        assert_eq!(rendered.arguments, vec![Value::String("sf".into())]);

        let rendered = to_format(&shelves.contains(3)).unwrap();
        assert_eq!(rendered.format, "%@ IN shelves");
        assert_eq!(rendered.arguments, vec![Value::Uint(3)]);
    }

    #[test]
    fn test_text_relations() {
        assert_eq!(
            to_format(&title().contains("war")).unwrap().format,
            "title CONTAINS %@"
        );
        assert_eq!(
            to_format(&title().contains_case_insensitive("war"))
                .unwrap()
                .format,
            "title CONTAINS[c] %@"
        );

        let prefix = to_format(&title().has_prefix("The")).unwrap();
        assert_eq!(prefix.format, "title BEGINSWITH %@");
        assert_eq!(prefix.arguments, vec![Value::String("The".into())]);

        assert_eq!(
            to_format(&title().has_suffix("Peace")).unwrap().format,
            "title ENDSWITH %@"
        );
    }

    #[cfg(feature = "pattern")]
    #[test]
    fn test_pattern() {
        let pred = title().matches(regex::Regex::new("^[A-Z]").unwrap());
        let rendered = to_format(&pred).unwrap();
        assert_eq!(rendered.format, "title MATCHES %@");
        assert_eq!(
            rendered.arguments,
            vec![Value::String("(?s).*(?:^[A-Z]).*".into())]
        );
    }

    #[cfg(feature = "pattern")]
    #[test]
    fn test_pattern_argument_matches_whole_string_like_search() {
        use predicate_engine::Predicate;

        let pred = title().matches(regex::Regex::new("war|pea").unwrap());
        let rendered = to_format(&pred).unwrap();
        let Value::String(source) = &rendered.arguments[0] else {
            panic!("pattern argument must be a string");
        };
        let whole = regex::Regex::new(&format!("^(?:{source})$")).unwrap();

        for text in ["War and Peace", "warm\nnights", "peach", "nothing"] {
            let book = Book {
                title: text.to_string(),
                pages: 0,
                tags: vec![],
                shelves: BTreeSet::new(),
                available: true,
                isbn: String::new(),
            };
            assert_eq!(whole.is_match(text), pred.evaluate(&book), "{text}");
        }
    }

    #[test]
    fn test_range_uses_both_bounds() {
        let rendered = to_format(&pages().in_range(100..200)).unwrap();
        assert_eq!(rendered.format, "(pageCount >= %@ AND pageCount < %@)");
        assert_eq!(rendered.arguments, vec![Value::Uint(100), Value::Uint(200)]);
    }

    #[test]
    fn test_inclusive_range_uses_non_strict_upper_bound() {
        let rendered = to_format(&pages().in_range_inclusive(2..=4)).unwrap();
        assert_eq!(rendered.format, "(pageCount >= %@ AND pageCount <= %@)");
        assert_eq!(rendered.arguments, vec![Value::Uint(2), Value::Uint(4)]);
    }

    #[test]
    fn test_boolean_leaves() {
        let available = Field::new("available", |b: &Book| &b.available);
        let rendered = to_format(&available).unwrap();
        assert_eq!(rendered.format, "isAvailable = %@");
        assert_eq!(rendered.arguments, vec![Value::Boolean(true)]);

        assert_eq!(
            to_format(&BoolLiteral::<Book>::new(true)).unwrap().format,
            "TRUEPREDICATE"
        );
        assert_eq!(
            to_format(&BoolLiteral::<Book>::new(false)).unwrap().format,
            "FALSEPREDICATE"
        );
    }

    #[test]
    fn test_unregistered_field_fails() {
        let isbn = Field::new("isbn", |b: &Book| &b.isbn);
        let err = to_format(&isbn.eq("123".into())).unwrap_err();
        assert_eq!(
            err,
            TranslateError::MissingSymbolicName {
                root: "Book",
                key: FieldKey::new("isbn"),
            }
        );
    }
}
