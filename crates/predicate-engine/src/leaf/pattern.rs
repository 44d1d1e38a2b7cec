use crate::{Predicate, field::Field};
use regex::Regex;

/// The text behind `field` matches `pattern` somewhere (unanchored search).
/// Anchor the pattern with `^`/`$` for a whole-string match.
#[derive(Clone, Debug)]
pub struct MatchesPattern<Root> {
    field: Field<Root, String>,
    pattern: Regex,
}

impl<Root> MatchesPattern<Root> {
    pub fn new(field: Field<Root, String>, pattern: Regex) -> Self {
        Self { field, pattern }
    }

    pub fn field(&self) -> &Field<Root, String> {
        &self.field
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl<Root> Predicate for MatchesPattern<Root> {
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        self.pattern.is_match(&self.field.get(instance))
    }
}

crate::impl_predicate_ops!([Root] MatchesPattern<Root>);

impl<Root> Field<Root, String> {
    pub fn matches(&self, pattern: Regex) -> MatchesPattern<Root> {
        MatchesPattern::new(self.clone(), pattern)
    }
}
