//! Text relations over `String` fields.

use crate::{Predicate, field::Field};

/// Case folding used by case-insensitive relations.
///
/// Unicode default uppercasing (`str::to_uppercase`): locale-independent and
/// may change the length of the text (`"ß"` folds to `"SS"`). Translation
/// backends fold their literals with the same function.
pub fn fold_case(text: &str) -> String {
    text.to_uppercase()
}

/// The text behind `field` contains `value` as a substring.
#[derive(Clone, Debug)]
pub struct StringContains<Root> {
    field: Field<Root, String>,
    value: String,
    case_sensitive: bool,
}

impl<Root> StringContains<Root> {
    pub fn new(field: Field<Root, String>, value: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            field,
            value: value.into(),
            case_sensitive,
        }
    }

    pub fn field(&self) -> &Field<Root, String> {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl<Root> Predicate for StringContains<Root> {
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        let text = self.field.get(instance);
        if self.case_sensitive {
            text.contains(self.value.as_str())
        } else {
            fold_case(&text).contains(&fold_case(&self.value))
        }
    }
}

crate::impl_predicate_ops!([Root] StringContains<Root>);

/// The text behind `field` starts with `value`.
#[derive(Clone, Debug)]
pub struct HasPrefix<Root> {
    field: Field<Root, String>,
    value: String,
}

impl<Root> HasPrefix<Root> {
    pub fn new(field: Field<Root, String>, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn field(&self) -> &Field<Root, String> {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<Root> Predicate for HasPrefix<Root> {
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        self.field.get(instance).starts_with(self.value.as_str())
    }
}

crate::impl_predicate_ops!([Root] HasPrefix<Root>);

/// The text behind `field` ends with `value`.
#[derive(Clone, Debug)]
pub struct HasSuffix<Root> {
    field: Field<Root, String>,
    value: String,
}

impl<Root> HasSuffix<Root> {
    pub fn new(field: Field<Root, String>, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn field(&self) -> &Field<Root, String> {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<Root> Predicate for HasSuffix<Root> {
    type Root = Root;

    fn evaluate(&self, instance: &Root) -> bool {
        self.field.get(instance).ends_with(self.value.as_str())
    }
}

crate::impl_predicate_ops!([Root] HasSuffix<Root>);

impl<Root> Field<Root, String> {
    pub fn contains(&self, substring: impl Into<String>) -> StringContains<Root> {
        StringContains::new(self.clone(), substring, true)
    }

    pub fn contains_case_insensitive(&self, substring: impl Into<String>) -> StringContains<Root> {
        StringContains::new(self.clone(), substring, false)
    }

    pub fn has_prefix(&self, prefix: impl Into<String>) -> HasPrefix<Root> {
        HasPrefix::new(self.clone(), prefix)
    }

    pub fn has_suffix(&self, suffix: impl Into<String>) -> HasSuffix<Root> {
        HasSuffix::new(self.clone(), suffix)
    }
}
