//! Relational leaves: a field compared against a literal.

use crate::{Predicate, field::Field};

macro_rules! comparison {
    ($(#[$meta:meta])* $name:ident, $bound:ident, $op:tt) => {
        $(#[$meta])*
        pub struct $name<Root, V> {
            field: Field<Root, V>,
            value: V,
        }

        impl<Root, V> $name<Root, V> {
            pub fn new(field: Field<Root, V>, value: V) -> Self {
                Self { field, value }
            }

            pub fn field(&self) -> &Field<Root, V> {
                &self.field
            }

            pub fn value(&self) -> &V {
                &self.value
            }
        }

        impl<Root, V> Predicate for $name<Root, V>
        where
            V: Clone + $bound,
        {
            type Root = Root;

            fn evaluate(&self, instance: &Root) -> bool {
                *self.field.get(instance) $op self.value
            }
        }

        impl<Root, V: Clone> Clone for $name<Root, V> {
            fn clone(&self) -> Self {
                Self {
                    field: self.field.clone(),
                    value: self.value.clone(),
                }
            }
        }

        impl<Root, V: std::fmt::Debug> std::fmt::Debug for $name<Root, V> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("field", &self.field)
                    .field("value", &self.value)
                    .finish()
            }
        }

        crate::impl_predicate_ops!([Root, V] $name<Root, V>);
    };
}

comparison!(
    /// `field == value`
    Equals, PartialEq, ==
);
comparison!(
    /// `field > value`
    GreaterThan, PartialOrd, >
);
comparison!(
    /// `field < value`
    LessThan, PartialOrd, <
);
comparison!(
    /// `field >= value`
    GreaterOrEqual, PartialOrd, >=
);
comparison!(
    /// `field <= value`
    LessOrEqual, PartialOrd, <=
);

impl<Root, V> Field<Root, V>
where
    Root: 'static,
    V: Clone + 'static,
{
    pub fn eq(&self, value: V) -> Equals<Root, V> {
        Equals::new(self.clone(), value)
    }

    pub fn gt(&self, value: V) -> GreaterThan<Root, V> {
        GreaterThan::new(self.clone(), value)
    }

    pub fn lt(&self, value: V) -> LessThan<Root, V> {
        LessThan::new(self.clone(), value)
    }

    pub fn gte(&self, value: V) -> GreaterOrEqual<Root, V> {
        GreaterOrEqual::new(self.clone(), value)
    }

    pub fn lte(&self, value: V) -> LessOrEqual<Root, V> {
        LessOrEqual::new(self.clone(), value)
    }
}
