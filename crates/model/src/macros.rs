/// Declares the symbolic-name registry of a root type.
///
/// ```ignore
/// field_names!(Person {
///     "age" => "age",
///     "address.city" => "city",
/// });
/// ```
///
/// Keys may be anything convertible into a [`FieldKey`](crate::FieldKey),
/// including the key of an existing accessor (`Person::age().key()`).
#[macro_export]
macro_rules! field_names {
    ($root:ty { $($key:expr => $name:expr),* $(,)? }) => {
        impl $crate::registry::Keyed for $root {
            fn registry() -> &'static $crate::registry::FieldRegistry {
                $crate::__private::lazy_static! {
                    static ref REGISTRY: $crate::registry::FieldRegistry =
                        $crate::registry::FieldRegistry::builder(stringify!($root))
                            $(.name($key, $name))*
                            .build();
                }
                &REGISTRY
            }
        }
    };
}
