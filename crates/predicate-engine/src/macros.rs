/// Implements the operator sugar for a predicate node type:
///
/// - `a & b` builds [`And`](crate::ops::And), `a | b` builds
///   [`Or`](crate::ops::Or), `!a` builds [`Not`](crate::ops::Not);
/// - a raw `bool` on either side of `&` / `|` is wrapped in a
///   [`BoolLiteral`](crate::leaf::boolean::BoolLiteral).
///
/// Both operands must share the same root type. The generic parameters of the
/// node type are listed in brackets:
///
/// ```ignore
/// impl_predicate_ops!([Root, V] Equals<Root, V>);
/// ```
#[macro_export]
macro_rules! impl_predicate_ops {
    ([$($g:ident),*] $ty:ty) => {
        impl<$($g,)* Rhs> ::std::ops::BitAnd<Rhs> for $ty
        where
            $ty: $crate::Predicate,
            Rhs: $crate::Predicate<Root = <$ty as $crate::Predicate>::Root>,
        {
            type Output = $crate::ops::And<$ty, Rhs>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                $crate::ops::And::new(self, rhs)
            }
        }

        impl<$($g,)* Rhs> ::std::ops::BitOr<Rhs> for $ty
        where
            $ty: $crate::Predicate,
            Rhs: $crate::Predicate<Root = <$ty as $crate::Predicate>::Root>,
        {
            type Output = $crate::ops::Or<$ty, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                $crate::ops::Or::new(self, rhs)
            }
        }

        impl<$($g),*> ::std::ops::Not for $ty
        where
            $ty: $crate::Predicate,
        {
            type Output = $crate::ops::Not<$ty>;

            fn not(self) -> Self::Output {
                $crate::ops::Not::new(self)
            }
        }

        impl<$($g),*> ::std::ops::BitAnd<bool> for $ty
        where
            $ty: $crate::Predicate,
        {
            type Output = $crate::ops::And<
                $ty,
                $crate::leaf::boolean::BoolLiteral<<$ty as $crate::Predicate>::Root>,
            >;

            fn bitand(self, rhs: bool) -> Self::Output {
                $crate::ops::And::new(self, $crate::leaf::boolean::BoolLiteral::new(rhs))
            }
        }

        impl<$($g),*> ::std::ops::BitOr<bool> for $ty
        where
            $ty: $crate::Predicate,
        {
            type Output = $crate::ops::Or<
                $ty,
                $crate::leaf::boolean::BoolLiteral<<$ty as $crate::Predicate>::Root>,
            >;

            fn bitor(self, rhs: bool) -> Self::Output {
                $crate::ops::Or::new(self, $crate::leaf::boolean::BoolLiteral::new(rhs))
            }
        }

        impl<$($g),*> ::std::ops::BitAnd<$ty> for bool
        where
            $ty: $crate::Predicate,
        {
            type Output = $crate::ops::And<
                $crate::leaf::boolean::BoolLiteral<<$ty as $crate::Predicate>::Root>,
                $ty,
            >;

            fn bitand(self, rhs: $ty) -> Self::Output {
                $crate::ops::And::new($crate::leaf::boolean::BoolLiteral::new(self), rhs)
            }
        }

        impl<$($g),*> ::std::ops::BitOr<$ty> for bool
        where
            $ty: $crate::Predicate,
        {
            type Output = $crate::ops::Or<
                $crate::leaf::boolean::BoolLiteral<<$ty as $crate::Predicate>::Root>,
                $ty,
            >;

            fn bitor(self, rhs: $ty) -> Self::Output {
                $crate::ops::Or::new($crate::leaf::boolean::BoolLiteral::new(self), rhs)
            }
        }
    };
}
