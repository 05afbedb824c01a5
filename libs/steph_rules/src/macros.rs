//! Declarative macros for user-defined product and sum types.

/// Declares an enum whose variants each hold exactly one value and implements
/// [`Serialize`] and [`Deserialize`] for it.
///
/// The enum is serialized as a sum type: the index of the active variant, in
/// declaration order, followed by that variant's value. Deserialization picks
/// the matching variant through a constant table of decode functions, see
/// [`Cases`].
///
/// Type parameters, if any, must be plain identifiers. Variants without data
/// can hold a `()` instead.
///
/// # Example
///
/// ```
/// use steph_rules::token::{self, Token};
///
/// steph_rules::sum_type! {
///     #[derive(Debug, PartialEq)]
///     pub enum Shape {
///         Point(()),
///         Circle(f64),
///         Rect((f64, f64)),
///     }
/// }
///
/// let tokens = token::to_tokens(&Shape::Circle(1.5)).unwrap();
/// assert_eq!(tokens, [Token::VariantIndex(1), Token::F64(1.5)]);
/// assert_eq!(token::from_tokens::<Shape>(&tokens).unwrap(), Shape::Circle(1.5));
/// ```
///
/// [`Serialize`]: crate::Serialize
/// [`Deserialize`]: crate::Deserialize
/// [`Cases`]: crate::variant::Cases
#[macro_export]
macro_rules! sum_type {
    (
        $(#[$meta:meta])*
        $vis:vis enum $Name:ident $(<$($T:ident),+ $(,)?>)? {
            $(
                $(#[$variant_meta:meta])*
                $Variant:ident($Payload:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $Name $(<$($T),+>)? {
            $(
                $(#[$variant_meta])*
                $Variant($Payload),
            )+
        }

        impl $(<$($T: $crate::Serialize),+>)? $crate::variant::SumType for $Name $(<$($T),+>)? {
            fn variant_index(&self) -> u32 {
                enum Index {
                    $( $Variant, )+
                }

                match self {
                    $( Self::$Variant(_) => Index::$Variant as u32, )+
                }
            }

            fn serialize_payload<__S>(&self, ser: &mut __S) -> ::std::result::Result<(), __S::Error>
            where
                __S: $crate::Serializer + ?Sized,
            {
                match self {
                    $( Self::$Variant(value) => $crate::Serialize::serialize(value, ser), )+
                }
            }
        }

        impl<__D, $($($T: $crate::Deserialize),+)?> $crate::variant::Cases<__D> for $Name $(<$($T),+>)?
        where
            __D: $crate::Deserializer + ?Sized,
        {
            type Table = [$crate::variant::Case<Self, __D>; { [$(stringify!($Variant)),+].len() }];

            const CASES: Self::Table = [
                $( |de| <$Payload as $crate::Deserialize>::deserialize(de).map(Self::$Variant), )+
            ];
        }

        impl $(<$($T: $crate::Serialize),+>)? $crate::Serialize for $Name $(<$($T),+>)? {
            fn serialize<__S>(&self, ser: &mut __S) -> ::std::result::Result<(), __S::Error>
            where
                __S: $crate::Serializer + ?Sized,
            {
                $crate::variant::serialize(self, ser)
            }
        }

        impl $(<$($T: $crate::Deserialize),+>)? $crate::Deserialize for $Name $(<$($T),+>)? {
            fn deserialize<__D>(de: &mut __D) -> ::std::result::Result<Self, __D::Error>
            where
                __D: $crate::Deserializer + ?Sized,
            {
                $crate::variant::deserialize(de)
            }
        }
    };
}

/// Declares a struct with named fields and implements [`Serialize`] and
/// [`Deserialize`] for it.
///
/// The struct is serialized as a product type: every field in declaration
/// order, with nothing in between. This is the same output as a tuple of the
/// field types.
///
/// # Example
///
/// ```
/// use steph_rules::token::{self, Token};
///
/// steph_rules::product_type! {
///     #[derive(Debug, PartialEq)]
///     pub struct Point {
///         pub x: i32,
///         pub y: i32,
///     }
/// }
///
/// let tokens = token::to_tokens(&Point { x: 3, y: -4 }).unwrap();
/// assert_eq!(tokens, token::to_tokens(&(3i32, -4i32)).unwrap());
/// ```
///
/// [`Serialize`]: crate::Serialize
/// [`Deserialize`]: crate::Deserialize
#[macro_export]
macro_rules! product_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident $(<$($T:ident),+ $(,)?>)? {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident: $Ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $Name $(<$($T),+>)? {
            $(
                $(#[$field_meta])*
                $field_vis $field: $Ty,
            )+
        }

        impl $(<$($T: $crate::Serialize),+>)? $crate::Serialize for $Name $(<$($T),+>)? {
            fn serialize<__S>(&self, ser: &mut __S) -> ::std::result::Result<(), __S::Error>
            where
                __S: $crate::Serializer + ?Sized,
            {
                $( $crate::Serialize::serialize(&self.$field, ser)?; )+
                Ok(())
            }
        }

        impl $(<$($T: $crate::Deserialize),+>)? $crate::Deserialize for $Name $(<$($T),+>)? {
            fn deserialize<__D>(de: &mut __D) -> ::std::result::Result<Self, __D::Error>
            where
                __D: $crate::Deserializer + ?Sized,
            {
                // struct expressions evaluate their fields in the order written
                Ok(Self {
                    $( $field: <$Ty as $crate::Deserialize>::deserialize(de)?, )+
                })
            }
        }
    };
}
