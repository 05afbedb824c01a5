use crate::{Deserialize, Deserializer, Serialize, Serializer};

// components are written back to back, in order. the arity is part of the type,
// so nothing else is needed to read them back.
macro_rules! impl_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Serialize),+> Serialize for ($($T,)+) {
            fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
            where
                S: Serializer + ?Sized,
            {
                $( self.$idx.serialize(ser)?; )+
                Ok(())
            }
        }

        impl<$($T: Deserialize),+> Deserialize for ($($T,)+) {
            fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
            where
                D: Deserializer + ?Sized,
            {
                // tuple expressions are evaluated left to right
                Ok(($( $T::deserialize(de)?, )+))
            }
        }
    };
}

impl_tuple!(0 A);
impl_tuple!(0 A, 1 B);
impl_tuple!(0 A, 1 B, 2 C);
impl_tuple!(0 A, 1 B, 2 C, 3 E);
impl_tuple!(0 A, 1 B, 2 C, 3 E, 4 F);
impl_tuple!(0 A, 1 B, 2 C, 3 E, 4 F, 5 G);
impl_tuple!(0 A, 1 B, 2 C, 3 E, 4 F, 5 G, 6 H);
impl_tuple!(0 A, 1 B, 2 C, 3 E, 4 F, 5 G, 6 H, 7 I);
impl_tuple!(0 A, 1 B, 2 C, 3 E, 4 F, 5 G, 6 H, 7 I, 8 J);
impl_tuple!(0 A, 1 B, 2 C, 3 E, 4 F, 5 G, 6 H, 7 I, 8 J, 9 K);
impl_tuple!(0 A, 1 B, 2 C, 3 E, 4 F, 5 G, 6 H, 7 I, 8 J, 9 K, 10 L);
impl_tuple!(0 A, 1 B, 2 C, 3 E, 4 F, 5 G, 6 H, 7 I, 8 J, 9 K, 10 L, 11 M);
