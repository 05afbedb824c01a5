use crate::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! impl_primitive {
    ($($Ty:ty => $write:ident, $read:ident;)*) => { $(
        impl Serialize for $Ty {
            #[inline]
            fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
            where
                S: Serializer + ?Sized,
            {
                ser.$write(*self)
            }
        }

        impl Deserialize for $Ty {
            #[inline]
            fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
            where
                D: Deserializer + ?Sized,
            {
                de.$read()
            }
        }
    )* };
}

impl_primitive! {
    bool => write_bool, read_bool;
    char => write_char, read_char;
    f32 => write_f32, read_f32;
    f64 => write_f64, read_f64;
    u8 => write_u8, read_u8;
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    u64 => write_u64, read_u64;
    u128 => write_u128, read_u128;
    i8 => write_i8, read_i8;
    i16 => write_i16, read_i16;
    i32 => write_i32, read_i32;
    i64 => write_i64, read_i64;
    i128 => write_i128, read_i128;
}

impl Serialize for () {
    #[inline]
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        ser.write_unit()
    }
}

impl Deserialize for () {
    #[inline]
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized,
    {
        de.read_unit()
    }
}

impl Serialize for str {
    #[inline]
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        ser.write_string(self)
    }
}

impl Serialize for String {
    #[inline]
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        ser.write_string(self)
    }
}

impl Deserialize for String {
    #[inline]
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized,
    {
        de.read_string()
    }
}
