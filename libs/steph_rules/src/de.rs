//! The read side: the [`Deserializer`] backend contract and the
//! [`Deserialize`] rule trait.

use crate::error::InvalidDiscriminant;

/// The primitive operations a backend provides to read values.
///
/// Each method consumes exactly one logical unit that the matching
/// [`Serializer`](crate::Serializer) method produced.
///
/// Lengths are handed to the rules as-is. Rejecting lengths that are
/// unreasonably large for the input is the backend's job. Variant indices, on
/// the other hand, are range-checked by the rules.
pub trait Deserializer {
    /// The error returned when a read fails.
    ///
    /// Must be able to carry the structural error raised by the rules
    /// themselves.
    type Error: From<InvalidDiscriminant>;

    /// Reads the unit value. By default, this reads nothing.
    fn read_unit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read_bool(&mut self) -> Result<bool, Self::Error>;

    /// Reads a Unicode scalar value.
    fn read_char(&mut self) -> Result<char, Self::Error>;

    fn read_f32(&mut self) -> Result<f32, Self::Error>;
    fn read_f64(&mut self) -> Result<f64, Self::Error>;

    fn read_u8(&mut self) -> Result<u8, Self::Error>;
    fn read_u16(&mut self) -> Result<u16, Self::Error>;
    fn read_u32(&mut self) -> Result<u32, Self::Error>;
    fn read_u64(&mut self) -> Result<u64, Self::Error>;
    fn read_u128(&mut self) -> Result<u128, Self::Error>;

    fn read_i8(&mut self) -> Result<i8, Self::Error>;
    fn read_i16(&mut self) -> Result<i16, Self::Error>;
    fn read_i32(&mut self) -> Result<i32, Self::Error>;
    fn read_i64(&mut self) -> Result<i64, Self::Error>;
    fn read_i128(&mut self) -> Result<i128, Self::Error>;

    fn read_string(&mut self) -> Result<String, Self::Error>;

    /// Reads the length prefix of a sequence or map.
    fn read_length(&mut self) -> Result<usize, Self::Error>;

    /// Reads the index of a sum type's active alternative.
    fn read_variant_index(&mut self) -> Result<u32, Self::Error>;
}

/// A type that knows how to rebuild itself from [`Deserializer`] calls.
pub trait Deserialize: Sized {
    /// Deserializes a value from the given deserializer.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the deserializer, or an
    /// [`InvalidDiscriminant`] if the data selects a variant that doesn't
    /// exist.
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized;
}

impl<D: Deserializer + ?Sized> Deserializer for &mut D {
    type Error = D::Error;

    fn read_unit(&mut self) -> Result<(), Self::Error> {
        (**self).read_unit()
    }

    fn read_bool(&mut self) -> Result<bool, Self::Error> {
        (**self).read_bool()
    }

    fn read_char(&mut self) -> Result<char, Self::Error> {
        (**self).read_char()
    }

    fn read_f32(&mut self) -> Result<f32, Self::Error> {
        (**self).read_f32()
    }

    fn read_f64(&mut self) -> Result<f64, Self::Error> {
        (**self).read_f64()
    }

    fn read_u8(&mut self) -> Result<u8, Self::Error> {
        (**self).read_u8()
    }

    fn read_u16(&mut self) -> Result<u16, Self::Error> {
        (**self).read_u16()
    }

    fn read_u32(&mut self) -> Result<u32, Self::Error> {
        (**self).read_u32()
    }

    fn read_u64(&mut self) -> Result<u64, Self::Error> {
        (**self).read_u64()
    }

    fn read_u128(&mut self) -> Result<u128, Self::Error> {
        (**self).read_u128()
    }

    fn read_i8(&mut self) -> Result<i8, Self::Error> {
        (**self).read_i8()
    }

    fn read_i16(&mut self) -> Result<i16, Self::Error> {
        (**self).read_i16()
    }

    fn read_i32(&mut self) -> Result<i32, Self::Error> {
        (**self).read_i32()
    }

    fn read_i64(&mut self) -> Result<i64, Self::Error> {
        (**self).read_i64()
    }

    fn read_i128(&mut self) -> Result<i128, Self::Error> {
        (**self).read_i128()
    }

    fn read_string(&mut self) -> Result<String, Self::Error> {
        (**self).read_string()
    }

    fn read_length(&mut self) -> Result<usize, Self::Error> {
        (**self).read_length()
    }

    fn read_variant_index(&mut self) -> Result<u32, Self::Error> {
        (**self).read_variant_index()
    }
}
