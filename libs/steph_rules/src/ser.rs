//! The write side: the [`Serializer`] backend contract and the [`Serialize`]
//! rule trait.

/// The primitive operations a backend provides to write values.
///
/// Every method corresponds to exactly one logical unit in the output. How that
/// unit is laid out is entirely up to the implementation.
///
/// The trait is object safe, so `&mut dyn Serializer<Error = E>` can be used
/// where monomorphizing every rule for every backend is undesirable.
pub trait Serializer {
    /// The error returned when a write fails.
    type Error;

    /// Writes the unit value. By default, this writes nothing.
    fn write_unit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_bool(&mut self, v: bool) -> Result<(), Self::Error>;

    /// Writes a Unicode scalar value.
    fn write_char(&mut self, v: char) -> Result<(), Self::Error>;

    fn write_f32(&mut self, v: f32) -> Result<(), Self::Error>;
    fn write_f64(&mut self, v: f64) -> Result<(), Self::Error>;

    fn write_u8(&mut self, v: u8) -> Result<(), Self::Error>;
    fn write_u16(&mut self, v: u16) -> Result<(), Self::Error>;
    fn write_u32(&mut self, v: u32) -> Result<(), Self::Error>;
    fn write_u64(&mut self, v: u64) -> Result<(), Self::Error>;
    fn write_u128(&mut self, v: u128) -> Result<(), Self::Error>;

    fn write_i8(&mut self, v: i8) -> Result<(), Self::Error>;
    fn write_i16(&mut self, v: i16) -> Result<(), Self::Error>;
    fn write_i32(&mut self, v: i32) -> Result<(), Self::Error>;
    fn write_i64(&mut self, v: i64) -> Result<(), Self::Error>;
    fn write_i128(&mut self, v: i128) -> Result<(), Self::Error>;

    /// Writes a UTF-8 string, including whatever the backend needs to know
    /// its length when reading it back.
    fn write_string(&mut self, v: &str) -> Result<(), Self::Error>;

    /// Writes the length prefix of a sequence or map.
    fn write_length(&mut self, len: usize) -> Result<(), Self::Error>;

    /// Writes the index of a sum type's active alternative.
    fn write_variant_index(&mut self, index: u32) -> Result<(), Self::Error>;
}

/// A type that knows how to break itself down into [`Serializer`] calls.
///
/// # Example
///
/// ```
/// use steph_rules::{Serialize, Serializer};
///
/// struct Meters(f64);
///
/// impl Serialize for Meters {
///     fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
///     where
///         S: Serializer + ?Sized,
///     {
///         ser.write_f64(self.0)
///     }
/// }
/// ```
pub trait Serialize {
    /// Serializes this value into the given serializer.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the serializer.
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized;
}

// this implementation is required so the serializer can be reborrowed
impl<S: Serializer + ?Sized> Serializer for &mut S {
    type Error = S::Error;

    fn write_unit(&mut self) -> Result<(), Self::Error> {
        (**self).write_unit()
    }

    fn write_bool(&mut self, v: bool) -> Result<(), Self::Error> {
        (**self).write_bool(v)
    }

    fn write_char(&mut self, v: char) -> Result<(), Self::Error> {
        (**self).write_char(v)
    }

    fn write_f32(&mut self, v: f32) -> Result<(), Self::Error> {
        (**self).write_f32(v)
    }

    fn write_f64(&mut self, v: f64) -> Result<(), Self::Error> {
        (**self).write_f64(v)
    }

    fn write_u8(&mut self, v: u8) -> Result<(), Self::Error> {
        (**self).write_u8(v)
    }

    fn write_u16(&mut self, v: u16) -> Result<(), Self::Error> {
        (**self).write_u16(v)
    }

    fn write_u32(&mut self, v: u32) -> Result<(), Self::Error> {
        (**self).write_u32(v)
    }

    fn write_u64(&mut self, v: u64) -> Result<(), Self::Error> {
        (**self).write_u64(v)
    }

    fn write_u128(&mut self, v: u128) -> Result<(), Self::Error> {
        (**self).write_u128(v)
    }

    fn write_i8(&mut self, v: i8) -> Result<(), Self::Error> {
        (**self).write_i8(v)
    }

    fn write_i16(&mut self, v: i16) -> Result<(), Self::Error> {
        (**self).write_i16(v)
    }

    fn write_i32(&mut self, v: i32) -> Result<(), Self::Error> {
        (**self).write_i32(v)
    }

    fn write_i64(&mut self, v: i64) -> Result<(), Self::Error> {
        (**self).write_i64(v)
    }

    fn write_i128(&mut self, v: i128) -> Result<(), Self::Error> {
        (**self).write_i128(v)
    }

    fn write_string(&mut self, v: &str) -> Result<(), Self::Error> {
        (**self).write_string(v)
    }

    fn write_length(&mut self, len: usize) -> Result<(), Self::Error> {
        (**self).write_length(len)
    }

    fn write_variant_index(&mut self, index: u32) -> Result<(), Self::Error> {
        (**self).write_variant_index(index)
    }
}
