//! Exposes a serializer and serialization helper methods.

use std::io;

use steph_rules::{Serialize, Serializer as _};

use crate::config::{Config, IntEncoding};
use crate::error::{Error, Result};
use crate::leb128;

/// Serializes a value to a [`Vec<u8>`].
///
/// The resulting buffer will have exactly the length required.
///
/// # Errors
///
/// Forwards any error returned by the value's [`Serialize`] implementation.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    log::trace!("serializing {} to vec", std::any::type_name::<T>());
    let mut ser = Serializer::from_writer(Vec::new());
    value.serialize(&mut ser)?;
    Ok(ser.into_writer())
}

/// Serializes a value to a [`io::Write`].
///
/// # Errors
///
/// Fails if writing fails.
pub fn to_writer<T, W>(writer: W, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    W: io::Write,
{
    log::trace!("serializing {} to writer", std::any::type_name::<T>());
    value.serialize(&mut Serializer::from_writer(writer))
}

/// A serializer for this crate's binary format.
///
/// Implements [`steph_rules::Serializer`], so any [`Serialize`] type can be
/// written to it.
#[derive(Debug)]
pub struct Serializer<W> {
    writer: W,
    config: Config,
}

impl<W: io::Write> Serializer<W> {
    /// Creates a new serializer that writes a value to a [`io::Write`].
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer,
            config: Config::new(),
        }
    }

    /// Replaces the configuration used by this serializer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Unwraps the serializer into its inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Gets a reference to the inner writer.
    pub fn as_writer(&mut self) -> &mut W {
        &mut self.writer
    }

    fn write_byte(&mut self, v: u8) -> Result<()> {
        Ok(self.writer.write_all(&[v])?)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        Ok(self.writer.write_all(bytes)?)
    }
}

macro_rules! write_int {
    ($($fn_name:ident($Ty:ty);)*) => { $(
        fn $fn_name(&mut self, v: $Ty) -> Result<()> {
            match self.config.int_encoding() {
                IntEncoding::Leb128 => leb128::write(&mut self.writer, v),
                IntEncoding::Fixed => self.write_raw(&v.to_le_bytes()),
            }
        }
    )* };
}

impl<W: io::Write> steph_rules::Serializer for Serializer<W> {
    type Error = Error;

    fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_byte(v.into())
    }

    fn write_char(&mut self, v: char) -> Result<()> {
        self.write_u32(v.into())
    }

    fn write_f32(&mut self, v: f32) -> Result<()> {
        self.write_raw(&v.to_le_bytes())
    }

    fn write_f64(&mut self, v: f64) -> Result<()> {
        self.write_raw(&v.to_le_bytes())
    }

    fn write_u8(&mut self, v: u8) -> Result<()> {
        self.write_byte(v)
    }

    #[allow(clippy::cast_sign_loss)]
    fn write_i8(&mut self, v: i8) -> Result<()> {
        self.write_byte(v as u8)
    }

    write_int! {
        write_u16(u16);
        write_u32(u32);
        write_u64(u64);
        write_u128(u128);
        write_i16(i16);
        write_i32(i32);
        write_i64(i64);
        write_i128(i128);
        write_variant_index(u32);
    }

    fn write_string(&mut self, v: &str) -> Result<()> {
        self.write_length(v.len())?;
        self.write_raw(v.as_bytes())
    }

    fn write_length(&mut self, len: usize) -> Result<()> {
        match self.config.int_encoding() {
            IntEncoding::Leb128 => leb128::write(&mut self.writer, len),
            IntEncoding::Fixed => {
                let len = u64::try_from(len).map_err(|_| Error::IntegerOverflow)?;
                self.write_raw(&len.to_le_bytes())
            },
        }
    }
}
