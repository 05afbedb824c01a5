//! Exposes a deserializer and deserialization helper methods.

use std::io;

use steph_rules::{Deserialize, Deserializer as _};

use crate::config::{Config, IntEncoding};
use crate::error::{Error, Result};
use crate::leb128;

mod read;

pub use read::{IoRead, Read};

/// Deserializes a value from a byte slice.
///
/// Excess bytes in the slice will be ignored. If you need to reject them, use
/// [`from_slice_exact`]. If you need to handle them, use [`Deserializer`]'s
/// `from_slice` and `remainder`.
///
/// # Errors
///
/// Fails if the data is truncated or malformed for `T`.
pub fn from_slice<T>(buf: &[u8]) -> Result<T>
where
    T: Deserialize,
{
    log::trace!(
        "deserializing {} from {} bytes",
        std::any::type_name::<T>(),
        buf.len()
    );
    T::deserialize(&mut Deserializer::from_slice(buf))
}

/// Deserializes a value from a byte slice, requiring that the value spans the
/// entire slice.
///
/// # Errors
///
/// Fails if the data is truncated or malformed for `T`, or returns
/// [`Error::TrailingBytes`] if there are bytes past the end of the value.
pub fn from_slice_exact<T>(buf: &[u8]) -> Result<T>
where
    T: Deserialize,
{
    let mut de = Deserializer::from_slice(buf);
    let value = T::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Deserializes a value from a [`io::Read`].
///
/// The reader may still have bytes available when this function returns
/// successfully.
///
/// # Errors
///
/// Fails if reading fails or the data is malformed for `T`.
pub fn from_reader<T, R>(reader: R) -> Result<T>
where
    T: Deserialize,
    R: io::Read,
{
    log::trace!("deserializing {} from reader", std::any::type_name::<T>());
    T::deserialize(&mut Deserializer::from_reader(reader))
}

/// A deserializer for this crate's binary format.
///
/// Implements [`steph_rules::Deserializer`], so any [`Deserialize`] type can be
/// read from it.
#[derive(Debug)]
pub struct Deserializer<R> {
    reader: R,
    config: Config,
}

impl<R: Read> Deserializer<R> {
    /// Creates a new deserializer that reads a value from a [`Read`].
    ///
    /// When reading from a slice, using [`Self::from_slice`] may be clearer.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            config: Config::new(),
        }
    }
}

impl<R> Deserializer<R> {
    /// Replaces the configuration used by this deserializer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Gets the configuration used by this deserializer.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<'a> Deserializer<&'a [u8]> {
    /// Creates a new deserializer that reads a value from a slice.
    pub fn from_slice(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }

    /// Gets the remaining unread part of the slice.
    pub fn remainder(&self) -> &'a [u8] {
        self.reader
    }

    /// Checks that the entire slice has been read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrailingBytes`] if there is unread data left.
    pub fn end(&self) -> Result<()> {
        if self.reader.is_empty() {
            Ok(())
        } else {
            log::debug!(
                "{} trailing bytes after the end of the value",
                self.reader.len()
            );
            Err(Error::TrailingBytes)
        }
    }
}

impl<R: io::Read> Deserializer<IoRead<R>> {
    /// Creates a new deserializer that reads a value from a [`io::Read`].
    ///
    /// If you're working with a byte slice, it is more efficient to use
    /// [`Self::from_slice`].
    pub fn from_reader(reader: R) -> Self {
        Self::new(IoRead::new(reader))
    }

    /// Unwraps the deserializer into its inner reader.
    pub fn into_reader(self) -> R {
        self.reader.inner
    }

    /// Gets a reference to the inner reader.
    pub fn as_reader(&mut self) -> &mut R {
        &mut self.reader.inner
    }
}

impl<R: Read> Deserializer<R> {
    fn read_byte(&mut self) -> Result<u8> {
        let [b] = self.reader.read_bytes()?;
        Ok(b)
    }
}

// every integer wider than a byte goes through here, so both encodings only
// have to be handled once per type
macro_rules! read_int {
    ($($fn_name:ident -> $Ty:ty;)*) => { $(
        fn $fn_name(&mut self) -> Result<$Ty> {
            match self.config.int_encoding() {
                IntEncoding::Leb128 => leb128::read(&mut self.reader),
                IntEncoding::Fixed => self.reader.read_bytes().map(<$Ty>::from_le_bytes),
            }
        }
    )* };
}

impl<R: Read> steph_rules::Deserializer for Deserializer<R> {
    type Error = Error;

    fn read_bool(&mut self) -> Result<bool> {
        match self.read_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }

    fn read_char(&mut self) -> Result<char> {
        let code = self.read_u32()?;
        char::from_u32(code).ok_or(Error::InvalidChar)
    }

    fn read_f32(&mut self) -> Result<f32> {
        self.reader.read_bytes().map(f32::from_le_bytes)
    }

    fn read_f64(&mut self) -> Result<f64> {
        self.reader.read_bytes().map(f64::from_le_bytes)
    }

    fn read_u8(&mut self) -> Result<u8> {
        self.read_byte()
    }

    #[allow(clippy::cast_possible_wrap)]
    fn read_i8(&mut self) -> Result<i8> {
        self.read_byte().map(|b| b as i8)
    }

    read_int! {
        read_u16 -> u16;
        read_u32 -> u32;
        read_u64 -> u64;
        read_u128 -> u128;
        read_i16 -> i16;
        read_i32 -> i32;
        read_i64 -> i64;
        read_i128 -> i128;
        read_variant_index -> u32;
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_length()?;
        let bytes = self.reader.read_byte_vec(len)?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
    }

    fn read_length(&mut self) -> Result<usize> {
        let len = match self.config.int_encoding() {
            IntEncoding::Leb128 => leb128::read(&mut self.reader)?,
            IntEncoding::Fixed => {
                let len = self.reader.read_bytes().map(u64::from_le_bytes)?;
                usize::try_from(len).map_err(|_| Error::IntegerOverflow)?
            },
        };

        let limit = self.config.max_length();
        if len > limit {
            log::debug!("rejecting length prefix {len}, the limit is {limit}");
            return Err(Error::LengthLimit { len, limit });
        }

        Ok(len)
    }
}
