//! Exposes a specialized reader trait.

use std::io;

use crate::error::{Error, Result, eof};

/// Specialized reader trait for use with [`Deserializer`](super::Deserializer).
///
/// By default, this is implemented for `&[u8]` (byte slices), [`IoRead`] and
/// mutable references to [`Read`] implementations.
pub trait Read {
    /// Reads a constant size chunk of bytes.
    ///
    /// # Errors
    ///
    /// Fails if fewer than `N` bytes are available.
    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]>;

    /// Reads a chunk of bytes, returning it as a newly allocated [`Vec`].
    ///
    /// # Errors
    ///
    /// Fails if fewer than `len` bytes are available.
    fn read_byte_vec(&mut self, len: usize) -> Result<Vec<u8>>;
}

// this implementation is required so the reader can be reborrowed
impl<R: Read + ?Sized> Read for &mut R {
    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        (**self).read_bytes()
    }

    fn read_byte_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        (**self).read_byte_vec(len)
    }
}

impl Read for &[u8] {
    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let (out, rem) = self.split_first_chunk::<N>().ok_or_else(eof)?;
        *self = rem;
        Ok(*out)
    }

    fn read_byte_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let (out, rem) = self.split_at_checked(len).ok_or_else(eof)?;
        *self = rem;
        Ok(out.to_vec())
    }
}

/// Wraps a [`io::Read`] implementation so it can be used as a [`Read`].
///
/// You cannot directly construct this type, instead use
/// [`Deserializer::from_reader`](super::Deserializer::from_reader).
#[derive(Debug)]
pub struct IoRead<R> {
    pub(super) inner: R,
}

impl<R> IoRead<R> {
    pub(super) fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: io::Read> Read for IoRead<R> {
    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    #[inline(never)]
    fn read_byte_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        use std::io::Read as _;

        // the length came from the input, so don't trust it for the allocation.
        // the buffer only grows as far as the data actually goes.
        let capacity = len.min(0x1000);
        let mut buf = Vec::with_capacity(capacity);
        let limit = u64::try_from(len).map_err(|_| Error::IntegerOverflow)?;
        (&mut self.inner).take(limit).read_to_end(&mut buf)?;

        if buf.len() >= len {
            Ok(buf)
        } else {
            Err(eof())
        }
    }
}
