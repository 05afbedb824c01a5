//! Error handling types.
//!
//! Serializing and deserializing share one error type, as does every
//! [`Read`](crate::de::Read) implementation.

use std::io;

use steph_rules::InvalidDiscriminant;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Potential errors to encounter when serializing or deserializing binary data.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The error originated from the [`io::Write`] or [`io::Read`]
    /// implementation, or the input ended early.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The data selected a variant or option state that doesn't exist.
    #[error(transparent)]
    InvalidDiscriminant(#[from] InvalidDiscriminant),

    /// Tried to deserialize a [`String`] but it contained invalid UTF-8.
    #[error("invalid utf-8 in data for string")]
    InvalidUtf8,
    /// Tried to deserialize a [`char`] but its code was invalid.
    #[error("invalid char code")]
    InvalidChar,
    /// Tried to deserialize a [`bool`] but it wasn't 0 or 1.
    #[error("invalid bool value")]
    InvalidBool,
    /// An encoded integer overflowed the target type.
    #[error("encoded integer overflows target type")]
    IntegerOverflow,
    /// A length prefix was larger than the configured limit.
    #[error("length prefix {len} exceeds the limit of {limit}")]
    LengthLimit { len: usize, limit: usize },
    /// Past the expected end of the deserialized value were trailing bytes.
    #[error("trailing bytes past the end of the deserialized value")]
    TrailingBytes,
}

/// Returns an [`io::Error`] with kind [`io::ErrorKind::UnexpectedEof`].
pub(crate) fn eof() -> Error {
    io::Error::from(io::ErrorKind::UnexpectedEof).into()
}
