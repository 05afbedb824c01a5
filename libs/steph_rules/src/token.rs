//! An in-memory backend that records every primitive call as a [`Token`].
//!
//! This makes the exact sequence of calls a value produces observable, which is
//! primarily useful for tests and for debugging custom rules. Reading replays a
//! token slice and fails on the first token that does not match the requested
//! primitive.

use std::fmt;

use crate::{Deserialize, Deserializer, InvalidDiscriminant, Serialize, Serializer};

/// A single primitive call.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Unit,
    Bool(bool),
    Char(char),
    F32(f32),
    F64(f64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    String(String),
    Length(usize),
    VariantIndex(u32),
}

/// Potential errors when replaying tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A read requested a different primitive than the next token holds.
    #[error("expected {expected} token, found {found}")]
    Mismatch {
        expected: &'static str,
        found: Token,
    },
    /// A read was requested but there were no tokens left.
    #[error("ran out of tokens")]
    Exhausted,
    /// The value was fully read but there were tokens left over.
    #[error("{0} tokens left after the end of the value")]
    TrailingTokens(usize),
    #[error(transparent)]
    InvalidDiscriminant(#[from] InvalidDiscriminant),
}

/// Records every value written to it as a [`Token`].
#[derive(Debug, Default, Clone)]
pub struct TokenSerializer {
    tokens: Vec<Token>,
}

impl TokenSerializer {
    /// Creates a new serializer without any tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the tokens recorded so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Unwraps the serializer into the recorded tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn push(&mut self, token: Token) -> Result<(), Error> {
        self.tokens.push(token);
        Ok(())
    }
}

impl Serializer for TokenSerializer {
    type Error = Error;

    fn write_unit(&mut self) -> Result<(), Error> {
        self.push(Token::Unit)
    }

    fn write_bool(&mut self, v: bool) -> Result<(), Error> {
        self.push(Token::Bool(v))
    }

    fn write_char(&mut self, v: char) -> Result<(), Error> {
        self.push(Token::Char(v))
    }

    fn write_f32(&mut self, v: f32) -> Result<(), Error> {
        self.push(Token::F32(v))
    }

    fn write_f64(&mut self, v: f64) -> Result<(), Error> {
        self.push(Token::F64(v))
    }

    fn write_u8(&mut self, v: u8) -> Result<(), Error> {
        self.push(Token::U8(v))
    }

    fn write_u16(&mut self, v: u16) -> Result<(), Error> {
        self.push(Token::U16(v))
    }

    fn write_u32(&mut self, v: u32) -> Result<(), Error> {
        self.push(Token::U32(v))
    }

    fn write_u64(&mut self, v: u64) -> Result<(), Error> {
        self.push(Token::U64(v))
    }

    fn write_u128(&mut self, v: u128) -> Result<(), Error> {
        self.push(Token::U128(v))
    }

    fn write_i8(&mut self, v: i8) -> Result<(), Error> {
        self.push(Token::I8(v))
    }

    fn write_i16(&mut self, v: i16) -> Result<(), Error> {
        self.push(Token::I16(v))
    }

    fn write_i32(&mut self, v: i32) -> Result<(), Error> {
        self.push(Token::I32(v))
    }

    fn write_i64(&mut self, v: i64) -> Result<(), Error> {
        self.push(Token::I64(v))
    }

    fn write_i128(&mut self, v: i128) -> Result<(), Error> {
        self.push(Token::I128(v))
    }

    fn write_string(&mut self, v: &str) -> Result<(), Error> {
        self.push(Token::String(v.to_owned()))
    }

    fn write_length(&mut self, len: usize) -> Result<(), Error> {
        self.push(Token::Length(len))
    }

    fn write_variant_index(&mut self, index: u32) -> Result<(), Error> {
        self.push(Token::VariantIndex(index))
    }
}

/// Replays a slice of [`Token`]s, one per read.
#[derive(Debug, Clone)]
pub struct TokenDeserializer<'a> {
    tokens: &'a [Token],
}

impl<'a> TokenDeserializer<'a> {
    /// Creates a new deserializer that replays the given tokens.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }

    /// Gets the tokens that haven't been read yet.
    #[must_use]
    pub fn remaining(&self) -> &'a [Token] {
        self.tokens
    }

    fn next(&mut self) -> Result<&'a Token, Error> {
        let (first, rest) = self.tokens.split_first().ok_or(Error::Exhausted)?;
        self.tokens = rest;
        Ok(first)
    }
}

macro_rules! read_token {
    ($($fn_name:ident => $Variant:ident($Ty:ty);)*) => { $(
        fn $fn_name(&mut self) -> Result<$Ty, Error> {
            match self.next()? {
                Token::$Variant(v) => Ok(Clone::clone(v)),
                found => Err(mismatch(stringify!($Variant), found)),
            }
        }
    )* };
}

fn mismatch(expected: &'static str, found: &Token) -> Error {
    Error::Mismatch {
        expected,
        found: found.clone(),
    }
}

impl Deserializer for TokenDeserializer<'_> {
    type Error = Error;

    fn read_unit(&mut self) -> Result<(), Error> {
        match self.next()? {
            Token::Unit => Ok(()),
            found => Err(mismatch("Unit", found)),
        }
    }

    read_token! {
        read_bool => Bool(bool);
        read_char => Char(char);
        read_f32 => F32(f32);
        read_f64 => F64(f64);
        read_u8 => U8(u8);
        read_u16 => U16(u16);
        read_u32 => U32(u32);
        read_u64 => U64(u64);
        read_u128 => U128(u128);
        read_i8 => I8(i8);
        read_i16 => I16(i16);
        read_i32 => I32(i32);
        read_i64 => I64(i64);
        read_i128 => I128(i128);
        read_string => String(String);
        read_length => Length(usize);
        read_variant_index => VariantIndex(u32);
    }
}

/// Serializes a value into the list of [`Token`]s it produces.
///
/// # Errors
///
/// Recording tokens itself cannot fail, but this forwards any error a
/// [`Serialize`] implementation chooses to return.
pub fn to_tokens<T>(value: &T) -> Result<Vec<Token>, Error>
where
    T: Serialize + ?Sized,
{
    let mut ser = TokenSerializer::new();
    value.serialize(&mut ser)?;
    Ok(ser.into_tokens())
}

/// Deserializes a value from a list of [`Token`]s.
///
/// # Errors
///
/// Fails if the tokens don't match what the value's rules read, or if any
/// tokens are left over after the value was read.
pub fn from_tokens<T>(tokens: &[Token]) -> Result<T, Error>
where
    T: Deserialize,
{
    let mut de = TokenDeserializer::new(tokens);
    let value = T::deserialize(&mut de)?;
    match de.remaining().len() {
        0 => Ok(value),
        n => Err(Error::TrailingTokens(n)),
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool(v) => write!(f, "bool {v}"),
            Self::Char(v) => write!(f, "char {v:?}"),
            Self::F32(v) => write!(f, "f32 {v}"),
            Self::F64(v) => write!(f, "f64 {v}"),
            Self::U8(v) => write!(f, "u8 {v}"),
            Self::U16(v) => write!(f, "u16 {v}"),
            Self::U32(v) => write!(f, "u32 {v}"),
            Self::U64(v) => write!(f, "u64 {v}"),
            Self::U128(v) => write!(f, "u128 {v}"),
            Self::I8(v) => write!(f, "i8 {v}"),
            Self::I16(v) => write!(f, "i16 {v}"),
            Self::I32(v) => write!(f, "i32 {v}"),
            Self::I64(v) => write!(f, "i64 {v}"),
            Self::I128(v) => write!(f, "i128 {v}"),
            Self::String(v) => write!(f, "string {v:?}"),
            Self::Length(v) => write!(f, "length {v}"),
            Self::VariantIndex(v) => write!(f, "variant index {v}"),
        }
    }
}
