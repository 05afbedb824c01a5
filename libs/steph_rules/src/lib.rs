//! # Type-driven serialization rules
//!
//! Resolves, at compile time, how a value of some type is broken down into a
//! sequence of primitive operations and how it is rebuilt from them. Nothing in
//! here knows about bytes: the primitive operations are provided by a backend
//! implementing [`Serializer`] and [`Deserializer`].
//!
//! The rules are as follows:
//!
//! - primitives: [`()`](unit), [`bool`], [`char`], [`f32`], [`f64`], all
//!   integers from 8 to 128 bits, [`str`] and [`String`] map to exactly one
//!   backend call each
//! - indirection: [`Box`] is transparent, it adds no calls of its own
//! - optional: [`Option`] writes a `u8` tag of 0 or 1, followed by the value
//!   if present
//! - sequence: [`Vec`], [`VecDeque`](std::collections::VecDeque) and slices
//!   write a length followed by every element
//! - array: `[T; N]` writes every element without a length
//! - map: [`BTreeMap`](std::collections::BTreeMap) and
//!   [`HashMap`](std::collections::HashMap) write a length followed by key and
//!   value of each entry, always in ascending key order
//! - product: tuples and [`product_type!`] structs write each component in
//!   declared order
//! - sum: [`OneOf2`] through [`OneOf8`] and [`sum_type!`] enums write the
//!   variant index followed by the active alternative
//!
//! The only error raised by the rules themselves is [`InvalidDiscriminant`].
//! Anything else comes from the backend and is passed through untouched.
//!
//! ```
//! use steph_rules::token::{self, Token};
//!
//! let tokens = token::to_tokens(&Some(7u32)).unwrap();
//! assert_eq!(tokens, [Token::U8(1), Token::U32(7)]);
//!
//! let value: Option<u32> = token::from_tokens(&tokens).unwrap();
//! assert_eq!(value, Some(7));
//! ```

pub mod de;
mod error;
mod impls;
mod macros;
pub mod ser;
pub mod token;
pub mod variant;

pub use de::{Deserialize, Deserializer};
pub use error::{DiscriminantKind, InvalidDiscriminant};
pub use ser::{Serialize, Serializer};
pub use variant::{OneOf2, OneOf3, OneOf4, OneOf5, OneOf6, OneOf7, OneOf8};

#[cfg(test)]
mod tests;
