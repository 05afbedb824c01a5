//! # Steph binary codec
//!
//! Compact binary backend for [`steph_rules`]. The format is not
//! self-describing: the reader must know the type it expects, which decides the
//! order of primitive reads.
//!
//! The primitives are laid out as follows:
//!
//! - `byte`: single output byte
//! - `uint`: unsigned LEB128 integer
//! - `sint`: zig-zag mapped, then written as `uint`
//! - `float`: IEEE 754 bits, little-endian
//! - `string`: `uint` byte length followed by UTF-8 bytes
//!
//! Rust types map to these as follows:
//!
//! - nothing: `()`
//! - `byte`: [`u8`], [`i8`], and [`bool`] (as 0 or 1)
//! - `uint`: [`u16`], [`u32`], [`u64`], [`u128`], [`char`], lengths and
//!   variant indices
//! - `sint`: [`i16`], [`i32`], [`i64`], [`i128`]
//! - `float`: [`f32`], [`f64`]
//! - `string`: [`str`], [`String`]
//!
//! With [`IntEncoding::Fixed`], `uint` and `sint` are instead written as
//! little-endian bytes of the type's own width, with lengths as [`u64`].
//!
//! How composite values break down into these primitives is decided entirely by
//! [`steph_rules`]. For example, `Some(7u32)` is written as the bytes `[1, 7]`.
//!
//! ```
//! let buf = steph_codec::to_vec(&Some(7u32)).unwrap();
//! assert_eq!(buf, [1, 7]);
//!
//! let value: Option<u32> = steph_codec::from_slice(&buf).unwrap();
//! assert_eq!(value, Some(7));
//! ```

// for benchmarks
#[cfg(test)]
use criterion as _;

mod config;
pub mod de;
mod error;
mod leb128;
pub mod ser;

pub use config::{Config, IntEncoding};
pub use de::{Deserializer, from_reader, from_slice, from_slice_exact};
pub use error::{Error, Result};
pub use ser::{Serializer, to_vec, to_writer};
