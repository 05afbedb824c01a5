//! LEB128 variable-length integers.
//!
//! Every integer is widened to [`u128`] for encoding and narrowed back after
//! decoding, failing if the decoded value doesn't fit. Signed integers are
//! zig-zag mapped within their own width first, so `-1` encodes as `1` and
//! `1` as `2`.
//!
//! See also: <https://en.wikipedia.org/wiki/LEB128>

use std::io;

use crate::de::Read;
use crate::error::{Error, Result};

/// Longest possible encoding: 128 bits in groups of 7.
const MAX_LEN: usize = u128::BITS.div_ceil(7) as usize;

/// An integer type that can be LEB128 encoded.
pub trait Leb128: Copy {
    fn to_unsigned(self) -> u128;
    fn from_unsigned(value: u128) -> Option<Self>;
}

pub fn write<T, W>(writer: &mut W, value: T) -> Result<()>
where
    T: Leb128,
    W: io::Write + ?Sized,
{
    let mut value = value.to_unsigned();
    let mut buf = [0u8; MAX_LEN];
    let mut len = 0usize;

    for slot in &mut buf {
        #[allow(clippy::cast_possible_truncation)]
        let low = (value & 0x7F) as u8;
        value >>= 7;
        len += 1;

        if value == 0 {
            *slot = low;
            break;
        }

        *slot = low | 0x80;
    }

    Ok(writer.write_all(&buf[..len])?)
}

pub fn read<T, R>(reader: &mut R) -> Result<T>
where
    T: Leb128,
    R: Read + ?Sized,
{
    let mut value = 0u128;
    let mut shift = 0u32;

    loop {
        let [byte] = reader.read_bytes()?;
        let bits = u128::from(byte & 0x7F);

        // the group has to fit into the remaining bits of the accumulator
        if shift >= u128::BITS || (bits << shift) >> shift != bits {
            return Err(Error::IntegerOverflow);
        }

        value |= bits << shift;
        if byte & 0x80 == 0 {
            break;
        }

        shift += 7;
    }

    T::from_unsigned(value).ok_or(Error::IntegerOverflow)
}

macro_rules! impl_unsigned {
    ($($Ty:ty)*) => { $(
        impl Leb128 for $Ty {
            fn to_unsigned(self) -> u128 {
                self.into()
            }

            fn from_unsigned(value: u128) -> Option<Self> {
                Self::try_from(value).ok()
            }
        }
    )* };
}

macro_rules! impl_signed {
    ($($Ty:ty as $Unsigned:ty),* $(,)?) => { $(
        impl Leb128 for $Ty {
            #[allow(clippy::cast_sign_loss)]
            fn to_unsigned(self) -> u128 {
                let zigzag = (self << 1) ^ (self >> (<$Ty>::BITS - 1));
                (zigzag as $Unsigned).into()
            }

            #[allow(clippy::cast_possible_wrap)]
            fn from_unsigned(value: u128) -> Option<Self> {
                let value = <$Unsigned>::try_from(value).ok()?;
                let magnitude = (value >> 1) as Self;
                let sign = -((value & 1) as Self);
                Some(magnitude ^ sign)
            }
        }
    )* };
}

impl_unsigned!(u16 u32 u64 u128);
impl_signed!(i16 as u16, i32 as u32, i64 as u64, i128 as u128);

impl Leb128 for usize {
    fn to_unsigned(self) -> u128 {
        self as u128
    }

    fn from_unsigned(value: u128) -> Option<Self> {
        Self::try_from(value).ok()
    }
}
