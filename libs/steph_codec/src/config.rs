//! Options shared by the serializer and deserializer.

/// How integers wider than a byte are laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntEncoding {
    /// Variable-length LEB128. Signed integers are zig-zag encoded first, so
    /// values close to zero are short regardless of sign.
    #[default]
    Leb128,
    /// Fixed-width little-endian. Lengths are written as [`u64`].
    Fixed,
}

/// Configures the binary layout and the limits applied while reading.
///
/// Both sides must agree on the [`IntEncoding`]. The limits only apply to
/// deserialization.
///
/// ```
/// use steph_codec::{Config, IntEncoding};
///
/// let config = Config::new()
///     .with_int_encoding(IntEncoding::Fixed)
///     .with_max_length(1024);
///
/// assert_eq!(config.int_encoding(), IntEncoding::Fixed);
/// assert_eq!(config.max_length(), 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    int_encoding: IntEncoding,
    max_length: usize,
}

impl Config {
    /// Creates the default configuration: LEB128 integers and no length limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            int_encoding: IntEncoding::Leb128,
            max_length: usize::MAX,
        }
    }

    /// Sets the integer encoding.
    #[must_use]
    pub const fn with_int_encoding(mut self, int_encoding: IntEncoding) -> Self {
        self.int_encoding = int_encoding;
        self
    }

    /// Sets the largest length prefix the deserializer accepts for strings,
    /// sequences and maps.
    ///
    /// The deserializer allocates lazily regardless, but rejecting large
    /// lengths early avoids reading deep into malformed input.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Gets the integer encoding.
    #[must_use]
    pub const fn int_encoding(&self) -> IntEncoding {
        self.int_encoding
    }

    /// Gets the largest accepted length prefix.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
