use std::fmt;

/// A discriminant read from a backend was outside the declared range.
///
/// This is the only error the rules raise on their own. Backends have to be
/// able to represent it, see [`Deserializer::Error`].
///
/// [`Deserializer::Error`]: crate::Deserializer::Error
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} {found}, expected a value below {count}")]
pub struct InvalidDiscriminant {
    /// What the discriminant was read for.
    pub kind: DiscriminantKind,
    /// The value that was actually read.
    pub found: u32,
    /// The number of valid discriminants.
    pub count: u32,
}

/// Which rule read a discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscriminantKind {
    /// The index of a sum type's active alternative.
    Variant,
    /// The presence tag of an [`Option`].
    OptionTag,
}

impl InvalidDiscriminant {
    /// Creates an error for a variant index that is not below `count`.
    #[must_use]
    pub const fn variant(found: u32, count: u32) -> Self {
        Self {
            kind: DiscriminantKind::Variant,
            found,
            count,
        }
    }

    /// Creates an error for an [`Option`] tag that isn't 0 or 1.
    #[must_use]
    pub fn option_tag(found: u8) -> Self {
        Self {
            kind: DiscriminantKind::OptionTag,
            found: found.into(),
            count: 2,
        }
    }
}

impl fmt::Display for DiscriminantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Variant => "variant index",
            Self::OptionTag => "option tag",
        })
    }
}
