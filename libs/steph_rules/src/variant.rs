//! Sum types: values that are exactly one of several alternatives.
//!
//! On the wire, a sum type is the index of its active alternative followed by
//! that alternative's value. Writing is simple since the active alternative is
//! known. Reading is the interesting part: a runtime index has to select one
//! of several statically typed decode procedures.
//!
//! This is solved with [`Cases`], a constant table holding one [`Case`] per
//! alternative in declaration order. The table is built at compile time for
//! each pair of sum type and deserializer, and [`deserialize`] simply indexes
//! it with the value it read. Indices past the end of the table are rejected
//! with [`InvalidDiscriminant`] before any payload is read.
//!
//! The [`sum_type!`](crate::sum_type) macro implements all of this for an enum.
//! Types it cannot express can implement [`SumType`] and [`Cases`] by hand and
//! forward their [`Serialize`] and [`Deserialize`] implementations to
//! [`serialize`] and [`deserialize`].
//!
//! [`Serialize`]: crate::Serialize
//! [`Deserialize`]: crate::Deserialize

use crate::{Deserializer, InvalidDiscriminant, Serializer};

/// Decodes one particular alternative of the sum type `T`.
pub type Case<T, D> = fn(&mut D) -> Result<T, <D as Deserializer>::Error>;

/// The encoding half of a sum type.
pub trait SumType {
    /// The position of the active alternative in declaration order.
    ///
    /// This must be the same value the matching entry in [`Cases::CASES`] is
    /// found at.
    fn variant_index(&self) -> u32;

    /// Serializes the value of the active alternative, without its index.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the serializer.
    fn serialize_payload<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized;
}

/// The decoding half of a sum type: a table of decode procedures for use with
/// the deserializer `D`.
pub trait Cases<D: Deserializer + ?Sized>: Sized {
    /// The table type. This is usually an array with one entry per alternative.
    type Table: AsRef<[Case<Self, D>]>;

    /// The decode procedure for every alternative, in declaration order.
    const CASES: Self::Table;
}

/// Serializes a sum type as its variant index followed by its payload.
///
/// # Errors
///
/// Returns the first error produced by the serializer.
pub fn serialize<T, S>(value: &T, ser: &mut S) -> Result<(), S::Error>
where
    T: SumType + ?Sized,
    S: Serializer + ?Sized,
{
    ser.write_variant_index(value.variant_index())?;
    value.serialize_payload(ser)
}

/// Deserializes a sum type by reading its variant index and running the
/// matching entry of its [`Cases`] table.
///
/// # Errors
///
/// Returns [`InvalidDiscriminant`] if the index is not less than the number of
/// alternatives. Otherwise, returns the first error produced by the
/// deserializer.
pub fn deserialize<T, D>(de: &mut D) -> Result<T, D::Error>
where
    T: Cases<D>,
    D: Deserializer + ?Sized,
{
    let index = de.read_variant_index()?;
    let table = T::CASES;
    let cases = table.as_ref();

    let case = usize::try_from(index)
        .ok()
        .and_then(|i| cases.get(i))
        .ok_or_else(|| {
            let count = u32::try_from(cases.len()).unwrap_or(u32::MAX);
            InvalidDiscriminant::variant(index, count)
        })?;

    case(de)
}

crate::sum_type! {
    /// One of two alternatives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum OneOf2<A, B> {
        A(A),
        B(B),
    }
}

crate::sum_type! {
    /// One of three alternatives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum OneOf3<A, B, C> {
        A(A),
        B(B),
        C(C),
    }
}

crate::sum_type! {
    /// One of four alternatives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum OneOf4<A, B, C, D> {
        A(A),
        B(B),
        C(C),
        D(D),
    }
}

crate::sum_type! {
    /// One of five alternatives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum OneOf5<A, B, C, D, E> {
        A(A),
        B(B),
        C(C),
        D(D),
        E(E),
    }
}

crate::sum_type! {
    /// One of six alternatives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum OneOf6<A, B, C, D, E, F> {
        A(A),
        B(B),
        C(C),
        D(D),
        E(E),
        F(F),
    }
}

crate::sum_type! {
    /// One of seven alternatives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum OneOf7<A, B, C, D, E, F, G> {
        A(A),
        B(B),
        C(C),
        D(D),
        E(E),
        F(F),
        G(G),
    }
}

crate::sum_type! {
    /// One of eight alternatives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum OneOf8<A, B, C, D, E, F, G, H> {
        A(A),
        B(B),
        C(C),
        D(D),
        E(E),
        F(F),
        G(G),
        H(H),
    }
}
