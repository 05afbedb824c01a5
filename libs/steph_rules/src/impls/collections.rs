use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use arrayvec::ArrayVec;

use crate::{Deserialize, Deserializer, Serialize, Serializer};

/// Limits how much memory is reserved up-front for a length prefix that came
/// from untrusted input. Collections still grow to the full length if the data
/// is actually there.
fn cautious_capacity<T>(len: usize) -> usize {
    const BYTES: usize = 0x1000;
    len.min(BYTES / size_of::<T>().max(1))
}

fn serialize_elements<'a, S, T, I>(ser: &mut S, len: usize, iter: I) -> Result<(), S::Error>
where
    S: Serializer + ?Sized,
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ser.write_length(len)?;
    for item in iter {
        item.serialize(ser)?;
    }

    Ok(())
}

impl<T: Serialize> Serialize for [T] {
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        serialize_elements(ser, self.len(), self)
    }
}

impl<T: Serialize> Serialize for Vec<T> {
    #[inline]
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        self.as_slice().serialize(ser)
    }
}

impl<T: Deserialize> Deserialize for Vec<T> {
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized,
    {
        let len = de.read_length()?;
        let mut vec = Self::with_capacity(cautious_capacity::<T>(len));
        for _ in 0..len {
            vec.push(T::deserialize(de)?);
        }

        Ok(vec)
    }
}

impl<T: Serialize> Serialize for VecDeque<T> {
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        serialize_elements(ser, self.len(), self)
    }
}

impl<T: Deserialize> Deserialize for VecDeque<T> {
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized,
    {
        Vec::deserialize(de).map(Self::from)
    }
}

// arrays have their length in the type, so unlike slices, they don't write it
impl<T: Serialize, const N: usize> Serialize for [T; N] {
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        for item in self {
            item.serialize(ser)?;
        }

        Ok(())
    }
}

impl<T: Deserialize, const N: usize> Deserialize for [T; N] {
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized,
    {
        let mut items = ArrayVec::<T, N>::new();
        for _ in 0..N {
            items.push(T::deserialize(de)?);
        }

        match items.into_inner() {
            Ok(array) => Ok(array),
            Err(_) => unreachable!("exactly N items were pushed"),
        }
    }
}

fn serialize_entries<'a, S, K, V, I>(ser: &mut S, len: usize, iter: I) -> Result<(), S::Error>
where
    S: Serializer + ?Sized,
    K: Serialize + 'a,
    V: Serialize + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    ser.write_length(len)?;
    for (key, value) in iter {
        key.serialize(ser)?;
        value.serialize(ser)?;
    }

    Ok(())
}

/// Reads a length prefix and that many key-value pairs, handing each to
/// `insert`. Duplicate keys are resolved by the map, which for all maps
/// here means the last one wins.
fn deserialize_entries<D, K, V, F>(de: &mut D, mut insert: F) -> Result<(), D::Error>
where
    D: Deserializer + ?Sized,
    K: Deserialize,
    V: Deserialize,
    F: FnMut(K, V),
{
    let len = de.read_length()?;
    for _ in 0..len {
        let key = K::deserialize(de)?;
        let value = V::deserialize(de)?;
        insert(key, value);
    }

    Ok(())
}

impl<K: Serialize, V: Serialize> Serialize for BTreeMap<K, V> {
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        // already iterates in ascending key order
        serialize_entries(ser, self.len(), self)
    }
}

impl<K: Deserialize + Ord, V: Deserialize> Deserialize for BTreeMap<K, V> {
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized,
    {
        let mut map = Self::new();
        deserialize_entries(de, |key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }
}

impl<K, V, H> Serialize for HashMap<K, V, H>
where
    K: Serialize + Ord,
    V: Serialize,
{
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        // the iteration order of a hash map depends on the hasher state, so sort
        // the entries to make the output only depend on the contents
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        serialize_entries(ser, entries.len(), entries)
    }
}

impl<K, V, H> Deserialize for HashMap<K, V, H>
where
    K: Deserialize + Eq + Hash,
    V: Deserialize,
    H: BuildHasher + Default,
{
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized,
    {
        let mut map = Self::default();
        deserialize_entries(de, |key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }
}
