use crate::{Deserialize, Deserializer, InvalidDiscriminant, Serialize, Serializer};

// the box owns exactly one value and contributes nothing to the output.
// this is not an option: there is no way to encode "no value" here.
impl<T: ?Sized + Serialize> Serialize for Box<T> {
    #[inline]
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        T::serialize(self, ser)
    }
}

impl<T: Deserialize> Deserialize for Box<T> {
    #[inline]
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized,
    {
        T::deserialize(de).map(Self::new)
    }
}

impl<T: ?Sized + Serialize> Serialize for &T {
    #[inline]
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        T::serialize(self, ser)
    }
}

impl<T: ?Sized + Serialize> Serialize for &mut T {
    #[inline]
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        T::serialize(self, ser)
    }
}

impl<T: Serialize> Serialize for Option<T> {
    fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer + ?Sized,
    {
        match self {
            None => ser.write_u8(0),
            Some(value) => {
                ser.write_u8(1)?;
                value.serialize(ser)
            },
        }
    }
}

impl<T: Deserialize> Deserialize for Option<T> {
    fn deserialize<D>(de: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer + ?Sized,
    {
        match de.read_u8()? {
            0 => Ok(None),
            1 => T::deserialize(de).map(Some),
            tag => Err(InvalidDiscriminant::option_tag(tag).into()),
        }
    }
}
