use std::{fmt, marker::PhantomData};

use serde::{
    de::{Error, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::vector::{Vec2, Vec3};

impl<T> Serialize for Vec3<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        seq.serialize_element(&self.z)?;
        seq.end()
    }
}

impl<T> Serialize for Vec2<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Vec3<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y, z] = deserializer.deserialize_seq(ComponentsVisitor::<T, 3>::new())?;
        Ok(Vec3::new(x, y, z))
    }
}

impl<'de, T> Deserialize<'de> for Vec2<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = deserializer.deserialize_seq(ComponentsVisitor::<T, 2>::new())?;
        Ok(Vec2::new(x, y))
    }
}

struct ComponentsVisitor<T, const N: usize> {
    _marker: PhantomData<T>,
}

impl<T, const N: usize> ComponentsVisitor<T, N> {
    fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<'de, T, const N: usize> Visitor<'de> for ComponentsVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = [T; N];

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a vector of {} components", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        if let Some(size_hint) = seq.size_hint() {
            if size_hint != N {
                return Err(A::Error::invalid_length(size_hint, &self));
            }
        }

        let mut components = Vec::with_capacity(N);
        while let Some(component) = seq.next_element()? {
            if components.len() == N {
                return Err(A::Error::invalid_length(N + 1, &self));
            }
            components.push(component);
        }

        let got = components.len();
        components
            .try_into()
            .map_err(|_| A::Error::invalid_length(got, &self))
    }
}
