//! `Maybe<T>` uses the same serialized shape as `Option<T>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Maybe;

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Present(value) => serializer.serialize_some(value),
            Maybe::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::<T>::from)
    }
}
