//! Serde helper letting partial payloads tell an explicit JSON null apart
//! from an absent key.
use serde::{Deserialize, Deserializer};

/// Use with `#[serde(default, deserialize_with = "crate::input::double_option")]`
/// on an `Option<Option<T>>` field: an absent key stays `None`, a present
/// null becomes `Some(None)`, a present value becomes `Some(Some(v))`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
