//! Deserialization helpers for loosely-typed backend records.

use serde::{Deserialize, Deserializer};

/// Decode a field that the backend may send as `null`, falling back to the
/// type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
