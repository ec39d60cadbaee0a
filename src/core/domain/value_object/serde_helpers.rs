//! Serde helpers for custom deserialization.

use serde::{Deserialize, Deserializer};

/// Deserializes an explicit JSON `null` as the type's default value.
///
/// Ironic reports unset object and list fields either as `{}`/`[]` or as
/// `null` depending on the field and microversion.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
