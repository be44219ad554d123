//! Shared serde helpers for configuration types

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value
///
/// Configuration files written by hand or by other tools often carry
/// `"Path": null` or `"Windows": null`; those are read as empty.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
