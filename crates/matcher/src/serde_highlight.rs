//! Serialization helpers for the highlighted text index.
//!
//! Encodes `Option<usize>` as a signed integer where `-1` means "no
//! highlight", the convention the viewer expects.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

const NONE: i64 = -1;

/// Serialize `None` as `-1`, `Some(i)` as `i`.
pub fn serialize<S>(index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match index {
        Some(i) => serializer.serialize_u64(*i as u64),
        None => serializer.serialize_i64(NONE),
    }
}

/// Deserialize `-1` as `None` and any non-negative integer as `Some`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    match raw {
        NONE => Ok(None),
        i if i >= 0 => usize::try_from(i).map(Some).map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "highlight index must be -1 or non-negative, got {other}"
        ))),
    }
}
