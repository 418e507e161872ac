// Canonical JSON helpers shared by block hashing and the snapshot sink
use crate::error::Result;
use serde::Serialize;

/// Compact JSON with fields in declaration order. Stable for identical inputs.
pub fn to_canonical_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string(data)?)
}

/// Indented JSON for files meant to be read by people.
pub fn to_pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
