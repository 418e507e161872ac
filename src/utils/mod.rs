//! Utility functions and helpers
//!
//! This module contains hashing, timestamp and JSON helpers used
//! throughout the ledger.

pub mod crypto;
pub mod serialization;

pub use crypto::{
    current_timestamp, format_timestamp, parse_timestamp, sha256_digest, sha256_hex,
};

pub use serialization::{to_canonical_json, to_pretty_json};
