//! Error handling for the ledger
//!
//! This module provides the error types for every ledger operation, from
//! transaction admission down to snapshot export.

use rust_decimal::Decimal;
use std::fmt;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, BlockchainError>;

/// Error types for ledger operations
#[derive(Debug, Clone, PartialEq)]
pub enum BlockchainError {
    /// Sender cannot cover amount + fee
    InsufficientBalance {
        address: String,
        required: Decimal,
        available: Decimal,
    },
    /// Cumulative spend in the pending batch would exceed the sender's balance at batch start
    DoubleSpend { address: String },
    /// The wallet refused a debit/credit after every admission check passed
    ProcessingFailed(String),
    /// Malformed user input at the submission boundary
    InvalidInput(String),
    /// Transaction failed construction rules
    InvalidTransaction(String),
    /// Block validation errors
    InvalidBlock(String),
    /// A fee quote was taken against a different pending batch
    StaleQuote { quoted_at: usize, current: usize },
    /// Mining errors
    Mining(String),
    /// Configuration errors
    Config(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for BlockchainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockchainError::InsufficientBalance {
                address,
                required,
                available,
            } => {
                write!(
                    f,
                    "Insufficient balance for {address}: required {required}, available {available}"
                )
            }
            BlockchainError::DoubleSpend { address } => {
                write!(f, "Double spending detected for {address}")
            }
            BlockchainError::ProcessingFailed(msg) => {
                write!(f, "Transaction processing failed: {msg}")
            }
            BlockchainError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            BlockchainError::InvalidTransaction(msg) => write!(f, "Invalid transaction: {msg}"),
            BlockchainError::InvalidBlock(msg) => write!(f, "Invalid block: {msg}"),
            BlockchainError::StaleQuote { quoted_at, current } => write!(
                f,
                "Stale fee quote: quoted with {quoted_at} pending transactions, now {current}"
            ),
            BlockchainError::Mining(msg) => write!(f, "Mining error: {msg}"),
            BlockchainError::Config(msg) => write!(f, "Configuration error: {msg}"),
            BlockchainError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            BlockchainError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for BlockchainError {}

impl From<std::io::Error> for BlockchainError {
    fn from(err: std::io::Error) -> Self {
        BlockchainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BlockchainError {
    fn from(err: serde_json::Error) -> Self {
        BlockchainError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BlockchainError {
    fn from(err: toml::de::Error) -> Self {
        BlockchainError::Config(err.to_string())
    }
}

impl From<rust_decimal::Error> for BlockchainError {
    fn from(err: rust_decimal::Error) -> Self {
        BlockchainError::InvalidInput(err.to_string())
    }
}

impl From<chrono::ParseError> for BlockchainError {
    fn from(err: chrono::ParseError) -> Self {
        BlockchainError::Serialization(format!("Invalid timestamp: {err}"))
    }
}
