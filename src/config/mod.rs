//! Configuration management
//!
//! This module handles the ledger settings: mining difficulty, batch size,
//! seed accounts, fee mode and the export location. Values come from
//! defaults, an optional TOML file and `LEDGER_*` environment variables.

pub mod settings;

pub use settings::{
    Config, DEFAULT_BATCH_SIZE, DEFAULT_DIFFICULTY, DEFAULT_EXPORT_PATH, GLOBAL_CONFIG,
};
