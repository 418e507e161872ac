use crate::core::monetary::max_amount;
use crate::core::proof_of_work::MAX_DIFFICULTY;
use crate::core::FeeMode;
use crate::error::{BlockchainError, Result};
use crate::wallet::{default_seed_accounts, SeedAccount};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Process-wide defaults: built-in values overlaid with the environment.
pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::from_env_or_default);

pub const DEFAULT_DIFFICULTY: usize = 4;
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_EXPORT_PATH: &str = "blockchain_data.json";

const DIFFICULTY_KEY: &str = "LEDGER_DIFFICULTY";
const BATCH_SIZE_KEY: &str = "LEDGER_BATCH_SIZE";
const EXPORT_PATH_KEY: &str = "LEDGER_EXPORT_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Leading zero hex digits every mined block must show
    pub difficulty: usize,
    /// Pending transactions that trigger an automatic seal
    pub batch_size: usize,
    /// Where the chain snapshot is written
    pub export_path: String,
    pub seed_accounts: Vec<SeedAccount>,
    pub fee: FeeMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            difficulty: DEFAULT_DIFFICULTY,
            batch_size: DEFAULT_BATCH_SIZE,
            export_path: String::from(DEFAULT_EXPORT_PATH),
            seed_accounts: default_seed_accounts(),
            fee: FeeMode::default(),
        }
    }
}

impl Config {
    /// Read a TOML file; keys it leaves out keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|e| {
            BlockchainError::Config(format!("Cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `LEDGER_*` environment variables on top of this config.
    pub fn apply_env(mut self) -> Result<Config> {
        if let Ok(value) = env::var(DIFFICULTY_KEY) {
            self.difficulty = parse_env_number(DIFFICULTY_KEY, &value)?;
        }
        if let Ok(value) = env::var(BATCH_SIZE_KEY) {
            self.batch_size = parse_env_number(BATCH_SIZE_KEY, &value)?;
        }
        if let Ok(path) = env::var(EXPORT_PATH_KEY) {
            self.export_path = path;
        }
        self.validate()?;
        Ok(self)
    }

    fn from_env_or_default() -> Config {
        Config::default().apply_env().unwrap_or_else(|e| {
            log::warn!("Ignoring environment overrides: {e}");
            Config::default()
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(BlockchainError::Config(
                "Batch size cannot be zero".to_string(),
            ));
        }
        // A full-width target never completes and the shell cannot cancel it
        if self.difficulty >= MAX_DIFFICULTY {
            return Err(BlockchainError::Config(format!(
                "Difficulty {} must be below {MAX_DIFFICULTY}",
                self.difficulty
            )));
        }
        for account in &self.seed_accounts {
            if account.address.trim().is_empty() {
                return Err(BlockchainError::Config(
                    "Seed account address cannot be empty".to_string(),
                ));
            }
            if account.balance.is_sign_negative() && !account.balance.is_zero() {
                return Err(BlockchainError::Config(format!(
                    "Seed balance for {} cannot be negative",
                    account.address
                )));
            }
            if account.balance > max_amount() {
                return Err(BlockchainError::Config(format!(
                    "Seed balance for {} cannot exceed {}",
                    account.address,
                    max_amount()
                )));
            }
        }
        self.fee.validate()
    }

    pub fn with_difficulty(mut self, difficulty: usize) -> Config {
        self.difficulty = difficulty;
        self
    }

    pub fn with_seed_accounts(mut self, seed_accounts: Vec<SeedAccount>) -> Config {
        self.seed_accounts = seed_accounts;
        self
    }
}

fn parse_env_number(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| BlockchainError::Config(format!("{key} must be a whole number, got {value}")))
}
