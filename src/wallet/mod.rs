//! Balance accounting
//!
//! This module holds the wallet that tracks every address's balance and
//! the seed accounts a fresh ledger starts from.

pub mod accounts;
#[allow(clippy::module_inception)]
pub mod wallet;

pub use accounts::{default_seed_accounts, SeedAccount, PRIMARY_ADDRESS, SECONDARY_ADDRESS};
pub use wallet::Wallet;
