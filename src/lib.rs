//! # Ledger Chain - My Single-Process Proof-of-Work Ledger
//!
//! This is a small educational ledger I built in Rust. It keeps balances in
//! memory, batches transfers, and seals each batch into a mined block.
//! When I come back to this code, here's what I need to remember:
//!
//! ## What I Built
//! - **Ledger Engine**: admission checks, batching, auto-sealing at the batch size
//! - **Proof of Work**: leading-zero SHA-256 target with optional cancellation
//! - **Wallet**: address to balance map with batch-start double-spend checks
//! - **Fee Policy**: fixed or congestion-priced fees, quoted and charged consistently
//! - **Validation**: a full chain walk that reports every broken rule
//! - **Snapshots**: JSON export of the chain that can be read back and verified
//!
//! ## How I Organized My Code
//! - `core/`: transactions, blocks, mining, fees, validation and the blockchain itself
//! - `wallet/`: balance accounting and the seed accounts
//! - `storage/`: the JSON snapshot sink
//! - `config/`: defaults, TOML file and environment overrides
//! - `utils/`: hashing, timestamps and JSON helpers
//! - `cli/`: argument parsing, the interactive shell and the simulation runner
//!
//! ## Key Design Decisions I Made
//! - Money is `Decimal` at eight fractional digits, never floating point
//! - A rejected transaction leaves every balance and the batch untouched
//! - Balances move at admission; mining only makes a batch durable on the chain
//! - No network, no signatures, no persistence beyond the snapshot file
//!
//! ## When I Need to Understand Something
//! 1. Start with `main.rs` to see the CLI commands
//! 2. Look at `core/blockchain.rs` for admission, sealing and validation
//! 3. Check `wallet/wallet.rs` for how balances and double-spends are tracked
//! 4. Review `core/fees/` for how fees are priced

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use core::{
    parse_amount, round_amount, Admission, Block, Blockchain, ChainReport, ChainViolation,
    CongestionFeeConfig, FeeMode, FeeQuote, ProofOfWork, SharedBlockchain, Transaction,
    ViolationRule,
};
pub use error::{BlockchainError, Result};
pub use storage::{export_chain, read_snapshot, BlockRecord};
pub use utils::{current_timestamp, sha256_digest, sha256_hex};
pub use wallet::{default_seed_accounts, SeedAccount, Wallet};
