//! Core ledger functionality
//!
//! This module contains the fundamental ledger components: transactions,
//! blocks and their proof-of-work, the fee policy, and the blockchain that
//! admits, batches, seals and validates.

pub mod block;
pub mod blockchain;
pub mod fees;
pub mod monetary;
pub mod proof_of_work;
pub mod shared;
pub mod transaction;
pub mod validation;

pub use block::Block;
pub use blockchain::{Admission, Blockchain};
pub use fees::{CongestionFeeConfig, FeeMode, FeeQuote};
pub use monetary::{parse_amount, round_amount, DECIMAL_PLACES};
pub use proof_of_work::ProofOfWork;
pub use shared::SharedBlockchain;
pub use transaction::Transaction;
pub use validation::{ChainReport, ChainViolation, ViolationRule};
