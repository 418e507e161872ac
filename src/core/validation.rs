//! Chain integrity findings
//!
//! Validation only detects problems; nothing here repairs a chain.

use std::fmt;

/// The integrity rule a block broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationRule {
    /// Stored hash differs from the recomputed one
    HashMismatch,
    /// `prev_hash` is not the predecessor's stored hash
    PrevHashMismatch,
    /// Index does not match the block's position in the chain
    IndexOutOfSequence { expected: u64, found: u64 },
    /// Block carries no transactions
    EmptyBlock,
    /// Block carries more transactions than a batch can hold
    TooManyTransactions { count: usize, max: usize },
    /// A transaction has an empty sender or receiver
    InvalidAddresses,
    /// Hash lacks the required leading zeros
    InsufficientWork { difficulty: usize },
}

impl fmt::Display for ViolationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationRule::HashMismatch => write!(f, "invalid hash"),
            ViolationRule::PrevHashMismatch => write!(f, "invalid previous hash"),
            ViolationRule::IndexOutOfSequence { expected, found } => {
                write!(f, "index {found} where {expected} was expected")
            }
            ViolationRule::EmptyBlock => write!(f, "no transactions"),
            ViolationRule::TooManyTransactions { count, max } => {
                write!(f, "{count} transactions, more than {max}")
            }
            ViolationRule::InvalidAddresses => write!(f, "invalid addresses in a transaction"),
            ViolationRule::InsufficientWork { difficulty } => {
                write!(f, "hash does not meet difficulty {difficulty}")
            }
        }
    }
}

/// One broken rule at one chain position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainViolation {
    pub block_index: usize,
    pub rule: ViolationRule,
}

impl fmt::Display for ChainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block {}: {}", self.block_index, self.rule)
    }
}

/// Outcome of a full chain walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainReport {
    pub blocks_checked: usize,
    pub violations: Vec<ChainViolation>,
}

impl ChainReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub(crate) fn record(&mut self, block_index: usize, rule: ViolationRule) {
        self.violations.push(ChainViolation { block_index, rule });
    }

    /// First violation found for a given position, if any.
    pub fn first_at(&self, block_index: usize) -> Option<&ChainViolation> {
        self.violations
            .iter()
            .find(|violation| violation.block_index == block_index)
    }
}
