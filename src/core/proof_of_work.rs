use crate::core::Block;
use crate::error::{BlockchainError, Result};
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};

/// Width of a hex SHA-256 digest, the ceiling for any target. Configured
/// difficulties must stay below it.
pub const MAX_DIFFICULTY: usize = 64;

// How often the cancellable search looks at its flag
const CANCEL_CHECK_INTERVAL: u64 = 1024;

/// Leading-zero proof-of-work target over a block's hex hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofOfWork {
    difficulty: usize,
}

impl ProofOfWork {
    pub fn new(difficulty: usize) -> ProofOfWork {
        ProofOfWork {
            difficulty: difficulty.min(MAX_DIFFICULTY),
        }
    }

    pub fn get_difficulty(&self) -> usize {
        self.difficulty
    }

    /// True when `hash` starts with `difficulty` `'0'` characters.
    pub fn is_satisfied_by(&self, hash: &str) -> bool {
        hash.len() >= self.difficulty && hash.bytes().take(self.difficulty).all(|b| b == b'0')
    }

    /// Hash consistency plus target check for an already mined block
    pub fn validate(&self, block: &Block) -> bool {
        match block.calculate_hash() {
            Ok(hash) => hash == block.get_hash() && self.is_satisfied_by(block.get_hash()),
            Err(_) => false,
        }
    }

    /// Brute-force nonce search. No iteration cap; expected ~16^difficulty attempts.
    pub fn run(&self, block: &mut Block) -> Result<()> {
        info!(
            "Mining block {} with difficulty {}",
            block.get_index(),
            self.difficulty
        );
        while !self.is_satisfied_by(block.get_hash()) {
            block.bump_nonce()?;
        }
        info!(
            "Block {} mined: {} (nonce {})",
            block.get_index(),
            block.get_hash(),
            block.get_nonce()
        );
        Ok(())
    }

    /// Same search as [`ProofOfWork::run`], abandoned once `cancel` is set.
    pub fn run_cancellable(&self, block: &mut Block, cancel: &AtomicBool) -> Result<()> {
        let mut attempts: u64 = 0;
        while !self.is_satisfied_by(block.get_hash()) {
            if attempts % CANCEL_CHECK_INTERVAL == 0 && cancel.load(Ordering::Relaxed) {
                debug!(
                    "Mining of block {} cancelled after {attempts} attempts",
                    block.get_index()
                );
                return Err(BlockchainError::Mining(format!(
                    "Mining of block {} was cancelled",
                    block.get_index()
                )));
            }
            block.bump_nonce()?;
            attempts += 1;
        }
        info!(
            "Block {} mined: {} (nonce {})",
            block.get_index(),
            block.get_hash(),
            block.get_nonce()
        );
        Ok(())
    }
}
