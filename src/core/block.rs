use crate::core::{ProofOfWork, Transaction};
use crate::error::{BlockchainError, Result};
use crate::utils::{format_timestamp, sha256_hex, to_canonical_json};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::atomic::AtomicBool;

/// Previous-hash value carried by the genesis block
pub const GENESIS_PREV_HASH: &str = "0";

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    index: u64,
    timestamp: DateTime<Utc>,
    transactions: Vec<Transaction>,
    prev_hash: String,
    nonce: u64,
    fee: Decimal, // reserved, always zero
    hash: String,
}

impl Block {
    /// Wrap a batch of transactions. Index, linkage and nonce start at their
    /// placeholder values and the hash is computed right away.
    pub fn new(timestamp: DateTime<Utc>, transactions: Vec<Transaction>) -> Result<Block> {
        if transactions.is_empty() {
            return Err(BlockchainError::InvalidBlock(
                "Block must contain at least one transaction".to_string(),
            ));
        }

        let mut block = Block {
            index: 0,
            timestamp,
            transactions,
            prev_hash: GENESIS_PREV_HASH.to_string(),
            nonce: 0,
            fee: Decimal::ZERO,
            hash: String::new(),
        };
        block.hash = block.calculate_hash()?;
        Ok(block)
    }

    /// Rebuild a block from previously exported fields, keeping its stored hash as-is.
    pub fn from_parts(
        index: u64,
        timestamp: DateTime<Utc>,
        transactions: Vec<Transaction>,
        prev_hash: String,
        nonce: u64,
        hash: String,
    ) -> Block {
        Block {
            index,
            timestamp,
            transactions,
            prev_hash,
            nonce,
            fee: Decimal::ZERO,
            hash,
        }
    }

    pub fn generate_genesis_block(timestamp: DateTime<Utc>) -> Result<Block> {
        Block::new(timestamp, vec![Transaction::new_genesis_tx()])
    }

    /// SHA-256 over index, previous hash, timestamp, transaction JSON, nonce and fee.
    pub fn calculate_hash(&self) -> Result<String> {
        let transactions_json = to_canonical_json(&self.transactions)?;
        let mut data = String::new();
        data.push_str(&self.index.to_string());
        data.push_str(&self.prev_hash);
        data.push_str(&format_timestamp(&self.timestamp));
        data.push_str(&transactions_json);
        data.push_str(&self.nonce.to_string());
        data.push_str(&self.fee.to_string());
        Ok(sha256_hex(data.as_bytes()))
    }

    /// Search nonces until the hash has `difficulty` leading zero hex digits.
    pub fn mine_block(&mut self, difficulty: usize) -> Result<()> {
        ProofOfWork::new(difficulty).run(self)
    }

    pub fn mine_block_cancellable(&mut self, difficulty: usize, cancel: &AtomicBool) -> Result<()> {
        ProofOfWork::new(difficulty).run_cancellable(self, cancel)
    }

    pub(crate) fn bump_nonce(&mut self) -> Result<()> {
        self.nonce = self
            .nonce
            .checked_add(1)
            .ok_or_else(|| BlockchainError::Mining("Nonce space exhausted".to_string()))?;
        self.hash = self.calculate_hash()?;
        Ok(())
    }

    /// Attach the block behind its predecessor. Only the ledger does this, before mining.
    pub(crate) fn link(&mut self, index: u64, prev_hash: String) -> Result<()> {
        self.index = index;
        self.prev_hash = prev_hash;
        self.hash = self.calculate_hash()?;
        Ok(())
    }

    pub fn get_index(&self) -> u64 {
        self.index
    }

    pub fn get_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn get_prev_hash(&self) -> &str {
        self.prev_hash.as_str()
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }

    pub fn get_fee(&self) -> Decimal {
        self.fee
    }

    pub fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    #[cfg(test)]
    pub(crate) fn transactions_mut(&mut self) -> &mut Vec<Transaction> {
        &mut self.transactions
    }
}
