use crate::core::{Block, Transaction};
use crate::error::{BlockchainError, Result};
use crate::utils::{format_timestamp, parse_timestamp, to_pretty_json};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Exported shape of one block. Field order is part of the snapshot format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub index: u64,
    pub timestamp: String,
    pub transactions: Vec<Transaction>,
    pub prev_hash: String,
    pub hash: String,
    pub nonce: u64,
}

impl BlockRecord {
    pub fn from_block(block: &Block) -> BlockRecord {
        BlockRecord {
            index: block.get_index(),
            timestamp: format_timestamp(&block.get_timestamp()),
            transactions: block.get_transactions().to_vec(),
            prev_hash: block.get_prev_hash().to_string(),
            hash: block.get_hash().to_string(),
            nonce: block.get_nonce(),
        }
    }

    /// Rebuild the block. The reserved fee field is not exported and comes back as zero.
    pub fn into_block(self) -> Result<Block> {
        let timestamp = parse_timestamp(&self.timestamp)?;
        Ok(Block::from_parts(
            self.index,
            timestamp,
            self.transactions,
            self.prev_hash,
            self.nonce,
            self.hash,
        ))
    }
}

/// Read-only view of a chain in export form.
pub fn snapshot(chain: &[Block]) -> Vec<BlockRecord> {
    chain.iter().map(BlockRecord::from_block).collect()
}

/// Write the chain to `path` as indented JSON, replacing any previous file.
pub fn export_chain(chain: &[Block], path: &Path) -> Result<()> {
    let json = to_pretty_json(&snapshot(chain))?;
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    info!("Exported {} blocks to {}", chain.len(), path.display());
    Ok(())
}

/// Read a snapshot written by [`export_chain`] back into blocks.
pub fn read_snapshot(path: &Path) -> Result<Vec<Block>> {
    let file = File::open(path).map_err(|e| {
        BlockchainError::Io(format!("Cannot open snapshot {}: {e}", path.display()))
    })?;
    let records: Vec<BlockRecord> = serde_json::from_reader(BufReader::new(file))?;
    records.into_iter().map(BlockRecord::into_block).collect()
}
