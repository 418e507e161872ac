// Non-interactive runs: a scripted series of transfers, and checking a snapshot someone exported earlier.

use crate::config::Config;
use crate::core::{Blockchain, ChainReport};
use crate::error::{BlockchainError, Result};
use crate::storage::{export_chain, read_snapshot};
use log::{info, warn};
use rust_decimal::Decimal;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a simulation run did.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub blocks: usize,
    pub valid: bool,
    pub exported_to: Option<PathBuf>,
}

/// Send `count` transfers of `amount` from the first seed account to the second,
/// mine the leftovers, validate, and optionally export.
///
/// Rejected transfers are counted and reported, they do not stop the run.
pub fn run_simulation<W: Write>(
    config: &Config,
    count: usize,
    amount: Decimal,
    export: bool,
    out: &mut W,
) -> Result<SimulationSummary> {
    let (sender, receiver) = match config.seed_accounts.as_slice() {
        [first, second, ..] => (first.address.clone(), second.address.clone()),
        _ => {
            return Err(BlockchainError::Config(
                "A simulation needs at least two seed accounts".to_string(),
            ))
        }
    };

    let mut ledger = Blockchain::new(config)?;
    let mut accepted = 0;
    let mut rejected = 0;

    for i in 1..=count {
        let quote = ledger.quote_fee(amount)?;
        let note = Some(format!("transfer {i}"));
        match ledger.submit_quote(&quote, &sender, &receiver, note) {
            Ok(_) => {
                accepted += 1;
                writeln!(out, "Transfer {i}: {} (fee {})", quote.amount, quote.fee)?;
            }
            Err(e) => {
                rejected += 1;
                warn!("Transfer {i} rejected: {e}");
                writeln!(out, "Transfer {i} rejected: {e}")?;
            }
        }
    }

    if ledger.mine_pending_transactions()? {
        info!("Mined the remaining pending transactions");
    }

    let valid = ledger.check_valid();
    writeln!(
        out,
        "{} blocks, chain {}",
        ledger.len(),
        if valid { "valid" } else { "INVALID" }
    )?;
    for (address, balance) in ledger.wallet().balances() {
        writeln!(out, "{address}: {balance}")?;
    }

    let exported_to = if export {
        let path = PathBuf::from(&config.export_path);
        export_chain(ledger.chain(), &path)?;
        writeln!(out, "Blockchain saved to {}", path.display())?;
        Some(path)
    } else {
        None
    };

    Ok(SimulationSummary {
        accepted,
        rejected,
        blocks: ledger.len(),
        valid,
        exported_to,
    })
}

/// Read an exported snapshot and walk it at the configured difficulty and batch size.
pub fn verify_snapshot(config: &Config, path: &Path) -> Result<ChainReport> {
    let blocks = read_snapshot(path)?;
    let ledger = Blockchain::from_parts(config, Some(blocks), None)?;
    Ok(ledger.validate_chain())
}
