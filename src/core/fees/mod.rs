//! Fee policy for the ledger
//!
//! Two modes are available:
//! - Congestion fees: a base fee plus a share of the amount, scaled by how full
//!   the pending batch is (the default)
//! - Fixed fees: one flat amount regardless of amount or load
//!
//! Either way the fee is a pure function of the amount and the pending count,
//! so a quote taken against one pending snapshot is exactly what gets charged.

pub mod congestion;

pub use congestion::CongestionFeeConfig;

use crate::core::monetary::{max_amount, round_amount};
use crate::error::{BlockchainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fee calculation mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FeeMode {
    /// Same fee for every transaction
    Fixed { amount: Decimal },
    /// Amount- and load-dependent fee
    Congestion(CongestionFeeConfig),
}

impl Default for FeeMode {
    fn default() -> Self {
        FeeMode::Congestion(CongestionFeeConfig::default())
    }
}

impl FeeMode {
    pub fn calculate_fee(&self, amount: Decimal, pending_count: usize) -> Result<Decimal> {
        match self {
            FeeMode::Fixed { amount: fee } => Ok(round_amount(*fee)),
            FeeMode::Congestion(config) => config.calculate_fee(amount, pending_count),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            FeeMode::Fixed { amount } if amount.is_sign_negative() && !amount.is_zero() => Err(
                BlockchainError::Config("Fixed fee cannot be negative".to_string()),
            ),
            FeeMode::Fixed { amount } if *amount > max_amount() => Err(BlockchainError::Config(
                format!("Fixed fee cannot exceed {}", max_amount()),
            )),
            FeeMode::Fixed { .. } => Ok(()),
            FeeMode::Congestion(config) => config.validate(),
        }
    }
}

impl fmt::Display for FeeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeMode::Fixed { amount } => write!(f, "fixed fee of {amount}"),
            FeeMode::Congestion(config) => write!(
                f,
                "congestion fee: base {} + {} of amount, load x{} max",
                config.base_fee, config.amount_rate, config.max_multiplier
            ),
        }
    }
}

/// A fee quoted against a specific pending-batch size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    pub amount: Decimal,
    pub fee: Decimal,
    pub pending_snapshot: usize,
}

impl FeeQuote {
    pub fn total_cost(&self) -> Result<Decimal> {
        self.amount
            .checked_add(self.fee)
            .map(round_amount)
            .ok_or_else(|| {
                BlockchainError::InvalidInput(format!(
                    "Amount {} plus fee {} is out of range",
                    self.amount, self.fee
                ))
            })
    }
}
