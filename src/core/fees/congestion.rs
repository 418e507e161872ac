use crate::core::monetary::round_amount;
use crate::error::{BlockchainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of the congestion-priced fee:
/// `(base_fee + amount * amount_rate) * min(1 + pending / congestion_divisor, max_multiplier)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CongestionFeeConfig {
    /// Flat part of every fee
    pub base_fee: Decimal,
    /// Share of the amount added on top of the base fee
    pub amount_rate: Decimal,
    /// Pending transactions that add one whole step to the multiplier
    pub congestion_divisor: usize,
    /// Ceiling of the congestion multiplier
    pub max_multiplier: Decimal,
}

impl Default for CongestionFeeConfig {
    fn default() -> Self {
        Self {
            base_fee: Decimal::new(10, 4),   // 0.0010
            amount_rate: Decimal::new(10, 3), // 0.010
            congestion_divisor: 10,
            max_multiplier: Decimal::TWO,
        }
    }
}

impl CongestionFeeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_fee.is_sign_negative() || self.amount_rate.is_sign_negative() {
            return Err(BlockchainError::Config(
                "Fee rates cannot be negative".to_string(),
            ));
        }
        if self.congestion_divisor == 0 {
            return Err(BlockchainError::Config(
                "Congestion divisor cannot be zero".to_string(),
            ));
        }
        if self.max_multiplier < Decimal::ONE {
            return Err(BlockchainError::Config(
                "Maximum multiplier cannot be below 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Network load factor for a pending batch of `pending_count` transactions.
    pub fn multiplier(&self, pending_count: usize) -> Decimal {
        let load = Decimal::from(pending_count) / Decimal::from(self.congestion_divisor);
        (Decimal::ONE + load).min(self.max_multiplier)
    }

    /// Fails with [`BlockchainError::InvalidInput`] when the fee for `amount`
    /// is too large to represent.
    pub fn calculate_fee(&self, amount: Decimal, pending_count: usize) -> Result<Decimal> {
        let out_of_range =
            || BlockchainError::InvalidInput(format!("Fee for amount {amount} is out of range"));
        let share = amount
            .checked_mul(self.amount_rate)
            .ok_or_else(out_of_range)?;
        let raw = self
            .base_fee
            .checked_add(round_amount(share))
            .ok_or_else(out_of_range)?;
        let fee = raw
            .checked_mul(self.multiplier(pending_count))
            .ok_or_else(out_of_range)?;
        Ok(round_amount(fee))
    }
}
