/// Ledger monetary system
///
/// Amounts, fees and balances are `Decimal` values carried at a fixed
/// precision of eight fractional digits (one satoshi).
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{BlockchainError, Result};

/// Fractional digits kept for every amount, fee and balance
pub const DECIMAL_PLACES: u32 = 8;

/// Largest whole amount (and fee) a transaction may carry. Far below the
/// `Decimal` range, so `amount + fee` and balance updates stay representable.
pub const MAX_WHOLE_AMOUNT: u64 = 1_000_000_000_000_000;

pub fn max_amount() -> Decimal {
    Decimal::from(MAX_WHOLE_AMOUNT)
}

/// Round to ledger precision (half away from zero) and drop trailing zeros,
/// so equal values always print, serialize and hash the same way.
pub fn round_amount(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Parse a user-supplied amount. Rejects non-numeric, negative and
/// out-of-range input.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BlockchainError::InvalidInput(
            "Amount cannot be empty".to_string(),
        ));
    }
    let value: Decimal = trimmed
        .parse()
        .map_err(|_| BlockchainError::InvalidInput(format!("Not a valid number: {trimmed}")))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(BlockchainError::InvalidInput(format!(
            "Amount cannot be negative: {trimmed}"
        )));
    }
    if value > max_amount() {
        return Err(BlockchainError::InvalidInput(format!(
            "Amount cannot exceed {MAX_WHOLE_AMOUNT}: {trimmed}"
        )));
    }
    Ok(round_amount(value))
}
