// A transaction here is a plain balance transfer: no inputs, no outputs, no signatures.
// The wallet does the accounting, the transaction only records what was asked for.

use crate::core::monetary::{max_amount, round_amount, MAX_WHOLE_AMOUNT};
use crate::error::{BlockchainError, Result};
use crate::utils::{current_timestamp, format_timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sender address used by the synthetic genesis transaction
pub const GENESIS_SENDER: &str = "genesis";
/// Receiver address used by the synthetic genesis transaction
pub const GENESIS_RECEIVER: &str = "none";

// Field order here is the canonical JSON order that goes into block hashes.
// Deserialization goes through TransactionRecord so a snapshot cannot bypass the constructor rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TransactionRecord")]
pub struct Transaction {
    amount: Decimal,
    sender_address: String,
    receiver_address: String,
    fee: Decimal,
    timestamp: String,
    note: Option<String>,
}

/// Wire shape of a transaction as read from JSON, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRecord {
    amount: Decimal,
    sender_address: String,
    receiver_address: String,
    fee: Decimal,
    timestamp: String,
    #[serde(default)]
    note: Option<String>,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = BlockchainError;

    fn try_from(record: TransactionRecord) -> Result<Transaction> {
        Transaction::new_with_timestamp(
            &record.sender_address,
            &record.receiver_address,
            record.amount,
            record.fee,
            record.timestamp,
            record.note,
        )
    }
}

impl Transaction {
    /// Build a transfer stamped with the current time.
    pub fn new(
        sender_address: &str,
        receiver_address: &str,
        amount: Decimal,
        fee: Decimal,
        note: Option<String>,
    ) -> Result<Transaction> {
        Self::new_with_timestamp(
            sender_address,
            receiver_address,
            amount,
            fee,
            format_timestamp(&current_timestamp()),
            note,
        )
    }

    /// Build a transfer with an explicit creation timestamp.
    ///
    /// Amount and fee must be non-negative, at most [`MAX_WHOLE_AMOUNT`], and
    /// are rounded to eight digits; both addresses must be non-empty. An empty
    /// note is stored as `None`.
    pub fn new_with_timestamp(
        sender_address: &str,
        receiver_address: &str,
        amount: Decimal,
        fee: Decimal,
        timestamp: String,
        note: Option<String>,
    ) -> Result<Transaction> {
        if sender_address.trim().is_empty() {
            return Err(BlockchainError::InvalidTransaction(
                "Sender address is required".to_string(),
            ));
        }
        if receiver_address.trim().is_empty() {
            return Err(BlockchainError::InvalidTransaction(
                "Receiver address is required".to_string(),
            ));
        }
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(BlockchainError::InvalidTransaction(format!(
                "Amount cannot be negative: {amount}"
            )));
        }
        if fee.is_sign_negative() && !fee.is_zero() {
            return Err(BlockchainError::InvalidTransaction(format!(
                "Fee cannot be negative: {fee}"
            )));
        }
        if amount > max_amount() || fee > max_amount() {
            return Err(BlockchainError::InvalidTransaction(format!(
                "Amount and fee cannot exceed {MAX_WHOLE_AMOUNT}"
            )));
        }

        Ok(Transaction {
            amount: round_amount(amount),
            sender_address: sender_address.to_string(),
            receiver_address: receiver_address.to_string(),
            fee: round_amount(fee),
            timestamp,
            note: note.filter(|n| !n.is_empty()),
        })
    }

    /// The seed transaction carried by the genesis block.
    pub fn new_genesis_tx() -> Transaction {
        Transaction {
            amount: Decimal::ZERO,
            sender_address: GENESIS_SENDER.to_string(),
            receiver_address: GENESIS_RECEIVER.to_string(),
            fee: Decimal::ZERO,
            timestamp: format_timestamp(&current_timestamp()),
            note: Some("Genesis block".to_string()),
        }
    }

    pub fn get_amount(&self) -> Decimal {
        self.amount
    }

    pub fn get_fee(&self) -> Decimal {
        self.fee
    }

    /// What the sender is debited: amount plus fee.
    pub fn total_cost(&self) -> Result<Decimal> {
        self.amount
            .checked_add(self.fee)
            .map(round_amount)
            .ok_or_else(|| {
                BlockchainError::InvalidTransaction(format!(
                    "Amount {} plus fee {} is out of range",
                    self.amount, self.fee
                ))
            })
    }

    pub fn get_sender(&self) -> &str {
        self.sender_address.as_str()
    }

    pub fn get_receiver(&self) -> &str {
        self.receiver_address.as_str()
    }

    pub fn get_timestamp(&self) -> &str {
        self.timestamp.as_str()
    }

    pub fn get_note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn is_genesis(&self) -> bool {
        self.sender_address == GENESIS_SENDER
    }

    /// True when both addresses are present. Always holds for transactions built
    /// through the constructors; a deserialized or tampered record may not.
    pub fn has_valid_addresses(&self) -> bool {
        !self.sender_address.trim().is_empty() && !self.receiver_address.trim().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn set_sender_for_test(&mut self, sender: &str) {
        self.sender_address = sender.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_transaction_rounds_values() {
        let tx = Transaction::new("alice", "bob", dec!(1.123456789), dec!(0.000000004), None)
            .unwrap();
        assert_eq!(tx.get_amount(), dec!(1.12345679));
        assert_eq!(tx.get_fee(), Decimal::ZERO);
        assert_eq!(tx.total_cost().unwrap(), dec!(1.12345679));
    }

    #[test]
    fn test_rejects_missing_addresses() {
        assert!(matches!(
            Transaction::new("", "bob", dec!(1), dec!(0), None),
            Err(BlockchainError::InvalidTransaction(_))
        ));
        assert!(matches!(
            Transaction::new("alice", "  ", dec!(1), dec!(0), None),
            Err(BlockchainError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn test_rejects_negative_values() {
        assert!(Transaction::new("alice", "bob", dec!(-1), dec!(0), None).is_err());
        assert!(Transaction::new("alice", "bob", dec!(1), dec!(-0.1), None).is_err());
    }

    #[test]
    fn test_empty_note_is_dropped() {
        let tx = Transaction::new("alice", "bob", dec!(1), dec!(0), Some(String::new())).unwrap();
        assert_eq!(tx.get_note(), None);
    }

    #[test]
    fn test_json_field_order_is_fixed() {
        let tx = Transaction::new_with_timestamp(
            "alice",
            "bob",
            dec!(40),
            dec!(1),
            "2024-01-01T00:00:00.000000Z".to_string(),
            Some("rent".to_string()),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&tx).unwrap(),
            r#"{"amount":"40","senderAddress":"alice","receiverAddress":"bob","fee":"1","timestamp":"2024-01-01T00:00:00.000000Z","note":"rent"}"#
        );
    }

    #[test]
    fn test_genesis_tx() {
        let tx = Transaction::new_genesis_tx();
        assert!(tx.is_genesis());
        assert_eq!(tx.get_receiver(), GENESIS_RECEIVER);
        assert_eq!(tx.total_cost().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_rejects_amounts_above_bound() {
        let huge = Decimal::MAX;
        assert!(matches!(
            Transaction::new("alice", "bob", huge, dec!(1), None),
            Err(BlockchainError::InvalidTransaction(_))
        ));
        assert!(matches!(
            Transaction::new("alice", "bob", dec!(1), huge, None),
            Err(BlockchainError::InvalidTransaction(_))
        ));

        let largest = Transaction::new("alice", "bob", max_amount(), max_amount(), None).unwrap();
        assert_eq!(largest.total_cost().unwrap(), max_amount() * Decimal::TWO);
    }

    #[test]
    fn test_deserialize_applies_constructor_rules() {
        let valid = r#"{"amount":"40","senderAddress":"alice","receiverAddress":"bob","fee":"1","timestamp":"2024-01-01T00:00:00.000000Z","note":"rent"}"#;
        let tx: Transaction = serde_json::from_str(valid).unwrap();
        assert_eq!(tx.get_amount(), dec!(40));
        assert_eq!(tx.get_note(), Some("rent"));

        let negative = valid.replace(r#""amount":"40""#, r#""amount":"-5""#);
        assert!(serde_json::from_str::<Transaction>(&negative).is_err());

        let blank_sender = valid.replace(r#""senderAddress":"alice""#, r#""senderAddress":"  ""#);
        assert!(serde_json::from_str::<Transaction>(&blank_sender).is_err());
    }

    #[test]
    fn test_blank_addresses_are_not_valid() {
        let mut tx = Transaction::new("alice", "bob", dec!(1), dec!(0), None).unwrap();
        assert!(tx.has_valid_addresses());
        tx.set_sender_for_test("   ");
        assert!(!tx.has_valid_addresses());
    }
}
