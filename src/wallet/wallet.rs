use crate::core::monetary::round_amount;
use crate::core::Transaction;
use crate::wallet::SeedAccount;
use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

/// In-memory balance store keyed by address.
///
/// Live balances only change through [`Wallet::process_transaction`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wallet {
    balances: BTreeMap<String, Decimal>,
}

impl Wallet {
    pub fn new(seed_accounts: &[SeedAccount]) -> Wallet {
        let mut balances = BTreeMap::new();
        for account in seed_accounts {
            balances.insert(account.address.clone(), round_amount(account.balance));
        }
        Wallet { balances }
    }

    /// Recorded balance, or zero for an address never seen.
    pub fn get_balance(&self, address: &str) -> Decimal {
        round_amount(self.balances.get(address).copied().unwrap_or(Decimal::ZERO))
    }

    pub fn has_enough_balance(&self, address: &str, amount: Decimal) -> bool {
        self.get_balance(address) >= round_amount(amount)
    }

    // No sign check here; callers check funds first. Saturates instead of overflowing.
    pub(crate) fn update_balance(&mut self, address: &str, delta: Decimal) {
        let updated = round_amount(self.get_balance(address).saturating_add(delta));
        self.balances.insert(address.to_string(), updated);
    }

    /// Debit `amount + fee` from the sender and credit `amount` to the receiver.
    /// Returns false, touching nothing, when the sender cannot cover it.
    pub fn process_transaction(&mut self, tx: &Transaction) -> bool {
        let cost = match tx.total_cost() {
            Ok(cost) => cost,
            Err(_) => return false,
        };
        if !self.has_enough_balance(tx.get_sender(), cost) {
            return false;
        }

        self.update_balance(tx.get_sender(), -cost);
        self.update_balance(tx.get_receiver(), tx.get_amount());
        debug!(
            "Applied {} from {} to {} (fee {})",
            tx.get_amount(),
            tx.get_sender(),
            tx.get_receiver(),
            tx.get_fee()
        );
        true
    }

    // Only called for transactions that were applied, so their cost is representable.
    fn revert_transaction(&mut self, tx: &Transaction) {
        if let Ok(cost) = tx.total_cost() {
            self.update_balance(tx.get_receiver(), -tx.get_amount());
            self.update_balance(tx.get_sender(), cost);
        }
    }

    /// A detached copy of this wallet with the already-applied `applied`
    /// transactions undone, newest first: the balances as of batch start.
    pub fn as_of_batch_start(&self, applied: &[Transaction]) -> Wallet {
        let mut snapshot = self.clone();
        for tx in applied.iter().rev() {
            snapshot.revert_transaction(tx);
        }
        snapshot
    }

    /// Walk `transactions` in order, summing `amount + fee` per sender, and
    /// report a double spend as soon as one sender's running total exceeds the
    /// balance they held before the first transaction of the sequence.
    ///
    /// Balances are read from `self` and nothing in the sequence is applied,
    /// so `self` must be the wallet as of batch start.
    pub fn check_double_spending(&self, transactions: &[Transaction]) -> bool {
        let mut initial_balances: HashMap<&str, Decimal> = HashMap::new();
        for tx in transactions {
            initial_balances
                .entry(tx.get_sender())
                .or_insert_with(|| self.get_balance(tx.get_sender()));
        }

        let mut spent: HashMap<&str, Decimal> = HashMap::new();
        for tx in transactions {
            let previous = spent.get(tx.get_sender()).copied().unwrap_or(Decimal::ZERO);
            // A cost that cannot even be represented is an overspend
            let total_spent = match tx.total_cost().ok().and_then(|cost| previous.checked_add(cost)) {
                Some(total) => total,
                None => return true,
            };
            let initial = initial_balances
                .get(tx.get_sender())
                .copied()
                .unwrap_or(Decimal::ZERO);

            if total_spent > initial {
                debug!(
                    "Double spend by {}: {} spent against {}",
                    tx.get_sender(),
                    total_spent,
                    initial
                );
                return true;
            }
            spent.insert(tx.get_sender(), total_spent);
        }
        false
    }

    /// Every known address with its balance, ordered by address.
    pub fn balances(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.balances
            .iter()
            .map(|(address, balance)| (address.as_str(), *balance))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn seeded(a: Decimal, b: Decimal) -> Wallet {
        Wallet::new(&[
            SeedAccount::new("A", "A", a),
            SeedAccount::new("B", "B", b),
        ])
    }

    fn tx(from: &str, to: &str, amount: Decimal, fee: Decimal) -> Transaction {
        Transaction::new(from, to, amount, fee, None).unwrap()
    }

    #[test]
    fn test_unknown_address_reads_zero() {
        let wallet = seeded(dec!(100), dec!(0));
        assert_eq!(wallet.get_balance("nobody"), Decimal::ZERO);
        assert!(wallet.has_enough_balance("nobody", Decimal::ZERO));
        assert!(!wallet.has_enough_balance("nobody", dec!(0.00000001)));
    }

    #[test]
    fn test_seed_balances_are_rounded() {
        let wallet = seeded(dec!(1.123456789), dec!(0));
        assert_eq!(wallet.get_balance("A"), dec!(1.12345679));
    }

    #[test]
    fn test_process_transaction_moves_funds() {
        let mut wallet = seeded(dec!(100), dec!(0));
        assert!(wallet.process_transaction(&tx("A", "B", dec!(40), dec!(1))));
        assert_eq!(wallet.get_balance("A"), dec!(59));
        assert_eq!(wallet.get_balance("B"), dec!(40));
    }

    #[test]
    fn test_process_transaction_refuses_overdraft() {
        let mut wallet = seeded(dec!(10), dec!(0));
        let before = wallet.clone();
        assert!(!wallet.process_transaction(&tx("A", "B", dec!(10), dec!(0.001))));
        assert_eq!(wallet, before);
    }

    #[test]
    fn test_exact_balance_can_be_spent() {
        let mut wallet = seeded(dec!(10), dec!(0));
        assert!(wallet.process_transaction(&tx("A", "B", dec!(9.5), dec!(0.5))));
        assert_eq!(wallet.get_balance("A"), Decimal::ZERO);
    }

    #[test]
    fn test_update_balance_can_go_negative() {
        let mut wallet = seeded(dec!(1), dec!(0));
        wallet.update_balance("A", dec!(-3));
        assert_eq!(wallet.get_balance("A"), dec!(-2));
    }

    #[test]
    fn test_double_spend_detected_across_batch() {
        let wallet = seeded(dec!(100), dec!(0));
        let batch = vec![
            tx("A", "B", dec!(60), dec!(0)),
            tx("A", "B", dec!(60), dec!(0)),
        ];
        assert!(wallet.check_double_spending(&batch));
        assert!(!wallet.check_double_spending(&batch[..1]));
    }

    #[test]
    fn test_in_batch_credits_do_not_fund_spends() {
        // B starts empty; A pays B, then B tries to spend it in the same batch
        let wallet = seeded(dec!(100), dec!(0));
        let batch = vec![
            tx("A", "B", dec!(50), dec!(0)),
            tx("B", "A", dec!(10), dec!(0)),
        ];
        assert!(wallet.check_double_spending(&batch));
    }

    #[test]
    fn test_as_of_batch_start_reverts_applied() {
        let mut wallet = seeded(dec!(100), dec!(5));
        let applied = vec![
            tx("A", "B", dec!(40), dec!(1)),
            tx("B", "A", dec!(3), dec!(0.5)),
        ];
        for t in &applied {
            assert!(wallet.process_transaction(t));
        }
        let start = wallet.as_of_batch_start(&applied);
        assert_eq!(start.get_balance("A"), dec!(100));
        assert_eq!(start.get_balance("B"), dec!(5));
        // the live wallet is untouched
        assert_eq!(wallet.get_balance("A"), dec!(62));
    }

    #[test]
    fn test_balances_are_ordered() {
        let wallet = seeded(dec!(1), dec!(2));
        let listed: Vec<_> = wallet.balances().collect();
        assert_eq!(listed, vec![("A", dec!(1)), ("B", dec!(2))]);
        assert_eq!(wallet.len(), 2);
    }
}
