// This is the ledger engine - the heart of the system
// It owns the chain, the pending batch and the wallet, and every state change goes through here
// Transactions are admitted one at a time, batched, and sealed into mined blocks

use crate::config::Config;
use crate::core::validation::{ChainReport, ViolationRule};
use crate::core::{Block, FeeMode, FeeQuote, ProofOfWork, Transaction};
use crate::error::{BlockchainError, Result};
use crate::utils::current_timestamp;
use crate::wallet::Wallet;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::atomic::AtomicBool;

/// Where an admitted transaction ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Waiting in the pending batch at this position (1-based)
    Pending { position: usize },
    /// Filled the batch, which was sealed into the block at this index
    Sealed { block_index: u64 },
}

#[derive(Debug, Clone)]
pub struct Blockchain {
    chain: Vec<Block>,                     // never empty: chain[0] is genesis
    pending_transactions: Vec<Transaction>, // admitted, already applied to the wallet
    wallet: Wallet,
    difficulty: usize,
    batch_size: usize,
    fee_mode: FeeMode,
}

#[allow(clippy::len_without_is_empty)]
impl Blockchain {
    // When I want a fresh ledger: genesis block plus the configured seed accounts
    pub fn new(config: &Config) -> Result<Blockchain> {
        Self::from_parts(config, None, None)
    }

    // When I want to resume from a chain I already have (for example one read
    // back from a snapshot) and/or a wallet I built myself
    pub fn from_parts(
        config: &Config,
        existing_chain: Option<Vec<Block>>,
        existing_wallet: Option<Wallet>,
    ) -> Result<Blockchain> {
        config.validate()?;

        let chain = match existing_chain {
            Some(chain) if chain.is_empty() => {
                return Err(BlockchainError::InvalidBlock(
                    "An existing chain must contain at least the genesis block".to_string(),
                ));
            }
            Some(chain) => chain,
            None => {
                let genesis = Self::create_genesis()?;
                info!("Created genesis block {}", genesis.get_hash());
                vec![genesis]
            }
        };

        let wallet = existing_wallet.unwrap_or_else(|| Wallet::new(&config.seed_accounts));

        Ok(Blockchain {
            chain,
            pending_transactions: Vec::new(),
            wallet,
            difficulty: config.difficulty,
            batch_size: config.batch_size,
            fee_mode: config.fee.clone(),
        })
    }

    // The genesis block is not mined; it just carries the synthetic seed transaction
    pub fn create_genesis() -> Result<Block> {
        Block::generate_genesis_block(current_timestamp())
    }

    pub fn latest_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    /// Link `block` behind the current tip, mine it at the ledger difficulty
    /// and append it. The only way the chain grows.
    pub fn add_block(&mut self, mut block: Block) -> Result<()> {
        self.link_to_tip(&mut block)?;
        block.mine_block(self.difficulty)?;
        self.append(block);
        Ok(())
    }

    /// [`Blockchain::add_block`] with a mining search that stops when `cancel`
    /// is raised. A cancelled block is dropped and the chain is unchanged.
    pub fn add_block_cancellable(&mut self, mut block: Block, cancel: &AtomicBool) -> Result<()> {
        self.link_to_tip(&mut block)?;
        block.mine_block_cancellable(self.difficulty, cancel)?;
        self.append(block);
        Ok(())
    }

    fn link_to_tip(&self, block: &mut Block) -> Result<()> {
        let tip = self.latest_block();
        block.link(tip.get_index() + 1, tip.get_hash().to_string())
    }

    fn append(&mut self, block: Block) {
        info!(
            "Appended block {} with {} transactions",
            block.get_index(),
            block.get_transactions().len()
        );
        self.chain.push(block);
    }

    /// Admit a transaction into the pending batch.
    ///
    /// Checks run in order and the first failure wins, leaving every balance
    /// and the batch untouched:
    /// 1. the sender's balance as of batch start covers `amount + fee`
    ///    ([`BlockchainError::InsufficientBalance`])
    /// 2. the batch plus this transaction does not overspend any sender
    ///    ([`BlockchainError::DoubleSpend`])
    /// 3. the wallet accepts the debit/credit
    ///    ([`BlockchainError::ProcessingFailed`], unreachable when 1 and 2 hold)
    ///
    /// Reaching the batch size seals the batch into a new mined block.
    pub fn add_transaction(&mut self, tx: Transaction) -> Result<Admission> {
        self.admit(tx, None)
    }

    /// [`Blockchain::add_transaction`] whose auto-seal gives up when `cancel`
    /// is raised. A cancelled seal rolls this admission back and leaves the
    /// rest of the batch pending.
    pub fn add_transaction_cancellable(
        &mut self,
        tx: Transaction,
        cancel: &AtomicBool,
    ) -> Result<Admission> {
        self.admit(tx, Some(cancel))
    }

    fn admit(&mut self, tx: Transaction, cancel: Option<&AtomicBool>) -> Result<Admission> {
        // Balances as they stood before anything in the pending batch was applied
        let batch_start = self.wallet.as_of_batch_start(&self.pending_transactions);

        let required = tx.total_cost()?;
        if !batch_start.has_enough_balance(tx.get_sender(), required) {
            warn!(
                "Rejected transaction from {}: insufficient balance",
                tx.get_sender()
            );
            return Err(BlockchainError::InsufficientBalance {
                address: tx.get_sender().to_string(),
                required,
                available: batch_start.get_balance(tx.get_sender()),
            });
        }

        let mut candidate_batch = self.pending_transactions.clone();
        candidate_batch.push(tx.clone());
        if batch_start.check_double_spending(&candidate_batch) {
            warn!(
                "Rejected transaction from {}: double spending",
                tx.get_sender()
            );
            return Err(BlockchainError::DoubleSpend {
                address: tx.get_sender().to_string(),
            });
        }

        if !self.wallet.process_transaction(&tx) {
            warn!(
                "Wallet refused transaction from {} after admission checks passed",
                tx.get_sender()
            );
            return Err(BlockchainError::ProcessingFailed(format!(
                "wallet refused debit of {required} from {}",
                tx.get_sender()
            )));
        }

        self.pending_transactions.push(tx);
        debug!(
            "Pending batch holds {}/{} transactions",
            self.pending_transactions.len(),
            self.batch_size
        );

        if self.pending_transactions.len() < self.batch_size {
            return Ok(Admission::Pending {
                position: self.pending_transactions.len(),
            });
        }

        match self.seal_pending(cancel) {
            Ok(block_index) => Ok(Admission::Sealed { block_index }),
            Err(e) => {
                // Undo this admission so the batch is exactly as before the call
                if let Some(tx) = self.pending_transactions.pop() {
                    self.wallet = self.wallet.as_of_batch_start(std::slice::from_ref(&tx));
                }
                Err(e)
            }
        }
    }

    /// Charge exactly what was quoted. Fails with [`BlockchainError::StaleQuote`]
    /// if the pending batch changed size since the quote was taken.
    pub fn submit_quote(
        &mut self,
        quote: &FeeQuote,
        sender_address: &str,
        receiver_address: &str,
        note: Option<String>,
    ) -> Result<Admission> {
        let current = self.pending_transactions.len();
        if quote.pending_snapshot != current {
            return Err(BlockchainError::StaleQuote {
                quoted_at: quote.pending_snapshot,
                current,
            });
        }
        let tx = Transaction::new(
            sender_address,
            receiver_address,
            quote.amount,
            quote.fee,
            note,
        )?;
        self.add_transaction(tx)
    }

    // Seal whatever is pending into one block. Pending is only cleared once the block is on the chain.
    fn seal_pending(&mut self, cancel: Option<&AtomicBool>) -> Result<u64> {
        let block = Block::new(current_timestamp(), self.pending_transactions.clone())?;
        match cancel {
            Some(flag) => self.add_block_cancellable(block, flag)?,
            None => self.add_block(block)?,
        }
        self.pending_transactions.clear();
        Ok(self.latest_block().get_index())
    }

    /// Seal the pending batch now, whatever its size. Returns false when nothing is pending.
    pub fn mine_pending_transactions(&mut self) -> Result<bool> {
        if self.pending_transactions.is_empty() {
            return Ok(false);
        }
        self.seal_pending(None)?;
        Ok(true)
    }

    /// Like [`Blockchain::mine_pending_transactions`], giving up when `cancel`
    /// is raised. A cancelled seal keeps the batch pending.
    pub fn mine_pending_transactions_cancellable(&mut self, cancel: &AtomicBool) -> Result<bool> {
        if self.pending_transactions.is_empty() {
            return Ok(false);
        }
        self.seal_pending(Some(cancel))?;
        Ok(true)
    }

    /// Walk the whole chain and collect every integrity violation.
    pub fn validate_chain(&self) -> ChainReport {
        let mut report = ChainReport {
            blocks_checked: self.chain.len(),
            violations: Vec::new(),
        };
        let pow = ProofOfWork::new(self.difficulty);

        let genesis = &self.chain[0];
        if genesis.get_index() != 0 {
            report.record(
                0,
                ViolationRule::IndexOutOfSequence {
                    expected: 0,
                    found: genesis.get_index(),
                },
            );
        }
        if genesis.get_prev_hash() != crate::core::block::GENESIS_PREV_HASH {
            report.record(0, ViolationRule::PrevHashMismatch);
        }
        if !hash_matches(genesis) {
            report.record(0, ViolationRule::HashMismatch);
        }

        for (position, pair) in self.chain.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            let position = position + 1;

            if !hash_matches(current) {
                report.record(position, ViolationRule::HashMismatch);
            }
            if current.get_prev_hash() != previous.get_hash() {
                report.record(position, ViolationRule::PrevHashMismatch);
            }
            if current.get_index() != position as u64 {
                report.record(
                    position,
                    ViolationRule::IndexOutOfSequence {
                        expected: position as u64,
                        found: current.get_index(),
                    },
                );
            }

            let count = current.get_transactions().len();
            if count == 0 {
                report.record(position, ViolationRule::EmptyBlock);
            }
            if count > self.batch_size {
                report.record(
                    position,
                    ViolationRule::TooManyTransactions {
                        count,
                        max: self.batch_size,
                    },
                );
            }
            if current
                .get_transactions()
                .iter()
                .any(|tx| !tx.has_valid_addresses())
            {
                report.record(position, ViolationRule::InvalidAddresses);
            }
            if !pow.is_satisfied_by(current.get_hash()) {
                report.record(
                    position,
                    ViolationRule::InsufficientWork {
                        difficulty: self.difficulty,
                    },
                );
            }
        }
        report
    }

    /// True when no integrity rule is broken. Every violation is logged.
    pub fn check_valid(&self) -> bool {
        let report = self.validate_chain();
        for violation in &report.violations {
            warn!("Chain integrity: {violation}");
        }
        report.is_valid()
    }

    /// Fee for `amount` given how full the pending batch is right now.
    pub fn calculate_fee(&self, amount: Decimal) -> Result<Decimal> {
        self.fee_mode
            .calculate_fee(amount, self.pending_transactions.len())
    }

    /// Fee for `amount`, tagged with the pending size it was computed against.
    pub fn quote_fee(&self, amount: Decimal) -> Result<FeeQuote> {
        let pending_snapshot = self.pending_transactions.len();
        Ok(FeeQuote {
            amount: crate::core::monetary::round_amount(amount),
            fee: self.fee_mode.calculate_fee(amount, pending_snapshot)?,
            pending_snapshot,
        })
    }

    pub fn get_balance(&self, address: &str) -> Decimal {
        self.wallet.get_balance(address)
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn chain(&self) -> &[Block] {
        self.chain.as_slice()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// A copy of the batch awaiting the next block.
    pub fn pending_transactions(&self) -> Vec<Transaction> {
        self.pending_transactions.clone()
    }

    pub fn pending_len(&self) -> usize {
        self.pending_transactions.len()
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn fee_mode(&self) -> &FeeMode {
        &self.fee_mode
    }

    #[cfg(test)]
    pub(crate) fn chain_mut(&mut self) -> &mut Vec<Block> {
        &mut self.chain
    }
}

fn hash_matches(block: &Block) -> bool {
    block
        .calculate_hash()
        .map(|hash| hash == block.get_hash())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::SeedAccount;
    use rust_decimal_macros::dec;

    fn test_config() -> Config {
        Config::default()
            .with_difficulty(1)
            .with_seed_accounts(vec![
                SeedAccount::new("A", "A", dec!(100)),
                SeedAccount::new("B", "B", dec!(0)),
            ])
    }

    fn transfer(amount: Decimal, fee: Decimal) -> Transaction {
        Transaction::new("A", "B", amount, fee, None).unwrap()
    }

    #[test]
    fn test_new_chain_has_genesis() {
        let bc = Blockchain::new(&test_config()).unwrap();
        assert_eq!(bc.len(), 1);
        assert_eq!(bc.latest_block().get_index(), 0);
        assert_eq!(bc.latest_block().get_prev_hash(), "0");
        assert!(bc.latest_block().get_transactions()[0].is_genesis());
        assert_eq!(bc.pending_len(), 0);
        assert!(bc.check_valid());
    }

    #[test]
    fn test_admission_applies_balances() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        let admission = bc.add_transaction(transfer(dec!(40), dec!(1))).unwrap();
        assert_eq!(admission, Admission::Pending { position: 1 });
        assert_eq!(bc.get_balance("A"), dec!(59));
        assert_eq!(bc.get_balance("B"), dec!(40));
    }

    #[test]
    fn test_insufficient_balance_leaves_state_unchanged() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        bc.add_transaction(transfer(dec!(40), dec!(1))).unwrap();
        // Sealed first: both checks use the batch-start balance, so the same
        // 61 + 1 inside the open batch is reported as DoubleSpend instead.
        assert!(bc.mine_pending_transactions().unwrap());

        let result = bc.add_transaction(transfer(dec!(61), dec!(1)));
        assert_eq!(
            result,
            Err(BlockchainError::InsufficientBalance {
                address: "A".to_string(),
                required: dec!(62),
                available: dec!(59),
            })
        );
        assert_eq!(bc.get_balance("A"), dec!(59));
        assert_eq!(bc.get_balance("B"), dec!(40));
        assert_eq!(bc.pending_len(), 0);
    }

    #[test]
    fn test_second_spend_in_batch_is_double_spend() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        bc.add_transaction(transfer(dec!(60), dec!(0))).unwrap();

        let result = bc.add_transaction(transfer(dec!(60), dec!(0)));
        assert!(matches!(result, Err(BlockchainError::DoubleSpend { .. })));
        assert_eq!(bc.pending_len(), 1);
        assert_eq!(bc.get_balance("A"), dec!(40));
        assert_eq!(bc.get_balance("B"), dec!(60));
    }

    #[test]
    fn test_batch_auto_seals_at_ten() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        let mut submitted = Vec::new();
        for i in 0..9 {
            let tx = Transaction::new("A", "B", dec!(1), dec!(0), Some(format!("#{i}"))).unwrap();
            submitted.push(tx.clone());
            assert_eq!(
                bc.add_transaction(tx).unwrap(),
                Admission::Pending { position: i + 1 }
            );
        }
        assert_eq!(bc.len(), 1);

        let last = Transaction::new("A", "B", dec!(1), dec!(0), Some("#9".to_string())).unwrap();
        submitted.push(last.clone());
        assert_eq!(
            bc.add_transaction(last).unwrap(),
            Admission::Sealed { block_index: 1 }
        );

        assert_eq!(bc.pending_len(), 0);
        assert_eq!(bc.len(), 2);
        assert_eq!(bc.latest_block().get_transactions(), submitted.as_slice());
        assert!(bc.check_valid());
    }

    #[test]
    fn test_mine_pending_with_nothing_pending() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        assert!(!bc.mine_pending_transactions().unwrap());
        assert_eq!(bc.len(), 1);
    }

    #[test]
    fn test_mine_pending_links_blocks() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        bc.add_transaction(transfer(dec!(1), dec!(0.011))).unwrap();
        assert!(bc.mine_pending_transactions().unwrap());
        bc.add_transaction(transfer(dec!(2), dec!(0.021))).unwrap();
        assert!(bc.mine_pending_transactions().unwrap());

        assert_eq!(bc.len(), 3);
        let chain = bc.chain();
        assert_eq!(chain[2].get_prev_hash(), chain[1].get_hash());
        assert_eq!(chain[2].get_index(), 2);
        assert!(chain[2].get_hash().starts_with('0'));
        assert!(bc.check_valid());
    }

    #[test]
    fn test_tampered_transactions_break_validation() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        bc.add_transaction(transfer(dec!(5), dec!(0))).unwrap();
        bc.mine_pending_transactions().unwrap();
        assert!(bc.check_valid());

        let forged = Transaction::new("A", "B", dec!(50), dec!(0), None).unwrap();
        bc.chain_mut()[1].transactions_mut()[0] = forged;

        let report = bc.validate_chain();
        assert!(!bc.check_valid());
        assert_eq!(
            report.first_at(1).map(|v| v.rule.clone()),
            Some(ViolationRule::HashMismatch)
        );
    }

    #[test]
    fn test_broken_linkage_is_reported() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        bc.add_transaction(transfer(dec!(5), dec!(0))).unwrap();
        bc.mine_pending_transactions().unwrap();
        bc.add_transaction(transfer(dec!(5), dec!(0))).unwrap();
        bc.mine_pending_transactions().unwrap();

        // Replace block 1 with a freshly mined block: block 2 no longer points at it
        let mut replacement =
            Block::new(current_timestamp(), vec![transfer(dec!(1), dec!(0))]).unwrap();
        replacement
            .link(1, bc.chain()[0].get_hash().to_string())
            .unwrap();
        replacement.mine_block(1).unwrap();
        bc.chain_mut()[1] = replacement;

        let report = bc.validate_chain();
        assert!(report.first_at(1).is_none());
        assert_eq!(
            report.first_at(2).map(|v| v.rule.clone()),
            Some(ViolationRule::PrevHashMismatch)
        );
    }

    // Empty addresses used to be warn-only; they now fail validation.
    #[test]
    fn test_empty_address_fails_validation() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        bc.add_transaction(transfer(dec!(5), dec!(0))).unwrap();
        bc.mine_pending_transactions().unwrap();

        let block = &mut bc.chain_mut()[1];
        block.transactions_mut()[0].set_sender_for_test("");
        // Re-mine so the only broken rule is the address one
        block.bump_nonce().unwrap();
        block.mine_block(1).unwrap();

        let report = bc.validate_chain();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, ViolationRule::InvalidAddresses);
        assert!(!bc.check_valid());
    }

    #[test]
    fn test_fee_follows_pending_load() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        assert_eq!(bc.calculate_fee(dec!(10)).unwrap(), dec!(0.101));
        for _ in 0..5 {
            bc.add_transaction(transfer(dec!(1), dec!(0))).unwrap();
        }
        assert_eq!(bc.calculate_fee(dec!(10)).unwrap(), dec!(0.1515));
    }

    #[test]
    fn test_quote_then_submit_charges_quoted_fee() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        let quote = bc.quote_fee(dec!(40)).unwrap();
        assert_eq!(quote.fee, dec!(0.401));
        bc.submit_quote(&quote, "A", "B", None).unwrap();
        assert_eq!(bc.get_balance("A"), dec!(100) - quote.total_cost().unwrap());
        assert_eq!(bc.pending_transactions()[0].get_fee(), quote.fee);
    }

    #[test]
    fn test_stale_quote_rejected() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        let quote = bc.quote_fee(dec!(1)).unwrap();
        bc.add_transaction(transfer(dec!(1), dec!(0))).unwrap();
        let result = bc.submit_quote(&quote, "A", "B", None);
        assert_eq!(
            result,
            Err(BlockchainError::StaleQuote {
                quoted_at: 0,
                current: 1
            })
        );
        assert_eq!(bc.pending_len(), 1);
    }

    #[test]
    fn test_insufficient_balance_reports_batch_start_balance() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        bc.add_transaction(transfer(dec!(30), dec!(0))).unwrap();

        // A live balance of 70 remains, but the rule compares against 100
        let result = bc.add_transaction(transfer(dec!(150), dec!(0)));
        assert_eq!(
            result,
            Err(BlockchainError::InsufficientBalance {
                address: "A".to_string(),
                required: dec!(150),
                available: dec!(100),
            })
        );
    }

    #[test]
    fn test_huge_amounts_are_rejected_without_panicking() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        let largest = crate::core::monetary::max_amount();

        let quote = bc.quote_fee(largest).unwrap();
        let result = bc.submit_quote(&quote, "A", "B", None);
        assert!(matches!(
            result,
            Err(BlockchainError::InsufficientBalance { .. })
        ));

        let fixed = Config {
            fee: FeeMode::Fixed { amount: largest },
            ..test_config()
        };
        let bc = Blockchain::new(&fixed).unwrap();
        assert!(bc.quote_fee(Decimal::MAX).is_ok());
        assert_eq!(bc.pending_len(), 0);
    }

    #[test]
    fn test_cancelled_auto_seal_rolls_back_last_admission() {
        let mut bc = Blockchain::new(&test_config().with_difficulty(40)).unwrap();
        for _ in 0..9 {
            bc.add_transaction(transfer(dec!(1), dec!(0))).unwrap();
        }
        let wallet_before = bc.wallet().clone();

        let cancel = AtomicBool::new(true);
        let result = bc.add_transaction_cancellable(transfer(dec!(1), dec!(0)), &cancel);

        assert!(matches!(result, Err(BlockchainError::Mining(_))));
        assert_eq!(bc.pending_len(), 9);
        assert_eq!(bc.len(), 1);
        assert_eq!(bc.wallet(), &wallet_before);
        assert_eq!(bc.get_balance("A"), dec!(91));
    }

    #[test]
    fn test_cancellable_admission_below_batch_size_never_mines() {
        let mut bc = Blockchain::new(&test_config().with_difficulty(40)).unwrap();
        let cancel = AtomicBool::new(true);
        assert_eq!(
            bc.add_transaction_cancellable(transfer(dec!(1), dec!(0)), &cancel)
                .unwrap(),
            Admission::Pending { position: 1 }
        );
    }

    #[test]
    fn test_cancelled_mining_keeps_batch_pending() {
        let config = test_config().with_difficulty(40);
        let mut bc = Blockchain::new(&config).unwrap();
        bc.add_transaction(transfer(dec!(1), dec!(0))).unwrap();

        let cancel = AtomicBool::new(true);
        let result = bc.mine_pending_transactions_cancellable(&cancel);
        assert!(matches!(result, Err(BlockchainError::Mining(_))));
        assert_eq!(bc.pending_len(), 1);
        assert_eq!(bc.len(), 1);
    }

    #[test]
    fn test_from_parts_keeps_existing_state() {
        let mut bc = Blockchain::new(&test_config()).unwrap();
        bc.add_transaction(transfer(dec!(5), dec!(0))).unwrap();
        bc.mine_pending_transactions().unwrap();

        let resumed = Blockchain::from_parts(
            &test_config(),
            Some(bc.chain().to_vec()),
            Some(bc.wallet().clone()),
        )
        .unwrap();
        assert_eq!(resumed.len(), 2);
        assert_eq!(resumed.get_balance("A"), dec!(95));
        assert!(resumed.check_valid());

        assert!(Blockchain::from_parts(&test_config(), Some(vec![]), None).is_err());
    }
}
