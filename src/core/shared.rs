// Multi-producer access to one ledger.
// The whole admission path (checks, wallet update, append, seal and mine) runs
// under a single lock so batch limits and double-spend checks see a consistent batch.

use crate::core::{Admission, Block, Blockchain, FeeQuote, Transaction};
use crate::error::{BlockchainError, Result};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct SharedBlockchain {
    inner: Arc<Mutex<Blockchain>>,
    cancel: Arc<AtomicBool>,
}

impl SharedBlockchain {
    pub fn new(blockchain: Blockchain) -> SharedBlockchain {
        SharedBlockchain {
            inner: Arc::new(Mutex::new(blockchain)),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Blockchain>> {
        self.inner
            .lock()
            .map_err(|_| BlockchainError::ProcessingFailed("Ledger lock poisoned".to_string()))
    }

    // Clear a cancel left over from an earlier run. Done under the lock so it
    // cannot swallow a cancel aimed at a run still in progress.
    fn arm_cancel(&self) -> &AtomicBool {
        self.cancel.store(false, Ordering::SeqCst);
        self.cancel.as_ref()
    }

    /// Admit a transaction. An auto-seal it triggers honours [`SharedBlockchain::cancel_mining`].
    pub fn add_transaction(&self, tx: Transaction) -> Result<Admission> {
        let mut ledger = self.lock()?;
        ledger.add_transaction_cancellable(tx, self.arm_cancel())
    }

    /// Quote and submit under one lock, so the fee charged is the fee quoted.
    pub fn transfer(
        &self,
        sender_address: &str,
        receiver_address: &str,
        amount: Decimal,
        note: Option<String>,
    ) -> Result<(FeeQuote, Admission)> {
        let mut ledger = self.lock()?;
        let quote = ledger.quote_fee(amount)?;
        let tx = Transaction::new(sender_address, receiver_address, quote.amount, quote.fee, note)?;
        let admission = ledger.add_transaction_cancellable(tx, self.arm_cancel())?;
        Ok((quote, admission))
    }

    /// Seal the pending batch, abandoning the search if [`SharedBlockchain::cancel_mining`] is called.
    pub fn mine_pending_transactions(&self) -> Result<bool> {
        let mut ledger = self.lock()?;
        ledger.mine_pending_transactions_cancellable(self.arm_cancel())
    }

    /// Ask an in-progress cancellable mining run to stop.
    pub fn cancel_mining(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    pub fn get_balance(&self, address: &str) -> Result<Decimal> {
        Ok(self.lock()?.get_balance(address))
    }

    pub fn pending_len(&self) -> Result<usize> {
        Ok(self.lock()?.pending_len())
    }

    pub fn check_valid(&self) -> Result<bool> {
        Ok(self.lock()?.check_valid())
    }

    /// Copy of the chain for read-only consumers such as the export sink.
    pub fn chain_snapshot(&self) -> Result<Vec<Block>> {
        Ok(self.lock()?.chain().to_vec())
    }
}
