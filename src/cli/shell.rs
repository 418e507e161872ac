// The interactive shell: reads one command per line and drives the ledger.
// Everything here is a consumer of the ledger; input mistakes are reported and the loop goes on.

use crate::config::Config;
use crate::core::{parse_amount, Admission, Blockchain};
use crate::error::{BlockchainError, Result};
use crate::storage::export_chain;
use crate::wallet::SeedAccount;
use log::debug;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
Commands:
  send <amount> [note]   transfer from you to user 2 at the quoted fee
  fee <amount>           quote the fee for an amount
  mine                   seal the pending transactions into a block
  balances               show account balances
  pending                list pending transactions
  validate               check chain integrity
  export [path]          write the chain snapshot
  help                   show this message
  quit                   leave the shell";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Send { amount: Decimal, note: Option<String> },
    Fee { amount: Decimal },
    Mine,
    Balances,
    Pending,
    Validate,
    Export { path: Option<String> },
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`; bad amounts are
/// [`BlockchainError::InvalidInput`] and never reach the ledger.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "send" => {
            let (amount, note) = match rest.split_once(char::is_whitespace) {
                Some((amount, note)) => (amount, Some(note.trim().to_string())),
                None => (rest, None),
            };
            ShellCommand::Send {
                amount: parse_amount(amount)?,
                note: note.filter(|n| !n.is_empty()),
            }
        }
        "fee" => ShellCommand::Fee {
            amount: parse_amount(rest)?,
        },
        "mine" => ShellCommand::Mine,
        "balances" => ShellCommand::Balances,
        "pending" => ShellCommand::Pending,
        "validate" => ShellCommand::Validate,
        "export" => ShellCommand::Export {
            path: (!rest.is_empty()).then(|| rest.to_string()),
        },
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => {
            return Err(BlockchainError::InvalidInput(format!(
                "Unknown command: {other} (try 'help')"
            )))
        }
    };
    Ok(Some(command))
}

/// Plain-text table of the given accounts' current balances.
pub fn format_balance_table(ledger: &Blockchain, accounts: &[SeedAccount]) -> String {
    let label_width = accounts
        .iter()
        .map(|a| a.label.len())
        .chain(std::iter::once("User".len()))
        .max()
        .unwrap_or(4);
    let rows: Vec<(String, String, String)> = accounts
        .iter()
        .map(|a| {
            (
                a.label.clone(),
                ledger.get_balance(&a.address).to_string(),
                a.address.clone(),
            )
        })
        .collect();
    let balance_width = rows
        .iter()
        .map(|(_, b, _)| b.len())
        .chain(std::iter::once("Balance".len()))
        .max()
        .unwrap_or(7);

    let mut table = format!(
        "{:<label_width$}  {:>balance_width$}  Address\n",
        "User", "Balance"
    );
    for (label, balance, address) in rows {
        table.push_str(&format!(
            "{label:<label_width$}  {balance:>balance_width$}  {address}\n"
        ));
    }
    table
}

pub struct Shell<W: Write> {
    ledger: Blockchain,
    accounts: Vec<SeedAccount>,
    export_path: PathBuf,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Transfers go from the first configured account to the second.
    pub fn new(ledger: Blockchain, config: &Config, out: W) -> Result<Shell<W>> {
        if config.seed_accounts.len() < 2 {
            return Err(BlockchainError::Config(
                "The shell needs at least two seed accounts".to_string(),
            ));
        }
        Ok(Shell {
            ledger,
            accounts: config.seed_accounts.clone(),
            export_path: PathBuf::from(&config.export_path),
            out,
        })
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.print_balances()?;
        writeln!(self.out, "Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            let keep_going = match parse_line(&line) {
                Ok(Some(command)) => self.execute_reporting(command)?,
                Ok(None) => true,
                Err(e) => {
                    writeln!(self.out, "Error: {e}")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    // Failures are shown to the user; the loop only ends if the report itself cannot be written.
    fn execute_reporting(&mut self, command: ShellCommand) -> Result<bool> {
        match self.execute(command) {
            Ok(keep_going) => Ok(keep_going),
            Err(e) => {
                writeln!(self.out, "Error: {e}")?;
                Ok(true)
            }
        }
    }

    /// Run one command. Returns false when the shell should stop.
    pub fn execute(&mut self, command: ShellCommand) -> Result<bool> {
        debug!("Shell command: {command:?}");
        match command {
            ShellCommand::Send { amount, note } => {
                let quote = self.ledger.quote_fee(amount)?;
                writeln!(self.out, "Fee: {}", quote.fee)?;
                let sender = self.accounts[0].address.clone();
                let receiver = self.accounts[1].address.clone();
                match self.ledger.submit_quote(&quote, &sender, &receiver, note)? {
                    Admission::Pending { position } => writeln!(
                        self.out,
                        "Transaction added to pending transactions ({position}/{}).",
                        self.ledger.batch_size()
                    )?,
                    Admission::Sealed { block_index } => writeln!(
                        self.out,
                        "Batch full: sealed and mined block {block_index}."
                    )?,
                }
                self.print_balances()?;
            }
            ShellCommand::Fee { amount } => {
                let quote = self.ledger.quote_fee(amount)?;
                writeln!(
                    self.out,
                    "Fee for {}: {} (total {}, {} pending)",
                    quote.amount,
                    quote.fee,
                    quote.total_cost()?,
                    quote.pending_snapshot
                )?;
            }
            ShellCommand::Mine => {
                if self.ledger.mine_pending_transactions()? {
                    writeln!(
                        self.out,
                        "Pending transactions mined into block {}.",
                        self.ledger.latest_block().get_index()
                    )?;
                    self.print_balances()?;
                } else {
                    writeln!(self.out, "No pending transactions to mine.")?;
                }
            }
            ShellCommand::Balances => self.print_balances()?,
            ShellCommand::Pending => {
                let pending = self.ledger.pending_transactions();
                if pending.is_empty() {
                    writeln!(self.out, "No pending transactions.")?;
                }
                for (i, tx) in pending.iter().enumerate() {
                    writeln!(
                        self.out,
                        "{}. {} -> {}: {} (fee {}){}",
                        i + 1,
                        tx.get_sender(),
                        tx.get_receiver(),
                        tx.get_amount(),
                        tx.get_fee(),
                        tx.get_note().map(|n| format!(" \"{n}\"")).unwrap_or_default()
                    )?;
                }
            }
            ShellCommand::Validate => {
                let report = self.ledger.validate_chain();
                if report.is_valid() {
                    writeln!(
                        self.out,
                        "Chain is valid ({} blocks).",
                        report.blocks_checked
                    )?;
                } else {
                    for violation in &report.violations {
                        writeln!(self.out, "Invalid: {violation}")?;
                    }
                }
            }
            ShellCommand::Export { path } => {
                let path = path.map(PathBuf::from).unwrap_or_else(|| self.export_path.clone());
                export_chain(self.ledger.chain(), &path)?;
                writeln!(self.out, "Blockchain saved to {}", path.display())?;
            }
            ShellCommand::Help => writeln!(self.out, "{HELP}")?,
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn print_balances(&mut self) -> Result<()> {
        let table = format_balance_table(&self.ledger, &self.accounts);
        write!(self.out, "{table}")?;
        Ok(())
    }

    pub fn ledger(&self) -> &Blockchain {
        &self.ledger
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
