use crate::config::{Config, GLOBAL_CONFIG};
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ledger-chain", about = "Single-process proof-of-work ledger")]
pub struct Opt {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Leading zero hex digits required in block hashes"
    )]
    pub difficulty: Option<usize>,
    #[arg(long, global = true, help = "Where chain snapshots are written")]
    pub export_path: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    #[command(name = "shell", about = "Start the interactive ledger shell (default)")]
    Shell,
    #[command(
        name = "simulate",
        about = "Submit a series of transfers, mine, validate and export"
    )]
    Simulate {
        #[arg(long, default_value_t = 10, help = "Number of transfers to submit")]
        count: usize,
        #[arg(long, default_value = "1", help = "Amount of each transfer")]
        amount: String,
        #[arg(long, help = "Skip writing the snapshot file")]
        no_export: bool,
    },
    #[command(name = "fee", about = "Quote the fee for an amount on an empty batch")]
    Fee {
        #[arg(help = "Transfer amount")]
        amount: String,
    },
    #[command(name = "verify", about = "Validate a previously exported snapshot")]
    Verify {
        #[arg(help = "Snapshot file to check")]
        path: PathBuf,
    },
}

impl Opt {
    /// Defaults and environment (or the given TOML file plus environment), then flags.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)?.apply_env()?,
            None => GLOBAL_CONFIG.clone(),
        };
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(path) = &self.export_path {
            config.export_path = path.clone();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_shell() {
        let opt = Opt::parse_from(["ledger-chain"]);
        assert_eq!(opt.command(), Command::Shell);
    }

    #[test]
    fn test_simulate_arguments() {
        let opt = Opt::parse_from([
            "ledger-chain",
            "simulate",
            "--count",
            "3",
            "--amount",
            "2.5",
            "--difficulty",
            "1",
        ]);
        assert_eq!(
            opt.command(),
            Command::Simulate {
                count: 3,
                amount: "2.5".to_string(),
                no_export: false,
            }
        );
        assert_eq!(opt.difficulty, Some(1));
    }

    #[test]
    fn test_flags_override_config() {
        let opt = Opt::parse_from([
            "ledger-chain",
            "--difficulty",
            "2",
            "--export-path",
            "out.json",
        ]);
        let config = opt.resolve_config().unwrap();
        assert_eq!(config.difficulty, 2);
        assert_eq!(config.export_path, "out.json");
    }

    #[test]
    fn test_out_of_range_difficulty_rejected() {
        let opt = Opt::parse_from(["ledger-chain", "--difficulty", "99"]);
        assert!(opt.resolve_config().is_err());
        let opt = Opt::parse_from(["ledger-chain", "--difficulty", "64"]);
        assert!(opt.resolve_config().is_err());
    }
}
