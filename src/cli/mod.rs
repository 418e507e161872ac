//! Command-line interface
//!
//! Argument parsing, the interactive shell and the non-interactive runners.

pub mod commands;
pub mod shell;
pub mod simulate;

pub use commands::{Command, Opt};
pub use shell::{format_balance_table, parse_line, Shell, ShellCommand};
pub use simulate::{run_simulation, verify_snapshot, SimulationSummary};
