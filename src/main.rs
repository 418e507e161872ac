// This is my main entry point for the ledger CLI application
use clap::Parser;
use ledger_chain::cli::{run_simulation, verify_snapshot, Shell};
use ledger_chain::{parse_amount, Blockchain, Command, Opt};
use log::{error, LevelFilter};
use std::io;
use std::process;

fn main() {
    // I initialize logging so I can see blocks being sealed and transactions being rejected
    env_logger::builder().filter_level(LevelFilter::Info).init();

    // I parse the command line arguments using clap
    let opt = Opt::parse();

    // If something goes wrong, I log the error and exit with code 1
    if let Err(e) = run_command(&opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// This is where I handle the different CLI commands
fn run_command(opt: &Opt) -> Result<(), Box<dyn std::error::Error>> {
    // Defaults, then the TOML file and environment, then my flags
    let config = opt.resolve_config()?;

    match opt.command() {
        // The default: a fresh ledger driven line by line from stdin
        Command::Shell => {
            let blockchain = Blockchain::new(&config)?;
            let stdin = io::stdin();
            let mut shell = Shell::new(blockchain, &config, io::stdout())?;
            shell.run(stdin.lock())?;
        }
        // A scripted run of transfers so I can watch batching and mining without typing
        Command::Simulate {
            count,
            amount,
            no_export,
        } => {
            let amount = parse_amount(&amount)?;
            let summary = run_simulation(&config, count, amount, !no_export, &mut io::stdout())?;
            println!(
                "Accepted {}, rejected {}",
                summary.accepted, summary.rejected
            );
            if !summary.valid {
                return Err("Simulated chain failed validation".into());
            }
        }
        // I quote against an empty batch, which is the lowest fee this amount can get
        Command::Fee { amount } => {
            let amount = parse_amount(&amount)?;
            let blockchain = Blockchain::new(&config)?;
            let quote = blockchain.quote_fee(amount)?;
            println!(
                "Fee: {} (total {}), {}",
                quote.fee,
                quote.total_cost()?,
                blockchain.fee_mode()
            );
        }
        // Reading back a snapshot I exported earlier and walking every block
        Command::Verify { path } => {
            let report = verify_snapshot(&config, &path)?;
            for violation in &report.violations {
                println!("{violation}");
            }
            if !report.is_valid() {
                return Err(format!(
                    "{} violations in {} blocks",
                    report.violations.len(),
                    report.blocks_checked
                )
                .into());
            }
            println!("Snapshot is valid ({} blocks)", report.blocks_checked);
        }
    }
    Ok(())
}
