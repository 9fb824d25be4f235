use clap::{Parser, Subcommand};

mod commands;

use commands::{BalanceArgs, MarketsArgs, ReportArgs};

#[derive(Parser)]
#[command(name = "banca")]
#[command(about = "Bankroll ledger for sports bets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Statistics for a bankroll over an optional date range
    Report(ReportArgs),
    /// Current balance of a bankroll, ignoring any date range
    Balance(BalanceArgs),
    /// Markets grouped by category
    Markets(MarketsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Report(args) => commands::run_report(args)?,
        Commands::Balance(args) => commands::run_balance(args)?,
        Commands::Markets(args) => commands::run_markets(args)?,
    }

    Ok(())
}
