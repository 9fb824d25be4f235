use super::context::{ConfigArgs, LedgerContext};
use anyhow::Result;
use banca_ledger::current_balance;
use clap::Args;
use rust_decimal::Decimal;

/// Arguments for the balance command.
#[derive(Args, Debug, Clone)]
pub struct BalanceArgs {
    /// Snapshot JSON file (defaults to the configured path)
    #[arg(short, long)]
    pub snapshot: Option<String>,

    /// Bankroll id (defaults to the bankroll flagged as default)
    #[arg(short, long)]
    pub bankroll: Option<String>,

    #[command(flatten)]
    pub source: ConfigArgs,
}

pub fn run_balance(args: BalanceArgs) -> Result<()> {
    let ctx = LedgerContext::load(&args.source, args.snapshot.as_deref())?;
    let bankroll = ctx.snapshot.active_bankroll(args.bankroll.as_deref())?;

    let bets = ctx.snapshot.bankroll_bets(bankroll);
    let balance = current_balance(&bets, bankroll.initial_capital);
    let units = if bankroll.unit_value > Decimal::ZERO {
        balance
            .saturating_sub(bankroll.initial_capital)
            .checked_div(bankroll.unit_value)
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    println!(
        "{}: {balance:.2} ({:+.2}u over {} bets)",
        bankroll.name,
        units,
        bets.len()
    );
    Ok(())
}
