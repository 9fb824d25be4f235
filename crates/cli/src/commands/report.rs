//! Report command: filtered statistics plus the live bankroll balance.

use super::context::{ConfigArgs, LedgerContext};
use anyhow::Result;
use banca_ledger::{
    current_balance, filter_bets, DateRange, LedgerStats, ReportFormatter, StatsParams,
};
use clap::Args;

/// Arguments for the report command.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Snapshot JSON file (defaults to the configured path)
    #[arg(short, long)]
    pub snapshot: Option<String>,

    /// Bankroll id (defaults to the bankroll flagged as default)
    #[arg(short, long)]
    pub bankroll: Option<String>,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Print the statistics as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: ConfigArgs,
}

pub fn run_report(args: ReportArgs) -> Result<()> {
    let ctx = LedgerContext::load(&args.source, args.snapshot.as_deref())?;
    let range = DateRange::parse(args.start.as_deref(), args.end.as_deref())?;
    let bankroll = ctx.snapshot.active_bankroll(args.bankroll.as_deref())?;

    let filtered = filter_bets(&ctx.snapshot.bets, &range, bankroll, &ctx.clock);
    let stats = LedgerStats::compute(&filtered, &StatsParams::from(bankroll), &ctx.clock);
    let balance = current_balance(&ctx.snapshot.bankroll_bets(bankroll), bankroll.initial_capital);

    tracing::info!(
        bankroll = %bankroll.name,
        bets = stats.bet_count,
        net_balance = %stats.net_balance,
        "report computed"
    );

    if args.json {
        let payload = serde_json::json!({
            "bankroll": bankroll.name,
            "range": range,
            "current_balance": balance,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", ReportFormatter::format(&bankroll.name, &range, &stats, balance));
    }

    Ok(())
}
