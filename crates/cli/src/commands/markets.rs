use super::context::{ConfigArgs, LedgerContext};
use anyhow::Result;
use banca_core::reorder_categories;
use banca_ledger::{group_markets, ReportFormatter};
use clap::Args;

/// Arguments for the markets command.
#[derive(Args, Debug, Clone)]
pub struct MarketsArgs {
    /// Snapshot JSON file (defaults to the configured path)
    #[arg(short, long)]
    pub snapshot: Option<String>,

    /// Include hidden markets
    #[arg(long)]
    pub all: bool,

    /// Preview moving the category at position FROM to position TO
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    pub reorder: Option<Vec<usize>>,

    #[command(flatten)]
    pub source: ConfigArgs,
}

pub fn run_markets(args: MarketsArgs) -> Result<()> {
    let ctx = LedgerContext::load(&args.source, args.snapshot.as_deref())?;

    let categories = match args.reorder.as_deref() {
        Some(&[from, to]) => {
            let reordered = reorder_categories(&ctx.snapshot.categories, from, to);
            tracing::info!(from, to, "category order previewed");
            reordered
        }
        _ => ctx.snapshot.categories.clone(),
    };

    let groups = group_markets(
        &ctx.snapshot.markets,
        &categories,
        &ctx.config.ledger.catch_all_category,
    );
    print!("{}", ReportFormatter::format_markets(&groups, args.all));
    Ok(())
}
