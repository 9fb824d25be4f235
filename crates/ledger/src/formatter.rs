#![allow(clippy::format_push_string)]

use crate::filter::DateRange;
use crate::grouping::MarketGroups;
use crate::stats::LedgerStats;
use banca_core::{selectable_markets, Market};
use rust_decimal::Decimal;

const RULE: &str = "═══════════════════════════════════════════════════════════════\n";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────\n";

pub struct ReportFormatter;

impl ReportFormatter {
    #[must_use]
    pub fn format(
        bankroll: &str,
        range: &DateRange,
        stats: &LedgerStats,
        current_balance: Decimal,
    ) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(RULE);
        output.push_str(&format!("  BANKROLL REPORT: {bankroll}\n"));
        output.push_str(RULE);
        output.push('\n');

        // Period
        output.push_str("Period\n");
        output.push_str(THIN_RULE);
        output.push_str(&format!("From:                  {}\n", bound(range.start)));
        output.push_str(&format!("To:                    {}\n", bound(range.end)));
        output.push_str(&format!("Bets:                  {}\n", stats.bet_count));
        output.push_str(&format!(
            "Staked:                {:.2} ({:.2}u)\n",
            stats.total_staked, stats.staked_units
        ));
        output.push('\n');

        // Performance
        output.push_str("Performance\n");
        output.push_str(THIN_RULE);
        output.push_str(&format!("Current Balance:       {current_balance:.2}\n"));
        output.push_str(&format!("Total Gain:            {:.2}\n", stats.total_gain));
        output.push_str(&format!("Total Loss:            {:.2}\n", stats.total_loss));
        output.push_str(&format!("Net Balance:           {:+.2}\n", stats.net_balance));
        output.push_str(&format!("ROI:                   {:.2}%\n", stats.roi));
        output.push_str(&format!("Net Units:             {:+.2}u\n", stats.net_units));
        output.push('\n');

        // Results
        output.push_str("Results\n");
        output.push_str(THIN_RULE);
        output.push_str(&format!(
            "Greens:                {} ({:.1}%)\n",
            stats.greens.normalize(),
            stats.win_rate()
        ));
        output.push_str(&format!(
            "Reds:                  {} ({:.1}%)\n",
            stats.reds.normalize(),
            stats.loss_rate()
        ));
        output.push_str(&format!("Refunds:               {}\n", stats.refunds));
        output.push_str(&format!("Pending:               {}\n", stats.pending));
        output.push_str(&format!(
            "Best League:           {} ({:.2})\n",
            stats.best_league.name, stats.best_league.profit
        ));
        output.push_str(&format!(
            "Best Market:           {} ({:.2})\n",
            stats.best_market.name, stats.best_market.profit
        ));
        output.push('\n');

        if !stats.leagues.is_empty() {
            output.push_str("Leagues\n");
            output.push_str(THIN_RULE);
            output.push_str(&format!(
                "{:<20} {:>5} {:>11} {:>8} {:>8} {:>5} {:>5}\n",
                "League", "Bets", "Profit", "Units", "ROI%", "G", "R"
            ));
            for league in &stats.leagues {
                output.push_str(&format!(
                    "{:<20} {:>5} {:>11.2} {:>8.2} {:>8.2} {:>5} {:>5}\n",
                    truncate(&league.name, 20),
                    league.bets,
                    league.profit,
                    league.units,
                    league.roi,
                    league.greens.normalize(),
                    league.reds.normalize()
                ));
            }
            output.push('\n');
        }

        if !stats.series.is_empty() {
            output.push_str("Balance\n");
            output.push_str(THIN_RULE);
            for point in &stats.series {
                output.push_str(&format!("{}   {:>12.2}\n", point.label(), point.balance));
            }
            output.push('\n');
        }

        output.push_str(RULE);

        if stats.bet_count == 0 {
            output.push_str("\nNo bets in the selected period.\n\n");
        }

        output
    }

    #[must_use]
    pub fn format_markets(groups: &MarketGroups, include_hidden: bool) -> String {
        let mut output = String::new();

        for group in groups.non_empty() {
            let visible: Vec<&Market> = if include_hidden {
                group.markets.iter().collect()
            } else {
                selectable_markets(&group.markets)
            };
            if visible.is_empty() {
                continue;
            }

            output.push_str(&format!("{}\n", group.category));
            output.push_str(THIN_RULE);
            for market in visible {
                let marker = if market.hidden { " (hidden)" } else { "" };
                output.push_str(&format!("  {}{marker}\n", market.name));
            }
            output.push('\n');
        }

        if output.is_empty() {
            output.push_str("No markets registered.\n");
        }
        output
    }
}

fn bound(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut cut: String = name.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}
