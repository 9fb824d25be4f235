//! Ledger aggregation engine for betting bankrolls.
//!
//! Pure, synchronous transformations over read-only snapshots: per-bet
//! profit, date/bankroll filtering, the running-balance series, aggregate
//! statistics with a per-league breakdown, and market grouping.

pub mod clock;
pub mod filter;
pub mod formatter;
pub mod grouping;
pub mod ledger;
pub mod profit;
pub mod stats;

pub use clock::ReferenceClock;
pub use filter::{filter_bets, DateRange};
pub use formatter::ReportFormatter;
pub use grouping::{group_markets, MarketGroup, MarketGroups};
pub use ledger::{balance_series, chronological, current_balance, BalancePoint, LedgerSeries};
pub use profit::{bet_profit, profit};
pub use stats::{LeagueStats, LedgerStats, NamedProfit, StatsParams};
