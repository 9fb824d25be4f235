//! CLI commands for the bankroll ledger.

pub mod balance;
pub mod context;
pub mod markets;
pub mod report;

pub use balance::{run_balance, BalanceArgs};
pub use markets::{run_markets, MarketsArgs};
pub use report::{run_report, ReportArgs};
