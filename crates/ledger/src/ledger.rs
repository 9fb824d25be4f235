//! Running balance of a bankroll over time.

use crate::clock::ReferenceClock;
use crate::profit::bet_profit;
use banca_core::Bet;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance at the close of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: Decimal,
}

impl BalancePoint {
    /// Short `dd/mm` axis label.
    #[must_use]
    pub fn label(&self) -> String {
        self.date.format("%d/%m").to_string()
    }
}

/// Day-by-day balance series plus the closing balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSeries {
    pub points: Vec<BalancePoint>,
    pub final_balance: Decimal,
}

/// Returns `bets` stably sorted by timestamp, undated bets placed at the
/// clock's reference instant.
#[must_use]
pub fn chronological<'a>(bets: &'a [Bet], clock: &ReferenceClock) -> Vec<&'a Bet> {
    let mut sorted: Vec<&Bet> = bets.iter().collect();
    sorted.sort_by_key(|bet| clock.instant_of(bet.timestamp));
    sorted
}

/// Builds the cumulative balance series for a set of bets.
///
/// Profits are bucketed by calendar day (year, month and day) and added to
/// `starting_capital` in chronological order, one point per day that has at
/// least one bet. Pending and void bets still produce a point.
#[must_use]
pub fn balance_series(
    bets: &[Bet],
    starting_capital: Decimal,
    clock: &ReferenceClock,
) -> LedgerSeries {
    let mut daily: Vec<(NaiveDate, Decimal)> = Vec::new();

    for bet in chronological(bets, clock) {
        let date = clock.bet_date(bet.timestamp);
        let profit = bet_profit(bet);
        if let Some((last, total)) = daily.last_mut() {
            if *last == date {
                *total = total.saturating_add(profit);
                continue;
            }
        }
        daily.push((date, profit));
    }

    let mut running = starting_capital;
    let points: Vec<BalancePoint> = daily
        .into_iter()
        .map(|(date, profit)| {
            running = running.saturating_add(profit);
            BalancePoint {
                date,
                balance: running,
            }
        })
        .collect();

    tracing::debug!(
        days = points.len(),
        final_balance = %running,
        "balance series built"
    );

    LedgerSeries {
        points,
        final_balance: running,
    }
}

/// Live bankroll value: starting capital plus the profit of every bet,
/// independent of any date filter.
#[must_use]
pub fn current_balance(bets: &[Bet], starting_capital: Decimal) -> Decimal {
    bets
        .iter()
        .map(bet_profit)
        .fold(starting_capital, Decimal::saturating_add)
}
