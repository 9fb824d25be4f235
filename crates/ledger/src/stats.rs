//! Aggregate statistics over a filtered set of bets.
//!
//! All monetary figures are sums of [`bet_profit`]. Ratios guard their
//! denominators and use checked division, so an empty, misconfigured or
//! degenerate bankroll yields zeros instead of panicking on overflow.

use crate::clock::ReferenceClock;
use crate::ledger::{balance_series, chronological, BalancePoint};
use crate::profit::bet_profit;
use banca_core::{Bankroll, Bet, Outcome};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bankroll figures the statistics are expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsParams {
    pub starting_capital: Decimal,
    pub unit_value: Decimal,
}

impl StatsParams {
    #[must_use]
    pub const fn new(starting_capital: Decimal, unit_value: Decimal) -> Self {
        Self {
            starting_capital,
            unit_value,
        }
    }
}

impl From<&Bankroll> for StatsParams {
    fn from(bankroll: &Bankroll) -> Self {
        Self::new(bankroll.initial_capital, bankroll.unit_value)
    }
}

/// A league or market name with its summed profit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedProfit {
    pub name: String,
    pub profit: Decimal,
}

impl NamedProfit {
    /// Placeholder reported when nothing made a profit.
    #[must_use]
    pub fn none() -> Self {
        Self {
            name: "-".to_string(),
            profit: Decimal::ZERO,
        }
    }
}

/// Per-league row of the breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueStats {
    pub name: String,
    pub bets: usize,
    pub staked: Decimal,
    pub profit: Decimal,
    /// Profit divided by the unit value.
    pub units: Decimal,
    /// Profit over the league's own staked amount, in percent.
    pub roi: Decimal,
    pub greens: Decimal,
    pub reds: Decimal,
}

/// Summary of a filtered bet set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub bet_count: usize,
    /// Sum of every stake, settled or not.
    pub total_staked: Decimal,
    /// [`total_staked`](Self::total_staked) expressed in units.
    pub staked_units: Decimal,
    /// Sum of positive profits.
    pub total_gain: Decimal,
    /// Absolute sum of negative profits.
    pub total_loss: Decimal,
    pub net_balance: Decimal,
    /// Net balance over starting capital, in percent.
    pub roi: Decimal,
    pub net_units: Decimal,
    /// Wins count 1, half-wins 0.5.
    pub greens: Decimal,
    /// Losses count 1, half-losses 0.5.
    pub reds: Decimal,
    pub refunds: usize,
    pub pending: usize,
    pub best_league: NamedProfit,
    pub best_market: NamedProfit,
    /// Sorted by units, best first.
    pub leagues: Vec<LeagueStats>,
    pub series: Vec<BalancePoint>,
}

impl LedgerStats {
    /// Computes every aggregate for `bets`.
    ///
    /// Leagues and markets are accumulated in chronological order of their
    /// first bet, which decides ties for best league/market and for equal
    /// units in the breakdown.
    #[must_use]
    pub fn compute(bets: &[Bet], params: &StatsParams, clock: &ReferenceClock) -> Self {
        let mut total_staked = Decimal::ZERO;
        let mut staked_units = Decimal::ZERO;
        let mut total_gain = Decimal::ZERO;
        let mut total_loss = Decimal::ZERO;
        let mut greens = Decimal::ZERO;
        let mut reds = Decimal::ZERO;
        let mut refunds = 0;
        let mut pending = 0;
        let mut leagues: Tally<LeagueTotals> = Tally::default();
        let mut markets: Tally<Decimal> = Tally::default();

        for bet in chronological(bets, clock) {
            let profit = bet_profit(bet);
            total_staked = total_staked.saturating_add(bet.stake);
            staked_units = staked_units.saturating_add(bet.stake_units(params.unit_value));
            if profit > Decimal::ZERO {
                total_gain = total_gain.saturating_add(profit);
            } else if profit < Decimal::ZERO {
                total_loss = total_loss.saturating_add(profit.abs());
            }

            greens += green_weight(bet.outcome);
            reds += red_weight(bet.outcome);
            if bet.outcome == Outcome::Void {
                refunds += 1;
            } else if !bet.outcome.is_terminal() {
                pending += 1;
            }

            if !bet.league.is_empty() {
                leagues.entry(&bet.league).add(bet, profit);
            }
            if !bet.market.is_empty() {
                let total = markets.entry(&bet.market);
                *total = total.saturating_add(profit);
            }
        }

        let net_balance = total_gain.saturating_sub(total_loss);
        let roi = percent(net_balance, params.starting_capital);
        let net_units = ratio(net_balance, params.unit_value);

        let best_league = best(leagues.iter().map(|(name, totals)| (name, totals.profit)));
        let best_market = best(markets.iter().map(|(name, profit)| (name, *profit)));

        let unit_divisor = if params.unit_value > Decimal::ZERO {
            params.unit_value
        } else {
            Decimal::ONE
        };
        let mut league_rows: Vec<LeagueStats> = leagues
            .into_entries()
            .map(|(name, totals)| totals.into_row(name, unit_divisor))
            .collect();
        // Stable: equal units keep first-encounter order.
        league_rows.sort_by(|a, b| b.units.cmp(&a.units));

        let series = balance_series(bets, params.starting_capital, clock).points;

        tracing::debug!(
            bets = bets.len(),
            %net_balance,
            %roi,
            leagues = league_rows.len(),
            "ledger stats computed"
        );

        Self {
            bet_count: bets.len(),
            total_staked,
            staked_units,
            total_gain,
            total_loss,
            net_balance,
            roi,
            net_units,
            greens,
            reds,
            refunds,
            pending,
            best_league,
            best_market,
            leagues: league_rows,
            series,
        }
    }

    /// Share of greens among greens and reds, in percent.
    #[must_use]
    pub fn win_rate(&self) -> Decimal {
        percent(self.greens, self.greens + self.reds)
    }

    /// Share of reds among greens and reds, in percent.
    #[must_use]
    pub fn loss_rate(&self) -> Decimal {
        percent(self.reds, self.greens + self.reds)
    }
}

fn green_weight(outcome: Outcome) -> Decimal {
    match outcome {
        Outcome::Win => Decimal::ONE,
        Outcome::HalfWin => Decimal::new(5, 1),
        _ => Decimal::ZERO,
    }
}

fn red_weight(outcome: Outcome) -> Decimal {
    match outcome {
        Outcome::Loss => Decimal::ONE,
        Outcome::HalfLoss => Decimal::new(5, 1),
        _ => Decimal::ZERO,
    }
}

/// `part / whole`, or zero when `whole` is not positive or the quotient
/// does not fit a `Decimal`.
fn ratio(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole).unwrap_or(Decimal::ZERO)
}

/// `part / whole * 100`, with the same zero fallbacks as [`ratio`].
fn percent(part: Decimal, whole: Decimal) -> Decimal {
    ratio(part, whole)
        .checked_mul(Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO)
}

/// Strictly highest positive profit; the first entry wins ties.
fn best<'a>(entries: impl Iterator<Item = (&'a str, Decimal)>) -> NamedProfit {
    let mut best = NamedProfit::none();
    for (name, profit) in entries {
        if profit > best.profit {
            best = NamedProfit {
                name: name.to_string(),
                profit,
            };
        }
    }
    best
}

#[derive(Debug, Default)]
struct LeagueTotals {
    bets: usize,
    staked: Decimal,
    profit: Decimal,
    greens: Decimal,
    reds: Decimal,
}

impl LeagueTotals {
    fn add(&mut self, bet: &Bet, profit: Decimal) {
        self.bets += 1;
        self.staked = self.staked.saturating_add(bet.stake);
        self.profit = self.profit.saturating_add(profit);
        self.greens += green_weight(bet.outcome);
        self.reds += red_weight(bet.outcome);
    }

    fn into_row(self, name: String, unit_divisor: Decimal) -> LeagueStats {
        LeagueStats {
            name,
            bets: self.bets,
            staked: self.staked,
            profit: self.profit,
            units: ratio(self.profit, unit_divisor),
            roi: percent(self.profit, self.staked),
            greens: self.greens,
            reds: self.reds,
        }
    }
}

/// Insertion-ordered accumulator keyed by name.
#[derive(Debug)]
struct Tally<T> {
    index: HashMap<String, usize>,
    entries: Vec<(String, T)>,
}

impl<T> Default for Tally<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<T: Default> Tally<T> {
    fn entry(&mut self, name: &str) -> &mut T {
        let slot = match self.index.get(name) {
            Some(&slot) => slot,
            None => {
                self.entries.push((name.to_string(), T::default()));
                let slot = self.entries.len() - 1;
                self.index.insert(name.to_string(), slot);
                slot
            }
        };
        &mut self.entries[slot].1
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn into_entries(self) -> impl Iterator<Item = (String, T)> {
        self.entries.into_iter()
    }
}
