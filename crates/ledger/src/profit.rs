//! Realized profit of a single bet.
//!
//! Every aggregate in this crate is a sum of [`profit`]; nothing recomputes
//! payouts on its own.

use banca_core::{Bet, Outcome};
use rust_decimal::Decimal;

/// Signed monetary result of a bet.
///
/// | outcome     | result                   |
/// |-------------|--------------------------|
/// | `win`       | `stake * (odds - 1)`     |
/// | `half-win`  | `stake / 2 * (odds - 1)` |
/// | `loss`      | `-stake`                 |
/// | `half-loss` | `-stake / 2`             |
/// | `void`      | `0`                      |
/// | `pending`   | `0`                      |
///
/// Total over all inputs: non-positive stakes or odds below 1 are not
/// rejected here, and a payout too large for `Decimal` yields zero.
#[must_use]
pub fn profit(stake: Decimal, odds: Decimal, outcome: Outcome) -> Decimal {
    let half = stake / Decimal::TWO;
    match outcome {
        Outcome::Win => payout(stake, odds),
        Outcome::HalfWin => payout(half, odds),
        Outcome::Loss => -stake,
        Outcome::HalfLoss => -half,
        Outcome::Void | Outcome::Pending => Decimal::ZERO,
    }
}

fn payout(stake: Decimal, odds: Decimal) -> Decimal {
    odds.checked_sub(Decimal::ONE)
        .and_then(|net| stake.checked_mul(net))
        .unwrap_or(Decimal::ZERO)
}

/// [`profit`] applied to a bet record.
#[must_use]
pub fn bet_profit(bet: &Bet) -> Decimal {
    profit(bet.stake, bet.odds, bet.outcome)
}
