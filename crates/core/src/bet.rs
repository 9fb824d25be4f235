//! Bet records and their outcome states.
//!
//! A [`Bet`] is a read-only snapshot of one wager as persisted by the
//! document store. The ledger never mutates bets; edits happen upstream and
//! arrive as a fresh snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement state of a bet.
///
/// Every state except [`Outcome::Pending`] is terminal. Bets can be re-opened
/// by an edit, so the state machine is not strictly irreversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Not settled yet.
    #[default]
    Pending,
    /// Full win, pays `stake * (odds - 1)`.
    Win,
    /// Half of the stake won, half refunded (Asian handicap quarter lines).
    HalfWin,
    /// Full loss of the stake.
    Loss,
    /// Half of the stake lost, half refunded.
    HalfLoss,
    /// Stake returned.
    Void,
}

impl Outcome {
    /// All outcome states, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Win,
        Self::HalfWin,
        Self::Loss,
        Self::HalfLoss,
        Self::Void,
    ];

    /// Returns true for every settled state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Wire name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Win => "win",
            Self::HalfWin => "half-win",
            Self::Loss => "loss",
            Self::HalfLoss => "half-loss",
            Self::Void => "void",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single wager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    /// Document id, assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// League or competition name.
    #[serde(default)]
    pub league: String,
    /// First participant.
    #[serde(default)]
    pub player_one: String,
    /// Second participant.
    #[serde(default)]
    pub player_two: String,
    /// Market name (e.g. "Over 2.5 FT").
    #[serde(default)]
    pub market: String,
    /// Amount wagered.
    pub stake: Decimal,
    /// Decimal odds.
    pub odds: Decimal,
    /// Settlement state.
    #[serde(default)]
    pub outcome: Outcome,
    /// Owning account.
    #[serde(default)]
    pub owner: String,
    /// Settlement/creation time. Absent for malformed or legacy records.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    /// Owning bankroll. Absent on records created before multi-bankroll
    /// support; those belong to the default bankroll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bankroll_id: Option<String>,
}

impl Bet {
    /// Creates a bet with the fields the ledger reads; everything else empty.
    #[must_use]
    pub fn new(
        league: impl Into<String>,
        market: impl Into<String>,
        stake: Decimal,
        odds: Decimal,
        outcome: Outcome,
    ) -> Self {
        Self {
            id: None,
            league: league.into(),
            player_one: String::new(),
            player_two: String::new(),
            market: market.into(),
            stake,
            odds,
            outcome,
            owner: String::new(),
            timestamp: None,
            bankroll_id: None,
        }
    }

    /// Sets the settlement timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Assigns the bet to a bankroll.
    #[must_use]
    pub fn with_bankroll(mut self, bankroll_id: impl Into<String>) -> Self {
        self.bankroll_id = Some(bankroll_id.into());
        self
    }

    /// Bankroll id, treating an empty string the same as an absent one.
    #[must_use]
    pub fn bankroll(&self) -> Option<&str> {
        self.bankroll_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Stake expressed in units of `unit_value`. Zero when the unit value is
    /// not positive or the quotient overflows.
    #[must_use]
    pub fn stake_units(&self, unit_value: Decimal) -> Decimal {
        if unit_value <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.stake.checked_div(unit_value).unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    // ============================================================
    // Outcome Tests
    // ============================================================

    #[test]
    fn only_pending_is_not_terminal() {
        for outcome in Outcome::ALL {
            assert_eq!(outcome.is_terminal(), outcome != Outcome::Pending);
        }
    }

    #[test]
    fn outcome_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Outcome::HalfWin).unwrap(), r#""half-win""#);
        assert_eq!(serde_json::to_string(&Outcome::HalfLoss).unwrap(), r#""half-loss""#);
        assert_eq!(serde_json::to_string(&Outcome::Void).unwrap(), r#""void""#);
    }

    #[test]
    fn outcome_deserializes_from_wire_name() {
        for outcome in Outcome::ALL {
            let json = format!("\"{outcome}\"");
            assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), outcome);
        }
        assert!(serde_json::from_str::<Outcome>(r#""green""#).is_err());
    }

    // ============================================================
    // Bet Tests
    // ============================================================

    #[test]
    fn bet_deserializes_with_seconds_timestamp() {
        let json = r#"{
            "id": "b1",
            "league": "Battle 8 min",
            "player_one": "Alpha",
            "player_two": "Beta",
            "market": "Over 2.5",
            "stake": 100,
            "odds": "1.85",
            "outcome": "win",
            "owner": "user@example.com",
            "timestamp": 1700000000,
            "bankroll_id": "main"
        }"#;

        let bet: Bet = serde_json::from_str(json).unwrap();

        assert_eq!(bet.id.as_deref(), Some("b1"));
        assert_eq!(bet.stake, dec!(100));
        assert_eq!(bet.odds, dec!(1.85));
        assert_eq!(bet.outcome, Outcome::Win);
        assert_eq!(bet.timestamp, Utc.timestamp_opt(1_700_000_000, 0).single());
        assert_eq!(bet.bankroll(), Some("main"));
    }

    #[test]
    fn bet_tolerates_missing_optional_fields() {
        let json = r#"{ "stake": 50, "odds": 2.0 }"#;

        let bet: Bet = serde_json::from_str(json).unwrap();

        assert_eq!(bet.outcome, Outcome::Pending);
        assert!(bet.timestamp.is_none());
        assert!(bet.bankroll().is_none());
        assert!(bet.league.is_empty());
    }

    #[test]
    fn empty_bankroll_id_is_treated_as_unassigned() {
        let bet = Bet::new("L", "M", dec!(10), dec!(2), Outcome::Win).with_bankroll("");
        assert_eq!(bet.bankroll(), None);
    }

    #[test]
    fn stake_units_divides_by_unit_value() {
        let bet = Bet::new("L", "M", dec!(150), dec!(2), Outcome::Pending);
        assert_eq!(bet.stake_units(dec!(100)), dec!(1.5));
    }

    #[test]
    fn stake_units_is_zero_for_non_positive_unit_value() {
        let bet = Bet::new("L", "M", dec!(150), dec!(2), Outcome::Pending);
        assert_eq!(bet.stake_units(dec!(0)), Decimal::ZERO);
        assert_eq!(bet.stake_units(dec!(-10)), Decimal::ZERO);
    }

    #[test]
    fn stake_units_is_zero_when_quotient_overflows() {
        let bet = Bet::new("L", "M", dec!(1000), dec!(2), Outcome::Win);
        assert_eq!(bet.stake_units(Decimal::new(1, 28)), Decimal::ZERO);
    }
}
