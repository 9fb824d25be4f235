//! Date-range and bankroll filtering.

use crate::clock::ReferenceClock;
use banca_core::{BancaError, Bankroll, Bet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar days. An unset bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Range with both bounds open.
    #[must_use]
    pub const fn all() -> Self {
        Self::new(None, None)
    }

    /// Parses `YYYY-MM-DD` bounds; blank strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`BancaError::InvalidDate`] for a bound that is not a valid date.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> banca_core::Result<Self> {
        Ok(Self::new(parse_bound(start)?, parse_bound(end)?))
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True if `date` lies between the start day (from 00:00) and the end
    /// day (through 23:59:59.999), both inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

fn parse_bound(raw: Option<&str>) -> banca_core::Result<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| BancaError::invalid_date(s)),
    }
}

/// Bets that belong to `active` and whose calendar day falls inside `range`.
///
/// Input order is preserved. A bet without a timestamp is dated to the
/// clock's current day.
#[must_use]
pub fn filter_bets(
    bets: &[Bet],
    range: &DateRange,
    active: &Bankroll,
    clock: &ReferenceClock,
) -> Vec<Bet> {
    let undated = bets.iter().filter(|b| b.timestamp.is_none()).count();
    if undated > 0 && !range.is_unbounded() {
        tracing::warn!(undated, today = %clock.today(), "bets without timestamp dated to today");
    }

    let filtered: Vec<Bet> = bets
        .iter()
        .filter(|bet| active.owns(bet.bankroll()))
        .filter(|bet| range.is_unbounded() || range.contains(clock.bet_date(bet.timestamp)))
        .cloned()
        .collect();

    tracing::debug!(
        input = bets.len(),
        kept = filtered.len(),
        bankroll = %active.name,
        "bets filtered"
    );
    filtered
}
