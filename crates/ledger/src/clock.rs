use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Fixed reference instant and timezone for one recomputation.
///
/// Bets without a timestamp are placed at `now`; calendar days are cut in
/// `tz`. Passing the same clock twice gives identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceClock {
    now: DateTime<Utc>,
    tz: Tz,
}

impl ReferenceClock {
    #[must_use]
    pub const fn new(now: DateTime<Utc>, tz: Tz) -> Self {
        Self { now, tz }
    }

    /// Clock pinned to the current system time.
    #[must_use]
    pub fn system(tz: Tz) -> Self {
        Self::new(Utc::now(), tz)
    }

    /// UTC clock pinned to `now`.
    #[must_use]
    pub const fn fixed(now: DateTime<Utc>) -> Self {
        Self::new(now, Tz::UTC)
    }

    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.tz
    }

    /// Calendar day of the reference instant.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.date_of(self.now)
    }

    /// Instant a bet is ordered by.
    #[must_use]
    pub fn instant_of(&self, timestamp: Option<DateTime<Utc>>) -> DateTime<Utc> {
        timestamp.unwrap_or(self.now)
    }

    /// Calendar day of an instant in the clock's timezone.
    #[must_use]
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Calendar day of an optional bet timestamp; missing means today.
    #[must_use]
    pub fn bet_date(&self, timestamp: Option<DateTime<Utc>>) -> NaiveDate {
        self.date_of(self.instant_of(timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn missing_timestamp_maps_to_reference_instant() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let clock = ReferenceClock::fixed(now);

        assert_eq!(clock.instant_of(None), now);
        assert_eq!(clock.bet_date(None), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn date_is_cut_in_configured_timezone() {
        // 01:30 UTC is still the previous evening in Sao Paulo (UTC-3).
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 1, 30, 0).unwrap();
        let utc = ReferenceClock::fixed(instant);
        let brt = ReferenceClock::new(instant, Tz::America__Sao_Paulo);

        assert_eq!(utc.date_of(instant), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(brt.date_of(instant), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }
}
