use crate::error::{BancaError, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// IANA timezone used to cut bets into calendar days.
    pub timezone: String,
    /// Group that collects markets with an empty or unknown category.
    pub catch_all_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    pub path: String,
}

impl LedgerConfig {
    /// Parses the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns [`BancaError::InvalidTimezone`] if the name is not a known IANA zone.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| BancaError::InvalidTimezone(self.timezone.clone()))
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            catch_all_category: "OTHER".to_string(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: "data/snapshot.json".to_string(),
        }
    }
}
