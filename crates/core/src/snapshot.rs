//! Point-in-time export of one account's documents.
//!
//! The ledger engine works on snapshots only; whoever owns persistence writes
//! them out as a single JSON document.

use crate::bankroll::{resolve_active, Bankroll};
use crate::bet::Bet;
use crate::error::{BancaError, Result};
use crate::market::{Category, Market};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub bets: Vec<Bet>,
    #[serde(default)]
    pub bankrolls: Vec<Bankroll>,
    #[serde(default)]
    pub markets: Vec<Market>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Snapshot {
    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`BancaError::SnapshotParse`] on malformed JSON or fields with
    /// the wrong type (e.g. a non-numeric stake).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        tracing::debug!(
            bets = snapshot.bets.len(),
            bankrolls = snapshot.bankrolls.len(),
            markets = snapshot.markets.len(),
            categories = snapshot.categories.len(),
            "snapshot parsed"
        );
        Ok(snapshot)
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`BancaError::SnapshotIo`] if the file cannot be read and
    /// [`BancaError::SnapshotParse`] if its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| BancaError::SnapshotIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Resolves the active bankroll, see [`resolve_active`].
    ///
    /// # Errors
    ///
    /// Propagates the resolution error.
    pub fn active_bankroll(&self, requested: Option<&str>) -> Result<&Bankroll> {
        resolve_active(&self.bankrolls, requested)
    }

    /// All bets owned by `bankroll`, unfiltered by date.
    #[must_use]
    pub fn bankroll_bets(&self, bankroll: &Bankroll) -> Vec<Bet> {
        self.bets
            .iter()
            .filter(|bet| bankroll.owns(bet.bankroll()))
            .cloned()
            .collect()
    }
}
