//! Error types for snapshot loading and bankroll resolution.

use thiserror::Error;

/// Errors raised at the boundary between the ledger engine and its inputs.
///
/// The aggregation engine itself is total; every failure mode lives here,
/// where raw documents and user selections are turned into typed values.
#[derive(Debug, Error)]
pub enum BancaError {
    /// Snapshot file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    SnapshotIo {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Snapshot document is not valid JSON or does not match the schema.
    #[error("invalid snapshot: {0}")]
    SnapshotParse(#[from] serde_json::Error),

    /// The requested bankroll id is not in the snapshot.
    #[error("bankroll not found: {id}")]
    UnknownBankroll {
        /// The id that was requested.
        id: String,
    },

    /// No bankroll was requested and none is flagged as default.
    #[error("no bankroll selected and no default bankroll configured")]
    NoBankroll,

    /// Timezone name is not in the IANA database.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Calendar date could not be parsed.
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The raw input.
        input: String,
    },
}

impl BancaError {
    /// Creates an unknown bankroll error.
    pub fn unknown_bankroll(id: impl Into<String>) -> Self {
        Self::UnknownBankroll { id: id.into() }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }
}

/// Convenience alias for results carrying [`BancaError`].
pub type Result<T> = std::result::Result<T, BancaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_bankroll_message_includes_id() {
        let err = BancaError::unknown_bankroll("abc123");
        assert_eq!(err.to_string(), "bankroll not found: abc123");
    }

    #[test]
    fn invalid_date_message_includes_input() {
        let err = BancaError::invalid_date("31/12/2024");
        assert!(err.to_string().contains("31/12/2024"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn parse_error_converts_from_serde_json() {
        let parse_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: BancaError = parse_err.into();
        assert!(matches!(err, BancaError::SnapshotParse(_)));
    }
}
