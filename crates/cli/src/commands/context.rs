//! Shared loading for commands that read a snapshot.

use anyhow::{Context, Result};
use banca_core::{AppConfig, ConfigLoader, Snapshot};
use banca_ledger::ReferenceClock;
use clap::Args;

/// Configuration source shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Config file path
    #[arg(short, long, default_value = "config/Config.toml")]
    pub config: String,

    /// Profile overlay read from `Config.{profile}.toml` next to the config file
    #[arg(long)]
    pub profile: Option<String>,
}

/// Configuration, snapshot, and clock for one command invocation.
pub struct LedgerContext {
    pub config: AppConfig,
    pub snapshot: Snapshot,
    pub clock: ReferenceClock,
}

impl LedgerContext {
    /// Loads the configuration file (with an optional profile overlay), then
    /// the snapshot (the `--snapshot` argument wins over the configured path).
    pub fn load(source: &ConfigArgs, snapshot_override: Option<&str>) -> Result<Self> {
        let config_path = source.config.as_str();
        let config = match source.profile.as_deref() {
            Some(profile) => ConfigLoader::load_with_profile(config_path, profile),
            None => ConfigLoader::load_from(config_path),
        }
        .with_context(|| format!("failed to load configuration from {config_path}"))?;

        let snapshot_path = snapshot_override.unwrap_or(&config.snapshot.path).to_string();
        let snapshot = Snapshot::load(&snapshot_path)?;
        let clock = ReferenceClock::system(config.ledger.tz()?);

        tracing::info!(
            snapshot = %snapshot_path,
            bets = snapshot.bets.len(),
            timezone = %config.ledger.timezone,
            "snapshot loaded"
        );

        Ok(Self {
            config,
            snapshot,
            clock,
        })
    }
}
