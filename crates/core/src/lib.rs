pub mod bankroll;
pub mod bet;
pub mod config;
pub mod config_loader;
pub mod error;
pub mod market;
pub mod snapshot;

pub use bankroll::{resolve_active, Bankroll};
pub use bet::{Bet, Outcome};
pub use config::{AppConfig, LedgerConfig, SnapshotConfig};
pub use config_loader::ConfigLoader;
pub use error::{BancaError, Result};
pub use market::{
    collate, reorder_categories, selectable_markets, sorted_categories, Category, Market,
};
pub use snapshot::Snapshot;
