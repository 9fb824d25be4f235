use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    fn base() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
    }

    /// Loads configuration by merging defaults, `config/Config.toml`,
    /// `BANCA_`-prefixed environment variables, and `config/Config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<AppConfig> {
        Self::load_from("config/Config.toml")
    }

    /// Loads configuration from a specific TOML file, layered the same way as
    /// [`ConfigLoader::load`]. A missing file falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be parsed.
    pub fn load_from(path: &str) -> Result<AppConfig> {
        Self::layered(path, None)
    }

    /// Loads `path` plus a profile overlay `Config.{profile}.toml` from the
    /// same directory. The overlay wins over the base file; environment
    /// variables still win over both.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_with_profile(path: &str, profile: &str) -> Result<AppConfig> {
        Self::layered(path, Some(profile))
    }

    fn layered(path: &str, profile: Option<&str>) -> Result<AppConfig> {
        let mut figment = Self::base().merge(Toml::file(path));
        if let Some(profile) = profile {
            let overlay = Path::new(path).with_file_name(format!("Config.{profile}.toml"));
            figment = figment.merge(Toml::file(overlay));
        }
        let config: AppConfig = figment
            .merge(Env::prefixed("BANCA_").split("__"))
            .join(Json::file("config/Config.json"))
            .extract()?;

        tracing::debug!(
            path,
            profile = profile.unwrap_or("-"),
            timezone = %config.ledger.timezone,
            "configuration loaded"
        );
        Ok(config)
    }
}
