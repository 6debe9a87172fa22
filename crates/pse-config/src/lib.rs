use pse_core::CampaignInputs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simple configuration for pse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Campaign parameter preset applied to new simulations.
    #[serde(default)]
    pub defaults: CampaignInputs,
}

impl Config {
    /// Load config from the default location, falling back to built-in
    /// defaults when no file exists. Never writes.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "pse", "pse") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.pse/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.total_budget, 100_000.0);
        assert_eq!(config.defaults.taxes_pct, 18.33);
        assert_eq!(config.defaults.exchange_rate, 5.50);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_preset_keeps_remaining_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [defaults]
            total_budget = 250000.0
            profit_pct = 25.0
            "#,
        )
        .unwrap();

        assert_eq!(parsed.defaults.total_budget, 250_000.0);
        assert_eq!(parsed.defaults.profit_pct, 25.0);
        assert_eq!(parsed.defaults.taxes_pct, 18.33);
        assert_eq!(parsed.defaults.bid_sync_fee, 0.15);
    }
}
