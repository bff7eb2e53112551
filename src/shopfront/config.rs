use crate::error::{Result, ShopError};
use crate::model::MinorUnits;
use crate::money::DEFAULT_CURRENCY_GLYPH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// 1500 major units.
pub const DEFAULT_SHIPPING_FEE: MinorUnits = 150_000;
const DEFAULT_CATALOG: &str = "products.json";

pub const CONFIG_KEYS: &[&str] = &["shipping-fee", "currency-glyph", "catalog"];

/// Configuration for the shop, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Flat fee added to any non-empty cart, in minor units
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: MinorUnits,

    /// Prefix used when displaying amounts
    #[serde(default = "default_currency_glyph")]
    pub currency_glyph: String,

    /// Path of the product catalog, relative to the working directory
    #[serde(default = "default_catalog")]
    pub catalog: String,
}

fn default_shipping_fee() -> MinorUnits {
    DEFAULT_SHIPPING_FEE
}

fn default_currency_glyph() -> String {
    DEFAULT_CURRENCY_GLYPH.to_string()
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shipping_fee: DEFAULT_SHIPPING_FEE,
            currency_glyph: default_currency_glyph(),
            catalog: default_catalog(),
        }
    }
}

impl ShopConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShopConfig = serde_json::from_str(&content)
            .map_err(|e| ShopError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "shipping-fee" => Some(self.shipping_fee.to_string()),
            "currency-glyph" => Some(self.currency_glyph.clone()),
            "catalog" => Some(self.catalog.clone()),
            _ => None,
        }
    }

    /// Set a key from its textual value. Errors are user-facing strings.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "shipping-fee" => {
                self.shipping_fee = value.trim().parse().map_err(|_| {
                    format!(
                        "Invalid shipping-fee '{}': expected a whole number of minor units",
                        value
                    )
                })?;
            }
            "currency-glyph" => self.currency_glyph = value.to_string(),
            "catalog" => {
                if value.trim().is_empty() {
                    return Err("catalog path cannot be empty".to_string());
                }
                self.catalog = value.to_string();
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (*key, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.shipping_fee, 150_000);
        assert_eq!(config.currency_glyph, "₦");
        assert_eq!(config.catalog, "products.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShopConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ShopConfig::default();
        config.set("shipping-fee", "250000").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ShopConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.shipping_fee, 250_000);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"currency_glyph": "$"}"#).unwrap();

        let config = ShopConfig::load(dir.path()).unwrap();
        assert_eq!(config.currency_glyph, "$");
        assert_eq!(config.shipping_fee, DEFAULT_SHIPPING_FEE);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = ShopConfig::default();
        assert!(config.set("shipping-fee", "15.00").is_err());
        assert!(config.set("catalog", " ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_entries_follow_key_order() {
        let keys: Vec<_> = ShopConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, CONFIG_KEYS);
    }
}
