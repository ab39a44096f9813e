use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Where the CLI keeps its JSON files, the local-storage substitute.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_inventory_path")]
    pub inventory_path: String,
    /// Path to a JSON recipe catalog; the built-in catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<String>,
    #[serde(default = "default_karma_path")]
    pub karma_path: String,
    #[serde(default = "default_donations_path")]
    pub donations_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            inventory_path: default_inventory_path(),
            catalog_path: None,
            karma_path: default_karma_path(),
            donations_path: default_donations_path(),
        }
    }
}

fn default_inventory_path() -> String {
    "inventory.json".to_string()
}

fn default_karma_path() -> String {
    "karma.json".to_string()
}

fn default_donations_path() -> String {
    "donations.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Layer an optional TOML file under `WASTENOT_`-prefixed environment
    /// variables; everything has a serde default, so no file is required.
    pub fn load(path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(&path));
        } else {
            builder = builder.add_source(File::with_name("wastenot").required(false));
        }
        builder
            .add_source(Environment::with_prefix("WASTENOT").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = Config::default();
        assert_eq!(config.storage.inventory_path, "inventory.json");
        assert!(config.storage.catalog_path.is_none());
        assert_eq!(config.observability.log_level, "info");
    }
}
