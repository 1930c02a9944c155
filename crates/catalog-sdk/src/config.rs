//! Catalog configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use catalog_cache::{ImageResolver, DEFAULT_ASSET_BASE};
use catalog_data::GatewayConfig;
use serde::{Deserialize, Serialize};

use crate::LoggingConfig;

/// Top-level configuration, one section per concern.
///
/// ```toml
/// [api]
/// base_url = "http://localhost:8080"
/// timeout_secs = 10
///
/// [assets]
/// base_path = "/static/covers/"
///
/// [logging]
/// level = "info,catalog_cache=debug"
/// format = "human"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Backend connection.
    #[serde(default)]
    pub api: GatewayConfig,

    /// Local image assets.
    #[serde(default)]
    pub assets: AssetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CatalogConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse an embedded TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to a file, in the format its extension names.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply `CATALOG_API_URL` from the process environment.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.api = self.api.with_overrides_from(lookup);
        self
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn default_base_path() -> String {
    DEFAULT_ASSET_BASE.to_string()
}

/// Where bare image filenames are served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

impl AssetConfig {
    pub fn resolver(&self) -> ImageResolver {
        ImageResolver::new(self.base_path.clone())
    }
}
