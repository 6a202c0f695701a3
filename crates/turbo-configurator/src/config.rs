//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfiguratorError;

/// Configuration for product views created by this engine.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Quantity a new view starts with.
    #[serde(default = "default_initial_quantity")]
    pub initial_quantity: i64,

    /// What to do when two variants claim the same attribute combination.
    #[serde(default)]
    pub duplicate_variants: DuplicateVariantPolicy,

    /// Require each variant value to be one of the option's allowed values.
    #[serde(default = "default_true")]
    pub validate_variant_values: bool,

    /// Swatch color derivation.
    #[serde(default)]
    pub swatch: SwatchConfig,
}

fn default_initial_quantity() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_quantity: default_initial_quantity(),
            duplicate_variants: DuplicateVariantPolicy::default(),
            validate_variant_values: true,
            swatch: SwatchConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load config from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfiguratorError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfiguratorError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: EngineConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfiguratorError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfiguratorError> {
        if self.initial_quantity <= 0 {
            return Err(ConfiguratorError::Config(format!(
                "initial_quantity must be positive, got {}",
                self.initial_quantity
            )));
        }
        if self.swatch.saturation > 100 || self.swatch.lightness > 100 {
            return Err(ConfiguratorError::Config(
                "swatch saturation and lightness are percentages (0-100)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Handling of ambiguous variant data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateVariantPolicy {
    /// Keep the catalog as-is; the first variant in input order wins.
    #[default]
    FirstMatch,
    /// Refuse to open a view for a product with duplicate combinations.
    Reject,
}

/// Swatch color parameters (HSL percentages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwatchConfig {
    #[serde(default = "default_saturation")]
    pub saturation: u8,
    #[serde(default = "default_lightness")]
    pub lightness: u8,
}

fn default_saturation() -> u8 {
    60
}

fn default_lightness() -> u8 {
    75
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            saturation: default_saturation(),
            lightness: default_lightness(),
        }
    }
}
