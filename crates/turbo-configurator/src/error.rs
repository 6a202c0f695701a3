//! Configurator error types.

use thiserror::Error;

/// Errors that can occur while resolving a configurable product.
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    /// Product data contradicts itself (missing options, incomplete variants,
    /// selections or codes that do not belong to the product).
    #[error("Data consistency error: {0}")]
    DataConsistency(String),

    /// Quantity is not a positive integer.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity input could not be read as an integer.
    #[error("Invalid quantity input: {0:?}")]
    InvalidQuantityInput(String),

    /// Add to cart was requested while the action is disabled.
    #[error(
        "Add to cart unavailable (adding item: {is_adding_item}, missing options: {is_missing_options})"
    )]
    AddToCartUnavailable {
        is_adding_item: bool,
        is_missing_options: bool,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConfiguratorError {
    pub(crate) fn data(message: impl Into<String>) -> Self {
        ConfiguratorError::DataConsistency(message.into())
    }
}

impl From<serde_json::Error> for ConfiguratorError {
    fn from(e: serde_json::Error) -> Self {
        ConfiguratorError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for ConfiguratorError {
    fn from(e: toml::de::Error) -> Self {
        ConfiguratorError::Config(e.to_string())
    }
}
