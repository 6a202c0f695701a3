//! Purchase quantity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfiguratorError;

/// A positive item quantity.
///
/// Only a lower bound is enforced; stock and per-item limits belong to the
/// cart service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    /// Validate a quantity. Zero and negatives are rejected.
    pub fn new(value: i64) -> Result<Self, ConfiguratorError> {
        if value <= 0 {
            return Err(ConfiguratorError::InvalidQuantity(value));
        }
        Ok(Self(value))
    }

    /// Parse quantity input text. Non-integers such as `"1.5"` are rejected.
    pub fn parse(input: &str) -> Result<Self, ConfiguratorError> {
        let value = input
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfiguratorError::InvalidQuantityInput(input.to_string()))?;
        Self::new(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ConfiguratorError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
