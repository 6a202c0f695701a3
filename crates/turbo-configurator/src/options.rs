//! Option code index: attribute id to attribute code, in declared order.

use serde::Serialize;

use crate::catalog::Product;
use crate::error::ConfiguratorError;
use crate::ids::AttributeId;

/// Ordered mapping from configurable attribute id to attribute code.
///
/// Empty for non-configurable products. Derived once per product identity
/// and held by the view for its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionCodes {
    entries: Vec<(AttributeId, String)>,
}

impl OptionCodes {
    /// An empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute code for `attribute_id`.
    pub fn get(&self, attribute_id: &AttributeId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == attribute_id)
            .map(|(_, code)| code.as_str())
    }

    /// Declared position of `attribute_id`.
    pub fn position(&self, attribute_id: &AttributeId) -> Option<usize> {
        self.entries.iter().position(|(id, _)| id == attribute_id)
    }

    pub fn contains(&self, attribute_id: &AttributeId) -> bool {
        self.position(attribute_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute ids in declared order.
    pub fn attribute_ids(&self) -> impl Iterator<Item = &AttributeId> {
        self.entries.iter().map(|(id, _)| id)
    }

    /// `(attribute id, code)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeId, &str)> {
        self.entries.iter().map(|(id, code)| (id, code.as_str()))
    }
}

/// Derive the option code index for `product`.
///
/// Returns an empty index for non-configurable products and for an empty
/// option list. A configurable product whose option list is absent, or
/// declares an attribute id twice, is a data consistency error.
pub fn derive_option_codes(product: &Product) -> Result<OptionCodes, ConfiguratorError> {
    if !product.is_configurable() {
        return Ok(OptionCodes::new());
    }

    let Some(options) = &product.configurable_options else {
        return Err(ConfiguratorError::data(format!(
            "configurable product {} is missing configurable_options",
            product.id
        )));
    };

    let mut codes = OptionCodes::new();
    for option in options {
        if codes.contains(&option.attribute_id) {
            return Err(ConfiguratorError::data(format!(
                "product {} declares attribute {} more than once",
                product.id, option.attribute_id
            )));
        }
        codes
            .entries
            .push((option.attribute_id.clone(), option.attribute_code.clone()));
    }

    Ok(codes)
}
