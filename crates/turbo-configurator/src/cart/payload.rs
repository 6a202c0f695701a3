//! Add-to-cart payload construction.

use std::sync::Arc;

use serde::Serialize;

use crate::cart::Quantity;
use crate::catalog::{Product, ProductType};
use crate::error::ConfiguratorError;
use crate::ids::{AttributeId, ValueId};
use crate::matcher::find_matching_variant;
use crate::options::OptionCodes;
use crate::selection::SelectionState;

/// Payload handed to the cart service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddToCartPayload {
    /// The product being added.
    pub item: Arc<Product>,
    /// Type discriminator, taken from the product.
    pub product_type: ProductType,
    /// Quantity to add.
    pub quantity: Quantity,
    /// Selected options, configurable products only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectedOption>,
    /// Parent SKU, when the selections resolve to a variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_sku: Option<String>,
    /// SKU of the resolved variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_sku: Option<String>,
}

/// One selected option, keyed by attribute code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedOption {
    pub attribute_id: AttributeId,
    pub attribute_code: String,
    pub value_index: ValueId,
}

/// Build the add-to-cart payload for the current view state.
///
/// Configurable products are annotated with one [`SelectedOption`] per
/// selection, in declared option order. A selection whose attribute has no
/// code in `option_codes` is a data consistency error.
pub fn build_add_to_cart_payload(
    product: &Arc<Product>,
    quantity: Quantity,
    option_codes: &OptionCodes,
    selections: &SelectionState,
) -> Result<AddToCartPayload, ConfiguratorError> {
    let mut payload = AddToCartPayload {
        item: Arc::clone(product),
        product_type: product.product_type,
        quantity,
        options: Vec::new(),
        parent_sku: None,
        variant_sku: None,
    };

    if !product.is_configurable() {
        return Ok(payload);
    }

    let mut options = Vec::with_capacity(selections.len());
    for (attribute_id, value_index) in selections.iter() {
        let Some(code) = option_codes.get(attribute_id) else {
            return Err(ConfiguratorError::data(format!(
                "selected attribute {} has no option code on product {}",
                attribute_id, product.id
            )));
        };
        options.push(SelectedOption {
            attribute_id: attribute_id.clone(),
            attribute_code: code.to_string(),
            value_index: value_index.clone(),
        });
    }
    options.sort_by_key(|o| option_codes.position(&o.attribute_id));
    payload.options = options;

    if let Some(variant) = find_matching_variant(option_codes, selections, &product.variants).variant() {
        payload.parent_sku = Some(product.sku.clone());
        payload.variant_sku = Some(variant.product.sku.clone());
    }

    Ok(payload)
}
