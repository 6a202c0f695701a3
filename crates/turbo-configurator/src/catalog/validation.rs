//! Consistency checks run when a view receives product data.
//!
//! Resolution itself is total; malformed catalog data is reported here,
//! once, instead of surfacing as a silent "no match" later.

use std::collections::HashSet;

use tracing::warn;

use crate::catalog::{Product, Variant};
use crate::config::{DuplicateVariantPolicy, EngineConfig};
use crate::error::ConfiguratorError;
use crate::ids::{AttributeId, ValueId};

/// Validate `product` against the engine configuration.
///
/// Non-configurable products always pass. A configurable product must carry
/// an option list (possibly empty), its attribute ids must be unique, and
/// every variant must carry exactly one value for each declared attribute.
pub fn validate_product(product: &Product, config: &EngineConfig) -> Result<(), ConfiguratorError> {
    if !product.is_configurable() {
        return Ok(());
    }

    let Some(options) = &product.configurable_options else {
        warn!(product_id = %product.id, "configurable product is missing configurable_options");
        return Err(ConfiguratorError::data(format!(
            "configurable product {} is missing configurable_options",
            product.id
        )));
    };

    let mut declared = HashSet::new();
    for option in options {
        if !declared.insert(&option.attribute_id) {
            return Err(ConfiguratorError::data(format!(
                "product {} declares attribute {} more than once",
                product.id, option.attribute_id
            )));
        }
    }

    let mut combinations: HashSet<Vec<(&AttributeId, &ValueId)>> = HashSet::new();
    for (index, variant) in product.variants.iter().enumerate() {
        validate_variant(product, variant, index, config)?;

        let key = combination_key(product, variant);
        if !combinations.insert(key) {
            match config.duplicate_variants {
                DuplicateVariantPolicy::FirstMatch => {
                    warn!(
                        product_id = %product.id,
                        sku = %variant.product.sku,
                        "duplicate variant combination, first variant in catalog order wins"
                    );
                }
                DuplicateVariantPolicy::Reject => {
                    return Err(ConfiguratorError::data(format!(
                        "variant {} of product {} duplicates an earlier attribute combination",
                        variant.product.sku, product.id
                    )));
                }
            }
        }
    }

    Ok(())
}

fn validate_variant(
    product: &Product,
    variant: &Variant,
    index: usize,
    config: &EngineConfig,
) -> Result<(), ConfiguratorError> {
    let mut seen = HashSet::new();
    for attribute in &variant.attributes {
        let Some(option) = product.option(&attribute.attribute_id) else {
            return Err(ConfiguratorError::data(format!(
                "variant {} ({}) carries unknown attribute {}",
                index, variant.product.sku, attribute.attribute_id
            )));
        };
        if !seen.insert(&attribute.attribute_id) {
            return Err(ConfiguratorError::data(format!(
                "variant {} ({}) carries attribute {} more than once",
                index, variant.product.sku, attribute.attribute_id
            )));
        }
        // An option sent without its value list constrains nothing.
        if config.validate_variant_values
            && !option.values.is_empty()
            && !option.allows(&attribute.value_index)
        {
            return Err(ConfiguratorError::data(format!(
                "variant {} ({}) uses value {} not allowed for {}",
                index, variant.product.sku, attribute.value_index, option.attribute_code
            )));
        }
    }

    if let Some(missing) = product
        .options()
        .iter()
        .find(|o| !variant.has_attribute(&o.attribute_id))
    {
        warn!(
            product_id = %product.id,
            sku = %variant.product.sku,
            attribute_id = %missing.attribute_id,
            "variant is missing an expected attribute"
        );
        return Err(ConfiguratorError::data(format!(
            "variant {} ({}) is missing attribute {}",
            index, variant.product.sku, missing.attribute_code
        )));
    }

    Ok(())
}

/// Attribute combination in declared option order.
fn combination_key<'a>(product: &'a Product, variant: &'a Variant) -> Vec<(&'a AttributeId, &'a ValueId)> {
    product
        .options()
        .iter()
        .filter_map(|o| variant.value_for(&o.attribute_id).map(|v| (&o.attribute_id, v)))
        .collect()
}
