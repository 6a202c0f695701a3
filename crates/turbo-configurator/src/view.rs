//! Per-view state for a product detail page.
//!
//! A [`ProductView`] owns the selection state and quantity of one product
//! view and derives everything else from them on demand.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cart::{
    build_add_to_cart_payload, is_add_to_cart_disabled, CartService, Quantity,
};
use crate::catalog::{validate_product, MediaEntry, Product};
use crate::config::EngineConfig;
use crate::error::ConfiguratorError;
use crate::ids::{AttributeId, ValueId};
use crate::matcher::{find_matching_variant, VariantMatch};
use crate::media::resolve_media_entries;
use crate::money::Money;
use crate::options::{derive_option_codes, OptionCodes};
use crate::selection::{is_missing_options, SelectionState};
use crate::swatch::{SwatchColor, SwatchColorCache};

/// Product fields the detail page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: Money,
}

/// State of one product detail view.
#[derive(Debug, Clone)]
pub struct ProductView {
    product: Arc<Product>,
    option_codes: OptionCodes,
    selections: SelectionState,
    quantity: Quantity,
    initial_quantity: Quantity,
    swatches: SwatchColorCache,
    config: EngineConfig,
}

impl ProductView {
    /// Open a view for `product`.
    ///
    /// Fails with a data consistency error when the product data is
    /// malformed (see [`validate_product`]).
    pub fn new(product: Arc<Product>, config: &EngineConfig) -> Result<Self, ConfiguratorError> {
        validate_product(&product, config)?;
        let option_codes = derive_option_codes(&product)?;
        let initial_quantity = Quantity::new(config.initial_quantity)?;

        debug!(
            product_id = %product.id,
            options = option_codes.len(),
            variants = product.variants.len(),
            "opened product view"
        );

        Ok(Self {
            product,
            option_codes,
            selections: SelectionState::new(),
            quantity: initial_quantity,
            initial_quantity,
            swatches: SwatchColorCache::new(config.swatch),
            config: config.clone(),
        })
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn option_codes(&self) -> &OptionCodes {
        &self.option_codes
    }

    /// The current published selection state.
    pub fn selections(&self) -> &SelectionState {
        &self.selections
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Swatch color for an option value, memoized for this view.
    pub fn swatch_color(&mut self, value: &ValueId) -> SwatchColor {
        self.swatches.color_for(value)
    }

    pub fn swatches(&self) -> &SwatchColorCache {
        &self.swatches
    }

    /// Select `value` for `attribute_id`, publishing a new selection state.
    ///
    /// Attributes that are not configurable options of this product are
    /// rejected and the current state is kept.
    pub fn select(
        &mut self,
        attribute_id: AttributeId,
        value: ValueId,
    ) -> Result<&SelectionState, ConfiguratorError> {
        self.select_many([(attribute_id, value)])
    }

    /// Apply several selections as a single new state.
    ///
    /// Either every change is applied or, if any attribute is unknown, none.
    pub fn select_many(
        &mut self,
        changes: impl IntoIterator<Item = (AttributeId, ValueId)>,
    ) -> Result<&SelectionState, ConfiguratorError> {
        let changes: Vec<(AttributeId, ValueId)> = changes.into_iter().collect();

        if let Some((unknown, _)) = changes
            .iter()
            .find(|(attribute_id, _)| !self.option_codes.contains(attribute_id))
        {
            warn!(
                product_id = %self.product.id,
                attribute_id = %unknown,
                "rejected selection for unknown attribute"
            );
            return Err(ConfiguratorError::data(format!(
                "attribute {} is not a configurable option of product {}",
                unknown, self.product.id
            )));
        }

        for (attribute_id, value) in &changes {
            debug!(
                product_id = %self.product.id,
                attribute_id = %attribute_id,
                value = %value,
                "selection changed"
            );
        }

        self.selections = self.selections.with_all(changes);
        Ok(&self.selections)
    }

    /// Select from a multi-value picker: the last value wins. An empty set
    /// leaves the state untouched.
    pub fn select_last(
        &mut self,
        attribute_id: AttributeId,
        values: impl IntoIterator<Item = ValueId>,
    ) -> Result<&SelectionState, ConfiguratorError> {
        match values.into_iter().last() {
            Some(value) => self.select(attribute_id, value),
            None => Ok(&self.selections),
        }
    }

    /// Set the quantity. Invalid values are rejected and the previous
    /// quantity is kept.
    pub fn set_quantity(&mut self, value: i64) -> Result<Quantity, ConfiguratorError> {
        match Quantity::new(value) {
            Ok(quantity) => {
                debug!(product_id = %self.product.id, quantity = value, "quantity changed");
                self.quantity = quantity;
                Ok(quantity)
            }
            Err(e) => {
                warn!(
                    product_id = %self.product.id,
                    rejected = value,
                    kept = self.quantity.get(),
                    "rejected quantity"
                );
                Err(e)
            }
        }
    }

    /// Replace the product shown by this view.
    ///
    /// A different product id resets selections, quantity, option codes and
    /// memoized swatch colors.
    /// The same id keeps them; option codes are memoized per product id.
    /// Malformed data is rejected and the view keeps its current product.
    pub fn set_product(&mut self, product: Arc<Product>) -> Result<(), ConfiguratorError> {
        validate_product(&product, &self.config)?;

        if product.id == self.product.id {
            self.product = product;
            return Ok(());
        }

        let option_codes = derive_option_codes(&product)?;
        debug!(
            from = %self.product.id,
            to = %product.id,
            "product changed, resetting view state"
        );
        self.product = product;
        self.option_codes = option_codes;
        self.selections = SelectionState::new();
        self.quantity = self.initial_quantity;
        self.swatches.clear();
        Ok(())
    }

    pub fn is_missing_options(&self) -> bool {
        is_missing_options(&self.product, &self.selections)
    }

    pub fn matching_variant(&self) -> VariantMatch<'_> {
        find_matching_variant(&self.option_codes, &self.selections, &self.product.variants)
    }

    pub fn media_gallery_entries(&self) -> Vec<MediaEntry> {
        resolve_media_entries(&self.product, &self.option_codes, &self.selections)
    }

    pub fn product_details(&self) -> ProductDetails {
        ProductDetails {
            name: self.product.name.clone(),
            sku: self.product.sku.clone(),
            description: self.product.description.clone(),
            price: self.product.price,
        }
    }

    pub fn is_add_to_cart_disabled(&self, cart: &impl CartService) -> bool {
        is_add_to_cart_disabled(cart.is_adding_item(), self.is_missing_options())
    }

    /// Build the payload for the current state and hand it to `cart`.
    pub fn add_to_cart(&self, cart: &mut impl CartService) -> Result<(), ConfiguratorError> {
        let is_adding_item = cart.is_adding_item();
        let is_missing_options = self.is_missing_options();
        if is_add_to_cart_disabled(is_adding_item, is_missing_options) {
            return Err(ConfiguratorError::AddToCartUnavailable {
                is_adding_item,
                is_missing_options,
            });
        }

        let payload = build_add_to_cart_payload(
            &self.product,
            self.quantity,
            &self.option_codes,
            &self.selections,
        )?;

        info!(
            product_id = %self.product.id,
            product_type = payload.product_type.as_str(),
            quantity = payload.quantity.get(),
            options = payload.options.len(),
            "adding item to cart"
        );
        cart.add_item(payload);
        Ok(())
    }
}
