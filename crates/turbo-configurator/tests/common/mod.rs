//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use turbo_configurator::prelude::*;

/// Cart double that records payloads and exposes a settable in-flight flag.
#[derive(Default)]
pub struct RecordingCart {
    pub adding: bool,
    pub payloads: Vec<AddToCartPayload>,
}

impl CartService for RecordingCart {
    fn is_adding_item(&self) -> bool {
        self.adding
    }

    fn add_item(&mut self, payload: AddToCartPayload) {
        self.payloads.push(payload);
    }
}

pub fn attr(id: &str) -> AttributeId {
    AttributeId::new(id)
}

pub fn value(id: &str) -> ValueId {
    ValueId::new(id)
}

/// Options {1: color, 2: size}, one variant {1: red, 2: M} with its own image.
pub fn tee() -> Arc<Product> {
    let mut product = Product::new("tee", "TEE", "Tee", Money::new(2500, Currency::USD));
    product.product_type = ProductType::Configurable;
    product.configurable_options = Some(vec![
        ConfigurableOption::new("1", "color").with_value("red", "Red"),
        ConfigurableOption::new("2", "size").with_value("M", "M"),
    ]);
    product.media_gallery_entries = vec![MediaEntry::new("tee", "/t/e/tee.jpg")];

    let mut red_m = VariantProduct::new("TEE-RED-M");
    red_m.media_gallery_entries = vec![MediaEntry::new("tee-red", "/t/e/tee-red.jpg")];
    product.variants = vec![Variant {
        attributes: vec![VariantAttribute::new("1", "red"), VariantAttribute::new("2", "M")],
        product: red_m,
    }];

    Arc::new(product)
}

pub fn mug() -> Arc<Product> {
    let mut product = Product::new("mug", "MUG", "Mug", Money::new(900, Currency::USD));
    product.media_gallery_entries = vec![MediaEntry::new("mug", "/m/u/mug.jpg")];
    Arc::new(product)
}
