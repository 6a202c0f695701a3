//! Product catalog module.
//!
//! Contains the product, option, variant and media types the engine reads,
//! and the consistency checks applied when a view receives a product.

mod product;
mod validation;

pub use product::{
    ConfigurableOption, MediaEntry, OptionValue, Product, ProductType, Variant, VariantAttribute,
    VariantProduct,
};
pub use validation::validate_product;
