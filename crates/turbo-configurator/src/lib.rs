//! Configurable-product resolution engine for TurboCommerce.
//!
//! Given a product with configurable attributes (color, size, ...) and the
//! shopper's partial selections, this crate derives:
//!
//! - **Options**: the attribute id to attribute code index
//! - **Matching**: which variant, if any, the selections resolve to
//! - **Completeness**: whether every option has been selected
//! - **Media**: the gallery to show for the current state
//! - **Cart**: the add-to-cart payload and its availability gate
//!
//! Everything is synchronous and pure; [`ProductView`] holds the per-view
//! state and re-derives on demand.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_configurator::prelude::*;
//!
//! let mut view = ProductView::new(product, &EngineConfig::default())?;
//! view.select(AttributeId::new("93"), ValueId::new("52"))?;
//! view.select(AttributeId::new("144"), ValueId::new("167"))?;
//!
//! if !view.is_add_to_cart_disabled(&cart) {
//!     view.add_to_cart(&mut cart)?;
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod matcher;
pub mod media;
pub mod options;
pub mod selection;
pub mod swatch;
pub mod view;

pub use error::ConfiguratorError;
pub use ids::*;
pub use money::{Currency, Money};
pub use view::{ProductDetails, ProductView};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ConfiguratorError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        validate_product, ConfigurableOption, MediaEntry, OptionValue, Product, ProductType,
        Variant, VariantAttribute, VariantProduct,
    };

    // Resolution
    pub use crate::matcher::{find_matching_variant, VariantMatch};
    pub use crate::media::{resolve_media_entries, sort_for_display};
    pub use crate::options::{derive_option_codes, OptionCodes};
    pub use crate::selection::{is_missing_options, SelectionState};

    // Cart
    pub use crate::cart::{
        build_add_to_cart_payload, is_add_to_cart_disabled, AddToCartPayload, CartService,
        Quantity, SelectedOption,
    };

    // View
    pub use crate::config::{DuplicateVariantPolicy, EngineConfig, SwatchConfig};
    pub use crate::swatch::{hashed_swatch_color, SwatchColor, SwatchColorCache};
    pub use crate::view::{ProductDetails, ProductView};
}
