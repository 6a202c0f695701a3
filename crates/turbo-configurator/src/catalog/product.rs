//! Product, option and variant types.

use crate::ids::{AttributeId, MediaId, ProductId, ValueId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product type discriminator, serialized as the storefront typename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductType {
    /// Purchasable as-is.
    #[default]
    #[serde(rename = "SimpleProduct")]
    Simple,
    /// Requires one value per configurable option before it resolves to a variant.
    #[serde(rename = "ConfigurableProduct")]
    Configurable,
    /// Non-physical product.
    #[serde(rename = "VirtualProduct")]
    Virtual,
    /// Downloadable product.
    #[serde(rename = "DownloadableProduct")]
    Downloadable,
    /// Bundle of multiple products.
    #[serde(rename = "BundleProduct")]
    Bundle,
    /// Group of standalone products.
    #[serde(rename = "GroupedProduct")]
    Grouped,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Simple => "SimpleProduct",
            ProductType::Configurable => "ConfigurableProduct",
            ProductType::Virtual => "VirtualProduct",
            ProductType::Downloadable => "DownloadableProduct",
            ProductType::Bundle => "BundleProduct",
            ProductType::Grouped => "GroupedProduct",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SimpleProduct" => Some(ProductType::Simple),
            "ConfigurableProduct" => Some(ProductType::Configurable),
            "VirtualProduct" => Some(ProductType::Virtual),
            "DownloadableProduct" => Some(ProductType::Downloadable),
            "BundleProduct" => Some(ProductType::Bundle),
            "GroupedProduct" => Some(ProductType::Grouped),
            _ => None,
        }
    }
}

/// A product as delivered by the catalog query for one product-detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Type discriminator.
    #[serde(rename = "__typename", default)]
    pub product_type: ProductType,
    /// Product name.
    pub name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Full description (may contain HTML).
    #[serde(default)]
    pub description: Option<String>,
    /// Regular price.
    pub price: Money,
    /// Configurable attributes, in display order. `None` when the catalog
    /// record omits the field, which is malformed for configurable products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurable_options: Option<Vec<ConfigurableOption>>,
    /// Concrete purchasable combinations.
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Base media gallery.
    #[serde(default)]
    pub media_gallery_entries: Vec<MediaEntry>,
}

impl Product {
    /// Create a new simple product with no options or media.
    pub fn new(
        id: impl Into<ProductId>,
        sku: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            product_type: ProductType::Simple,
            name: name.into(),
            sku: sku.into(),
            description: None,
            price,
            configurable_options: None,
            variants: Vec::new(),
            media_gallery_entries: Vec::new(),
        }
    }

    /// Whether the product requires option selections before purchase.
    pub fn is_configurable(&self) -> bool {
        self.product_type == ProductType::Configurable
    }

    /// Declared configurable options; empty when none were sent.
    pub fn options(&self) -> &[ConfigurableOption] {
        self.configurable_options.as_deref().unwrap_or_default()
    }

    /// Look up a configurable option by attribute id.
    pub fn option(&self, attribute_id: &AttributeId) -> Option<&ConfigurableOption> {
        self.options().iter().find(|o| &o.attribute_id == attribute_id)
    }
}

/// A configurable attribute of a product (e.g. color) and its allowed values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigurableOption {
    /// Attribute identifier, unique within the product.
    pub attribute_id: AttributeId,
    /// Attribute code used as the cart payload key (e.g. "fashion_color").
    pub attribute_code: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Allowed values, in display order.
    #[serde(default)]
    pub values: Vec<OptionValue>,
}

impl ConfigurableOption {
    pub fn new(attribute_id: impl Into<AttributeId>, attribute_code: impl Into<String>) -> Self {
        Self {
            attribute_id: attribute_id.into(),
            attribute_code: attribute_code.into(),
            label: String::new(),
            values: Vec::new(),
        }
    }

    /// Append an allowed value.
    pub fn with_value(mut self, value_index: impl Into<ValueId>, label: impl Into<String>) -> Self {
        self.values.push(OptionValue {
            value_index: value_index.into(),
            label: label.into(),
        });
        self
    }

    /// Whether `value` is one of the allowed values.
    pub fn allows(&self, value: &ValueId) -> bool {
        self.values.iter().any(|v| &v.value_index == value)
    }
}

/// One allowed value of a configurable option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct OptionValue {
    pub value_index: ValueId,
    #[serde(default)]
    pub label: String,
}

/// A concrete attribute-value combination of a configurable product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// One entry per configurable option.
    pub attributes: Vec<VariantAttribute>,
    /// The purchasable child product.
    pub product: VariantProduct,
}

impl Variant {
    /// Value this variant carries for `attribute_id`, if any.
    pub fn value_for(&self, attribute_id: &AttributeId) -> Option<&ValueId> {
        self.attributes
            .iter()
            .find(|a| &a.attribute_id == attribute_id)
            .map(|a| &a.value_index)
    }

    /// Whether the variant carries a value for `attribute_id`.
    pub fn has_attribute(&self, attribute_id: &AttributeId) -> bool {
        self.value_for(attribute_id).is_some()
    }
}

/// A variant's value for one attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VariantAttribute {
    pub attribute_id: AttributeId,
    /// Attribute code, when the catalog sends it alongside the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub value_index: ValueId,
}

impl VariantAttribute {
    pub fn new(attribute_id: impl Into<AttributeId>, value_index: impl Into<ValueId>) -> Self {
        Self {
            attribute_id: attribute_id.into(),
            code: None,
            value_index: value_index.into(),
        }
    }
}

/// Product record embedded in a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantProduct {
    /// Variant SKU.
    pub sku: String,
    /// Variant name (e.g. "Shirt - Red / M").
    #[serde(default)]
    pub name: Option<String>,
    /// Price override, if the variant is priced differently.
    #[serde(default)]
    pub price: Option<Money>,
    /// Variant-specific media.
    #[serde(default)]
    pub media_gallery_entries: Vec<MediaEntry>,
}

impl VariantProduct {
    pub fn new(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            name: None,
            price: None,
            media_gallery_entries: Vec::new(),
        }
    }
}

/// A media gallery entry (image or other asset).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MediaEntry {
    /// Entry identifier.
    pub id: MediaId,
    /// File path relative to the media root.
    pub file: String,
    /// Alt text / caption.
    #[serde(default)]
    pub label: Option<String>,
    /// Sort position within its gallery.
    #[serde(default)]
    pub position: i32,
    /// Hidden from the gallery.
    #[serde(default)]
    pub disabled: bool,
}

impl MediaEntry {
    pub fn new(id: impl Into<MediaId>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file: file.into(),
            label: None,
            position: 0,
            disabled: false,
        }
    }

    pub fn at_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}
