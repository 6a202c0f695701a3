//! Variant matching over partial, unordered selections.

use crate::catalog::Variant;
use crate::options::OptionCodes;
use crate::selection::SelectionState;

/// Outcome of matching selections against a product's variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariantMatch<'a> {
    /// The variant matching every current selection.
    Matched(&'a Variant),
    /// No variant matches; not an error.
    NoMatch,
}

impl<'a> VariantMatch<'a> {
    pub fn variant(&self) -> Option<&'a Variant> {
        match self {
            VariantMatch::Matched(variant) => Some(variant),
            VariantMatch::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, VariantMatch::Matched(_))
    }
}

impl<'a> From<Option<&'a Variant>> for VariantMatch<'a> {
    fn from(variant: Option<&'a Variant>) -> Self {
        variant.map_or(VariantMatch::NoMatch, VariantMatch::Matched)
    }
}

/// Find the variant whose attribute values equal the current selections.
///
/// A variant matches when it carries a value for every attribute in
/// `option_codes`, each of those attributes is selected with that value, and
/// every selected attribute belongs to the variant. Selections for attributes
/// the variant does not carry (stale keys from another product) never match.
///
/// Empty selections, or an empty index, yield [`VariantMatch::NoMatch`]. When
/// several variants match, the first in input order is returned.
pub fn find_matching_variant<'a>(
    option_codes: &OptionCodes,
    selections: &SelectionState,
    variants: &'a [Variant],
) -> VariantMatch<'a> {
    if selections.is_empty() || option_codes.is_empty() {
        return VariantMatch::NoMatch;
    }

    variants
        .iter()
        .find(|variant| matches_variant(option_codes, selections, variant))
        .into()
}

fn matches_variant(option_codes: &OptionCodes, selections: &SelectionState, variant: &Variant) -> bool {
    let fully_selected = option_codes.attribute_ids().all(|attribute_id| {
        match (variant.value_for(attribute_id), selections.get(attribute_id)) {
            (Some(expected), Some(selected)) => expected == selected,
            _ => false,
        }
    });

    fully_selected
        && selections
            .iter()
            .all(|(attribute_id, _)| variant.has_attribute(attribute_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        ConfigurableOption, Product, ProductType, VariantAttribute, VariantProduct,
    };
    use crate::ids::{AttributeId, ValueId};
    use crate::money::{Currency, Money};
    use crate::options::derive_option_codes;

    fn variant(sku: &str, color: &str, size: &str) -> Variant {
        Variant {
            attributes: vec![
                VariantAttribute::new("1", color),
                VariantAttribute::new("2", size),
            ],
            product: VariantProduct::new(sku),
        }
    }

    fn shirt() -> Product {
        let mut product = Product::new("shirt", "SHIRT", "Shirt", Money::new(2000, Currency::USD));
        product.product_type = ProductType::Configurable;
        product.configurable_options = Some(vec![
            ConfigurableOption::new("1", "color"),
            ConfigurableOption::new("2", "size"),
        ]);
        product.variants = vec![
            variant("SHIRT-RED-M", "red", "M"),
            variant("SHIRT-RED-L", "red", "L"),
            variant("SHIRT-BLUE-M", "blue", "M"),
        ];
        product
    }

    fn select(pairs: &[(&str, &str)]) -> SelectionState {
        pairs
            .iter()
            .map(|(a, v)| (AttributeId::new(*a), ValueId::new(*v)))
            .collect()
    }

    #[test]
    fn test_empty_selection_is_no_match() {
        let product = shirt();
        let codes = derive_option_codes(&product).unwrap();
        let result = find_matching_variant(&codes, &SelectionState::new(), &product.variants);
        assert_eq!(result, VariantMatch::NoMatch);
    }

    #[test]
    fn test_partial_selection_is_no_match() {
        let product = shirt();
        let codes = derive_option_codes(&product).unwrap();
        let result = find_matching_variant(&codes, &select(&[("1", "red")]), &product.variants);
        assert!(!result.is_match());
    }

    #[test]
    fn test_full_selection_matches() {
        let product = shirt();
        let codes = derive_option_codes(&product).unwrap();
        let result = find_matching_variant(
            &codes,
            &select(&[("2", "L"), ("1", "red")]),
            &product.variants,
        );
        assert_eq!(result.variant().unwrap().product.sku, "SHIRT-RED-L");
    }

    #[test]
    fn test_unknown_combination_is_no_match() {
        let product = shirt();
        let codes = derive_option_codes(&product).unwrap();
        let result = find_matching_variant(
            &codes,
            &select(&[("1", "blue"), ("2", "L")]),
            &product.variants,
        );
        assert_eq!(result, VariantMatch::NoMatch);
    }

    #[test]
    fn test_stale_selection_key_never_matches() {
        let product = shirt();
        let codes = derive_option_codes(&product).unwrap();
        let result = find_matching_variant(
            &codes,
            &select(&[("1", "red"), ("2", "M"), ("77", "old")]),
            &product.variants,
        );
        assert_eq!(result, VariantMatch::NoMatch);
    }

    #[test]
    fn test_incomplete_variant_is_not_matchable() {
        let mut product = shirt();
        product.variants = vec![Variant {
            attributes: vec![VariantAttribute::new("1", "red")],
            product: VariantProduct::new("SHIRT-RED"),
        }];
        let codes = derive_option_codes(&product).unwrap();
        let result = find_matching_variant(
            &codes,
            &select(&[("1", "red"), ("2", "M")]),
            &product.variants,
        );
        assert_eq!(result, VariantMatch::NoMatch);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let mut product = shirt();
        product.variants.push(variant("SHIRT-RED-M-DUP", "red", "M"));
        let codes = derive_option_codes(&product).unwrap();
        let result = find_matching_variant(
            &codes,
            &select(&[("1", "red"), ("2", "M")]),
            &product.variants,
        );
        assert_eq!(result.variant().unwrap().product.sku, "SHIRT-RED-M");
    }

    #[test]
    fn test_simple_product_never_matches() {
        let product = Product::new("mug", "MUG", "Mug", Money::new(900, Currency::USD));
        let codes = derive_option_codes(&product).unwrap();
        let result = find_matching_variant(&codes, &select(&[("1", "red")]), &product.variants);
        assert_eq!(result, VariantMatch::NoMatch);
    }
}
