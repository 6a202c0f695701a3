//! Property tests for the resolution engine.

use proptest::prelude::*;
use turbo_configurator::prelude::*;

// -- Strategy helpers --

/// A configurable product with `options` attributes of `values` values each
/// and a set of distinct variants.
fn arb_configurable() -> impl Strategy<Value = Product> {
    (1usize..4, 1usize..4).prop_flat_map(|(options, values)| {
        prop::collection::vec(prop::collection::vec(0..values, options), 1..6).prop_map(
            move |combinations| build_product(options, values, combinations.into_iter().collect()),
        )
    })
}

fn build_product(
    options: usize,
    values: usize,
    combinations: std::collections::BTreeSet<Vec<usize>>,
) -> Product {
    let mut product = Product::new("prop", "PROP", "Prop", Money::new(1000, Currency::USD));
    product.product_type = ProductType::Configurable;
    product.configurable_options = Some(
        (0..options)
            .map(|a| {
                (0..values).fold(
                    ConfigurableOption::new(format!("a{a}"), format!("code_{a}")),
                    |option, v| option.with_value(format!("v{v}"), format!("Value {v}")),
                )
            })
            .collect(),
    );
    product.variants = combinations
        .into_iter()
        .enumerate()
        .map(|(i, combination)| Variant {
            attributes: combination
                .iter()
                .enumerate()
                .map(|(a, v)| VariantAttribute::new(format!("a{a}"), format!("v{v}")))
                .collect(),
            product: VariantProduct::new(format!("PROP-{i}")),
        })
        .collect();
    product
}

fn arb_selections() -> impl Strategy<Value = SelectionState> {
    prop::collection::btree_map("a[0-5]", "v[0-3]", 0..6).prop_map(|map| {
        map.into_iter()
            .map(|(a, v)| (AttributeId::new(a), ValueId::new(v)))
            .collect()
    })
}

proptest! {
    #[test]
    fn simple_products_never_missing_or_matching(selections in arb_selections()) {
        let product = Product::new("mug", "MUG", "Mug", Money::new(900, Currency::USD));
        let codes = derive_option_codes(&product).unwrap();

        prop_assert!(!is_missing_options(&product, &selections));
        prop_assert_eq!(
            find_matching_variant(&codes, &selections, &product.variants),
            VariantMatch::NoMatch
        );
    }

    #[test]
    fn completeness_is_count_based(product in arb_configurable(), selections in arb_selections()) {
        let expected = selections.len() < product.options().len();
        prop_assert_eq!(is_missing_options(&product, &selections), expected);
    }

    #[test]
    fn option_codes_are_idempotent(product in arb_configurable()) {
        let first = derive_option_codes(&product).unwrap();
        let second = derive_option_codes(&product).unwrap();
        prop_assert_eq!(first.len(), product.options().len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn variant_values_select_that_variant(product in arb_configurable(), pick in any::<prop::sample::Index>()) {
        let codes = derive_option_codes(&product).unwrap();
        let chosen = &product.variants[pick.index(product.variants.len())];
        let selections: SelectionState = chosen
            .attributes
            .iter()
            .map(|a| (a.attribute_id.clone(), a.value_index.clone()))
            .collect();

        let matched = find_matching_variant(&codes, &selections, &product.variants).variant();
        prop_assert!(matched.is_some_and(|v| std::ptr::eq(v, chosen)));
        prop_assert!(!is_missing_options(&product, &selections));
    }

    #[test]
    fn media_is_base_unless_matched(product in arb_configurable(), selections in arb_selections()) {
        let codes = derive_option_codes(&product).unwrap();
        let media = resolve_media_entries(&product, &codes, &selections);
        if find_matching_variant(&codes, &selections, &product.variants).is_match() {
            prop_assert!(media.len() >= product.media_gallery_entries.len());
        } else {
            prop_assert_eq!(media, product.media_gallery_entries.clone());
        }
    }

    #[test]
    fn generated_products_validate(product in arb_configurable()) {
        prop_assert!(validate_product(&product, &EngineConfig::default()).is_ok());
    }
}
