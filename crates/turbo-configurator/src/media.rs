//! Media gallery resolution.

use crate::catalog::{MediaEntry, Product};
use crate::matcher::find_matching_variant;
use crate::options::OptionCodes;
use crate::selection::SelectionState;

/// Media entries to expose for the current selections.
///
/// Once the selections resolve to a variant, that variant's entries come
/// first and the base gallery follows. Otherwise the base gallery is
/// returned unchanged. Recomputed on every call.
pub fn resolve_media_entries(
    product: &Product,
    option_codes: &OptionCodes,
    selections: &SelectionState,
) -> Vec<MediaEntry> {
    if !product.is_configurable() || selections.is_empty() {
        return product.media_gallery_entries.clone();
    }

    match find_matching_variant(option_codes, selections, &product.variants).variant() {
        Some(variant) => variant
            .product
            .media_gallery_entries
            .iter()
            .chain(&product.media_gallery_entries)
            .cloned()
            .collect(),
        None => product.media_gallery_entries.clone(),
    }
}

/// Gallery presentation order: disabled entries dropped, the rest stably
/// sorted by position.
pub fn sort_for_display(entries: &[MediaEntry]) -> Vec<MediaEntry> {
    let mut visible: Vec<MediaEntry> = entries.iter().filter(|e| !e.disabled).cloned().collect();
    visible.sort_by_key(|e| e.position);
    visible
}
