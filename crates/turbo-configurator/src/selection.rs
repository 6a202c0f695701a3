//! Selection state and selection completeness.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Product;
use crate::ids::{AttributeId, ValueId};

/// The user's current, possibly partial, attribute selections.
///
/// Immutable: every transition returns a new state backed by a fresh
/// allocation, so observers can detect change either structurally (`==`) or
/// by identity ([`SelectionState::ptr_eq`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionState {
    selections: Arc<BTreeMap<AttributeId, ValueId>>,
}

impl SelectionState {
    /// The initial, empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new state with `attribute_id` set to `value`. `self` is unchanged.
    #[must_use]
    pub fn with(&self, attribute_id: AttributeId, value: ValueId) -> Self {
        self.with_all([(attribute_id, value)])
    }

    /// A new state with every change applied at once.
    #[must_use]
    pub fn with_all(&self, changes: impl IntoIterator<Item = (AttributeId, ValueId)>) -> Self {
        let mut next = BTreeMap::clone(&self.selections);
        next.extend(changes);
        Self {
            selections: Arc::new(next),
        }
    }

    /// Whether two states are the same published value.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.selections, &b.selections)
    }

    pub fn get(&self, attribute_id: &AttributeId) -> Option<&ValueId> {
        self.selections.get(attribute_id)
    }

    pub fn contains(&self, attribute_id: &AttributeId) -> bool {
        self.selections.contains_key(attribute_id)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttributeId, &ValueId)> {
        self.selections.iter()
    }
}

impl FromIterator<(AttributeId, ValueId)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (AttributeId, ValueId)>>(iter: I) -> Self {
        Self {
            selections: Arc::new(iter.into_iter().collect()),
        }
    }
}

/// Whether the product still needs selections before it can be added to cart.
///
/// Non-configurable products are never missing options. For configurable
/// products this compares counts only: it does not check that each declared
/// attribute id is among the selected keys.
pub fn is_missing_options(product: &Product, selections: &SelectionState) -> bool {
    if !product.is_configurable() {
        return false;
    }
    selections.len() < product.options().len()
}
