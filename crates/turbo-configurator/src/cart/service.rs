//! Cart service boundary and the add-to-cart gate.

use crate::cart::AddToCartPayload;

/// The cart mutation collaborator.
///
/// The engine never awaits the mutation; it only reads the in-flight flag
/// and hands over payloads.
pub trait CartService {
    /// Whether a cart mutation is currently in flight.
    fn is_adding_item(&self) -> bool;

    /// Start adding `payload` to the cart.
    fn add_item(&mut self, payload: AddToCartPayload);
}

/// Add to cart is disabled while a mutation is in flight or options are missing.
pub fn is_add_to_cart_disabled(is_adding_item: bool, is_missing_options: bool) -> bool {
    is_adding_item || is_missing_options
}
