//! Add-to-cart module.
//!
//! Contains the quantity type, the payload handed to the cart service, and
//! the add-to-cart availability gate.

mod payload;
mod quantity;
mod service;

pub use payload::{build_add_to_cart_payload, AddToCartPayload, SelectedOption};
pub use quantity::Quantity;
pub use service::{is_add_to_cart_disabled, CartService};
