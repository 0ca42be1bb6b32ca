//! The shopping cart: line items, mutation operations, derived totals.
//!
//! The cart is session-local state. It is created empty when the session
//! starts, mutated through the four operations on [`CartStore`] (add,
//! remove, update quantity, clear), and cleared by checkout after an order
//! is placed. Nothing is persisted.
//!
//! [`SharedCart`] wraps the store for injection into multiple observers
//! (tab badge, cart screen, checkout) and publishes a recomputed
//! [`CartSummary`] after every mutation.

mod line;
mod shared;
mod store;

pub use line::CartLine;
pub use shared::SharedCart;
pub use store::{CartStore, CartSummary};
