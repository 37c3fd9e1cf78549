//! Cart domain module.
//!
//! Cart lines with merge-on-add, and the quantity contract shared by the
//! cart and the per-product pending selection. Deterministic in-memory logic
//! only (no IO, no HTTP).

pub mod cart;
pub mod quantity;

pub use cart::{Cart, CartLine};
pub use quantity::{Adjustment, Quantified, QuantityScope, QuantitySelection, adjust};
