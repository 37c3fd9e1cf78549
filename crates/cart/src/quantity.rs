//! Quantity bookkeeping shared by pending selections and cart lines.
//!
//! Both collections expose the same "adjust quantity of entry X" operation;
//! the caller picks the collection through [`QuantityScope`].

use serde::{Deserialize, Serialize};

use grocer_core::{Entity, ProductId};

/// Which collection a quantity adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityScope {
    /// The pending "quantity to add" next to a catalog product.
    Catalog,
    /// The committed quantity of a cart line.
    Cart,
}

/// Anything carrying a non-negative quantity.
pub trait Quantified {
    fn quantity(&self) -> u32;
    fn set_quantity(&mut self, quantity: u32);
}

/// A single step applied to a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Increment,
    /// Floored at zero; decrementing zero leaves it at zero.
    Decrement,
}

impl Adjustment {
    pub fn apply<T: Quantified + ?Sized>(self, item: &mut T) {
        let current = item.quantity();
        let next = match self {
            Adjustment::Increment => current.saturating_add(1),
            Adjustment::Decrement => current.saturating_sub(1),
        };
        item.set_quantity(next);
    }
}

/// Apply `adjustment` to the entry with `id`.
///
/// Returns `false` (and changes nothing) when no entry matches.
pub fn adjust<'a, T, I>(items: I, id: &T::Id, adjustment: Adjustment) -> bool
where
    T: Entity + Quantified + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    match items.into_iter().find(|item| item.id() == id) {
        Some(item) => {
            adjustment.apply(item);
            true
        }
        None => false,
    }
}

/// Snapshot of a product's pending quantity (not yet in the cart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantitySelection {
    pub id: ProductId,
    pub quantity: u32,
}
