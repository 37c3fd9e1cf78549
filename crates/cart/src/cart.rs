use serde::{Deserialize, Serialize};

use grocer_catalog::Product;
use grocer_core::entity::{find_by_id, find_by_id_mut};
use grocer_core::{Entity, ProductId};

use crate::quantity::Quantified;

/// Cart line: a copy of the product's attributes at add time plus the
/// committed quantity.
///
/// Later catalog edits do not reach an existing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal, if the price is numeric.
    pub fn subtotal(&self) -> Option<f64> {
        self.product
            .price
            .amount()
            .map(|amount| amount * f64::from(self.quantity))
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product.id
    }
}

impl Quantified for CartLine {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

/// Shopping cart. At most one line per product identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        find_by_id(&self.lines, id)
    }

    pub fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        find_by_id_mut(&mut self.lines, id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (what the navigation badge shows).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities over all lines.
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of line subtotals. Lines whose price is not numeric are skipped.
    pub fn total(&self) -> f64 {
        self.lines.iter().filter_map(CartLine::subtotal).sum()
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line for the same id (keeping that line's
    /// attribute copy), otherwise appends a new line.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        match self.line_mut(&product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl<'a> IntoIterator for &'a mut Cart {
    type Item = &'a mut CartLine;
    type IntoIter = core::slice::IterMut<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter_mut()
    }
}
