//! In-memory storefront state.
//!
//! One id-keyed map holds every known product together with its pending
//! quantity, so the catalog and the selection can never drift apart. The cart
//! is kept alongside it.

use std::collections::HashMap;

use grocer_cart::{Adjustment, Cart, Quantified, QuantityScope, QuantitySelection, adjust};
use grocer_catalog::Product;
use grocer_core::{DomainError, DomainResult, Entity, ProductId};

/// A catalog product plus its pending "quantity to add".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    product: Product,
    pending: u32,
    /// Insertion order, so listings follow the server's order.
    seq: u64,
}

impl ProductRecord {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product.id
    }
}

impl Quantified for ProductRecord {
    fn quantity(&self) -> u32 {
        self.pending
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.pending = quantity;
    }
}

#[derive(Debug, Clone, Default)]
pub struct StorefrontState {
    records: HashMap<ProductId, ProductRecord>,
    next_seq: u64,
    cart: Cart,
}

impl StorefrontState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- catalog reconciliation (applied from successful responses only) --

    /// Replace the whole catalog; every product starts with a pending
    /// quantity of zero. The cart is left alone.
    ///
    /// Ids are expected to be unique. If a listing repeats one, the later
    /// entry replaces the earlier, so the local catalog is shorter.
    pub fn replace_catalog(&mut self, products: Vec<Product>) {
        self.records.clear();
        self.next_seq = 0;
        for product in products {
            let seq = self.bump_seq();
            let id = product.id.clone();
            let previous = self.records.insert(
                id.clone(),
                ProductRecord {
                    product,
                    pending: 0,
                    seq,
                },
            );
            if previous.is_some() {
                tracing::warn!(%id, "duplicate product id in catalog listing; keeping the later entry");
            }
        }
    }

    /// Append a freshly created product (pending quantity zero).
    ///
    /// If the id is already known the attributes are replaced in place.
    pub fn insert_product(&mut self, product: Product) {
        match self.records.get_mut(&product.id) {
            Some(record) => record.product = product,
            None => {
                let seq = self.bump_seq();
                self.records.insert(
                    product.id.clone(),
                    ProductRecord {
                        product,
                        pending: 0,
                        seq,
                    },
                );
            }
        }
    }

    /// Replace the product stored under `id` with the server's version.
    ///
    /// Position and pending quantity are kept, also when the server hands back
    /// a different id. Returns `false` and changes nothing when `id` is not
    /// known locally, or when the returned id already belongs to another
    /// local product.
    pub fn replace_product(&mut self, id: &ProductId, product: Product) -> bool {
        if !self.records.contains_key(id) {
            return false;
        }
        if &product.id != id {
            if self.records.contains_key(&product.id) {
                tracing::warn!(
                    requested = %id,
                    returned = %product.id,
                    "server returned an id held by another product; update not applied"
                );
                return false;
            }
            tracing::warn!(requested = %id, returned = %product.id, "server changed product id on update");
        }
        let Some(mut record) = self.records.remove(id) else {
            return false;
        };
        record.product = product;
        self.records.insert(record.product.id.clone(), record);
        true
    }

    /// Forget a product and its pending quantity. Cart lines are not touched.
    pub fn remove_product(&mut self, id: &ProductId) -> bool {
        self.records.remove(id).is_some()
    }

    // -- reads --

    pub fn record(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.records.get(id)
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.record(id).map(ProductRecord::product)
    }

    pub fn pending_quantity(&self, id: &ProductId) -> Option<u32> {
        self.record(id).map(ProductRecord::pending)
    }

    /// Records in server order.
    pub fn records(&self) -> Vec<&ProductRecord> {
        let mut records: Vec<&ProductRecord> = self.records.values().collect();
        records.sort_by_key(|r| r.seq);
        records
    }

    pub fn products(&self) -> Vec<Product> {
        self.records()
            .into_iter()
            .map(|r| r.product.clone())
            .collect()
    }

    pub fn quantity_selections(&self) -> Vec<QuantitySelection> {
        self.records()
            .into_iter()
            .map(|r| QuantitySelection {
                id: r.product.id.clone(),
                quantity: r.pending,
            })
            .collect()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // -- quantity selector --

    /// Step the quantity of `id` in the collection picked by `scope`.
    ///
    /// Unknown ids are a no-op; returns whether an entry was found.
    pub fn adjust_quantity(
        &mut self,
        id: &ProductId,
        scope: QuantityScope,
        adjustment: Adjustment,
    ) -> bool {
        match scope {
            QuantityScope::Catalog => adjust(self.records.get_mut(id), id, adjustment),
            QuantityScope::Cart => adjust(&mut self.cart, id, adjustment),
        }
    }

    pub fn increment(&mut self, id: &ProductId, scope: QuantityScope) -> bool {
        self.adjust_quantity(id, scope, Adjustment::Increment)
    }

    pub fn decrement(&mut self, id: &ProductId, scope: QuantityScope) -> bool {
        self.adjust_quantity(id, scope, Adjustment::Decrement)
    }

    // -- cart --

    /// Move the pending quantity of `id` into the cart.
    ///
    /// The pending quantity itself is left as is. Returns the cart line's
    /// quantity after the merge.
    pub fn add_to_cart(&mut self, id: &ProductId) -> DomainResult<u32> {
        let record = self
            .records
            .get(id)
            .ok_or_else(|| DomainError::unknown_product(id.clone()))?;

        if record.pending == 0 {
            return Err(DomainError::validation(format!(
                "Please select a quantity for {}",
                record.product.product_name
            )));
        }

        self.cart.add(&record.product, record.pending);
        Ok(self.cart.line(id).map_or(0, |line| line.quantity))
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        self.cart.remove(id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_catalog::Price;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id: ProductId::Number(id),
            product_name: name.to_string(),
            image: "x".to_string(),
            price: Price::from(2u64),
            brand: "A".to_string(),
        }
    }

    fn loaded(products: Vec<Product>) -> StorefrontState {
        let mut state = StorefrontState::new();
        state.replace_catalog(products);
        state
    }

    #[test]
    fn load_resets_every_selection_to_zero_and_keeps_order() {
        let mut state = loaded(vec![product(3, "Tea"), product(1, "Milk"), product(2, "Bread")]);
        state.increment(&ProductId::Number(1), QuantityScope::Catalog);

        state.replace_catalog(vec![product(3, "Tea"), product(1, "Milk")]);

        assert_eq!(
            state.quantity_selections(),
            vec![
                QuantitySelection { id: ProductId::Number(3), quantity: 0 },
                QuantitySelection { id: ProductId::Number(1), quantity: 0 },
            ]
        );
        assert_eq!(state.pending_quantity(&ProductId::Number(2)), None);
    }

    #[test]
    fn reload_does_not_touch_the_cart() {
        let mut state = loaded(vec![product(1, "Milk")]);
        state.increment(&ProductId::Number(1), QuantityScope::Catalog);
        state.add_to_cart(&ProductId::Number(1)).unwrap();

        state.replace_catalog(Vec::new());

        assert_eq!(state.cart().line_count(), 1);
    }

    #[test]
    fn add_to_cart_with_zero_pending_names_the_product() {
        let mut state = loaded(vec![product(1, "Milk")]);

        let err = state.add_to_cart(&ProductId::Number(1)).unwrap_err();

        assert_eq!(err, DomainError::validation("Please select a quantity for Milk"));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn add_to_cart_for_unknown_product_names_the_id() {
        let mut state = loaded(vec![product(1, "Milk")]);

        let err = state.add_to_cart(&ProductId::Number(9)).unwrap_err();

        assert_eq!(err, DomainError::UnknownProduct(ProductId::Number(9)));
        assert_eq!(err.to_string(), "no product with id 9");
        assert!(state.cart().is_empty());
    }

    #[test]
    fn add_to_cart_merges_and_keeps_pending() {
        let mut state = loaded(vec![product(1, "Milk")]);
        let id = ProductId::Number(1);
        for _ in 0..3 {
            state.increment(&id, QuantityScope::Catalog);
        }

        assert_eq!(state.add_to_cart(&id), Ok(3));
        assert_eq!(state.add_to_cart(&id), Ok(6));
        assert_eq!(state.pending_quantity(&id), Some(3));
        assert_eq!(state.cart().line_count(), 1);
    }

    #[test]
    fn scopes_adjust_different_collections() {
        let mut state = loaded(vec![product(1, "Milk")]);
        let id = ProductId::Number(1);
        state.increment(&id, QuantityScope::Catalog);
        state.add_to_cart(&id).unwrap();

        state.increment(&id, QuantityScope::Cart);
        state.increment(&id, QuantityScope::Cart);
        state.decrement(&id, QuantityScope::Catalog);

        assert_eq!(state.cart().line(&id).unwrap().quantity, 3);
        assert_eq!(state.pending_quantity(&id), Some(0));
    }

    #[test]
    fn adjusting_unknown_ids_is_a_noop() {
        let mut state = loaded(vec![product(1, "Milk")]);
        let ghost = ProductId::Number(7);

        assert!(!state.increment(&ghost, QuantityScope::Catalog));
        assert!(!state.decrement(&ghost, QuantityScope::Cart));
        assert_eq!(state.quantity_selections().len(), 1);
        assert!(state.cart().is_empty());
    }

    #[test]
    fn created_product_is_appended_with_zero_pending() {
        let mut state = loaded(vec![product(1, "Milk")]);
        state.insert_product(product(2, "Eggs"));

        let names: Vec<_> = state.products().into_iter().map(|p| p.product_name).collect();
        assert_eq!(names, vec!["Milk", "Eggs"]);
        assert_eq!(state.pending_quantity(&ProductId::Number(2)), Some(0));
    }

    #[test]
    fn replace_product_keeps_position_and_pending() {
        let mut state = loaded(vec![product(1, "Milk"), product(2, "Bread")]);
        let id = ProductId::Number(1);
        state.increment(&id, QuantityScope::Catalog);

        assert!(state.replace_product(&id, product(1, "Whole milk")));

        let names: Vec<_> = state.products().into_iter().map(|p| p.product_name).collect();
        assert_eq!(names, vec!["Whole milk", "Bread"]);
        assert_eq!(state.pending_quantity(&id), Some(1));
    }

    #[test]
    fn replace_product_follows_a_changed_id() {
        let mut state = loaded(vec![product(1, "Milk"), product(2, "Bread")]);
        let old = ProductId::Number(1);
        state.increment(&old, QuantityScope::Catalog);

        assert!(state.replace_product(&old, product(5, "Milk renamed")));

        let names: Vec<_> = state.products().into_iter().map(|p| p.product_name).collect();
        assert_eq!(names, vec!["Milk renamed", "Bread"]);
        assert_eq!(state.pending_quantity(&old), None);
        assert_eq!(state.pending_quantity(&ProductId::Number(5)), Some(1));
    }

    #[test]
    fn replace_product_onto_another_products_id_is_rejected() {
        let mut state = loaded(vec![product(1, "Milk"), product(2, "Bread")]);
        state.increment(&ProductId::Number(2), QuantityScope::Catalog);

        assert!(!state.replace_product(&ProductId::Number(1), product(2, "Milk renamed")));

        assert_eq!(state.products(), vec![product(1, "Milk"), product(2, "Bread")]);
        assert_eq!(state.pending_quantity(&ProductId::Number(2)), Some(1));
    }

    #[test]
    fn duplicate_ids_in_listing_keep_the_later_entry() {
        let state = loaded(vec![product(1, "Milk"), product(1, "Milk2"), product(2, "Bread")]);

        let names: Vec<_> = state.products().into_iter().map(|p| p.product_name).collect();
        assert_eq!(names, vec!["Milk2", "Bread"]);
        assert_eq!(state.quantity_selections().len(), 2);
    }

    #[test]
    fn replace_unknown_product_changes_nothing() {
        let mut state = loaded(vec![product(1, "Milk")]);
        assert!(!state.replace_product(&ProductId::Number(5), product(5, "Ghost")));
        assert_eq!(state.products(), vec![product(1, "Milk")]);
    }

    #[test]
    fn catalog_edits_do_not_reach_cart_lines() {
        let mut state = loaded(vec![product(1, "Milk")]);
        let id = ProductId::Number(1);
        state.increment(&id, QuantityScope::Catalog);
        state.add_to_cart(&id).unwrap();

        state.replace_product(&id, product(1, "Renamed"));
        state.remove_product(&id);

        assert_eq!(state.cart().lines()[0].product.product_name, "Milk");
    }

    #[test]
    fn remove_and_clear_cart() {
        let mut state = loaded(vec![product(1, "Milk"), product(2, "Bread")]);
        for id in [ProductId::Number(1), ProductId::Number(2)] {
            state.increment(&id, QuantityScope::Catalog);
            state.add_to_cart(&id).unwrap();
        }

        assert!(!state.remove_from_cart(&ProductId::Number(3)));
        assert!(state.remove_from_cart(&ProductId::Number(1)));
        assert_eq!(state.cart().line_count(), 1);

        state.clear_cart();
        state.remove_from_cart(&ProductId::Number(2));
        assert!(state.cart().is_empty());
    }
}
