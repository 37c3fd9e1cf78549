//! Storefront controller.
//!
//! Owns the storefront state and is its only mutation entry point. Remote
//! calls never hold the state lock while in flight: each response is applied
//! when it arrives, so overlapping requests resolve last-response-wins.
//! In-flight requests are not cancellable.

use std::sync::{Mutex, MutexGuard, PoisonError};

use grocer_cart::{Cart, QuantityScope, QuantitySelection};
use grocer_catalog::{Product, ProductDraft, ProductForm};
use grocer_core::{DomainResult, ProductId};

use crate::config::StoreConfig;
use crate::error::{CatalogOperation, RemoteError};
use crate::remote::{CatalogApi, HttpCatalog};
use crate::state::StorefrontState;

pub struct Storefront<A> {
    api: A,
    state: Mutex<StorefrontState>,
}

impl Storefront<HttpCatalog> {
    /// Storefront backed by the HTTP catalog at `config`.
    pub fn http(config: StoreConfig) -> Self {
        Self::new(HttpCatalog::new(config))
    }
}

impl<A: CatalogApi> Storefront<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(StorefrontState::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the full catalog and reset every pending quantity to zero.
    ///
    /// Returns the number of products loaded. On failure the current state
    /// is kept.
    pub async fn load(&self) -> Result<usize, RemoteError> {
        let products = self
            .api
            .list()
            .await
            .inspect_err(|e| log_failure(CatalogOperation::List, e))?;

        let count = products.len();
        self.state().replace_catalog(products);
        tracing::info!(count, "catalog loaded");
        Ok(count)
    }

    /// Create a product remotely and append the server's copy.
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, RemoteError> {
        let product = self
            .api
            .create(&draft)
            .await
            .inspect_err(|e| log_failure(CatalogOperation::Create, e))?;

        self.state().insert_product(product.clone());
        tracing::info!(id = %product.id, name = %product.product_name, "product created");
        Ok(product)
    }

    /// Submit the entry form: the form is cleared, then its draft is created.
    pub async fn submit_form(&self, form: &mut ProductForm) -> Result<Product, RemoteError> {
        let draft = form.take_draft();
        self.create(draft).await
    }

    /// Update a product remotely and replace the local entry with the
    /// server's representation.
    pub async fn update(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, RemoteError> {
        let product = self
            .api
            .update(id, &draft)
            .await
            .inspect_err(|e| log_failure(CatalogOperation::Update, e))?;

        if self.state().replace_product(id, product.clone()) {
            tracing::info!(%id, "product updated");
        } else {
            tracing::debug!(%id, "update not applied to the local catalog");
        }
        Ok(product)
    }

    /// Delete a product remotely, then drop it locally.
    pub async fn delete(&self, id: &ProductId) -> Result<(), RemoteError> {
        self.api
            .delete(id)
            .await
            .inspect_err(|e| log_failure(CatalogOperation::Delete, e))?;

        self.state().remove_product(id);
        tracing::info!(%id, "product deleted");
        Ok(())
    }

    pub fn increment(&self, id: &ProductId, scope: QuantityScope) -> bool {
        self.state().increment(id, scope)
    }

    /// Floored at zero; unknown ids are ignored.
    pub fn decrement(&self, id: &ProductId, scope: QuantityScope) -> bool {
        self.state().decrement(id, scope)
    }

    /// Commit the pending quantity of `id` to the cart.
    ///
    /// A zero pending quantity or an unknown product yields a
    /// [`DomainError`](grocer_core::DomainError) meant to be shown to the user.
    pub fn add_to_cart(&self, id: &ProductId) -> DomainResult<u32> {
        self.state().add_to_cart(id).inspect_err(|e| {
            tracing::warn!(%id, "add to cart rejected: {e}");
        })
    }

    pub fn remove_from_cart(&self, id: &ProductId) -> bool {
        self.state().remove_from_cart(id)
    }

    pub fn clear_cart(&self) {
        self.state().clear_cart();
    }

    pub fn products(&self) -> Vec<Product> {
        self.state().products()
    }

    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.state().product(id).cloned()
    }

    pub fn quantity_selections(&self) -> Vec<QuantitySelection> {
        self.state().quantity_selections()
    }

    pub fn pending_quantity(&self, id: &ProductId) -> Option<u32> {
        self.state().pending_quantity(id)
    }

    pub fn cart(&self) -> Cart {
        self.state().cart().clone()
    }

    pub fn cart_line_count(&self) -> usize {
        self.state().cart().line_count()
    }

    /// Run `f` against a consistent view of the whole state.
    pub fn with_state<R>(&self, f: impl FnOnce(&StorefrontState) -> R) -> R {
        f(&*self.state())
    }

    fn state(&self) -> MutexGuard<'_, StorefrontState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_failure(operation: CatalogOperation, err: &RemoteError) {
    tracing::error!(%operation, "catalog request failed: {err}");
}
