use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use grocer_catalog::{Product, ProductDraft};
use grocer_core::ProductId;

use crate::error::RemoteError;
use crate::remote::CatalogApi;

#[derive(Debug)]
struct Inner {
    products: Vec<Product>,
    next_id: u64,
    failures: VecDeque<RemoteError>,
}

/// In-process catalog service.
///
/// Intended for tests/dev. Assigns sequential integer ids like a
/// JSON-server backend, and can be told to fail upcoming calls.
#[derive(Debug)]
pub struct InMemoryCatalog {
    inner: Mutex<Inner>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Seed the collection. New ids continue after the largest numeric id.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products
            .iter()
            .filter_map(|p| match p.id {
                ProductId::Number(n) => Some(n),
                ProductId::Text(_) => None,
            })
            .max()
            .map_or(1, |max| max + 1);

        Self {
            inner: Mutex::new(Inner {
                products,
                next_id,
                failures: VecDeque::new(),
            }),
        }
    }

    /// Make the next call (of any kind) fail with `err`. Calls queue up.
    pub fn fail_next(&self, err: RemoteError) {
        self.lock().failures.push_back(err);
    }

    /// Current server-side collection.
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(id: &ProductId) -> RemoteError {
        RemoteError::Status(404, format!("product {id} not found"))
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn take_failure(&mut self) -> Result<(), RemoteError> {
        match self.failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Product>, RemoteError> {
        let mut inner = self.lock();
        inner.take_failure()?;
        Ok(inner.products.clone())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, RemoteError> {
        let mut inner = self.lock();
        inner.take_failure()?;

        let id = ProductId::Number(inner.next_id);
        inner.next_id += 1;

        let product = draft.clone().into_product(id);
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: &ProductId, draft: &ProductDraft) -> Result<Product, RemoteError> {
        let mut inner = self.lock();
        inner.take_failure()?;

        let slot = inner
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = draft.clone().into_product(id.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RemoteError> {
        let mut inner = self.lock();
        inner.take_failure()?;

        let before = inner.products.len();
        inner.products.retain(|p| &p.id != id);
        if inner.products.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
