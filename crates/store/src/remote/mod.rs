//! Remote catalog service seam.

mod http;
mod in_memory;

pub use http::HttpCatalog;
pub use in_memory::InMemoryCatalog;

use grocer_catalog::{Product, ProductDraft};
use grocer_core::ProductId;

use crate::error::RemoteError;

/// CRUD over the remote `products` collection.
///
/// Implementations report every failure as a [`RemoteError`]; they never
/// retry and never touch local state.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /products`
    async fn list(&self) -> Result<Vec<Product>, RemoteError>;

    /// `POST /products`; the service assigns the identifier.
    async fn create(&self, draft: &ProductDraft) -> Result<Product, RemoteError>;

    /// `PUT /products/{id}`; returns the service's representation.
    async fn update(&self, id: &ProductId, draft: &ProductDraft) -> Result<Product, RemoteError>;

    /// `DELETE /products/{id}`
    async fn delete(&self, id: &ProductId) -> Result<(), RemoteError>;
}
