use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use grocer_catalog::{Product, ProductDraft};
use grocer_core::ProductId;

use crate::config::StoreConfig;
use crate::error::RemoteError;
use crate::remote::CatalogApi;

const PRODUCTS: &str = "products";

/// JSON-over-HTTP client for the remote catalog.
///
/// Timeouts are left to the `reqwest` defaults.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpCatalog {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    async fn send(req: RequestBuilder) -> Result<Response, RemoteError> {
        let resp = req
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            return Err(RemoteError::Status(status, resp.text().await.unwrap_or_default()));
        }

        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, RemoteError> {
        resp.json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalog {
    async fn list(&self) -> Result<Vec<Product>, RemoteError> {
        let url = self.config.endpoint([PRODUCTS]);
        tracing::debug!(%url, "listing products");
        let resp = Self::send(self.client.get(url)).await?;
        Self::decode(resp).await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, RemoteError> {
        let url = self.config.endpoint([PRODUCTS]);
        tracing::debug!(%url, name = %draft.product_name, "creating product");
        let resp = Self::send(self.client.post(url).json(draft)).await?;
        Self::decode(resp).await
    }

    async fn update(&self, id: &ProductId, draft: &ProductDraft) -> Result<Product, RemoteError> {
        let url = self.config.endpoint([PRODUCTS.to_string(), id.to_string()]);
        tracing::debug!(%url, "updating product");
        let resp = Self::send(self.client.put(url).json(draft)).await?;
        Self::decode(resp).await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RemoteError> {
        let url = self.config.endpoint([PRODUCTS.to_string(), id.to_string()]);
        tracing::debug!(%url, "deleting product");
        // Any success body (empty, `{}`, the deleted record) is an ack.
        Self::send(self.client.delete(url)).await?;
        Ok(())
    }
}
