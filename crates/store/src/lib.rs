//! `grocer-store`
//!
//! **Responsibility:** client-side storefront state mirrored to a remote
//! product catalog.
//!
//! This crate provides:
//! - The remote catalog seam ([`CatalogApi`]) with HTTP and in-memory backends
//! - Id-keyed storefront state (catalog, pending quantities, cart)
//! - The [`Storefront`] controller, the only mutation entry point
//!
//! The remote service is the authority for products; local product state only
//! changes after a successful response.

pub mod config;
pub mod error;
pub mod remote;
pub mod state;
pub mod storefront;

pub use config::{ConfigError, StoreConfig};
pub use error::{CatalogOperation, RemoteError};
pub use remote::{CatalogApi, HttpCatalog, InMemoryCatalog};
pub use state::{ProductRecord, StorefrontState};
pub use storefront::Storefront;
