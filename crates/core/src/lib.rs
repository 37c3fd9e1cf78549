//! `grocer-core` — shared building blocks for the storefront crates.
//!
//! Pure domain primitives only: identifiers, the entity trait and the
//! domain error model. No IO lives here.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
