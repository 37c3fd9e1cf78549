//! Catalog domain module.
//!
//! Product attributes as the remote catalog service stores them, plus the
//! state of the product entry form. Pure data, no IO.

pub mod form;
pub mod product;

pub use form::ProductForm;
pub use product::{Price, Product, ProductDraft};
