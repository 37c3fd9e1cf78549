//! Product entry form state.
//!
//! Holds the fields of the "add product" form between edits. Submitting takes
//! a draft out of the form and resets every field, whether or not the
//! subsequent create succeeds.

use crate::product::{Price, ProductDraft};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    product_name: String,
    brand: String,
    image: String,
    price: Price,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_product_name(&mut self, value: impl Into<String>) {
        self.product_name = value.into();
    }

    pub fn set_brand(&mut self, value: impl Into<String>) {
        self.brand = value.into();
    }

    pub fn set_image(&mut self, value: impl Into<String>) {
        self.image = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<Price>) {
        self.price = value.into();
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Build a draft from the current fields and clear the form.
    ///
    /// No validation: an empty form yields an empty draft.
    pub fn take_draft(&mut self) -> ProductDraft {
        let form = std::mem::take(self);
        ProductDraft {
            product_name: form.product_name,
            image: form.image,
            price: form.price,
            brand: form.brand,
        }
    }
}
