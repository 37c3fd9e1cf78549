use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use grocer_core::{Entity, ProductId};

/// Price as captured by the entry form.
///
/// The remote service stores whatever the client sent, so a price may come
/// back as a JSON number or as a string. Both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(Number),
    Text(String),
}

impl Price {
    /// Numeric price from a float. `None` for NaN/infinite input.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self::Amount)
    }

    /// Numeric value of the price, if it has one.
    ///
    /// Text prices are parsed leniently (surrounding whitespace ignored).
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(n) => n.as_f64(),
            Price::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::Amount(Number::from(0))
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::Amount(Number::from(value))
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self::Amount(Number::from(value))
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Price {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Price::Amount(n) => core::fmt::Display::fmt(n, f),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// A catalog product, as returned by the remote service.
///
/// The service stores whatever clients sent, so attributes may be missing or
/// `null`; those read as empty strings and a zero price rather than failing
/// the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Attributes of this product without its identifier (seed for an edit).
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            product_name: self.product_name.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
            brand: self.brand.clone(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Product attributes sent on create/update (the server owns `id`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_name: String,
    pub image: String,
    pub price: Price,
    pub brand: String,
}

impl ProductDraft {
    /// Attach a server-assigned identifier.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            product_name: self.product_name,
            image: self.image,
            price: self.price,
            brand: self.brand,
        }
    }
}
