//! Product identifiers.
//!
//! Identifiers are assigned by the remote catalog service. Depending on the
//! backend they arrive as JSON integers or JSON strings; both shapes are kept
//! verbatim so that they are sent back exactly as received.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl ProductId {
    pub fn number(n: u64) -> Self {
        Self::Number(n)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductId::Number(n) => core::fmt::Display::fmt(n, f),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        // "007" stays textual so it formats back the same way.
        if let Ok(n) = s.parse::<u64>() {
            if n.to_string() == s {
                return Ok(Self::Number(n));
            }
        }
        Ok(Self::Text(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_integer_and_string_ids_from_json() {
        let n: ProductId = serde_json::from_str("7").unwrap();
        let s: ProductId = serde_json::from_str("\"a1b2\"").unwrap();

        assert_eq!(n, ProductId::Number(7));
        assert_eq!(s, ProductId::text("a1b2"));
        assert_eq!(serde_json::to_string(&n).unwrap(), "7");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"a1b2\"");
    }

    #[test]
    fn parses_digits_as_number_and_rest_as_text() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::Number(42));
        assert_eq!("x-9".parse::<ProductId>().unwrap(), ProductId::text("x-9"));
        assert!(matches!(
            "  ".parse::<ProductId>(),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn display_is_the_bare_value() {
        assert_eq!(ProductId::Number(3).to_string(), "3");
        assert_eq!(ProductId::text("abc").to_string(), "abc");
    }
}
