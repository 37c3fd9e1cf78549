//! Remote failure model.
//!
//! There is a single failure kind, "remote operation failed"; the variants
//! only record why, so callers can log or surface it uniformly.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("remote operation failed: network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("remote operation failed: status {0}: {1}")]
    Status(u16, String),

    /// The response body was not what the contract promises.
    #[error("remote operation failed: malformed response: {0}")]
    Decode(String),
}

impl RemoteError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status(code, _) => Some(*code),
            _ => None,
        }
    }
}

/// Catalog operation, for log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOperation {
    List,
    Create,
    Update,
    Delete,
}

impl CatalogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogOperation::List => "list",
            CatalogOperation::Create => "create",
            CatalogOperation::Update => "update",
            CatalogOperation::Delete => "delete",
        }
    }
}

impl core::fmt::Display for CatalogOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
