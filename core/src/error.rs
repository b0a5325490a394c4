//! Error types for the catalog API client.
//!
//! # Design
//! Every failed interaction with the store is a `FetchError`. The workflows
//! never branch on the variant: a list failure and a create failure each map
//! to one generic user-facing message. The variants exist so logs can say
//! what went wrong.

use thiserror::Error;

/// A failed request against the product store.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The store answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl FetchError {
    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
