//! Error types for seeding a product index.
//!
//! Every variant is fatal for a run. Nothing is retried.

use thiserror::Error;

/// Errors from provisioning the index and loading documents into it.
#[derive(Debug, Clone, Error)]
pub enum SeedError {
    /// The store could not be reached or queried.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The store rejected the create-index call.
    #[error("Index creation error: {0}")]
    CreateIndexError(String),

    /// The bulk request failed as a whole.
    #[error("Bulk write error: {0}")]
    BulkWriteError(String),

    /// The bulk request went through but some items were rejected.
    #[error("Bulk write rejected {failed} of {total} documents")]
    PartialBulkFailure { failed: usize, total: usize },

    /// Configuration could not be loaded or is invalid.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// A document could not be encoded for the store.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Input rejected before talking to the store.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl SeedError {
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    pub fn create_index(msg: impl Into<String>) -> Self {
        Self::CreateIndexError(msg.into())
    }

    pub fn bulk_write(msg: impl Into<String>) -> Self {
        Self::BulkWriteError(msg.into())
    }

    pub fn partial_bulk(failed: usize, total: usize) -> Self {
        Self::PartialBulkFailure { failed, total }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
