//! Boundary between the seeding routine and the search engine.
//!
//! The routine never builds a connection itself. It is handed something that
//! implements [`SearchStore`], which is `EsClient` in the binary and an
//! in-memory recorder in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SeedError;
use crate::models::bulk::{BulkIndexAction, BulkResponse};

#[async_trait]
pub trait SearchStore: Send + Sync {
    /// Whether an index with this name exists.
    ///
    /// A transport failure or an unexpected status is a `ConnectionError`.
    async fn index_exists(&self, index: &str) -> Result<bool, SeedError>;

    /// Create the index with the given body (`{"mappings": ...}`).
    async fn create_index(&self, index: &str, body: &Value) -> Result<(), SeedError>;

    /// Submit all actions as one bulk request.
    ///
    /// `Ok` means the request as a whole was accepted. Individual items may
    /// still have failed; inspect the returned [`BulkResponse`].
    async fn bulk(&self, actions: &[BulkIndexAction]) -> Result<BulkResponse, SeedError>;
}
