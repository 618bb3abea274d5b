//! Creates the target index when it is missing.

use tracing::{debug, info};

use crate::errors::SeedError;
use crate::schema::IndexSchema;
use crate::store::SearchStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Created,
    AlreadyExists,
}

impl IndexStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexStatus::Created => "created",
            IndexStatus::AlreadyExists => "already exists",
        }
    }
}

/// Makes sure `index` exists, creating it with `schema` if it does not.
///
/// An existing index is left untouched: its mapping is neither compared with
/// `schema` nor updated. At most one create call is issued.
pub async fn ensure_index<S>(
    store: &S,
    index: &str,
    schema: &IndexSchema,
) -> Result<IndexStatus, SeedError>
where
    S: SearchStore + ?Sized,
{
    if index.trim().is_empty() {
        return Err(SeedError::validation("index name must not be empty"));
    }

    if store.index_exists(index).await? {
        debug!(index = %index, "Index found, skipping creation");
        return Ok(IndexStatus::AlreadyExists);
    }

    let body = schema.to_create_body();
    store.create_index(index, &body).await?;
    info!(index = %index, fields = schema.fields().len(), "Index created");

    Ok(IndexStatus::Created)
}
