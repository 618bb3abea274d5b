use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use es_seed_products::models::bulk::{
    BulkIndexAction, BulkItem, BulkItemError, BulkItemResult, BulkResponse,
};
use es_seed_products::{SearchStore, SeedError};
use serde_json::Value;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct Index {
    pub body: Value,
    pub documents: Vec<Value>,
}

#[derive(Default)]
pub struct Calls {
    pub exists: usize,
    pub create: usize,
    pub bulk: usize,
}

/// In-memory store that keeps every index and document it is sent.
#[derive(Clone, Default)]
pub struct MockStore {
    pub indices: Arc<Mutex<HashMap<String, Index>>>,
    pub calls: Arc<Mutex<Calls>>,
    pub unreachable: bool,
    /// Index calls succeed, the bulk request itself fails.
    pub fail_bulk: bool,
    /// Product ids whose insert is rejected item-by-item.
    pub reject_ids: Vec<String>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn failing_bulk() -> Self {
        Self {
            fail_bulk: true,
            ..Self::default()
        }
    }

    pub fn rejecting(ids: &[&str]) -> Self {
        Self {
            reject_ids: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    pub async fn document_count(&self, index: &str) -> usize {
        self.indices
            .lock()
            .await
            .get(index)
            .map(|i| i.documents.len())
            .unwrap_or(0)
    }

    pub async fn product_ids(&self, index: &str) -> Vec<String> {
        self.indices
            .lock()
            .await
            .get(index)
            .map(|i| {
                i.documents
                    .iter()
                    .filter_map(|d| d["product_id"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchStore for MockStore {
    async fn index_exists(&self, index: &str) -> Result<bool, SeedError> {
        self.calls.lock().await.exists += 1;
        if self.unreachable {
            return Err(SeedError::connection("Mock store unreachable"));
        }
        Ok(self.indices.lock().await.contains_key(index))
    }

    async fn create_index(&self, index: &str, body: &Value) -> Result<(), SeedError> {
        self.calls.lock().await.create += 1;
        let mut indices = self.indices.lock().await;
        if indices.contains_key(index) {
            return Err(SeedError::create_index("resource_already_exists_exception"));
        }
        indices.insert(
            index.to_string(),
            Index {
                body: body.clone(),
                documents: Vec::new(),
            },
        );
        Ok(())
    }

    async fn bulk(&self, actions: &[BulkIndexAction]) -> Result<BulkResponse, SeedError> {
        self.calls.lock().await.bulk += 1;
        if self.unreachable {
            return Err(SeedError::bulk_write("Mock store unreachable"));
        }
        if self.fail_bulk {
            return Err(SeedError::bulk_write("Bulk request failed with status 500"));
        }

        let mut indices = self.indices.lock().await;
        let mut items = Vec::new();
        for (n, action) in actions.iter().enumerate() {
            let product_id = action.source["product_id"].as_str().unwrap_or_default();
            let rejected = self.reject_ids.iter().any(|id| id == product_id);
            if !rejected {
                indices
                    .entry(action.index.clone())
                    .or_default()
                    .documents
                    .push(action.source.clone());
            }
            items.push(BulkItem {
                index: BulkItemResult {
                    index: action.index.clone(),
                    id: (!rejected).then(|| format!("doc-{}", n)),
                    status: if rejected { 400 } else { 201 },
                    error: rejected.then(|| BulkItemError {
                        kind: "mapper_parsing_exception".to_string(),
                        reason: Some("rejected by mock".to_string()),
                    }),
                },
            });
        }

        Ok(BulkResponse {
            took: 3,
            errors: items.iter().any(|i| !i.index.is_success()),
            items,
        })
    }
}
