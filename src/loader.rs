//! Writes generated documents with a single bulk request.

use tracing::{debug, info, warn};

use crate::errors::SeedError;
use crate::models::bulk::BulkIndexAction;
use crate::models::product::ProductDocument;
use crate::store::SearchStore;

/// Outcome of one document within the bulk request.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOutcome {
    pub product_id: String,
    /// Id assigned by the store, if it reported one.
    pub document_id: Option<String>,
    pub status: u16,
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-document results of a bulk request that succeeded as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertReport {
    pub index: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Milliseconds the store reported spending on the request.
    pub took_ms: u64,
    pub items: Vec<ItemOutcome>,
}

impl InsertReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.items.iter().filter(|item| !item.is_success())
    }
}

/// Sends `documents` to `index` as one bulk request.
///
/// Request-level failures are returned as errors. Rejected items are only
/// recorded in the report.
pub async fn bulk_insert<S>(
    store: &S,
    index: &str,
    documents: &[ProductDocument],
) -> Result<InsertReport, SeedError>
where
    S: SearchStore + ?Sized,
{
    if documents.is_empty() {
        return Err(SeedError::validation("bulk insert needs at least one document"));
    }

    let actions = documents
        .iter()
        .map(|doc| {
            serde_json::to_value(doc)
                .map(|source| BulkIndexAction::new(index, source))
                .map_err(|e| SeedError::serialization(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let response = store.bulk(&actions).await?;

    if response.items.len() != documents.len() {
        warn!(
            sent = documents.len(),
            received = response.items.len(),
            "Bulk response item count does not match request"
        );
    }

    // Items come back in request order.
    let mut items = Vec::with_capacity(documents.len());
    for (position, doc) in documents.iter().enumerate() {
        let outcome = match response.items.get(position) {
            Some(item) => ItemOutcome {
                product_id: doc.product_id.clone(),
                document_id: item.index.id.clone(),
                status: item.index.status,
                error: item.index.failure_reason(),
            },
            None => ItemOutcome {
                product_id: doc.product_id.clone(),
                document_id: None,
                status: 0,
                error: Some("missing from bulk response".to_string()),
            },
        };
        if let Some(reason) = &outcome.error {
            warn!(
                product_id = %outcome.product_id,
                status = outcome.status,
                reason = %reason,
                "Document rejected"
            );
        } else {
            debug!(
                product_id = %outcome.product_id,
                id = ?outcome.document_id,
                "Document indexed"
            );
        }
        items.push(outcome);
    }

    let failed = items.iter().filter(|item| !item.is_success()).count();
    let report = InsertReport {
        index: index.to_string(),
        total: items.len(),
        succeeded: items.len() - failed,
        failed,
        took_ms: response.took,
        items,
    };

    info!(
        index = %index,
        total = report.total,
        succeeded = report.succeeded,
        failed = report.failed,
        took_ms = report.took_ms,
        "Bulk insert finished"
    );

    Ok(report)
}
