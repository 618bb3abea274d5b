use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::SeedError;

/// One `index` action of a bulk request: the target index and the document body.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkIndexAction {
    pub index: String,
    pub source: Value,
}

impl BulkIndexAction {
    pub fn new(index: impl Into<String>, source: Value) -> Self {
        Self {
            index: index.into(),
            source,
        }
    }
}

/// Renders actions as the NDJSON body `_bulk` expects: a metadata line and a
/// source line per action, each terminated by `\n`.
pub fn to_ndjson(actions: &[BulkIndexAction]) -> Result<String, SeedError> {
    let mut body = String::new();
    for action in actions {
        let meta = json!({ "index": { "_index": action.index } });
        body.push_str(&meta.to_string());
        body.push('\n');
        let source = serde_json::to_string(&action.source)
            .map_err(|e| SeedError::serialization(e.to_string()))?;
        body.push_str(&source);
        body.push('\n');
    }
    Ok(body)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub took: u64,
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<BulkItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkItem {
    #[serde(alias = "create")]
    pub index: BulkItemResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkItemResult {
    #[serde(rename = "_index", default)]
    pub index: String,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub status: u16,
    #[serde(default)]
    pub error: Option<BulkItemError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkItemError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl BulkItemResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none() && (200..300).contains(&self.status)
    }

    pub fn failure_reason(&self) -> Option<String> {
        if self.is_success() {
            return None;
        }
        Some(match &self.error {
            Some(error) => match &error.reason {
                Some(reason) => format!("{}: {}", error.kind, reason),
                None => error.kind.clone(),
            },
            None => format!("status {}", self.status),
        })
    }
}
