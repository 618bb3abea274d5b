//! Field mapping for the product index.

use serde_json::{json, Map, Value};

/// Index name used when nothing else is configured.
pub const DEFAULT_INDEX_NAME: &str = "products";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Keyword,
    Float,
    Boolean,
    Text,
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Keyword => "keyword",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Text => "text",
            FieldType::Date => "date",
        }
    }
}

/// Ordered list of field names and their declared types.
///
/// There is no version and no migration: the schema is only ever sent when
/// the index is created.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSchema {
    fields: Vec<(&'static str, FieldType)>,
}

impl IndexSchema {
    pub fn new(fields: Vec<(&'static str, FieldType)>) -> Self {
        Self { fields }
    }

    /// The eight fields of a generated product document.
    pub fn products() -> Self {
        Self::new(vec![
            ("product_id", FieldType::Keyword),
            ("category", FieldType::Keyword),
            ("color", FieldType::Keyword),
            ("size", FieldType::Keyword),
            ("price", FieldType::Float),
            ("stock", FieldType::Boolean),
            ("description", FieldType::Text),
            ("insert_time", FieldType::Date),
        ])
    }

    pub fn fields(&self) -> &[(&'static str, FieldType)] {
        &self.fields
    }

    /// Body of the create-index call:
    /// `{"mappings": {"properties": {field: {"type": ...}}}}`.
    pub fn to_create_body(&self) -> Value {
        let mut properties = Map::new();
        for (name, kind) in &self.fields {
            properties.insert(name.to_string(), json!({ "type": kind.as_str() }));
        }
        json!({
            "mappings": {
                "properties": properties
            }
        })
    }
}
