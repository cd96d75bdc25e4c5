//! # Index Module
//!
//! The in-memory model of a document index: an ordered, immutable snapshot of
//! the records a documentation build emitted for its search widget.
//!
//! ## Key Components
//!
//! - [`record`] - The [`DocumentRecord`] entry type
//! - [`DocumentIndex`] - The ordered record sequence with load and emit

pub mod record;

pub use record::DocumentRecord;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// An ordered sequence of [`DocumentRecord`]s.
///
/// The order is whatever the producing build wrote and carries no ranking;
/// loading and emitting both preserve it exactly. The index is a snapshot:
/// records cannot be mutated after construction, and each load produces an
/// independent owned value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentIndex {
    records: Vec<DocumentRecord>,
}

impl DocumentIndex {
    /// Build an index from already-typed records.
    pub fn from_records(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }

    /// Parse an index from a plain JSON array of records.
    ///
    /// A missing required field, a wrong field type, or a non-array top level
    /// is a load failure. Semantic defects (duplicate ids, empty fields) load
    /// fine and are reported by [`crate::validate::validate`] instead.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse document index JSON")
    }

    /// Emit the index as a compact JSON array.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.records).context("Failed to serialize document index")
    }

    /// Emit the index as a pretty-printed JSON array.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.records).context("Failed to serialize document index")
    }

    /// All records, in artifact order.
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    /// Iterate over the records in artifact order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id. Returns the first match in artifact order;
    /// duplicate ids are undefined behavior for consumers and are flagged by
    /// the validator.
    pub fn get(&self, id: i64) -> Option<&DocumentRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl IntoIterator for DocumentIndex {
    type Item = DocumentRecord;
    type IntoIter = std::vec::IntoIter<DocumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocumentIndex {
    type Item = &'a DocumentRecord;
    type IntoIter = std::slice::Iter<'a, DocumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
