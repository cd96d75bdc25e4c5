//! Validation of a loaded index against the contract's testable properties.
//!
//! The loader accepts anything structurally well-formed; this module checks
//! the semantic properties: ids unique, `title` and `link` non-empty. A
//! duplicate `link` is only unique "in practice" for producers, so it is
//! reported as a warning rather than an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::index::DocumentIndex;

/// How bad a finding is: errors break the contract, warnings do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding, tagged with where in the artifact it was seen.
/// Positions are zero-based record indexes in artifact order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// The same id appears on more than one record.
    DuplicateId { id: i64, positions: Vec<usize> },
    /// A record's title is the empty string.
    EmptyTitle { position: usize, id: i64 },
    /// A record's link is the empty string.
    EmptyLink { position: usize, id: i64 },
    /// The same link appears on more than one record.
    DuplicateLink { link: String, positions: Vec<usize> },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicateId { .. } | Self::EmptyTitle { .. } | Self::EmptyLink { .. } => {
                Severity::Error
            }
            Self::DuplicateLink { .. } => Severity::Warning,
        }
    }

    /// Human-readable one-liner for CLI output.
    pub fn describe(&self) -> String {
        match self {
            Self::DuplicateId { id, positions } => {
                format!("duplicate id {} at records {:?}", id, positions)
            }
            Self::EmptyTitle { position, id } => {
                format!("empty title at record {} (id {})", position, id)
            }
            Self::EmptyLink { position, id } => {
                format!("empty link at record {} (id {})", position, id)
            }
            Self::DuplicateLink { link, positions } => {
                format!("duplicate link '{}' at records {:?}", link, positions)
            }
        }
    }
}

/// Outcome of validating one index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub record_count: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no error-severity issue was found. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
            .count()
    }

    /// Convert to JSON string for machine-readable CLI output.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize report"}"#.to_string())
    }
}

/// Check every record of the index against the contract properties.
///
/// Issues come out in a stable order: per-record findings first, in artifact
/// order, then duplicate groups ordered by their first occurrence.
pub fn validate(index: &DocumentIndex) -> ValidationReport {
    let mut issues = Vec::new();

    for (position, record) in index.iter().enumerate() {
        if record.title.is_empty() {
            issues.push(ValidationIssue::EmptyTitle {
                position,
                id: record.id,
            });
        }
        if record.link.is_empty() {
            issues.push(ValidationIssue::EmptyLink {
                position,
                id: record.id,
            });
        }
    }

    let mut by_id: HashMap<i64, Vec<usize>> = HashMap::new();
    let mut by_link: HashMap<&str, Vec<usize>> = HashMap::new();
    for (position, record) in index.iter().enumerate() {
        by_id.entry(record.id).or_default().push(position);
        if !record.link.is_empty() {
            by_link.entry(&record.link).or_default().push(position);
        }
    }

    let mut duplicate_ids: Vec<_> = by_id.into_iter().filter(|(_, p)| p.len() > 1).collect();
    duplicate_ids.sort_by_key(|(_, positions)| positions[0]);
    for (id, positions) in duplicate_ids {
        issues.push(ValidationIssue::DuplicateId { id, positions });
    }

    let mut duplicate_links: Vec<_> = by_link.into_iter().filter(|(_, p)| p.len() > 1).collect();
    duplicate_links.sort_by_key(|(_, positions)| positions[0]);
    for (link, positions) in duplicate_links {
        issues.push(ValidationIssue::DuplicateLink {
            link: link.to_string(),
            positions,
        });
    }

    ValidationReport {
        record_count: index.len(),
        issues,
    }
}
