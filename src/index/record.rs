//! The single record type of the document index.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the document index, describing a single documentation page.
///
/// All three fields must be present in the artifact; a record missing any of
/// them fails to load. Producers may attach additional fields, which are
/// preserved verbatim so that re-emitting the index loses nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRecord {
    /// Identifier assigned by the documentation system. Opaque: unique within
    /// one artifact, but not sequential or gapless.
    pub id: i64,
    /// Display title of the page. Not guaranteed unique.
    pub title: String,
    /// Relative path to the rendered page, used as the navigation target.
    pub link: String,
    /// Fields this crate does not know about, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentRecord {
    /// Create a record from its three required fields.
    pub fn new(id: i64, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            link: link.into(),
            extra: Map::new(),
        }
    }
}
