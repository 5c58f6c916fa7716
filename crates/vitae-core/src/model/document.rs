use serde::{Deserialize, Serialize};

use crate::model::entry::Entry;
use crate::model::manifest::Manifest;

/// The root resume document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Dotted `major.minor.patch` by convention; patch-bumped on every
    /// successful run, passed through unchanged when malformed.
    #[serde(default)]
    pub schema_version: String,

    /// Whitelist of permitted tag strings; empty means unrestricted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controlled_vocabulary: Vec<String>,

    #[serde(default)]
    pub experience: EntryCollection,

    #[serde(default)]
    pub projects: EntryCollection,

    /// Derived; overwritten on every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<Manifest>,

    /// RFC 3339 instant of the last manifest regeneration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_generated_at: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An entry collection as found in the document: either a well-formed
/// list of entries, or whatever malformed value the author wrote there.
///
/// Capturing the malformed case instead of failing the parse lets the
/// validator report it alongside every other violation in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryCollection {
    Entries(Vec<Entry>),
    Malformed(serde_json::Value),
}

impl Default for EntryCollection {
    fn default() -> Self {
        Self::Entries(Vec::new())
    }
}

impl EntryCollection {
    /// The entries, with a malformed collection reading as empty.
    pub fn entries(&self) -> &[Entry] {
        match self {
            Self::Entries(entries) => entries,
            Self::Malformed(_) => &[],
        }
    }

    pub fn entries_mut(&mut self) -> &mut [Entry] {
        match self {
            Self::Entries(entries) => entries,
            Self::Malformed(_) => &mut [],
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collections_default_to_empty() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.experience.is_empty());
        assert!(doc.projects.is_empty());
        assert!(!doc.experience.is_malformed());
    }

    #[test]
    fn test_malformed_collection_is_captured_not_fatal() {
        let doc: Document =
            serde_json::from_value(json!({"experience": "not a list"})).unwrap();
        assert!(doc.experience.is_malformed());
        assert!(doc.experience.entries().is_empty());
    }

    #[test]
    fn test_document_preserves_unknown_top_level_fields() {
        let doc: Document = serde_json::from_value(json!({
            "schema_version": "1.0.0",
            "basics": {"full_name": "Jane Doe"}
        }))
        .unwrap();
        assert!(doc.extra.contains_key("basics"));
        let out = serde_json::to_value(&doc).unwrap();
        assert_eq!(out["basics"]["full_name"], "Jane Doe");
    }
}
