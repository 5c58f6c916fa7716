use serde::{Deserialize, Serialize};

use crate::model::bullet::Bullet;

/// Which collection an entry belongs to. The two variants share one shape;
/// they differ only in which descriptive fields feed derived output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Experience,
    Project,
}

/// One work-experience or project record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Required, non-empty, unique across both collections combined.
    #[serde(default)]
    pub id: String,

    /// Organization name (experience entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    /// Project name (project entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Freeform description (project entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<DateRange>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stack_scope: Vec<StackItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<Bullet>,

    /// Derived lexical-search text; never authoritative, overwritten on
    /// every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_blob: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Entry {
    /// The primary display field for the given collection kind.
    pub fn primary_field(&self, kind: EntryKind) -> Option<&str> {
        match kind {
            EntryKind::Experience => self.org.as_deref(),
            EntryKind::Project => self.name.as_deref(),
        }
    }
}

/// A date range with an optional open end. An absent `end` means the
/// engagement is ongoing and renders as the literal `present`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// One ordered fragment of an entry's stack/scope description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackItem {
    #[serde(default)]
    pub text: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
