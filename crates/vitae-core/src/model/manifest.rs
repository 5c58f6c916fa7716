use serde::{Deserialize, Serialize};

use crate::model::entry::DateRange;

/// The flattened, derived summary of all entries stored at the document
/// root. Never hand-edited; fully regenerated each run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub experiences: Vec<ManifestExperience>,

    #[serde(default)]
    pub projects: Vec<ManifestProject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestExperience {
    pub id: String,
    pub org: String,
    #[serde(default)]
    pub dates: DateRange,
    pub search_blob: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dates: DateRange,
    pub search_blob: String,
}
