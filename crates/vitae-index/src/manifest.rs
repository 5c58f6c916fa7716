//! Manifest assembly: the one mutating pass over a validated document.

use chrono::{SecondsFormat, Utc};

use vitae_core::model::{
    Document, EntryKind, Manifest, ManifestExperience, ManifestProject,
};
use vitae_core::version;

use crate::blob::refresh_blob;

/// Regenerate every derived field on the document:
///
/// - every entry's `search_blob`, in both collections;
/// - `manifest.experiences` / `manifest.projects`, in original entry
///   order, dates defaulting to an empty range;
/// - `manifest_generated_at`, stamped with the current UTC instant;
/// - `schema_version`, patch-bumped (malformed versions pass through).
///
/// The caller is expected to have validated the document first; malformed
/// collections read as empty here.
pub fn update_manifest(doc: &mut Document) {
    for entry in doc.experience.entries_mut() {
        refresh_blob(entry, EntryKind::Experience);
    }
    for entry in doc.projects.entries_mut() {
        refresh_blob(entry, EntryKind::Project);
    }

    let experiences: Vec<ManifestExperience> = doc
        .experience
        .entries()
        .iter()
        .map(|entry| ManifestExperience {
            id: entry.id.clone(),
            org: entry.org.clone().unwrap_or_default(),
            dates: entry.dates.clone().unwrap_or_default(),
            search_blob: entry.search_blob.clone().unwrap_or_default(),
        })
        .collect();

    let projects: Vec<ManifestProject> = doc
        .projects
        .entries()
        .iter()
        .map(|entry| ManifestProject {
            id: entry.id.clone(),
            name: entry.name.clone().unwrap_or_default(),
            dates: entry.dates.clone().unwrap_or_default(),
            search_blob: entry.search_blob.clone().unwrap_or_default(),
        })
        .collect();

    log::info!(
        "manifest rebuilt: {} experiences, {} projects",
        experiences.len(),
        projects.len()
    );

    doc.manifest = Some(Manifest {
        experiences,
        projects,
    });
    doc.manifest_generated_at =
        Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
    doc.schema_version = version::bump_patch(&doc.schema_version);
}
