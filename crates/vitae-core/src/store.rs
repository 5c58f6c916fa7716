//! JSON load/store boundary for resume documents.
//!
//! The document is read and written whole. Writes happen as a single emit
//! of the fully serialized document, so a failed run never leaves a
//! partially written file behind.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::Document;

/// Load a document from a JSON file.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)?;
    let doc: Document = serde_json::from_str(&text)?;
    log::debug!(
        "loaded {} ({} experience entries, {} project entries)",
        path.display(),
        doc.experience.len(),
        doc.projects.len()
    );
    Ok(doc)
}

/// Serialize a document and write it out, pretty-printed with a trailing
/// newline.
pub fn save_document(path: &Path, doc: &Document) -> Result<()> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    fs::write(path, out)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
