use std::path::Path;

use anyhow::{bail, Context, Result};
use vitae_core::store;
use vitae_core::validate::validate;
use vitae_index::update_manifest;

/// The default run: load, validate, regenerate derived fields, then
/// either write the whole document back or (preview) print just the
/// manifest. Validation failure aborts before any mutation or write.
pub fn run_build(source: &Path, dest: &Path, preview: bool) -> Result<()> {
    let mut doc = store::load_document(source)
        .with_context(|| format!("failed to load {}", source.display()))?;

    let violations = validate(&doc);
    if !violations.is_empty() {
        eprintln!("Validation failed:");
        for violation in &violations {
            eprintln!("  - {violation}");
        }
        bail!("{} validation violation(s); nothing written", violations.len());
    }

    update_manifest(&mut doc);

    if preview {
        let manifest = doc
            .manifest
            .as_ref()
            .context("manifest missing after update")?;
        println!("{}", serde_json::to_string_pretty(manifest)?);
        log::info!("preview mode; {} not written", dest.display());
        return Ok(());
    }

    store::save_document(dest, &doc)
        .with_context(|| format!("failed to write {}", dest.display()))?;

    println!(
        "Wrote {} ({} experiences, {} projects, schema version {})",
        dest.display(),
        doc.experience.len(),
        doc.projects.len(),
        doc.schema_version
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_source(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("resume.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_build_writes_updated_document() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(
            &dir,
            r#"{"schema_version": "1.0.0",
                "experience": [{"id": "e1", "org": "Acme"}],
                "projects": []}"#,
        );
        let dest = dir.path().join("out.json");

        run_build(&source, &dest, false).unwrap();

        let written = std::fs::read_to_string(&dest).unwrap();
        assert!(written.contains("\"schema_version\": \"1.0.1\""));
        assert!(written.contains("\"manifest\""));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_build_aborts_on_violations_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(
            &dir,
            r#"{"experience": [{"id": "x"}], "projects": [{"id": "x"}]}"#,
        );
        let dest = dir.path().join("out.json");

        let result = run_build(&source, &dest, false);
        assert!(result.is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_preview_persists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(
            &dir,
            r#"{"schema_version": "1.0.0", "experience": [], "projects": []}"#,
        );
        let dest = dir.path().join("out.json");

        run_build(&source, &dest, true).unwrap();
        assert!(!dest.exists());
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_build(
            Path::new("/nonexistent/resume.json"),
            &dir.path().join("out.json"),
            false,
        );
        assert!(result.is_err());
    }
}
