use std::path::Path;

use anyhow::{bail, Context, Result};
use vitae_core::store;
use vitae_core::validate::validate;

/// Validate-only mode: report and exit, never mutate or write.
pub fn run_check(source: &Path) -> Result<()> {
    let doc = store::load_document(source)
        .with_context(|| format!("failed to load {}", source.display()))?;

    let violations = validate(&doc);
    if violations.is_empty() {
        println!("document is valid");
        return Ok(());
    }

    eprintln!("Validation failed:");
    for violation in &violations {
        eprintln!("  - {violation}");
    }
    bail!("{} validation violation(s)", violations.len());
}
