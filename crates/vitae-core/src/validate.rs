//! Structural validation of a resume document.
//!
//! All checks run to completion and every violation is collected; nothing
//! is thrown for expected violations. An empty result means the document
//! may be mutated and written; a non-empty result aborts the run before
//! any write.

use std::collections::HashSet;

use crate::model::{Document, EntryCollection};

/// Validate a document, returning every violation in discovery order.
///
/// Checks, each independent:
/// 1. both entry collections must actually be lists of entries;
/// 2. entry ids are non-empty and unique across both collections combined
///    (one shared namespace, no per-collection reset);
/// 3. when the controlled vocabulary is non-empty, every non-empty tag on
///    every bullet must be a member. An empty vocabulary means no
///    restriction is configured.
pub fn validate(doc: &Document) -> Vec<String> {
    let mut violations = Vec::new();

    let collections = [
        ("experience", &doc.experience),
        ("projects", &doc.projects),
    ];

    for (name, collection) in collections {
        if collection.is_malformed() {
            violations.push(format!("{name}: expected a list of entries"));
        }
    }

    check_ids(&collections, &mut violations);
    check_tags(doc, &collections, &mut violations);

    violations
}

fn check_ids(collections: &[(&str, &EntryCollection); 2], violations: &mut Vec<String>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for (_, collection) in collections {
        for entry in collection.entries() {
            if entry.id.is_empty() {
                violations.push("missing id".to_string());
            } else if !seen.insert(entry.id.as_str()) {
                violations.push(format!("duplicate id: {}", entry.id));
            }
        }
    }
}

fn check_tags(
    doc: &Document,
    collections: &[(&str, &EntryCollection); 2],
    violations: &mut Vec<String>,
) {
    if doc.controlled_vocabulary.is_empty() {
        return;
    }
    let vocabulary: HashSet<&str> = doc
        .controlled_vocabulary
        .iter()
        .map(String::as_str)
        .collect();

    for (name, collection) in collections {
        for (i, entry) in collection.entries().iter().enumerate() {
            for (j, bullet) in entry.bullets.iter().enumerate() {
                for (k, tag) in bullet.tags.iter().enumerate() {
                    if tag.is_empty() || vocabulary.contains(tag.as_str()) {
                        continue;
                    }
                    violations.push(format!(
                        "invalid tag '{tag}' at {name}[{i}].bullets[{j}].tags[{k}]"
                    ));
                }
            }
        }
    }
}
