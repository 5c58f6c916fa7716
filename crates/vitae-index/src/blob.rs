//! Search blob synthesis.
//!
//! A blob is one normalized string per entry, built from the entry's
//! descriptive fields, its top-ranked bullets, and its aggregated tags,
//! then tagged with extracted technology tokens. It exists purely for
//! downstream lexical search.

use vitae_core::model::{Bullet, Entry, EntryKind};

use crate::rank::pick_best_bullets;
use crate::tech::extract_tech_tokens;

/// How many ranked bullets feed the blob.
const TOP_BULLETS: usize = 3;

/// All non-empty tags across an entry's bullets, deduplicated, in
/// first-occurrence order. Sorting happens at blob assembly, not here.
pub fn collect_bullet_tags(bullets: &[Bullet]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for bullet in bullets {
        for tag in &bullet.tags {
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Build the search blob for one entry.
///
/// Fragment order: primary field (org or name), descriptor, role,
/// description (projects only), the date range, each stack/scope
/// fragment, the top-ranked bullet texts, and a sorted tag list. The
/// non-empty fragments are joined with ` | `, whitespace is collapsed,
/// and any matched technology tokens are appended as a final `tech`
/// fragment.
pub fn synthesize_blob(entry: &Entry, kind: EntryKind) -> String {
    let mut fragments: Vec<String> = Vec::new();

    push_fragment(&mut fragments, entry.primary_field(kind));
    push_fragment(&mut fragments, entry.descriptor.as_deref());
    push_fragment(&mut fragments, entry.role.as_deref());
    if kind == EntryKind::Project {
        push_fragment(&mut fragments, entry.description.as_deref());
    }

    if let Some(dates) = &entry.dates {
        if !dates.is_empty() {
            fragments.push(format!(
                "dates {}\u{2013}{}",
                dates.start.as_deref().unwrap_or(""),
                dates.end.as_deref().unwrap_or("present")
            ));
        }
    }

    for item in &entry.stack_scope {
        push_fragment(&mut fragments, Some(item.text.as_str()));
    }

    for bullet in pick_best_bullets(&entry.bullets, TOP_BULLETS) {
        push_fragment(&mut fragments, bullet.effective_text());
    }

    let mut tags = collect_bullet_tags(&entry.bullets);
    if !tags.is_empty() {
        tags.sort();
        fragments.push(format!("tags {}", tags.join(" ")));
    }

    let joined = fragments.join(" | ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");

    let tokens = extract_tech_tokens(&collapsed);
    if tokens.is_empty() {
        collapsed
    } else {
        format!("{collapsed} | tech {}", tokens.join(" "))
    }
}

/// Recompute an entry's blob, write it back, and return it.
pub fn refresh_blob(entry: &mut Entry, kind: EntryKind) -> String {
    let blob = synthesize_blob(entry, kind);
    entry.search_blob = Some(blob.clone());
    blob
}

fn push_fragment(fragments: &mut Vec<String>, text: Option<&str>) {
    if let Some(text) = text {
        if !text.is_empty() {
            fragments.push(text.to_string());
        }
    }
}
