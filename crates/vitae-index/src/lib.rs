//! Derived-index pipeline for vitae.
//!
//! Synthesizes per-entry search blobs (bullet ranking, field
//! concatenation, technology-token extraction) and assembles the
//! flattened manifest stored at the document root. Everything here is a
//! pure function of entry content; derived fields are overwritten, never
//! read.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod blob;
pub mod manifest;
pub mod rank;
pub mod tech;

pub use blob::{collect_bullet_tags, refresh_blob, synthesize_blob};
pub use manifest::update_manifest;
pub use rank::pick_best_bullets;
pub use tech::extract_tech_tokens;
