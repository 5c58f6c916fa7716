//! The resume document model.
//!
//! The document is author-owned JSON; unrecognized fields are preserved
//! through a flattened extras map on every struct so a load/store round
//! trip never drops content. Fields under `manifest` and `search_blob`
//! are derived and regenerated whole on every run.

pub mod bullet;
pub mod document;
pub mod entry;
pub mod manifest;

pub use bullet::{Bullet, ClaimType, Confidence};
pub use document::{Document, EntryCollection};
pub use entry::{DateRange, Entry, EntryKind, StackItem};
pub use manifest::{Manifest, ManifestExperience, ManifestProject};
