//! Schema version parsing and patch-bumping.
//!
//! A version that does not match `major.minor.patch` (three dot-separated
//! unsigned integers, nothing else) is carried as an opaque string and
//! passes through bumping unchanged. The tolerance is deliberate: a
//! malformed version is the author's to fix, not a reason to fail a run.

use std::fmt;

/// A parsed schema version: semantic when it matches the dotted triple,
/// opaque otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaVersion {
    Semantic { major: u64, minor: u64, patch: u64 },
    Opaque(String),
}

impl SchemaVersion {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split('.');
        if let (Some(a), Some(b), Some(c), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        {
            if let (Some(major), Some(minor), Some(patch)) =
                (component(a), component(b), component(c))
            {
                return Self::Semantic {
                    major,
                    minor,
                    patch,
                };
            }
        }
        Self::Opaque(raw.to_string())
    }

    /// Increment the patch position; opaque versions are returned as-is.
    #[must_use]
    pub fn bump_patch(self) -> Self {
        match self {
            Self::Semantic {
                major,
                minor,
                patch,
            } => Self::Semantic {
                major,
                minor,
                patch: patch + 1,
            },
            Self::Opaque(raw) => Self::Opaque(raw),
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Semantic {
                major,
                minor,
                patch,
            } => write!(f, "{major}.{minor}.{patch}"),
            Self::Opaque(raw) => f.write_str(raw),
        }
    }
}

/// Patch-bump a raw version string, tolerating malformed input.
pub fn bump_patch(raw: &str) -> String {
    SchemaVersion::parse(raw).bump_patch().to_string()
}

fn component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
