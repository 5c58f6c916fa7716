use serde::{Deserialize, Serialize};

/// A single achievement/claim statement attached to an entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bullet {
    /// Classification of the claim; `"metric"` is the only value the
    /// ranking logic distinguishes.
    #[serde(default, skip_serializing_if = "ClaimType::is_empty")]
    pub claim_type: ClaimType,

    /// Author confidence in the claim: `"high"`, `"medium"`, or `"low"`.
    /// Unrecognized or missing values weigh the same as low.
    #[serde(default, skip_serializing_if = "Confidence::is_empty")]
    pub confidence: Confidence,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_short: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_long: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Bullet {
    /// The text that represents this bullet in derived output: the short
    /// form when non-empty, falling back to the long form.
    pub fn effective_text(&self) -> Option<&str> {
        non_empty(self.text_short.as_deref()).or_else(|| non_empty(self.text_long.as_deref()))
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// The raw `claim_type` string, preserved verbatim for round-tripping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimType(pub String);

impl ClaimType {
    #[must_use]
    pub fn metric() -> Self {
        Self("metric".to_string())
    }

    pub fn is_metric(&self) -> bool {
        self.0 == "metric"
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The raw `confidence` string, preserved verbatim for round-tripping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(pub String);

impl Confidence {
    /// Ranking weight: high = 3, medium = 2, anything else = 1.
    pub fn weight(&self) -> u32 {
        match self.0.as_str() {
            "high" => 3,
            "medium" => 2,
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
