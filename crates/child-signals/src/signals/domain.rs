use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the child/account whose events are aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub String);

impl SubjectId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Where the event originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageContext {
    Search,
    #[default]
    Message,
}

impl MessageContext {
    pub(crate) fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "search" => Self::Search,
            _ => Self::Message,
        }
    }
}

/// Upstream risk label, ordered from least to most concerning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Green,
    Yellow,
    Red,
}

impl RiskLevel {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "red" => Some(Self::Red),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

/// One classified message or search event.
///
/// Numeric signals are nominally in `[0, 1]` but are not range-checked; the
/// scoring functions clamp their outputs instead. `text` is only read for
/// privacy keyword matching and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationRecord {
    pub id: String,
    pub timestamp: String,
    pub context: MessageContext,
    pub classification: Option<RiskLevel>,
    pub confidence: f64,
    pub toxicity_score: f64,
    pub primary_emotion: String,
    pub emotion_intensity: f64,
    pub intent: String,
    pub detected_issues: String,
    pub has_feedback: bool,
    #[serde(skip_serializing)]
    pub text: String,
}

impl ClassificationRecord {
    /// Comma-split, trimmed, lowercased issue tags with blanks removed.
    pub fn issue_tags(&self) -> impl Iterator<Item = String> + '_ {
        self.detected_issues
            .split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
    }
}

/// Share of intensity-weighted emotion mass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionSummary {
    pub primary: String,
    pub distribution: BTreeMap<String, u32>,
}

impl EmotionSummary {
    pub fn neutral() -> Self {
        let mut distribution = BTreeMap::new();
        distribution.insert("neutral".to_string(), 100);
        Self {
            primary: "neutral".to_string(),
            distribution,
        }
    }
}

/// Composite scores for a subject. Always produced whole by the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildScores {
    pub kindness_score: u8,
    pub positivity_score: u8,
    pub privacy_awareness_score: u8,
    pub digital_wellbeing_score: u8,
    pub overall_emotion: EmotionSummary,
    pub themes: Vec<String>,
}

impl Default for ChildScores {
    fn default() -> Self {
        Self {
            kindness_score: 50,
            positivity_score: 50,
            privacy_awareness_score: 75,
            digital_wellbeing_score: 75,
            overall_emotion: EmotionSummary::neutral(),
            themes: Vec::new(),
        }
    }
}
