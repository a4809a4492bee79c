use super::super::domain::{ClassificationRecord, MessageContext, RiskLevel};
use super::super::keywords::NEUTRAL_LABEL;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::debug;

/// Parses a header-first CSV stream. Rows without an `id` or `timestamp`, and
/// rows the reader cannot decode, are skipped.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<ClassificationRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    // Surfaces an unreadable header before any rows are attempted.
    csv_reader.headers()?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<EventRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                debug!(row = index + 1, error = %err, "skipping undecodable event row");
                continue;
            }
        };

        match row.into_record() {
            Some(record) => records.push(record),
            None => debug!(row = index + 1, "skipping event row without id or timestamp"),
        }
    }

    Ok(records)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EventRow {
    #[serde(deserialize_with = "lenient_string")]
    id: String,
    #[serde(deserialize_with = "lenient_string")]
    timestamp: String,
    #[serde(deserialize_with = "lenient_string")]
    context: String,
    #[serde(deserialize_with = "lenient_string")]
    classification: String,
    #[serde(deserialize_with = "lenient_string")]
    confidence: String,
    #[serde(deserialize_with = "lenient_string")]
    toxicity_score: String,
    #[serde(deserialize_with = "lenient_string")]
    primary_emotion: String,
    #[serde(deserialize_with = "lenient_string")]
    emotion_intensity: String,
    #[serde(deserialize_with = "lenient_string")]
    intent: String,
    #[serde(deserialize_with = "lenient_string")]
    detected_issues: String,
    #[serde(deserialize_with = "lenient_string")]
    has_feedback: String,
    #[serde(deserialize_with = "lenient_string")]
    text: String,
}

impl EventRow {
    fn into_record(self) -> Option<ClassificationRecord> {
        if self.id.trim().is_empty() || self.timestamp.trim().is_empty() {
            return None;
        }

        Some(ClassificationRecord {
            context: MessageContext::parse(&self.context),
            classification: parse_classification(&self.classification),
            confidence: parse_signal(&self.confidence),
            toxicity_score: parse_signal(&self.toxicity_score),
            primary_emotion: label_or_neutral(&self.primary_emotion),
            emotion_intensity: parse_signal(&self.emotion_intensity),
            intent: label_or_neutral(&self.intent),
            detected_issues: self.detected_issues,
            has_feedback: parse_flag(&self.has_feedback),
            text: self.text,
            id: self.id,
            timestamp: self.timestamp,
        })
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

fn parse_signal(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "y"
    )
}

/// Blank labels mean the classifier saw nothing risky; unknown ones are kept
/// as "no classification".
fn parse_classification(raw: &str) -> Option<RiskLevel> {
    if raw.trim().is_empty() {
        return Some(RiskLevel::Green);
    }
    RiskLevel::parse(raw)
}

fn label_or_neutral(raw: &str) -> String {
    let label = raw.trim().to_lowercase();
    if label.is_empty() {
        NEUTRAL_LABEL.to_string()
    } else {
        label
    }
}
