use super::super::domain::{ClassificationRecord, RiskLevel};
use super::super::keywords::{is_hostile_intent, is_positive_intent};
use super::finalize;

pub(crate) const BASELINE: f64 = 50.0;
const TOXICITY_THRESHOLD: f64 = 0.5;
const TOXICITY_WEIGHT: f64 = 10.0;

pub(crate) fn score(records: &[ClassificationRecord]) -> u8 {
    let raw = BASELINE + records.iter().map(record_delta).sum::<f64>();
    finalize(raw, BASELINE)
}

fn record_delta(record: &ClassificationRecord) -> f64 {
    let classification = match record.classification {
        Some(RiskLevel::Green) => 2.0,
        Some(RiskLevel::Yellow) => -1.0,
        Some(RiskLevel::Red) => -5.0,
        None => 0.0,
    };

    let intent = if is_positive_intent(&record.intent) {
        1.5
    } else if is_hostile_intent(&record.intent) {
        -3.0
    } else {
        0.0
    };

    let toxicity = if record.toxicity_score > TOXICITY_THRESHOLD {
        -record.toxicity_score * TOXICITY_WEIGHT
    } else {
        0.0
    };

    classification + intent + toxicity
}
