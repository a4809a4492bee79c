use super::super::domain::{ClassificationRecord, RiskLevel};
use super::super::keywords::{is_negative_emotion, is_positive_emotion, is_positive_intent};
use super::{finalize, record_count};

pub(crate) const BASELINE: f64 = 50.0;

/// Contribution of one record to the positive count and the running
/// intensity total.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Tally {
    positive: f64,
    intensity: f64,
}

impl std::ops::Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        Tally {
            positive: self.positive + other.positive,
            intensity: self.intensity + other.intensity,
        }
    }
}

pub(crate) fn score(records: &[ClassificationRecord]) -> u8 {
    if records.is_empty() {
        return BASELINE as u8;
    }

    let totals = records
        .iter()
        .map(record_tally)
        .fold(Tally::default(), |acc, tally| acc + tally);
    let n = record_count(records);
    let avg_intensity = totals.intensity / n;
    let positive_ratio = totals.positive / n;

    finalize(avg_intensity * 50.0 + positive_ratio * 50.0, BASELINE)
}

fn record_tally(record: &ClassificationRecord) -> Tally {
    let mut tally = Tally::default();

    if is_positive_emotion(&record.primary_emotion) {
        tally.positive += 1.0;
        tally.intensity += record.emotion_intensity;
    } else if is_negative_emotion(&record.primary_emotion) {
        tally.positive -= 0.3;
        tally.intensity -= record.emotion_intensity * 0.3;
    }

    if is_positive_intent(&record.intent) {
        tally.positive += 0.5;
        tally.intensity += 0.5;
    }

    match record.classification {
        Some(RiskLevel::Green) => tally.positive += 0.2,
        Some(RiskLevel::Red) => tally.positive -= 0.5,
        _ => {}
    }

    tally
}
