use super::super::domain::{ClassificationRecord, RiskLevel};
use super::super::keywords::{is_privacy_issue, pii_category};
use super::finalize;

pub(crate) const BASELINE: f64 = 75.0;
const TOXIC_SHARING_THRESHOLD: f64 = 0.3;

pub(crate) fn score(records: &[ClassificationRecord]) -> u8 {
    let raw = BASELINE + records.iter().map(record_delta).sum::<f64>();
    finalize(raw, BASELINE)
}

/// True when the record touches personal information at all, either through
/// its text or an upstream privacy tag.
pub(crate) fn raises_privacy_warning(record: &ClassificationRecord) -> bool {
    pii_category(&record.text).is_some() || has_privacy_issue(record)
}

fn has_privacy_issue(record: &ClassificationRecord) -> bool {
    record.issue_tags().any(|tag| is_privacy_issue(&tag))
}

fn record_delta(record: &ClassificationRecord) -> f64 {
    let mut delta = 0.0;
    let shares_pii = pii_category(&record.text).is_some();

    if shares_pii {
        delta += match record.classification {
            // Risky content that the child did not escalate.
            Some(RiskLevel::Green) => 1.0,
            Some(RiskLevel::Yellow) | Some(RiskLevel::Red) => -3.0,
            None => 0.0,
        };
        if record.toxicity_score > TOXIC_SHARING_THRESHOLD {
            delta -= 2.0;
        }
    }

    if has_privacy_issue(record) {
        delta -= 5.0;
    }

    delta
}
