//! Pure scoring over a subject's classification records.
//!
//! Each composite score is a baseline plus independent per-record deltas,
//! plus adjustments that depend only on counts. The sum is clamped to
//! `[0, 100]` and then rounded, so reordering the records never changes a
//! score.

mod emotion;
mod kindness;
mod positivity;
mod privacy;
mod themes;
mod wellbeing;

use super::domain::{ChildScores, ClassificationRecord};

pub use emotion::summarize_emotions;
pub use themes::{extract_themes, MAX_THEMES};

pub(crate) use privacy::raises_privacy_warning;

/// Derives the composite scores for a record list. Total: empty input yields
/// the documented defaults.
pub fn calculate_scores(records: &[ClassificationRecord]) -> ChildScores {
    if records.is_empty() {
        return ChildScores::default();
    }

    ChildScores {
        kindness_score: kindness::score(records),
        positivity_score: positivity::score(records),
        privacy_awareness_score: privacy::score(records),
        digital_wellbeing_score: wellbeing::score(records),
        overall_emotion: summarize_emotions(records),
        themes: extract_themes(records),
    }
}

pub fn kindness_score(records: &[ClassificationRecord]) -> u8 {
    kindness::score(records)
}

/// Clamp-then-round. Non-finite input falls back to `baseline`.
pub(crate) fn finalize(raw: f64, baseline: f64) -> u8 {
    let value = if raw.is_finite() { raw } else { baseline };
    value.clamp(0.0, 100.0).round() as u8
}

/// Divisor for per-record ratios; never zero.
pub(crate) fn record_count(records: &[ClassificationRecord]) -> f64 {
    records.len().max(1) as f64
}
