use std::collections::BTreeMap;

use super::super::domain::{ClassificationRecord, EmotionSummary};

/// Intensity-weighted emotion shares. The primary emotion carries the most
/// weight; ties go to the emotion seen first.
pub fn summarize_emotions(records: &[ClassificationRecord]) -> EmotionSummary {
    // First-seen order is kept so ties resolve deterministically.
    let mut weights: Vec<(&str, f64)> = Vec::new();
    for record in records {
        let emotion = record.primary_emotion.trim();
        if emotion.is_empty() {
            continue;
        }
        let weight = if record.emotion_intensity.is_finite() {
            record.emotion_intensity.max(0.0)
        } else {
            0.0
        };
        match weights.iter_mut().find(|(name, _)| *name == emotion) {
            Some((_, total)) => *total += weight,
            None => weights.push((emotion, weight)),
        }
    }

    let total: f64 = weights.iter().map(|(_, weight)| weight).sum();
    if total <= 0.0 || !total.is_finite() {
        return EmotionSummary::neutral();
    }

    let mut primary = weights[0];
    for entry in &weights[1..] {
        if entry.1 > primary.1 {
            primary = *entry;
        }
    }

    let distribution: BTreeMap<String, u32> = weights
        .iter()
        .map(|(name, weight)| {
            let share = (weight / total * 100.0).round() as u32;
            (name.to_string(), share)
        })
        .collect();

    EmotionSummary {
        primary: primary.0.to_string(),
        distribution,
    }
}
