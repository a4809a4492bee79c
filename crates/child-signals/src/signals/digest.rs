//! Caregiver-facing weekly recap built on top of the score calculator.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::domain::{ChildScores, ClassificationRecord, RiskLevel, SubjectId};
use super::keywords::is_positive_intent;
use super::scoring::{calculate_scores, kindness_score, raises_privacy_warning};
use super::timestamp::parse_event_time;

const EXCELLENT_DAY: u8 = 80;
const GOOD_DAY: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Excellent,
    Good,
    NeedsAttention,
}

impl DayStatus {
    fn from_kindness(score: u8) -> Self {
        if score >= EXCELLENT_DAY {
            Self::Excellent
        } else if score >= GOOD_DAY {
            Self::Good
        } else {
            Self::NeedsAttention
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStatusEntry {
    pub date: NaiveDate,
    pub kindness_score: u8,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyDigest {
    pub subject_id: SubjectId,
    pub week_of: NaiveDate,
    pub record_count: usize,
    pub scores: ChildScores,
    pub day_statuses: Vec<DayStatusEntry>,
    pub best_day: NaiveDate,
    pub focus_theme: &'static str,
    pub kind_interactions: usize,
    pub privacy_warnings: usize,
    pub potential_risks: usize,
    pub positive_progress: &'static str,
    pub gentle_flags: Vec<&'static str>,
    pub summary: String,
}

impl WeeklyDigest {
    /// One digest per calendar week (Monday start), oldest first. Records
    /// whose timestamp has no recognizable date are left out.
    pub fn build(subject: &SubjectId, records: &[ClassificationRecord]) -> Vec<WeeklyDigest> {
        let mut weeks: BTreeMap<NaiveDate, BTreeMap<NaiveDate, Vec<ClassificationRecord>>> =
            BTreeMap::new();

        for record in records {
            let Some(time) = parse_event_time(&record.timestamp) else {
                continue;
            };
            weeks
                .entry(week_start(time.date))
                .or_default()
                .entry(time.date)
                .or_default()
                .push(record.clone());
        }

        weeks
            .into_iter()
            .map(|(week_of, days)| Self::for_week(subject, week_of, days))
            .collect()
    }

    fn for_week(
        subject: &SubjectId,
        week_of: NaiveDate,
        days: BTreeMap<NaiveDate, Vec<ClassificationRecord>>,
    ) -> WeeklyDigest {
        let day_statuses: Vec<DayStatusEntry> = days
            .iter()
            .map(|(date, records)| {
                let kindness = kindness_score(records);
                DayStatusEntry {
                    date: *date,
                    kindness_score: kindness,
                    status: DayStatus::from_kindness(kindness),
                }
            })
            .collect();

        // Days are ascending, so keeping the first maximum picks the earliest.
        let best_day = day_statuses
            .iter()
            .fold(None::<&DayStatusEntry>, |best, entry| match best {
                Some(current) if current.kindness_score >= entry.kindness_score => Some(current),
                _ => Some(entry),
            })
            .map(|entry| entry.date)
            .unwrap_or(week_of);

        let records: Vec<ClassificationRecord> = days.into_values().flatten().collect();
        let scores = calculate_scores(&records);
        let kind_interactions = records
            .iter()
            .filter(|record| {
                record.classification == Some(RiskLevel::Green)
                    && is_positive_intent(&record.intent)
            })
            .count();
        let privacy_warnings = records
            .iter()
            .filter(|record| raises_privacy_warning(record))
            .count();
        let potential_risks = records
            .iter()
            .filter(|record| record.classification == Some(RiskLevel::Red))
            .count();

        let habits = (f64::from(scores.privacy_awareness_score)
            + f64::from(scores.digital_wellbeing_score))
            / 2.0;
        let focus_theme = if f64::from(scores.kindness_score) >= habits {
            "Kind language"
        } else {
            "Healthy habits"
        };

        let positive_progress = match (kind_interactions, privacy_warnings) {
            (0, _) => "Engaged steadily",
            (_, 0) => "Kept conversations positive; Practiced safe sharing",
            _ => "Kept conversations positive",
        };

        let mut gentle_flags = Vec::new();
        if privacy_warnings > 0 {
            gentle_flags.push("Watch for personal info sharing");
        }
        if potential_risks > 0 {
            gentle_flags.push("Check in on mood and balance");
        }

        let summary = format!(
            "{} events this week with {} kind interaction{}: kindness {}, privacy awareness {}, wellbeing {}; {} privacy warning{} and {} high-risk message{}.",
            records.len(),
            kind_interactions,
            if kind_interactions == 1 { "" } else { "s" },
            scores.kindness_score,
            scores.privacy_awareness_score,
            scores.digital_wellbeing_score,
            privacy_warnings,
            if privacy_warnings == 1 { "" } else { "s" },
            potential_risks,
            if potential_risks == 1 { "" } else { "s" },
        );

        WeeklyDigest {
            subject_id: subject.clone(),
            week_of,
            record_count: records.len(),
            scores,
            day_statuses,
            best_day,
            focus_theme,
            kind_interactions,
            privacy_warnings,
            potential_risks,
            positive_progress,
            gentle_flags,
            summary,
        }
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
