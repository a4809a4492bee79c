use super::super::domain::{ClassificationRecord, RiskLevel};
use super::super::keywords::is_negative_emotion;
use super::super::timestamp::parse_event_time;
use super::{finalize, record_count};

pub(crate) const BASELINE: f64 = 75.0;
const LATE_NIGHT_START: u32 = 22;
const LATE_NIGHT_END: u32 = 6;
const HIGH_INTENSITY: f64 = 0.7;
const LATE_NIGHT_RATIO_LIMIT: f64 = 0.2;
const LATE_NIGHT_PENALTY: f64 = 10.0;
const NEGATIVE_RATIO_LIMIT: f64 = 0.15;
const NEGATIVE_PENALTY: f64 = 5.0;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct RecordWellbeing {
    delta: f64,
    late_night: bool,
    high_negative: bool,
}

pub(crate) fn score(records: &[ClassificationRecord]) -> u8 {
    let mut raw = BASELINE;
    let mut late_night = 0usize;
    let mut high_negative = 0usize;

    for assessment in records.iter().map(assess) {
        raw += assessment.delta;
        late_night += usize::from(assessment.late_night);
        high_negative += usize::from(assessment.high_negative);
    }

    let n = record_count(records);
    if late_night as f64 / n > LATE_NIGHT_RATIO_LIMIT {
        raw -= LATE_NIGHT_PENALTY;
    }
    if high_negative as f64 / n > NEGATIVE_RATIO_LIMIT {
        raw -= NEGATIVE_PENALTY;
    }

    finalize(raw, BASELINE)
}

pub(crate) fn is_late_night(hour: u32) -> bool {
    hour >= LATE_NIGHT_START || hour < LATE_NIGHT_END
}

fn assess(record: &ClassificationRecord) -> RecordWellbeing {
    let mut result = RecordWellbeing::default();

    // Unparsable timestamps skip only the time-of-day rule.
    let hour = parse_event_time(&record.timestamp).and_then(|time| time.hour);
    if hour.is_some_and(is_late_night) {
        result.delta -= 0.5;
        result.late_night = true;
    }

    if is_negative_emotion(&record.primary_emotion) && record.emotion_intensity > HIGH_INTENSITY {
        result.delta -= 1.0;
        result.high_negative = true;
    }

    result.delta += match record.classification {
        Some(RiskLevel::Red) => -2.0,
        Some(RiskLevel::Yellow) => -1.0,
        _ => 0.0,
    };

    result
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::record;
    use super::*;

    #[test]
    fn late_night_window_wraps_midnight() {
        assert!(is_late_night(22));
        assert!(is_late_night(23));
        assert!(is_late_night(0));
        assert!(is_late_night(5));
        assert!(!is_late_night(6));
        assert!(!is_late_night(21));
    }

    #[test]
    fn three_of_ten_late_records_trigger_flat_penalty() {
        let mut records: Vec<_> = (0..10).map(|i| record(&format!("m{i}"))).collect();
        records[0].timestamp = "2025-09-24 23:00:00".to_string();
        records[1].timestamp = "2025-09-25 02:30:00".to_string();
        records[2].timestamp = "2025-09-25 05:00:00".to_string();
        // 75 - 3 * 0.5 - 10 = 63.5
        assert_eq!(score(&records), 64);
    }

    #[test]
    fn two_of_ten_late_records_stay_under_ratio() {
        let mut records: Vec<_> = (0..10).map(|i| record(&format!("m{i}"))).collect();
        records[0].timestamp = "2025-09-24 23:00:00".to_string();
        records[1].timestamp = "2025-09-25 02:30:00".to_string();
        // 75 - 1.0
        assert_eq!(score(&records), 74);
    }

    #[test]
    fn unparsable_timestamp_still_counts_other_rules() {
        let mut upset = record("m1");
        upset.timestamp = "sometime last night".to_string();
        upset.classification = Some(RiskLevel::Red);
        upset.primary_emotion = "fear".to_string();
        upset.emotion_intensity = 0.9;

        let assessment = assess(&upset);
        assert!(!assessment.late_night);
        assert!(assessment.high_negative);
        // 75 - 1 - 2 - 5 (1/1 high-negative ratio)
        assert_eq!(score(&[upset]), 67);
    }

    #[test]
    fn date_only_timestamp_is_not_treated_as_midnight() {
        let mut dated = record("m1");
        dated.timestamp = "2025-09-24".to_string();
        assert!(!assess(&dated).late_night);
        assert_eq!(score(&[dated]), 75);
    }
}
