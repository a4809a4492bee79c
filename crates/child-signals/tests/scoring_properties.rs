use child_signals::signals::{
    calculate_scores, ChildScores, ClassificationRecord, MessageContext, RiskLevel,
};

const EMOTIONS: &[&str] = &["joy", "anger", "sadness", "fear", "surprise", "neutral", ""];
const INTENTS: &[&str] = &[
    "positive",
    "neutral",
    "criticism",
    "personal_attack",
    "threat",
    "question",
];
const ISSUES: &[&str] = &[
    "",
    "bullying",
    "personal_information, harassment",
    "privacy",
    "self_harm,bullying",
];
const TEXTS: &[&str] = &[
    "",
    "my address is 4 elm street",
    "want to come to my house",
    "good game",
    "what's your phone number",
];
const TIMESTAMPS: &[&str] = &[
    "2025-09-24 23:10:00",
    "2025-09-24 15:00:00",
    "2025-09-25T03:00:00Z",
    "garbled",
    "2025-09-26 09:45",
];

/// Small deterministic generator so the property checks stay reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, values: &[&'a str]) -> &'a str {
        values[(self.next() as usize) % values.len()]
    }

    fn signal(&mut self) -> f64 {
        // Sixty-fourths keep most sums exact; deliberately strays outside [0, 1].
        (self.next() % 84) as f64 / 64.0 - 0.125
    }
}

fn generate(seed: u64, count: usize) -> Vec<ClassificationRecord> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|index| {
            let classification = match rng.next() % 4 {
                0 => Some(RiskLevel::Green),
                1 => Some(RiskLevel::Yellow),
                2 => Some(RiskLevel::Red),
                _ => None,
            };
            ClassificationRecord {
                id: format!("m{index}"),
                timestamp: rng.pick(TIMESTAMPS).to_string(),
                context: if rng.next() % 2 == 0 {
                    MessageContext::Search
                } else {
                    MessageContext::Message
                },
                classification,
                confidence: rng.signal(),
                toxicity_score: rng.signal(),
                primary_emotion: rng.pick(EMOTIONS).to_string(),
                emotion_intensity: rng.signal(),
                intent: rng.pick(INTENTS).to_string(),
                detected_issues: rng.pick(ISSUES).to_string(),
                has_feedback: rng.next() % 2 == 0,
                text: rng.pick(TEXTS).to_string(),
            }
        })
        .collect()
}

fn numeric_scores(scores: &ChildScores) -> [u8; 4] {
    [
        scores.kindness_score,
        scores.positivity_score,
        scores.privacy_awareness_score,
        scores.digital_wellbeing_score,
    ]
}

#[test]
fn scores_always_fall_within_bounds() {
    for seed in 0..50 {
        for count in [0, 1, 3, 17, 120] {
            let scores = calculate_scores(&generate(seed, count));
            for value in numeric_scores(&scores) {
                assert!(value <= 100, "seed {seed} count {count} produced {value}");
            }
        }
    }
}

#[test]
fn reordering_records_never_changes_scores() {
    for seed in 0..30 {
        let records = generate(seed, 25);
        let baseline = numeric_scores(&calculate_scores(&records));

        let mut permutations = Vec::new();
        let mut reversed = records.clone();
        reversed.reverse();
        permutations.push(reversed);
        for shift in [1, 7, 13] {
            let mut rotated = records.clone();
            rotated.rotate_left(shift);
            permutations.push(rotated);
        }

        for permuted in permutations {
            let scores = numeric_scores(&calculate_scores(&permuted));
            assert_eq!(scores[0], baseline[0], "kindness, seed {seed}");
            assert_eq!(scores[2], baseline[2], "privacy, seed {seed}");
            assert_eq!(scores[3], baseline[3], "wellbeing, seed {seed}");
            // The 0.3 intensity weight is inexact in binary, so summation
            // order may move a half-point boundary.
            assert!(
                scores[1].abs_diff(baseline[1]) <= 1,
                "positivity, seed {seed}"
            );
        }
    }
}

#[test]
fn emotion_shares_sum_to_one_hundred() {
    for seed in 0..50 {
        let scores = calculate_scores(&generate(seed, 20));
        let distribution = &scores.overall_emotion.distribution;
        let buckets = distribution.len() as i64;
        let total: i64 = distribution.values().map(|share| i64::from(*share)).sum();
        assert!(
            (total - 100).abs() <= buckets,
            "seed {seed}: {distribution:?} sums to {total}"
        );
        assert!(distribution.contains_key(&scores.overall_emotion.primary));
    }
}

#[test]
fn themes_are_short_and_unique() {
    for seed in 0..50 {
        let themes = calculate_scores(&generate(seed, 30)).themes;
        assert!(themes.len() <= 5);
        for (index, theme) in themes.iter().enumerate() {
            assert!(!themes[index + 1..].contains(theme), "duplicate {theme}");
            assert_eq!(theme, &theme.to_lowercase());
            assert_ne!(theme, "neutral");
        }
    }
}

#[test]
fn empty_history_yields_documented_defaults() {
    let scores = calculate_scores(&[]);
    let json = serde_json::to_value(&scores).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "kindnessScore": 50,
            "positivityScore": 50,
            "privacyAwarenessScore": 75,
            "digitalWellbeingScore": 75,
            "overallEmotion": { "primary": "neutral", "distribution": { "neutral": 100 } },
            "themes": []
        })
    );
}

#[test]
fn record_text_never_appears_in_output() {
    let records = generate(7, 40);
    let json = serde_json::to_string(&calculate_scores(&records)).expect("serializes");
    for text in TEXTS.iter().filter(|text| !text.is_empty()) {
        assert!(!json.contains(text), "leaked {text}");
    }
}
