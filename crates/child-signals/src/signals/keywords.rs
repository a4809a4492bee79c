//! Vocabulary used by the scoring rules. All entries are lowercase and are
//! matched against lowercased input.

/// A named group of phrases that suggest personally identifying information.
#[derive(Debug, Clone, Copy)]
pub struct PiiCategory {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
}

pub const PII_CATEGORIES: &[PiiCategory] = &[
    PiiCategory {
        name: "address",
        phrases: &[
            "address", "street", "avenue", "apartment", "zip code", "postcode",
        ],
    },
    PiiCategory {
        name: "phone",
        phrases: &["phone", "cell number", "my number", "call me", "text me"],
    },
    PiiCategory {
        name: "school",
        phrases: &["school", "my teacher", "classroom"],
    },
    PiiCategory {
        name: "home",
        phrases: &["home", "my house", "i live", "where i live"],
    },
    PiiCategory {
        name: "location",
        phrases: &["location", "where i am", "gps", "coordinates", "near me"],
    },
    PiiCategory {
        name: "contact",
        phrases: &["email", "password", "snapchat", "instagram handle"],
    },
    PiiCategory {
        name: "personal",
        phrases: &["personal info", "private"],
    },
    PiiCategory {
        name: "identity",
        phrases: &["full name", "last name", "birthday", "date of birth", "how old i am"],
    },
];

/// Substrings in an issue tag that mark a privacy concern.
pub const PRIVACY_ISSUE_MARKERS: &[&str] = &["privacy", "personal"];

/// Intent substrings that count against kindness.
pub const HOSTILE_INTENT_MARKERS: &[&str] = &["criticism", "attack", "threat"];

pub const POSITIVE_INTENT: &str = "positive";
/// Stand-in for a blank emotion or intent label.
pub const NEUTRAL_LABEL: &str = "neutral";
pub const NEUTRAL_INTENT: &str = NEUTRAL_LABEL;

pub const POSITIVE_EMOTIONS: &[&str] = &["joy", "surprise"];
pub const NEGATIVE_EMOTIONS: &[&str] = &["anger", "sadness", "fear"];

/// First PII category whose phrases appear in `text`, if any.
pub fn pii_category(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        return None;
    }
    let lowered = text.to_lowercase();
    PII_CATEGORIES
        .iter()
        .find(|category| category.phrases.iter().any(|phrase| lowered.contains(phrase)))
        .map(|category| category.name)
}

pub fn is_privacy_issue(tag: &str) -> bool {
    let lowered = tag.to_lowercase();
    PRIVACY_ISSUE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

pub fn is_hostile_intent(intent: &str) -> bool {
    let lowered = intent.to_lowercase();
    HOSTILE_INTENT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

pub fn is_positive_intent(intent: &str) -> bool {
    intent.trim().eq_ignore_ascii_case(POSITIVE_INTENT)
}

pub fn is_positive_emotion(emotion: &str) -> bool {
    matches_any(emotion, POSITIVE_EMOTIONS)
}

pub fn is_negative_emotion(emotion: &str) -> bool {
    matches_any(emotion, NEGATIVE_EMOTIONS)
}

fn matches_any(value: &str, vocabulary: &[&str]) -> bool {
    let value = value.trim();
    vocabulary
        .iter()
        .any(|entry| value.eq_ignore_ascii_case(entry))
}
