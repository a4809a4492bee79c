use super::super::domain::ClassificationRecord;
use super::super::keywords::NEUTRAL_INTENT;

pub const MAX_THEMES: usize = 5;
const TOP_INTENTS: usize = 2;
const TOP_ISSUES: usize = 2;

/// Most frequent non-neutral intents followed by the most frequent issue
/// tags, deduplicated. Equal counts keep first-seen order.
pub fn extract_themes(records: &[ClassificationRecord]) -> Vec<String> {
    let mut intents = FrequencyTable::default();
    let mut issues = FrequencyTable::default();

    for record in records {
        let intent = record.intent.trim().to_lowercase();
        if !intent.is_empty() && intent != NEUTRAL_INTENT {
            intents.observe(intent);
        }
        for tag in record.issue_tags() {
            issues.observe(tag);
        }
    }

    let mut themes: Vec<String> = Vec::with_capacity(TOP_INTENTS + TOP_ISSUES);
    for candidate in intents
        .top(TOP_INTENTS)
        .into_iter()
        .chain(issues.top(TOP_ISSUES))
    {
        if !themes.contains(&candidate) {
            themes.push(candidate);
        }
    }
    themes.truncate(MAX_THEMES);
    themes
}

#[derive(Debug, Default)]
struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    fn observe(&mut self, value: String) {
        match self.entries.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value, 1)),
        }
    }

    fn top(mut self, limit: usize) -> Vec<String> {
        // `sort_by` is stable, so equal counts stay in first-seen order.
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
            .into_iter()
            .take(limit)
            .map(|(value, _)| value)
            .collect()
    }
}
