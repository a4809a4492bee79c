use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::domain::{ChildScores, ClassificationRecord, SubjectId};
use super::loader::RecordSource;
use super::scoring::calculate_scores;
use crate::config::CacheConfig;

/// Time source for cache freshness, swappable so expiry can be tested
/// without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
struct CachedScores {
    scores: ChildScores,
    computed_at: DateTime<Utc>,
}

/// Process-local memo of the last scores computed per subject.
pub struct ScoreCache<C = SystemClock> {
    entries: Mutex<HashMap<SubjectId, CachedScores>>,
    ttl: Duration,
    clock: C,
}

impl<C: Clock> ScoreCache<C> {
    pub fn new(ttl: Duration, clock: C) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Stored scores for `subject` if they are younger than the TTL.
    pub fn fresh(&self, subject: &SubjectId) -> Option<ChildScores> {
        let now = self.clock.now();
        let entries = self.lock();
        let entry = entries.get(subject)?;
        // A clock that stepped backwards reads as zero age.
        let age = (now - entry.computed_at).to_std().unwrap_or_default();
        (age < self.ttl).then(|| entry.scores.clone())
    }

    /// Replaces the subject's entry, stamping it with the current time.
    pub fn store(&self, subject: SubjectId, scores: ChildScores) {
        let entry = CachedScores {
            scores,
            computed_at: self.clock.now(),
        };
        self.lock().insert(subject, entry);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are only ever replaced whole, so a poisoned map is still
    // consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<SubjectId, CachedScores>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Loads, scores, and memoizes a subject's classification events.
pub struct ScoreService<S, C = SystemClock> {
    source: Arc<S>,
    cache: ScoreCache<C>,
}

impl<S: RecordSource> ScoreService<S, SystemClock> {
    pub fn new(source: Arc<S>, config: &CacheConfig) -> Self {
        Self::with_clock(source, config.ttl, SystemClock)
    }
}

impl<S, C> ScoreService<S, C>
where
    S: RecordSource,
    C: Clock,
{
    pub fn with_clock(source: Arc<S>, ttl: Duration, clock: C) -> Self {
        Self {
            source,
            cache: ScoreCache::new(ttl, clock),
        }
    }

    pub fn cache(&self) -> &ScoreCache<C> {
        &self.cache
    }

    /// Scores for `subject`, served from the cache while fresh. Never fails:
    /// an unreadable source degrades to the empty-history defaults.
    pub fn get_child_scores(&self, subject: &SubjectId, use_cache: bool) -> ChildScores {
        if use_cache {
            if let Some(scores) = self.cache.fresh(subject) {
                debug!(%subject, "serving cached scores");
                return scores;
            }
        }

        let records = self.records_for(subject);
        let scores = calculate_scores(&records);
        info!(
            %subject,
            records = records.len(),
            kindness = scores.kindness_score,
            wellbeing = scores.digital_wellbeing_score,
            "recomputed child scores"
        );

        self.cache.store(subject.clone(), scores.clone());
        scores
    }

    /// The subject's well-formed records, or none if the source failed.
    pub fn records_for(&self, subject: &SubjectId) -> Vec<ClassificationRecord> {
        match self.source.load(subject) {
            Ok(records) => records,
            Err(err) => {
                warn!(%subject, error = %err, "event source unreadable; using empty history");
                Vec::new()
            }
        }
    }
}
