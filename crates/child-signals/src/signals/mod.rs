//! Behavioral signal aggregation: load classification events, score them,
//! and memoize the result per subject.

pub mod cache;
pub mod digest;
pub mod domain;
pub mod keywords;
pub mod loader;
pub mod scoring;
pub mod timestamp;

pub use cache::{Clock, ScoreCache, ScoreService, SystemClock};
pub use digest::{DayStatus, DayStatusEntry, WeeklyDigest};
pub use domain::{
    ChildScores, ClassificationRecord, EmotionSummary, MessageContext, RiskLevel, SubjectId,
};
pub use loader::{parse_records, CsvDirectorySource, LoadError, RecordSource};
pub use scoring::calculate_scores;
