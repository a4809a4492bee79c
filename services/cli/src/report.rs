use child_signals::config::AppConfig;
use child_signals::error::AppError;
use child_signals::signals::{
    ChildScores, CsvDirectorySource, ScoreService, SubjectId, WeeklyDigest,
};
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoresArgs {
    /// Subject identifiers; each maps to `<data-dir>/<subject>.csv`
    #[arg(required = true)]
    pub(crate) subjects: Vec<String>,
    /// Override the configured event directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Recompute even when a fresh cached value exists
    #[arg(long)]
    pub(crate) no_cache: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DigestArgs {
    /// Subject identifier
    pub(crate) subject: String,
    /// Override the configured event directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

fn service_for(
    config: &AppConfig,
    data_dir: Option<PathBuf>,
) -> ScoreService<CsvDirectorySource> {
    let data_dir = data_dir.unwrap_or_else(|| config.source.data_dir.clone());
    ScoreService::new(Arc::new(CsvDirectorySource::new(data_dir)), &config.cache)
}

pub(crate) fn render_scores(config: &AppConfig, args: ScoresArgs) -> Result<String, AppError> {
    let ScoresArgs {
        subjects,
        data_dir,
        no_cache,
    } = args;

    let service = service_for(config, data_dir);
    let scores: BTreeMap<String, ChildScores> = subjects
        .into_iter()
        .map(|subject| {
            let scores = service.get_child_scores(&SubjectId::new(subject.clone()), !no_cache);
            (subject, scores)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&scores)?)
}

pub(crate) fn render_digest(config: &AppConfig, args: DigestArgs) -> Result<String, AppError> {
    let DigestArgs { subject, data_dir } = args;
    let service = service_for(config, data_dir);
    let subject = SubjectId::new(subject);
    let digests = WeeklyDigest::build(&subject, &service.records_for(&subject));
    Ok(serde_json::to_string_pretty(&digests)?)
}
