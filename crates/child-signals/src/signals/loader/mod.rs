mod parser;

use super::domain::{ClassificationRecord, SubjectId};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

pub use parser::parse_records;

/// Failure reading a subject's event source. An absent source is not an
/// error; it loads as zero records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read event source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid event CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Supplies the classification events for one subject.
pub trait RecordSource: Send + Sync {
    fn load(&self, subject: &SubjectId) -> Result<Vec<ClassificationRecord>, LoadError>;
}

/// Reads `<data_dir>/<subject>.csv`.
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    data_dir: PathBuf,
}

impl CsvDirectorySource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the subject's file, or `None` when the id cannot name a file
    /// inside the data directory.
    pub fn path_for(&self, subject: &SubjectId) -> Option<PathBuf> {
        let id = subject.as_str().trim();
        let unsafe_id = id.is_empty()
            || id.contains(['/', '\\'])
            || id.contains("..")
            || id.starts_with('.');
        if unsafe_id {
            return None;
        }
        Some(self.data_dir.join(format!("{id}.csv")))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ClassificationRecord>, LoadError> {
        Ok(parse_records(reader)?)
    }
}

impl RecordSource for CsvDirectorySource {
    fn load(&self, subject: &SubjectId) -> Result<Vec<ClassificationRecord>, LoadError> {
        let Some(path) = self.path_for(subject) else {
            debug!(%subject, "subject id does not map to an event file");
            return Ok(Vec::new());
        };

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(%subject, path = %path.display(), "no event source for subject");
                return Ok(Vec::new());
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        Self::from_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = CsvDirectorySource::new(dir.path());
        let records = source
            .load(&SubjectId::from("kid_404"))
            .expect("missing source is not an error");
        assert!(records.is_empty());
    }

    #[test]
    fn path_traversal_ids_resolve_to_no_source() {
        let source = CsvDirectorySource::new("data");
        assert!(source.path_for(&SubjectId::from("../secrets")).is_none());
        assert!(source.path_for(&SubjectId::from("a/b")).is_none());
        assert!(source.path_for(&SubjectId::from("  ")).is_none());
        assert_eq!(
            source.path_for(&SubjectId::from("kid_01")),
            Some(PathBuf::from("data").join("kid_01.csv"))
        );
        assert!(source
            .load(&SubjectId::from("../secrets"))
            .expect("no error")
            .is_empty());
    }

    #[test]
    fn reads_subject_file_from_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("kid_01.csv"),
            "id,timestamp,classification\nm1,2025-09-24 10:00:00,green\n",
        )
        .expect("write fixture");
        let source = CsvDirectorySource::new(dir.path());
        let records = source.load(&SubjectId::from("kid_01")).expect("loads");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "m1");
    }
}
