//! Where completed registrations go once the wizard hands them over.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::flows::Registration;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to serialize registration")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write registration to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Collaborator that receives each completed registration exactly once.
pub trait SubmissionSink {
    fn submit(&mut self, registration: Registration) -> Result<(), SubmissionError>;
}

/// In-memory sink, mainly for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<Registration>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Registration] {
        &self.records
    }
}

impl SubmissionSink for MemorySink {
    fn submit(&mut self, registration: Registration) -> Result<(), SubmissionError> {
        self.records.push(registration);
        Ok(())
    }
}

/// Writes each registration as pretty-printed JSON into a directory, one
/// file per record, named by role and submission time.
#[derive(Debug)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SubmissionSink for JsonFileSink {
    fn submit(&mut self, registration: Registration) -> Result<(), SubmissionError> {
        let json = serde_json::to_string_pretty(&registration)?;

        fs::create_dir_all(&self.dir).map_err(|source| SubmissionError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S%.3f");
        let path = self.dir.join(format!("{}-{stamp}.json", registration.role()));
        fs::write(&path, json).map_err(|source| SubmissionError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), role = registration.role(), "registration stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::ConsumerSignup;

    fn consumer_record() -> Registration {
        ConsumerSignup::new("Demo", "demo@example.com", "123", "secret1").into_registration()
    }

    #[test]
    fn test_memory_sink_keeps_records_in_order() {
        let mut sink = MemorySink::new();
        sink.submit(consumer_record()).unwrap();
        sink.submit(consumer_record()).unwrap();
        assert_eq!(sink.records().len(), 2);
        assert_eq!(sink.records()[0].role(), "consumer");
    }

    #[test]
    fn test_json_file_sink_writes_role_tagged_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonFileSink::new(dir.path().join("submissions"));
        sink.submit(consumer_record()).unwrap();

        let entries: Vec<_> = fs::read_dir(sink.dir()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let path = entries[0].as_ref().unwrap().path();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("consumer-"));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["role"], "consumer");
        assert!(value.get("password").is_none());
    }
}
