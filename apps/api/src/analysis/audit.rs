//! Append-only CSV log of completed analyses.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::{Writer, WriterBuilder};
use serde::Serialize;

/// One row per successful analyze call.
#[derive(Debug, Serialize)]
pub struct AnalysisRecord {
    pub timestamp: DateTime<Utc>,
    pub job_title: String,
    pub resume_chars: usize,
    pub missing_skills: usize,
    pub recommended_courses: usize,
}

/// CSV-backed audit log. Rows are appended under a mutex; the header row
/// is written only when the file is first created.
pub struct AnalysisLog {
    writer: Mutex<Writer<File>>,
}

impl AnalysisLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_exists = path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open analysis log at {}", path.display()))?;

        let writer = WriterBuilder::new()
            .has_headers(!file_exists)
            .from_writer(file);

        Ok(Self {
            writer: Mutex::new(writer),
        })
    }

    /// Appends one record and flushes it to disk.
    pub fn record(&self, record: &AnalysisRecord) -> Result<()> {
        let mut writer = self.writer.lock().expect("analysis log mutex poisoned");
        writer
            .serialize(record)
            .context("failed to serialize analysis record")?;
        writer.flush().context("failed to flush analysis log")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AnalysisRecord {
        AnalysisRecord {
            timestamp: Utc::now(),
            job_title: "Backend Engineer".to_string(),
            resume_chars: 1234,
            missing_skills: 3,
            recommended_courses: 2,
        }
    }

    #[test]
    fn test_header_written_once_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        {
            let log = AnalysisLog::open(&path).unwrap();
            log.record(&sample_record()).unwrap();
        }
        {
            let log = AnalysisLog::open(&path).unwrap();
            log.record(&sample_record()).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let header_count = contents
            .lines()
            .filter(|line| line.starts_with("timestamp"))
            .count();
        assert_eq!(header_count, 1);
        assert_eq!(contents.lines().count(), 3); // header + two rows
    }

    #[test]
    fn test_record_row_carries_the_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let log = AnalysisLog::open(&path).unwrap();
        log.record(&sample_record()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let row = contents.lines().nth(1).unwrap();
        assert!(row.contains("Backend Engineer"));
        assert!(row.ends_with("1234,3,2"));
    }
}
