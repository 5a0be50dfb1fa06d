//! Per-run state: output directories, accumulated records, activity log
//!
//! A [`RunContext`] is created once at the start of a run and owns everything
//! scoped to it: the timestamped output directory, the growing record
//! sequence, and the run-log sink. Only the orchestrator mutates it, and
//! both the record sequence and the log are append-only.

mod log;

pub use log::{ActivityLog, LogLevel};

use crate::crawler::JournalRecord;
use crate::HarvestError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// State and output locations for one harvest run
pub struct RunContext {
    keyword: String,
    output_dir: PathBuf,
    viz_dir: PathBuf,
    csv_path: PathBuf,
    records: Vec<JournalRecord>,
    log: ActivityLog,
}

impl RunContext {
    /// Creates the run's output layout and opens its log sink
    ///
    /// Layout: `<output_root>/<keyword>_<timestamp>/` containing
    /// `journal_data_<timestamp>.csv`, `scraping_log_<timestamp>.log`, and a
    /// `visualizations/` subdirectory. Any failure here is fatal; the run
    /// never starts without a place to write.
    pub fn create(output_root: &Path, keyword: &str) -> Result<Self, HarvestError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let output_dir = create_run_dir(output_root, keyword, &timestamp)?;

        let viz_dir = output_dir.join("visualizations");
        fs::create_dir_all(&viz_dir).map_err(|source| HarvestError::Setup {
            path: viz_dir.clone(),
            source,
        })?;

        let csv_path = output_dir.join(format!("journal_data_{}.csv", timestamp));
        let log_path = output_dir.join(format!("scraping_log_{}.log", timestamp));
        let log = ActivityLog::create(&log_path)?;

        Ok(Self {
            keyword: keyword.to_string(),
            output_dir,
            viz_dir,
            csv_path,
            records: Vec::new(),
            log,
        })
    }

    /// Appends one record; insertion order is page order, then in-page order
    pub fn append(&mut self, record: JournalRecord) {
        self.records.push(record);
    }

    /// The accumulated records so far
    pub fn records(&self) -> &[JournalRecord] {
        &self.records
    }

    /// Writes one run-log entry (append-only, flushed immediately)
    pub fn log(&mut self, level: LogLevel, message: &str) {
        self.log.write(level, message);
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn viz_dir(&self) -> &Path {
        &self.viz_dir
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn log_path(&self) -> &Path {
        self.log.path()
    }
}

/// Creates the timestamped run directory
///
/// Two runs in the same second would collide on the timestamp alone; a
/// numeric suffix keeps every run's directory distinct instead of
/// overwriting a prior run.
fn create_run_dir(root: &Path, keyword: &str, timestamp: &str) -> Result<PathBuf, HarvestError> {
    let mut candidate = root.join(format!("{}_{}", keyword, timestamp));
    let mut suffix = 1u32;
    while candidate.exists() {
        candidate = root.join(format!("{}_{}_{}", keyword, timestamp, suffix));
        suffix += 1;
    }

    fs::create_dir_all(&candidate).map_err(|source| HarvestError::Setup {
        path: candidate.clone(),
        source,
    })?;

    Ok(candidate)
}
