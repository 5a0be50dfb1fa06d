use crate::HarvestError;
use chrono::Local;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Severity of one run-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// Append-only plain-text log file for one run
///
/// Every entry is written as `timestamp - LEVEL - message` and flushed
/// immediately, so the log survives an in-process crash.
pub struct ActivityLog {
    path: PathBuf,
    file: File,
}

impl ActivityLog {
    /// Creates the log file; failure here is a fatal setup error
    pub fn create(path: &Path) -> Result<Self, HarvestError> {
        let file = File::create(path).map_err(|source| HarvestError::Setup {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry and flushes
    ///
    /// Mid-run write failures are reported on the console but never abort
    /// the run; only log creation is fatal.
    pub fn write(&mut self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let result = writeln!(self.file, "{} - {} - {}", timestamp, level, message)
            .and_then(|_| self.file.flush());

        if let Err(e) = result {
            tracing::warn!("Failed to write run log entry: {}", e);
        }
    }
}
