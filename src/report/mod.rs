// Audit report log
//
// Chronological record of a wipe session. Every event line carries a UTC
// timestamp in Zulu form so the report can stand as evidence of the
// erasure process.


use crate::WipeResult;
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Timestamp layout for report lines: YYYY-MM-DD-HH-MM-SSZ.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%SZ";

/// Timestamped event sink: console mirror plus an optional report file.
pub struct ReportLog {
    file: Option<File>,
    quiet: bool,
}

impl ReportLog {
    /// Console-only log.
    pub fn new() -> Self {
        Self {
            file: None,
            quiet: false,
        }
    }

    /// Mirror every line into an append-mode report file.
    pub fn with_file<P: AsRef<Path>>(path: P) -> WipeResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self {
            file: Some(file),
            quiet: false,
        })
    }

    /// Suppress console output. File lines, when enabled, are still
    /// written.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    /// Append one timestamped event line.
    pub fn log<S: AsRef<str>>(&mut self, message: S) {
        let line = format!("{} {}", Self::timestamp(), message.as_ref());

        if !self.quiet {
            println!("{}", line);
        }

        if let Some(file) = self.file.as_mut() {
            if let Err(e) = writeln!(file, "{}", line) {
                log::warn!("report file write failed: {}", e);
            }
        }
    }

    pub(crate) fn timestamp() -> String {
        Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Default for ReportLog {
    fn default() -> Self {
        Self::new()
    }
}
