use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::LpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub host: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

impl LogEntry {
    fn marker(&self) -> &'static str {
        match self.level {
            LogLevel::Info => "🟢",
            LogLevel::Error => "🔴",
        }
    }

    /// `<timestamp> <marker> <event> <host> <details>`
    fn to_line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.marker(),
            self.event,
            self.host.as_deref().unwrap_or("*"),
            self.details.as_deref().unwrap_or("")
        )
    }
}

/// Append-only activity log, one line per event.
#[derive(Debug, Clone)]
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Logger writing to `~/.lpseq/activity.log`.
    pub fn new() -> crate::Result<Self> {
        let user_dirs = directories::UserDirs::new().ok_or_else(|| {
            LpError::storage_error("initialization", "could not determine home directory")
        })?;
        let dir = user_dirs.home_dir().join(".lpseq");
        fs::create_dir_all(&dir)?;

        Ok(Self {
            log_path: dir.join("activity.log"),
        })
    }

    /// Logger writing to an explicit file; parent directories are created.
    pub fn at(path: impl Into<PathBuf>) -> crate::Result<Self> {
        let log_path = path.into();
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { log_path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.log_path
    }

    pub fn log(
        &self,
        level: LogLevel,
        host: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            host: host.map(|h| h.to_string()),
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{}", entry.to_line())?;

        Ok(())
    }

    /// Matching lines, most recent first.
    pub fn read_logs(
        &self,
        host_filter: Option<&str>,
        errors_only: bool,
    ) -> crate::Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let file = fs::File::open(&self.log_path)?;
        let reader = BufReader::new(file);
        let mut matching_lines = Vec::new();

        for line in reader.lines() {
            let line = line?;

            if errors_only && !line.contains("🔴") {
                continue;
            }

            if let Some(host) = host_filter {
                if !line.contains(host) {
                    continue;
                }
            }

            matching_lines.push(line);
        }

        matching_lines.reverse();
        Ok(matching_lines)
    }

    pub fn info(
        &self,
        host: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        self.log(LogLevel::Info, host, event, details)
    }

    pub fn error(
        &self,
        host: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        self.log(LogLevel::Error, host, event, details)
    }
}
