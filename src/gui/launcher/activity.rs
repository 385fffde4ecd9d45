//! Activity log entries shown in the launcher window

use chrono::{DateTime, Local};

/// Kind of activity log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    System,
    Error,
}

/// One line of the activity log
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Local>,
    pub kind: LogKind,
    pub summary: String,
}

impl LogEvent {
    fn new(kind: LogKind, summary: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            summary: summary.into(),
        }
    }

    pub fn system(summary: impl Into<String>) -> Self {
        Self::new(LogKind::System, summary)
    }

    pub fn error(summary: impl Into<String>) -> Self {
        Self::new(LogKind::Error, summary)
    }
}
