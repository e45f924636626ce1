use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use events::{EventListener, ListenerError};
use tracing::debug;

/// Appends a timestamped line to a log file for every event it receives
#[derive(Debug, Clone)]
pub struct LogOpenListener {
    log: PathBuf,
}

impl LogOpenListener {
    pub fn new(log: impl Into<PathBuf>) -> Self {
        Self { log: log.into() }
    }

    pub fn log_path(&self) -> &Path {
        &self.log
    }
}

impl EventListener for LogOpenListener {
    fn name(&self) -> &str {
        "log"
    }

    fn update(&self, event: &str, payload: Option<&str>) -> Result<(), ListenerError> {
        let file = payload.ok_or_else(|| {
            ListenerError::Rejected(format!("'{}' event carries no file", event))
        })?;

        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log)?;
        writeln!(
            log,
            "{} {}: {}",
            Utc::now().to_rfc3339(),
            event,
            super::file_name(file)
        )?;

        debug!(log = %self.log.display(), event = %event, file = %file, "Logged event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_one_line_per_event() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("events.log");
        let listener = LogOpenListener::new(&log_path);

        listener.update("open", Some("/tmp/docs/test.txt")).unwrap();
        listener.update("open", Some("other.txt")).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" open: test.txt"));
        assert!(lines[1].ends_with(" open: other.txt"));
    }

    #[test]
    fn test_missing_payload_is_rejected() {
        let dir = TempDir::new().unwrap();
        let listener = LogOpenListener::new(dir.path().join("events.log"));

        let err = listener.update("open", None).unwrap_err();
        assert!(matches!(err, ListenerError::Rejected(_)));
    }

    #[test]
    fn test_unwritable_log_is_io_error() {
        let dir = TempDir::new().unwrap();
        let listener = LogOpenListener::new(dir.path().join("missing").join("events.log"));

        let err = listener.update("open", Some("test.txt")).unwrap_err();
        assert!(matches!(err, ListenerError::Io(_)));
    }
}
