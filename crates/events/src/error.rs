use thiserror::Error;

/// Failure reported by a listener while handling an event
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Listener '{listener}' failed handling '{event}' event: {source}")]
    ListenerFailed {
        event: String,
        listener: String,
        #[source]
        source: ListenerError,
    },
}

impl EventError {
    /// Name of the event whose dispatch was aborted
    pub fn event(&self) -> &str {
        match self {
            EventError::ListenerFailed { event, .. } => event,
        }
    }
}

pub type Result<T> = std::result::Result<T, EventError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let error = EventError::ListenerFailed {
            event: "save".to_string(),
            listener: "email".to_string(),
            source: ListenerError::Rejected("no address".to_string()),
        };

        let message = error.to_string();
        assert!(message.contains("save"));
        assert!(message.contains("email"));
        assert!(message.contains("no address"));
        assert_eq!(error.event(), "save");
    }

    #[test]
    fn test_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = EventError::ListenerFailed {
            event: "open".to_string(),
            listener: "log".to_string(),
            source: ListenerError::from(io),
        };

        let source = error.source().expect("source should be set");
        assert!(source.to_string().contains("denied"));
    }
}
