use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Please open a file first.")]
    NoFileOpen,

    #[error("Notification failed: {0}")]
    Notification(#[from] events::EventError),
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(EditorError::NoFileOpen.to_string(), "Please open a file first.");
    }
}
