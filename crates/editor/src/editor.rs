use std::path::{Path, PathBuf};

use events::EventBus;
use tracing::{info, warn};

use crate::error::{EditorError, Result};

pub const OPEN: &str = "open";
pub const SAVE: &str = "save";
pub const CLOSE: &str = "close";

/// Text editor that publishes file lifecycle events on its own bus
#[derive(Debug, Default)]
pub struct Editor {
    pub events: EventBus,
    file: Option<PathBuf>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Open `path` and notify `open` listeners
    ///
    /// The file stays open even when a listener fails.
    pub fn open_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        info!(path = %path.display(), "Opening file");
        let payload = path.to_string_lossy().into_owned();
        self.file = Some(path);
        self.events.notify(OPEN, Some(payload.as_str()))?;
        Ok(())
    }

    /// Notify `save` listeners about the open file
    pub fn save_file(&self) -> Result<()> {
        let path = self.file.as_ref().ok_or(EditorError::NoFileOpen)?;
        info!(path = %path.display(), "Saving file");
        let payload = path.to_string_lossy();
        self.events.notify(SAVE, Some(&*payload))?;
        Ok(())
    }

    /// Close the open file, returning its path
    ///
    /// `close` listener failures are logged and do not keep the file open.
    pub fn close_file(&mut self) -> Option<PathBuf> {
        let path = self.file.take()?;
        info!(path = %path.display(), "Closing file");
        let result = self.events.notify(CLOSE, Some(&*path.to_string_lossy()));
        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "Close notification failed");
        }
        Some(path)
    }
}
