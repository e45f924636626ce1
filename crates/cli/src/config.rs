use std::path::Path;

use anyhow::{bail, Context, Result};
use editor::{ListenerConfig, Subscription, OPEN, SAVE};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

pub const CONFIG_FILE: &str = "editor-events.toml";
const DEFAULT_LOG_FILE: &str = "editor-events.log";
const DEFAULT_EMAIL: &str = "admin@example.com";

/// Listener wiring for the editor, stored as TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            subscriptions: vec![
                Subscription::new(
                    OPEN,
                    ListenerConfig::Log {
                        path: DEFAULT_LOG_FILE.into(),
                    },
                ),
                Subscription::new(
                    SAVE,
                    ListenerConfig::Email {
                        address: DEFAULT_EMAIL.to_string(),
                    },
                ),
            ],
        }
    }
}

impl EditorConfig {
    /// Read config from `path`, falling back to defaults when the file is missing
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(empty) = config.subscriptions.iter().find(|s| s.event.is_empty()) {
            bail!("Subscription with empty event name: {:?}", empty.listener);
        }

        debug!(path = %path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Write the default config to `path`, refusing to overwrite
    pub async fn write_default(path: &Path) -> Result<Self> {
        if path.exists() {
            bail!("{} already exists", path.display());
        }

        let config = Self::default();
        let content = toml::to_string_pretty(&config)?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(config)
    }
}
