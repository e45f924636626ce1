mod email;
mod log_open;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use events::{EventBus, EventListener};
use serde::{Deserialize, Serialize};

pub use email::{EmailMessage, EmailNotificationListener};
pub use log_open::LogOpenListener;

/// Listener wiring as read from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListenerConfig {
    Log { path: PathBuf },
    Email { address: String },
}

impl ListenerConfig {
    pub fn build(&self) -> Arc<dyn EventListener> {
        match self {
            ListenerConfig::Log { path } => Arc::new(LogOpenListener::new(path.clone())),
            ListenerConfig::Email { address } => {
                Arc::new(EmailNotificationListener::new(address.clone()))
            }
        }
    }
}

/// One configured `event -> listener` registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub event: String,
    #[serde(flatten)]
    pub listener: ListenerConfig,
}

impl Subscription {
    pub fn new(event: impl Into<String>, listener: ListenerConfig) -> Self {
        Self {
            event: event.into(),
            listener,
        }
    }
}

/// Build and register a listener for every subscription, in order
pub fn register_all(bus: &mut EventBus, subscriptions: &[Subscription]) {
    for subscription in subscriptions {
        bus.subscribe(subscription.event.clone(), subscription.listener.build());
    }
}

/// Last path component of `path`, or `path` itself when there is none
fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}
