use std::sync::Mutex;

use events::{EventListener, ListenerError};
use serde::Serialize;
use tracing::info;

/// A simulated outgoing email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Sends (simulated) email notifications about editor events
///
/// Nothing leaves the process: messages are logged and kept in an outbox.
#[derive(Debug)]
pub struct EmailNotificationListener {
    email: String,
    outbox: Mutex<Vec<EmailMessage>>,
}

impl EmailNotificationListener {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            outbox: Mutex::new(Vec::new()),
        }
    }

    pub fn address(&self) -> &str {
        &self.email
    }

    /// Messages sent so far, oldest first
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl EventListener for EmailNotificationListener {
    fn name(&self) -> &str {
        "email"
    }

    fn update(&self, event: &str, payload: Option<&str>) -> Result<(), ListenerError> {
        if self.email.trim().is_empty() {
            return Err(ListenerError::Rejected("no recipient address".to_string()));
        }

        let file = payload.map(super::file_name).unwrap_or("<none>");
        let message = EmailMessage {
            to: self.email.clone(),
            subject: format!("File {}", event),
            body: format!(
                "Someone has performed {} operation with the following file: {}",
                event, file
            ),
        };

        info!(to = %message.to, subject = %message.subject, "{}", message.body);
        self.outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message);
        Ok(())
    }
}
