//! Editor that publishes file lifecycle events, plus the listeners that
//! react to them.

pub mod editor;
pub mod error;
pub mod listeners;

pub use editor::{Editor, CLOSE, OPEN, SAVE};
pub use error::{EditorError, Result};
pub use listeners::{
    register_all, EmailMessage, EmailNotificationListener, ListenerConfig, LogOpenListener,
    Subscription,
};
