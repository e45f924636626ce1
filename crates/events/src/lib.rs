//! Event system for the editor
//!
//! This crate provides the named-event bus and the listener trait used to
//! react to editor state changes.

mod bus;
mod error;
mod listener;

pub use bus::EventBus;
pub use error::{EventError, ListenerError, Result};
pub use listener::EventListener;
