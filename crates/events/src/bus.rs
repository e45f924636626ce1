//! Named-event bus with synchronous, in-order dispatch

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{EventError, Result};
use crate::listener::EventListener;

/// Registry mapping event names to the listeners subscribed to them
///
/// Listeners are notified in subscription order. The same listener may be
/// registered more than once and is then notified once per registration.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<String, Vec<Arc<dyn EventListener>>>,
}

impl EventBus {
    /// Create an empty event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event`, after any existing listeners
    pub fn subscribe(&mut self, event: impl Into<String>, listener: Arc<dyn EventListener>) {
        let event = event.into();
        debug!(event = %event, listener = listener.name(), "Subscribing listener");
        self.listeners.entry(event).or_default().push(listener);
    }

    /// Remove the first registration of `listener` for `event`
    ///
    /// Listeners are matched by identity, not by name. Returns `false` when
    /// nothing was registered.
    pub fn unsubscribe(&mut self, event: &str, listener: &Arc<dyn EventListener>) -> bool {
        let Some(registered) = self.listeners.get_mut(event) else {
            return false;
        };

        let Some(index) = registered.iter().position(|l| same_listener(l, listener)) else {
            return false;
        };

        registered.remove(index);
        if registered.is_empty() {
            self.listeners.remove(event);
        }
        debug!(event = %event, listener = listener.name(), "Unsubscribed listener");
        true
    }

    /// Dispatch `event` to its listeners in subscription order
    ///
    /// Stops at the first listener that fails and returns its error; later
    /// listeners are not called. Returns the number of listeners notified.
    pub fn notify(&self, event: &str, payload: Option<&str>) -> Result<usize> {
        let Some(registered) = self.listeners.get(event) else {
            debug!(event = %event, "No listeners for event");
            return Ok(0);
        };

        for listener in registered {
            debug!(event = %event, listener = listener.name(), "Dispatching event");
            listener
                .update(event, payload)
                .map_err(|source| EventError::ListenerFailed {
                    event: event.to_string(),
                    listener: listener.name().to_string(),
                    source,
                })?;
        }

        Ok(registered.len())
    }

    /// Number of registrations for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }

    /// Event names with at least one listener, sorted
    pub fn event_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.listeners.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Drop every listener registered for `event`, returning how many were removed
    pub fn clear(&mut self, event: &str) -> usize {
        self.listeners.remove(event).map_or(0, |l| l.len())
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

// Compare data pointers only; vtable pointers for the same type are not guaranteed unique.
fn same_listener(a: &Arc<dyn EventListener>, b: &Arc<dyn EventListener>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<(&str, usize)> = self
            .event_names()
            .into_iter()
            .map(|name| (name, self.listener_count(name)))
            .collect();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}
