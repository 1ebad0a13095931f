use std::sync::{Arc, Mutex};

#[cfg(feature = "emitter")]
use crate::EventEmitter;

/// Receives the short customer-facing messages the cart store raises,
/// such as `"Dune" added to cart`.
pub trait Notifier: Send {
    fn notify(&mut self, message: &str);
}

/// Discards every notification. The store's default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _message: &str) {}
}

/// Logs notifications to stdout or a shared buffer.
pub struct LogNotifier {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LogNotifier {
    pub fn new() -> Self {
        LogNotifier { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogNotifier {
            buffer: Some(buffer),
        }
    }
}

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        let line = format!("[CART] {}", message);
        if let Some(buffer) = &self.buffer {
            // A poisoned buffer drops the line rather than failing the
            // cart operation that raised it.
            if let Ok(mut buffer) = buffer.lock() {
                buffer.push(line);
            }
        } else {
            println!("{}", line);
        }
    }
}

/// Event name `EmitterNotifier` publishes under unless overridden.
#[cfg(feature = "emitter")]
pub const CART_NOTIFICATION_EVENT: &str = "cart:notification";

/// Emits notifications via an EventEmitter for in-process subscribers.
#[cfg(feature = "emitter")]
pub struct EmitterNotifier {
    emitter: EventEmitter,
    event: String,
}

#[cfg(feature = "emitter")]
impl EmitterNotifier {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterNotifier {
            emitter,
            event: CART_NOTIFICATION_EVENT.to_string(),
        }
    }

    pub fn with_event(emitter: EventEmitter, event: impl Into<String>) -> Self {
        EmitterNotifier {
            emitter,
            event: event.into(),
        }
    }
}

#[cfg(feature = "emitter")]
impl Notifier for EmitterNotifier {
    fn notify(&mut self, message: &str) {
        self.emitter.emit(&self.event, message.to_string());
    }
}
