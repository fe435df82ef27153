//! Observer capability.
//!
//! Observers receive every event right after it lands in a logger's
//! history. Dispatch runs on the logger's worker thread in registration
//! order.

mod callback;
mod console;

pub use callback::CallbackObserver;
pub use console::ConsoleObserver;

use crate::event::Event;

/// Receives each recorded event.
///
/// Dispatch happens on the logger's worker thread, so implementations must
/// be `Send`. Calling back into the owning logger from `on_event` is
/// unsupported.
pub trait Observer: Send {
    fn on_event(&self, event: &Event);
}
