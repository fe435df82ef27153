//! Closure-backed observer.

use crate::event::Event;
use crate::observer::Observer;

/// Adapts any closure or foreign callback into an [`Observer`].
///
/// Doubles as the test probe: hand it a closure that pushes into shared
/// state and assert on what arrived.
pub struct CallbackObserver {
    callback: Box<dyn Fn(&Event) + Send>,
}

impl CallbackObserver {
    pub fn new(callback: impl Fn(&Event) + Send + 'static) -> CallbackObserver {
        CallbackObserver {
            callback: Box::new(callback),
        }
    }
}

impl Observer for CallbackObserver {
    fn on_event(&self, event: &Event) {
        (self.callback)(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_callback_receives_the_event() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let observer = CallbackObserver::new(move |event: &Event| {
            sink.lock().unwrap().push(event.message().to_string());
        });

        let event = Event::restored(None, Severity::Warning, "ping".to_string(), None, None, None);
        observer.on_event(&event);

        assert_eq!(*seen.lock().unwrap(), vec!["ping".to_string()]);
    }
}
