//! Event logger with a sequential worker and observer fan-out.
//!
//! Log calls are fire-and-forget: they enqueue onto a private worker thread
//! which appends to history and then notifies observers in registration
//! order. [`Logger::flush`] is the blocking barrier that makes every prior
//! record visible.

mod worker;

use std::fmt;
use std::panic::Location;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::event::{CallSite, Event};
use crate::observer::Observer;
use crate::severity::Severity;
use crate::timefmt;

use worker::{lock, Command, Shared};

static SHARED: Lazy<Logger> = Lazy::new(Logger::new);

/// In-memory, append-only event log.
pub struct Logger {
    shared: Arc<Shared>,
    sender: Sender<Command>,
    update_date: Mutex<Option<DateTime<Utc>>>,
}

impl Logger {
    /// Fresh logger with its own worker thread.
    pub fn new() -> Logger {
        Logger::with_name("logbook-worker")
    }

    /// Fresh logger whose worker thread carries `name` in thread listings
    /// and panic messages.
    pub fn with_name(name: &str) -> Logger {
        let shared = Arc::new(Shared::new());
        let sender = worker::spawn(name, Arc::clone(&shared));
        Logger {
            shared,
            sender,
            update_date: Mutex::new(None),
        }
    }

    /// Process-wide default instance, created on first access and never torn
    /// down. Prefer an owned `Logger` passed through the application; this
    /// exists for callers that have nowhere to hang one.
    pub fn shared() -> &'static Logger {
        &SHARED
    }

    /// Records `message` at `Undefined` severity with the caller's file and
    /// line. Returns immediately.
    #[track_caller]
    pub fn log(&self, message: impl Into<String>) {
        self.log_at(Severity::Undefined, message);
    }

    /// Records `message` at the given severity with the caller's file and
    /// line. Returns immediately; the append and the observer notifications
    /// happen on the worker.
    #[track_caller]
    pub fn log_at(&self, severity: Severity, message: impl Into<String>) {
        let caller = Location::caller();
        let site = CallSite {
            function: None,
            file: caller.file().to_string(),
            line: caller.line(),
        };
        self.submit(severity, message.into(), Some(site));
    }

    /// Records with an explicitly supplied call site, as captured by
    /// [`callsite!`](crate::callsite) or handed in from a foreign caller.
    pub fn log_with_site(&self, severity: Severity, message: impl Into<String>, site: CallSite) {
        self.submit(severity, message.into(), Some(site));
    }

    fn submit(&self, severity: Severity, message: String, site: Option<CallSite>) {
        let stamp = timefmt::truncate_to_millis(Utc::now());
        let event = Event::recorded(stamp, severity, message, site);
        if self.sender.send(Command::Record(event)).is_err() {
            log::warn!("logger worker is gone; event dropped");
        }
    }

    /// Blocks until every record enqueued before this call has been appended
    /// and all of its observer notifications have run.
    pub fn flush(&self) {
        let (done, ready) = mpsc::channel();
        if self.sender.send(Command::Flush(done)).is_ok() {
            let _ = ready.recv();
        }
    }

    /// Snapshot of the full history in record order. Flush first when
    /// records may still be in flight.
    pub fn events(&self) -> Vec<Event> {
        lock(&self.shared.events).clone()
    }

    /// Empties the history. Observers and the update date are untouched.
    /// Not ordered with respect to in-flight records; flush first.
    pub fn clear_events(&self) {
        lock(&self.shared.events).clear();
    }

    /// Adds an observer. Each event reaches observers in registration
    /// order; there is no de-registration.
    pub fn register_observer(&self, observer: impl Observer + 'static) {
        lock(&self.shared.observers).push(Box::new(observer));
    }

    /// Freshness stamp of a logger rebuilt from a serialized snapshot.
    pub fn update_date(&self) -> Option<DateTime<Utc>> {
        *lock(&self.update_date)
    }

    pub fn set_update_date(&self, stamp: Option<DateTime<Utc>>) {
        *lock(&self.update_date) = stamp;
    }

    /// Replaces the history wholesale; used by the deserializing codecs.
    pub(crate) fn adopt_events(&self, events: Vec<Event>) {
        *lock(&self.shared.events) = events;
    }
}

impl Default for Logger {
    fn default() -> Logger {
        Logger::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("events", &lock(&self.shared.events).len())
            .field("observers", &lock(&self.shared.observers).len())
            .field("update_date", &*lock(&self.update_date))
            .finish()
    }
}

/// Flushes both sides, then compares histories element-wise. Observers and
/// update dates never participate.
impl PartialEq for Logger {
    fn eq(&self, other: &Logger) -> bool {
        self.flush();
        other.flush();
        self.events() == other.events()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Captures the enclosing function, file, and line as a
/// [`CallSite`](crate::CallSite).
///
/// ```
/// use logbook::{callsite, Logger, Severity};
///
/// let logger = Logger::new();
/// logger.log_with_site(Severity::Information, "manual site", callsite!());
/// logger.flush();
/// assert!(logger.events()[0].function().is_some());
/// ```
#[macro_export]
macro_rules! callsite {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = name_of(here);
        let name = name.strip_suffix("::here").unwrap_or(name);
        $crate::CallSite {
            function: Some(name.to_string()),
            file: file!().to_string(),
            line: line!(),
        }
    }};
}

/// Records a formatted message with full call-site capture.
///
/// Without a severity the record lands at `Undefined`:
///
/// ```
/// use logbook::{log_event, Logger, Severity};
///
/// let logger = Logger::new();
/// log_event!(logger, "plain {}", 1);
/// log_event!(logger, Severity::Warning, "disk {} almost full", "sda1");
/// logger.flush();
/// assert_eq!(logger.events()[1].severity(), &Severity::Warning);
/// ```
#[macro_export]
macro_rules! log_event {
    ($logger:expr, $message:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_event!($logger, $crate::Severity::Undefined, $message $(, $arg)*)
    };
    ($logger:expr, $severity:expr, $message:literal $(, $arg:expr)* $(,)?) => {
        $logger.log_with_site($severity, format!($message $(, $arg)*), $crate::callsite!())
    };
}
