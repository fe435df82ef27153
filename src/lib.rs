//! In-process structured event log.
//!
//! Events pair a severity and a timestamp with optional call-site metadata.
//! A [`Logger`] accumulates them in order, fans each one out to registered
//! [`Observer`]s on a private worker thread, and round-trips its whole
//! history through XML or JSON documents.
//!
//! ```
//! use logbook::{Logger, Severity};
//!
//! let logger = Logger::new();
//! logger.log_at(Severity::Information, "Hello world.");
//! logger.flush();
//!
//! let events = logger.events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].message(), "Hello world.");
//! ```

pub mod codec;
pub mod error;
pub mod event;
pub mod logger;
pub mod observer;
pub mod severity;

pub(crate) mod timefmt;

pub use codec::xml::stringify;
pub use error::CodecError;
pub use event::{CallSite, Event};
pub use logger::Logger;
pub use observer::{CallbackObserver, ConsoleObserver, Observer};
pub use severity::Severity;
