//! Sequential worker behind each logger.
//!
//! One consumer thread drains a FIFO channel: record commands append to
//! history and fan out to observers, flush commands acknowledge a barrier.
//! Processing order is exactly enqueue order.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use crate::event::Event;
use crate::observer::Observer;

/// Work items accepted by the worker.
pub(crate) enum Command {
    /// Append the event, then notify every observer.
    Record(Event),
    /// Barrier: acknowledge once everything enqueued earlier is done.
    Flush(Sender<()>),
}

/// State shared between a logger handle and its worker thread.
pub(crate) struct Shared {
    pub(crate) events: Mutex<Vec<Event>>,
    pub(crate) observers: Mutex<Vec<Box<dyn Observer>>>,
}

impl Shared {
    pub(crate) fn new() -> Shared {
        Shared {
            events: Mutex::new(Vec::new()),
            observers: Mutex::new(Vec::new()),
        }
    }
}

/// Locks a mutex, recovering the guard when a panicking observer poisoned
/// it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Spawns the consumer thread; panics only when the OS refuses a thread.
pub(crate) fn spawn(name: &str, shared: Arc<Shared>) -> Sender<Command> {
    let (sender, receiver) = mpsc::channel();
    thread::Builder::new()
        .name(name.to_string())
        .spawn(move || run(receiver, shared))
        .expect("failed to spawn logger worker thread");
    sender
}

/// Exits when the last sender is dropped.
fn run(receiver: Receiver<Command>, shared: Arc<Shared>) {
    for command in receiver {
        match command {
            Command::Record(event) => {
                lock(&shared.events).push(event.clone());
                let observers = lock(&shared.observers);
                for observer in observers.iter() {
                    observer.on_event(&event);
                }
            }
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}
