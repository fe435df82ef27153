//! Console observer writing colored lines to stderr.

use colored::Colorize;

use crate::event::Event;
use crate::observer::Observer;
use crate::severity::Severity;
use crate::timefmt;

/// Prints every event as `<timestamp>, <severity>: <message>` with the
/// severity colored by level. Absent timestamps render as `-`.
#[derive(Debug, Default, Clone)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> ConsoleObserver {
        ConsoleObserver
    }
}

impl Observer for ConsoleObserver {
    fn on_event(&self, event: &Event) {
        eprintln!("{}", render(event));
    }
}

fn render(event: &Event) -> String {
    let label = event.severity().to_string();
    let label = match event.severity() {
        Severity::Fatal => label.magenta(),
        Severity::Error => label.red(),
        Severity::Warning => label.yellow(),
        Severity::Information => label.green(),
        Severity::Debugging => label.white(),
        Severity::Undefined => label.cyan(),
        Severity::Custom(_) => label.blue(),
    };
    let stamp = match event.timestamp() {
        Some(stamp) => stamp.format(timefmt::LEGACY_FORMAT).to_string(),
        None => "-".to_string(),
    };
    format!("{}, {}: {}", stamp, label, event.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Logger;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_registered_console_observer_receives_events() {
        let logger = Logger::new();
        logger.register_observer(ConsoleObserver::new());
        logger.log_at(Severity::Information, "printed to stderr");
        logger.flush();

        // The rendered line lands on stderr; a completed flush means the
        // observer ran on the worker without panicking it.
        assert_eq!(logger.events().len(), 1);
    }

    #[test]
    fn test_render_line_shape() {
        let stamp = Utc.with_ymd_and_hms(2016, 2, 23, 12, 0, 0).unwrap();
        let event = Event::restored(
            Some(stamp),
            Severity::Error,
            "boom".to_string(),
            None,
            None,
            None,
        );
        let line = render(&event);
        assert!(line.starts_with("2016-02-23 12:00:00.000, "));
        assert!(line.contains("Error"));
        assert!(line.ends_with(": boom"));
    }

    #[test]
    fn test_render_without_timestamp() {
        let event = Event::restored(None, Severity::Undefined, "m".to_string(), None, None, None);
        assert!(render(&event).starts_with("-, "));
    }
}
