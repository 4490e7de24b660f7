//! Observability for filmstore
//!
//! Structured JSON logging of typed lifecycle events.
//!
//! ```ignore
//! use filmstore::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::FilmCreated, &[("id", "5")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
