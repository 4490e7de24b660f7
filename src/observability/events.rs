//! Observable events
//!
//! Every log line emitted by filmstore names one of these events.

use std::fmt;

use super::logger::Severity;

/// Observable events in filmstore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// HTTP server is binding its listener
    ServerStart,
    /// HTTP server accepting requests
    Serving,
    /// HTTP server stopped after a shutdown signal
    ShutdownComplete,
    /// Default dataset written by `init`
    DataInitialized,

    // Document codec
    /// Data file could not be read or parsed; default collection returned
    DocumentLoadFallback,
    /// Collection written to disk
    DocumentSaved,

    // Film store
    /// Film appended to the collection
    FilmCreated,
    /// Film partially updated
    FilmUpdated,
    /// Film replaced through upsert
    FilmReplaced,
    /// Film removed from the collection
    FilmDeleted,
    /// Create or replace rejected by the duplicate rule
    FilmConflict,
    /// Saving the collection failed
    PersistenceFailed,

    // HTTP
    /// Request handled
    RequestComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::Serving => "SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::DataInitialized => "DATA_INITIALIZED",
            Event::DocumentLoadFallback => "DOCUMENT_LOAD_FALLBACK",
            Event::DocumentSaved => "DOCUMENT_SAVED",
            Event::FilmCreated => "FILM_CREATED",
            Event::FilmUpdated => "FILM_UPDATED",
            Event::FilmReplaced => "FILM_REPLACED",
            Event::FilmDeleted => "FILM_DELETED",
            Event::FilmConflict => "FILM_CONFLICT",
            Event::PersistenceFailed => "PERSISTENCE_FAILED",
            Event::RequestComplete => "REQUEST_COMPLETE",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::DocumentSaved => Severity::Trace,
            Event::DocumentLoadFallback | Event::FilmConflict => Severity::Warn,
            Event::PersistenceFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
