//! Whole-file JSON document load and atomic save.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use super::errors::{CodecError, CodecResult};
use crate::observability::{log_event_with_fields, Event, Logger};

/// Why a load returned the default collection instead of the file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No file at the path
    Missing,
    /// File exists but could not be read
    Unreadable(String),
    /// File was read but is not a sequence of records of the expected shape
    Malformed(String),
}

impl FallbackReason {
    fn describe(&self) -> String {
        match self {
            FallbackReason::Missing => "file not found".to_string(),
            FallbackReason::Unreadable(msg) => format!("unreadable: {}", msg),
            FallbackReason::Malformed(msg) => format!("malformed: {}", msg),
        }
    }
}

/// Result of loading a document.
///
/// `used_default` is true when `records` is a copy of the default
/// collection; `fallback` then says why.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub used_default: bool,
    pub fallback: Option<FallbackReason>,
}

impl<T> Loaded<T> {
    fn from_file(records: Vec<T>) -> Self {
        Self {
            records,
            used_default: false,
            fallback: None,
        }
    }

    fn from_default(records: Vec<T>, reason: FallbackReason) -> Self {
        Self {
            records,
            used_default: true,
            fallback: Some(reason),
        }
    }

    /// Discards the fallback information
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

/// A JSON file holding one collection of records.
///
/// The handle carries no state besides the path: every `load` sees the
/// file as it is on disk at that moment.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    /// Create a handle for the document at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the document file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the collection, or a copy of `default` if the file is missing,
    /// unreadable or malformed. Never creates the file.
    pub fn load<T>(&self, default: &[T]) -> Loaded<T>
    where
        T: DeserializeOwned + Clone,
    {
        match self.read_records() {
            Ok(records) => Loaded::from_file(records),
            Err(reason) => {
                let path = self.path.display().to_string();
                let detail = reason.describe();
                let fields = [("path", path.as_str()), ("reason", detail.as_str())];
                if reason == FallbackReason::Missing {
                    Logger::trace(Event::DocumentLoadFallback.as_str(), &fields);
                } else {
                    log_event_with_fields(Event::DocumentLoadFallback, &fields);
                }
                Loaded::from_default(default.to_vec(), reason)
            }
        }
    }

    fn read_records<T: DeserializeOwned>(&self) -> Result<Vec<T>, FallbackReason> {
        let bytes = fs::read(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                FallbackReason::Missing
            } else {
                FallbackReason::Unreadable(e.to_string())
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| FallbackReason::Malformed(e.to_string()))
    }

    /// Replace the file's content with `records`.
    ///
    /// Writes to a uniquely named temp file in the same directory, fsyncs
    /// it, then renames it over the document. Overlapping saves each use
    /// their own temp file; the last rename wins. Creates the parent
    /// directory if needed.
    pub fn save<T: Serialize>(&self, records: &[T]) -> CodecResult<()> {
        let mut content = serde_json::to_vec_pretty(records).map_err(|e| CodecError::Serialize {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        content.push(b'\n');

        self.write_atomic(&content).map_err(|e| CodecError::Write {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let path = self.path.display().to_string();
        let count = records.len().to_string();
        log_event_with_fields(
            Event::DocumentSaved,
            &[("path", path.as_str()), ("records", count.as_str())],
        );

        Ok(())
    }

    fn write_atomic(&self, content: &[u8]) -> io::Result<()> {
        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        // Dropped (and removed) on any early return.
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;

        // Best effort: make the rename itself durable.
        if let Ok(handle) = File::open(dir) {
            let _ = handle.sync_all();
        }

        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}
