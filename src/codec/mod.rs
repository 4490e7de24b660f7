//! # Document Codec
//!
//! Treats one JSON file as a whole-collection document: every load reads
//! and parses the entire file, every save replaces the entire file.
//!
//! - A missing, unreadable or malformed file loads as the caller-supplied
//!   default collection. This is reported through [`Loaded::used_default`],
//!   never as an error.
//! - Saves go to `<file>.tmp`, are fsynced, then renamed over the target.

mod document;
mod errors;

pub use document::{DocumentFile, FallbackReason, Loaded};
pub use errors::{CodecError, CodecResult};
