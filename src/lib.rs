//! filmstore - a films HTTP API backed by a JSON-file document store
//!
//! Layers, innermost first:
//! - `codec`: whole-file JSON load/save with default fallback
//! - `films`: the film store (CRUD + upsert over the codec)
//! - `http_server`: axum routes, request validation, status mapping
//! - `cli`: config loading and process entry points
//! - `observability`: structured JSON logging

pub mod cli;
pub mod codec;
pub mod films;
pub mod http_server;
pub mod observability;
