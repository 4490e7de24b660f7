//! # HTTP Server Module
//!
//! Axum server exposing the film store.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /films[?minimum-duration=N]` - List films
//! - `POST /films` - Create a film
//! - `GET|PATCH|PUT|DELETE /films/:id` - Read, update, upsert, delete
//!
//! Handlers validate input before calling the store; the store only ever
//! sees typed, validated arguments.

pub mod config;
pub mod errors;
pub mod film_routes;
pub mod observability_routes;
pub mod server;
pub mod validation;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
