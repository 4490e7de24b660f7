//! # Films
//!
//! The film entity and the store that persists a collection of films in a
//! single JSON file.
//!
//! # Rules
//!
//! - Ids are `max(existing) + 1` (1 when empty), assigned on create only
//! - Create rejects a film whose title and director both match an existing
//!   film, case-insensitively
//! - Partial updates overwrite present fields only and never re-check
//!   duplicates
//! - A missing or unparseable file reads as [`default_films`] and is not
//!   written back

mod defaults;
mod errors;
mod store;
mod types;

pub use defaults::default_films;
pub use errors::{StoreError, StoreResult};
pub use store::{FilmStore, Upserted};
pub use types::{Film, FilmPatch, NewFilm};
