//! Film store over a single JSON document.
//!
//! Each operation loads the whole collection, computes the new state in
//! memory and, when mutating, saves the whole collection back. There is no
//! cache and no lock: two overlapping mutations can both read the same
//! state, and the later save wins (lost update). Callers that need
//! serialized writes must provide it themselves.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::defaults::default_films;
use super::errors::{StoreError, StoreResult};
use super::types::{Film, FilmPatch, NewFilm};
use crate::codec::{DocumentFile, Loaded};
use crate::observability::{log_event_with_fields, Event};

/// Outcome of [`FilmStore::update_or_create_one`]
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    /// No film had the requested id; a new one was created with a fresh id
    Created(Film),
    /// The existing film was merged with the input
    Replaced(Film),
}

impl Upserted {
    /// The resulting film
    pub fn film(&self) -> &Film {
        match self {
            Upserted::Created(film) | Upserted::Replaced(film) => film,
        }
    }

    pub fn into_film(self) -> Film {
        match self {
            Upserted::Created(film) | Upserted::Replaced(film) => film,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Upserted::Created(_))
    }
}

/// CRUD and upsert over the films document.
///
/// Cloning is cheap; clones operate on the same file.
#[derive(Debug, Clone)]
pub struct FilmStore {
    document: DocumentFile,
    defaults: Arc<[Film]>,
}

impl FilmStore {
    /// Store at `path` falling back to the built-in collection
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_defaults(path, default_films())
    }

    /// Store at `path` falling back to `defaults`
    pub fn with_defaults(path: impl Into<PathBuf>, defaults: Vec<Film>) -> Self {
        Self {
            document: DocumentFile::new(path),
            defaults: defaults.into(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.document.path()
    }

    /// Fresh load of the collection, including whether the default was used
    pub fn load(&self) -> Loaded<Film> {
        self.document.load(&self.defaults[..])
    }

    fn films(&self) -> Vec<Film> {
        self.load().into_records()
    }

    fn persist(&self, films: &[Film]) -> StoreResult<()> {
        self.document.save(films).map_err(|e| {
            let message = e.to_string();
            log_event_with_fields(
                Event::PersistenceFailed,
                &[("path", e.path()), ("error", message.as_str())],
            );
            StoreError::from(e)
        })
    }

    /// Write the default collection to disk if the file does not exist.
    ///
    /// Returns `true` if the file was written.
    pub fn initialize(&self) -> StoreResult<bool> {
        if self.document.exists() {
            return Ok(false);
        }
        self.persist(&self.defaults[..])?;
        let path = self.path().display().to_string();
        let count = self.defaults.len().to_string();
        log_event_with_fields(
            Event::DataInitialized,
            &[("path", path.as_str()), ("records", count.as_str())],
        );
        Ok(true)
    }

    /// All films in stored order, optionally only those with
    /// `duration >= minimum_duration`.
    pub fn read_all(&self, minimum_duration: Option<f64>) -> Vec<Film> {
        let films = self.films();
        match minimum_duration {
            Some(minimum) => films.into_iter().filter(|f| f.duration >= minimum).collect(),
            None => films,
        }
    }

    pub fn read_one(&self, id: u64) -> StoreResult<Film> {
        self.films()
            .into_iter()
            .find(|f| f.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// One more than the highest id currently on disk, or 1 if empty.
    pub fn next_id(&self) -> StoreResult<u64> {
        next_id_in(&self.films())
    }

    /// Append a film with a fresh id.
    ///
    /// Fails with `Conflict` without writing if a film with the same title
    /// and director (case-insensitive) exists.
    pub fn create_one(&self, new_film: NewFilm) -> StoreResult<Film> {
        let mut films = self.films();

        if films
            .iter()
            .any(|f| f.is_duplicate_of(&new_film.title, &new_film.director))
        {
            return Err(conflict(&new_film.title, &new_film.director));
        }

        let film = new_film.with_id(next_id_in(&films)?);
        films.push(film.clone());
        self.persist(&films)?;

        let id = film.id.to_string();
        log_event_with_fields(
            Event::FilmCreated,
            &[("id", id.as_str()), ("title", film.title.as_str())],
        );
        Ok(film)
    }

    /// Merge `patch` into the film with `id`. No duplicate check.
    pub fn update_one(&self, id: u64, patch: FilmPatch) -> StoreResult<Film> {
        let mut films = self.films();
        let index = position(&films, id)?;

        films[index].merge(patch);
        let film = films[index].clone();
        self.persist(&films)?;

        let id = id.to_string();
        log_event_with_fields(Event::FilmUpdated, &[("id", id.as_str())]);
        Ok(film)
    }

    /// Replace the film with `id`, or create a new one if absent.
    ///
    /// The create path behaves exactly like [`create_one`](Self::create_one):
    /// the requested id is not used. The replace path merges `new_film` into
    /// the stored record and rejects a title and director that duplicate a
    /// different film.
    pub fn update_or_create_one(&self, id: u64, new_film: NewFilm) -> StoreResult<Upserted> {
        let mut films = self.films();

        let Some(index) = films.iter().position(|f| f.id == id) else {
            return self.create_one(new_film).map(Upserted::Created);
        };

        if films
            .iter()
            .any(|f| f.id != id && f.is_duplicate_of(&new_film.title, &new_film.director))
        {
            return Err(conflict(&new_film.title, &new_film.director));
        }

        films[index].merge(new_film.into());
        let film = films[index].clone();
        self.persist(&films)?;

        let id = id.to_string();
        log_event_with_fields(Event::FilmReplaced, &[("id", id.as_str())]);
        Ok(Upserted::Replaced(film))
    }

    /// Remove the film with `id` and return it
    pub fn delete_one(&self, id: u64) -> StoreResult<Film> {
        let mut films = self.films();
        let index = position(&films, id)?;

        let film = films.remove(index);
        self.persist(&films)?;

        let id = id.to_string();
        log_event_with_fields(Event::FilmDeleted, &[("id", id.as_str())]);
        Ok(film)
    }
}

fn next_id_in(films: &[Film]) -> StoreResult<u64> {
    let max = films.iter().map(|f| f.id).max().unwrap_or(0);
    max.checked_add(1).ok_or(StoreError::IdsExhausted(max))
}

fn position(films: &[Film], id: u64) -> StoreResult<usize> {
    films
        .iter()
        .position(|f| f.id == id)
        .ok_or(StoreError::NotFound(id))
}

fn conflict(title: &str, director: &str) -> StoreError {
    log_event_with_fields(
        Event::FilmConflict,
        &[("title", title), ("director", director)],
    );
    StoreError::Conflict {
        title: title.to_string(),
        director: director.to_string(),
    }
}
