//! Film HTTP Routes
//!
//! CRUD and upsert endpoints over the film store.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::ApiResult;
use super::validation;
use crate::films::{Film, FilmStore};

/// Query parameter filtering the film list by running time
pub const MINIMUM_DURATION_PARAM: &str = "minimum-duration";

// ==================
// Shared State
// ==================

/// Film state shared across handlers
pub struct FilmsState {
    pub store: FilmStore,
}

impl FilmsState {
    pub fn new(store: FilmStore) -> Self {
        Self { store }
    }
}

// ==================
// Film Routes
// ==================

/// Create film routes
pub fn film_routes(state: Arc<FilmsState>) -> Router {
    Router::new()
        .route("/films", get(list_films_handler).post(create_film_handler))
        .route(
            "/films/:id",
            get(get_film_handler)
                .patch(update_film_handler)
                .put(upsert_film_handler)
                .delete(delete_film_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_films_handler(
    State(state): State<Arc<FilmsState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Film>>> {
    let minimum = query
        .get(MINIMUM_DURATION_PARAM)
        .map(|raw| validation::minimum_duration(raw))
        .transpose()?;

    Ok(Json(state.store.read_all(minimum)))
}

async fn get_film_handler(
    State(state): State<Arc<FilmsState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Film>> {
    let id = validation::film_id(&id)?;
    Ok(Json(state.store.read_one(id)?))
}

async fn create_film_handler(
    State(state): State<Arc<FilmsState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Film>)> {
    let body = validation::parse_object(&body)?;
    let new_film = validation::new_film(&body)?;

    let film = state.store.create_one(new_film)?;
    Ok((StatusCode::CREATED, Json(film)))
}

async fn update_film_handler(
    State(state): State<Arc<FilmsState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Film>> {
    let id = validation::film_id(&id)?;
    let body = validation::parse_object(&body)?;
    let patch = validation::film_patch(&body)?;

    Ok(Json(state.store.update_one(id, patch)?))
}

async fn upsert_film_handler(
    State(state): State<Arc<FilmsState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Film>)> {
    let id = validation::film_id(&id)?;
    let body = validation::parse_object(&body)?;
    let new_film = validation::new_film(&body)?;

    let upserted = state.store.update_or_create_one(id, new_film)?;
    let status = if upserted.was_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(upserted.into_film())))
}

async fn delete_film_handler(
    State(state): State<Arc<FilmsState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Film>> {
    let id = validation::film_id(&id)?;
    Ok(Json(state.store.delete_one(id)?))
}
