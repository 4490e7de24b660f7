//! Request validation for film routes.
//!
//! Bodies are parsed as raw JSON and checked field by field so every
//! rejection produces the same error body shape.

use serde_json::{Map, Value};

use super::errors::{ApiError, ApiResult};
use crate::films::{FilmPatch, NewFilm};

/// Parse a request body into a JSON object
pub fn parse_object(body: &[u8]) -> ApiResult<Map<String, Value>> {
    if body.is_empty() {
        return Err(ApiError::InvalidBody("body is required".into()));
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::InvalidBody("body must be a JSON object".into())),
        Err(e) => Err(ApiError::InvalidBody(format!("malformed JSON: {}", e))),
    }
}

/// Validate a full film for create and replace.
///
/// `title` and `director` must be non-blank strings, `duration` a number
/// greater than zero. Optional fields, when present, must have the right
/// type.
pub fn new_film(body: &Map<String, Value>) -> ApiResult<NewFilm> {
    let title = required(body, "title", text)?;
    let director = required(body, "director", text)?;
    let duration = required(body, "duration", positive_number)?;

    Ok(NewFilm {
        title,
        director,
        duration,
        budget: optional(body, "budget", number)?,
        description: optional(body, "description", string)?,
        image_url: optional(body, "imageUrl", string)?,
    })
}

/// Validate a partial update. Every present field is checked with the same
/// rule as [`new_film`]; an empty object is valid.
pub fn film_patch(body: &Map<String, Value>) -> ApiResult<FilmPatch> {
    Ok(FilmPatch {
        title: optional(body, "title", text)?,
        director: optional(body, "director", text)?,
        duration: optional(body, "duration", positive_number)?,
        budget: optional(body, "budget", number)?,
        description: optional(body, "description", string)?,
        image_url: optional(body, "imageUrl", string)?,
    })
}

/// Parse a path id; must be a positive integer.
pub fn film_id(raw: &str) -> ApiResult<u64> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidId(raw.to_string())),
    }
}

/// Parse the `minimum-duration` query value; must be a number > 0.
pub fn minimum_duration(raw: &str) -> ApiResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ApiError::InvalidQueryParam(format!(
            "minimum-duration must be a positive number, got '{}'",
            raw
        ))),
    }
}

type Check<T> = fn(&Value) -> Result<T, &'static str>;

fn required<T>(body: &Map<String, Value>, field: &str, check: Check<T>) -> ApiResult<T> {
    match body.get(field) {
        Some(value) => check(value).map_err(|e| invalid(field, e)),
        None => Err(invalid(field, "is required")),
    }
}

fn optional<T>(body: &Map<String, Value>, field: &str, check: Check<T>) -> ApiResult<Option<T>> {
    body.get(field)
        .map(|value| check(value).map_err(|e| invalid(field, e)))
        .transpose()
}

fn invalid(field: &str, problem: &str) -> ApiError {
    ApiError::InvalidBody(format!("'{}' {}", field, problem))
}

fn string(value: &Value) -> Result<String, &'static str> {
    value.as_str().map(str::to_string).ok_or("must be a string")
}

fn text(value: &Value) -> Result<String, &'static str> {
    let s = string(value)?;
    if s.trim().is_empty() {
        return Err("must not be blank");
    }
    Ok(s)
}

fn number(value: &Value) -> Result<f64, &'static str> {
    value.as_f64().ok_or("must be a number")
}

fn positive_number(value: &Value) -> Result<f64, &'static str> {
    let n = number(value)?;
    if n <= 0.0 {
        return Err("must be greater than 0");
    }
    Ok(n)
}
