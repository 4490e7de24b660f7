//! Film entity and its input shapes.

use serde::{Deserialize, Serialize};

/// A stored film. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: u64,
    pub title: String,
    pub director: String,
    /// Running time in minutes
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Film {
    /// Case-insensitive match on both title and director.
    pub fn is_duplicate_of(&self, title: &str, director: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
            && self.director.to_lowercase() == director.to_lowercase()
    }

    /// Overwrite every field present in `patch`. `id` is never touched.
    pub fn merge(&mut self, patch: FilmPatch) {
        let FilmPatch {
            title,
            director,
            duration,
            budget,
            description,
            image_url,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(director) = director {
            self.director = director;
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        if budget.is_some() {
            self.budget = budget;
        }
        if description.is_some() {
            self.description = description;
        }
        if image_url.is_some() {
            self.image_url = image_url;
        }
    }
}

/// A film without an id, as supplied to create and upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFilm {
    pub title: String,
    pub director: String,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewFilm {
    /// Minimal film with only the required fields set
    pub fn new(title: impl Into<String>, director: impl Into<String>, duration: f64) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            duration,
            budget: None,
            description: None,
            image_url: None,
        }
    }

    /// Attach the store-assigned id
    pub fn with_id(self, id: u64) -> Film {
        Film {
            id,
            title: self.title,
            director: self.director,
            duration: self.duration,
            budget: self.budget,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

/// Partial update: `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl FilmPatch {
    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        *self == FilmPatch::default()
    }
}

impl From<NewFilm> for FilmPatch {
    fn from(film: NewFilm) -> Self {
        Self {
            title: Some(film.title),
            director: Some(film.director),
            duration: Some(film.duration),
            budget: film.budget,
            description: film.description,
            image_url: film.image_url,
        }
    }
}
