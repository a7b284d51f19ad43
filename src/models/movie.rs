use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the hosted `movies` table
///
/// Rows are read-only from this service's point of view; the backend assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    pub poster_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
}

impl Movie {
    /// Creates a movie with only the required columns set
    pub fn new(id: i64, title: impl Into<String>, poster_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: None,
            poster_url: poster_url.into(),
            created_at: None,
            release_year: None,
            genre: None,
            director: None,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }
}
