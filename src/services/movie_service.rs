/// Data access for the movie catalog
///
/// Wraps a [`MovieBackend`] and normalizes its error payloads: a backend that
/// answers with `{error: ...}` yields an empty list and an error log line, never
/// an `Err`. Only outright failures (no envelope at all) propagate.
use std::sync::Arc;

use crate::{
    db::MovieBackend,
    error::AppResult,
    models::{BackendResponse, Movie, MovieQuery, SearchCriteria},
};

/// Read operations the search controller depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Every movie, newest first
    async fn fetch_all(&self) -> AppResult<Vec<Movie>>;

    /// Movies matching the title substring, genre, and year in `criteria`
    async fn search(&self, criteria: &SearchCriteria) -> AppResult<Vec<Movie>>;
}

#[derive(Clone)]
pub struct MovieService {
    backend: Arc<dyn MovieBackend>,
}

impl MovieService {
    pub fn new(backend: Arc<dyn MovieBackend>) -> Self {
        Self { backend }
    }

    /// Unwraps the envelope, logging and discarding a reported error
    fn rows_or_empty(&self, response: BackendResponse, context: &str) -> Vec<Movie> {
        if let Some(error) = response.error {
            tracing::error!(
                error = %error,
                backend = self.backend.name(),
                "{}",
                context
            );
            return Vec::new();
        }

        response.data.unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl MovieCatalog for MovieService {
    async fn fetch_all(&self) -> AppResult<Vec<Movie>> {
        let response = self
            .backend
            .select(&MovieQuery::all_newest_first())
            .await?;

        let movies = self.rows_or_empty(response, "Error fetching movies");

        tracing::info!(results = movies.len(), "Movie listing completed");

        Ok(movies)
    }

    async fn search(&self, criteria: &SearchCriteria) -> AppResult<Vec<Movie>> {
        let query = MovieQuery::from_criteria(criteria);
        let response = self.backend.select(&query).await?;

        let movies = self.rows_or_empty(response, "Error searching movies");

        tracing::info!(
            query = %criteria.query,
            genre = ?criteria.genre,
            year = ?criteria.year,
            results = movies.len(),
            "Movie search completed"
        );

        Ok(movies)
    }
}
