use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Movie, SearchCriteria},
    services::CatalogSnapshot,
};

use super::AppState;

// Request types

/// Query string for the stateless movie lookup
#[derive(Debug, Default, Deserialize)]
pub struct MovieSearchParams {
    #[serde(default)]
    pub q: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl From<MovieSearchParams> for SearchCriteria {
    fn from(params: MovieSearchParams) -> Self {
        SearchCriteria::new(params.q, params.genre, params.year)
    }
}

fn validate_criteria(criteria: &SearchCriteria) -> AppResult<()> {
    if let Some(year) = criteria.year {
        if year <= 0 {
            return Err(AppError::InvalidInput(format!(
                "Release year must be positive, got {}",
                year
            )));
        }
    }
    Ok(())
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Current catalog state
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogSnapshot> {
    Json(state.controller.snapshot())
}

/// Replace the filter fields without fetching
pub async fn update_criteria(
    State(state): State<AppState>,
    Json(criteria): Json<SearchCriteria>,
) -> AppResult<Json<CatalogSnapshot>> {
    validate_criteria(&criteria)?;
    state.controller.set_criteria(criteria);
    Ok(Json(state.controller.snapshot()))
}

/// Reads an optional JSON criteria body.
///
/// A request without a JSON body keeps the current filter fields; a body
/// that is present but malformed is rejected.
fn optional_criteria(
    body: Result<Json<SearchCriteria>, JsonRejection>,
) -> AppResult<Option<SearchCriteria>> {
    match body {
        Ok(Json(criteria)) => Ok(Some(criteria)),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(None),
        Err(rejection) => Err(AppError::InvalidInput(rejection.body_text())),
    }
}

/// Dispatch a filtered search, optionally replacing the filter fields first
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<SearchCriteria>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CatalogSnapshot>)> {
    if let Some(criteria) = optional_criteria(body)? {
        validate_criteria(&criteria)?;
        state.controller.set_criteria(criteria);
    }

    let criteria = state.controller.criteria();
    tracing::info!(
        request_id = %request_id,
        query = %criteria.query,
        genre = ?criteria.genre,
        year = ?criteria.year,
        "Dispatching catalog search"
    );

    state.controller.search();
    Ok((StatusCode::ACCEPTED, Json(state.controller.snapshot())))
}

/// Reset the filter fields and reload the full listing
pub async fn clear(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> (StatusCode, Json<CatalogSnapshot>) {
    tracing::info!(request_id = %request_id, "Clearing catalog search");

    state.controller.clear_search();
    (StatusCode::ACCEPTED, Json(state.controller.snapshot()))
}

/// Reload the full listing, keeping the filter fields
pub async fn reload(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> (StatusCode, Json<CatalogSnapshot>) {
    tracing::info!(request_id = %request_id, "Reloading catalog");

    state.controller.load_all();
    (StatusCode::ACCEPTED, Json(state.controller.snapshot()))
}

/// Stateless search straight against the data access layer
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieSearchParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let criteria = SearchCriteria::from(params);
    validate_criteria(&criteria)?;

    let movies = state.catalog.search(&criteria).await?;
    Ok(Json(movies))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_convert_to_criteria() {
        let params = MovieSearchParams {
            q: "Matrix".to_string(),
            genre: Some("Sci-Fi".to_string()),
            year: Some(1999),
        };

        let criteria = SearchCriteria::from(params);
        assert_eq!(
            criteria,
            SearchCriteria::new("Matrix", Some("Sci-Fi".to_string()), Some(1999))
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_year() {
        let criteria = SearchCriteria::new("", None, Some(0));
        assert!(matches!(
            validate_criteria(&criteria),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_accepts_empty_criteria() {
        assert!(validate_criteria(&SearchCriteria::default()).is_ok());
    }
}
