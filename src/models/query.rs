use serde::{Deserialize, Serialize};

use super::Movie;

/// The (query, genre, year) triple used for one filtered fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl SearchCriteria {
    pub fn new(query: impl Into<String>, genre: Option<String>, year: Option<i32>) -> Self {
        Self {
            query: query.into(),
            genre,
            year,
        }
    }
}

/// Column ordering applied by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub descending: bool,
}

/// Filter specification executed against the movie table
///
/// All present filters are combined conjunctively. An empty query selects
/// every row with no implicit limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub title_contains: Option<String>,
    pub genre_equals: Option<String>,
    pub year_equals: Option<i32>,
    pub order_by: Option<OrderBy>,
}

impl MovieQuery {
    /// Every movie, newest first
    pub fn all_newest_first() -> Self {
        Self {
            order_by: Some(OrderBy {
                column: "created_at",
                descending: true,
            }),
            ..Self::default()
        }
    }

    /// Translates search criteria into filters.
    ///
    /// A whitespace-only query means "no title filter"; otherwise the query
    /// is matched as given. Empty genres are treated as absent.
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let title_contains = if criteria.query.trim().is_empty() {
            None
        } else {
            Some(criteria.query.clone())
        };

        let genre_equals = criteria.genre.clone().filter(|g| !g.is_empty());

        Self {
            title_contains,
            genre_equals,
            year_equals: criteria.year,
            order_by: None,
        }
    }
}

/// Error object reported by the backend in place of rows
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BackendError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

/// `{data, error}` envelope returned for every select
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendResponse {
    pub data: Option<Vec<Movie>>,
    pub error: Option<BackendError>,
}

impl BackendResponse {
    pub fn rows(rows: Vec<Movie>) -> Self {
        Self {
            data: Some(rows),
            error: None,
        }
    }

    pub fn failed(error: BackendError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }
}
