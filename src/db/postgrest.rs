/// PostgREST backend client (Supabase REST interface)
///
/// Every select is a single GET against `/rest/v1/{table}`. Filters are
/// encoded as PostgREST query parameters:
/// - `title=ilike.%{query}%` for the case-insensitive substring match
/// - `{column}=eq.{value}` for exact matches
/// - `order={column}.desc` for ordering
use crate::{
    db::MovieBackend,
    error::AppResult,
    models::{BackendError, BackendResponse, Movie, MovieQuery},
};
use reqwest::{header::ACCEPT, Client as HttpClient, StatusCode};

const REST_PATH: &str = "rest/v1";

#[derive(Clone)]
pub struct PostgrestClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
    table: String,
}

impl PostgrestClient {
    pub fn new(base_url: String, api_key: String, table: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            api_key,
            table,
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            REST_PATH,
            self.table
        )
    }

    /// Renders a filter specification as PostgREST query parameters
    pub fn query_params(query: &MovieQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", "*".to_string())];

        if let Some(title) = &query.title_contains {
            params.push(("title", format!("ilike.%{}%", title)));
        }

        if let Some(genre) = &query.genre_equals {
            params.push(("genre", format!("eq.{}", genre)));
        }

        if let Some(year) = query.year_equals {
            params.push(("release_year", format!("eq.{}", year)));
        }

        if let Some(order) = &query.order_by {
            let direction = if order.descending { "desc" } else { "asc" };
            params.push(("order", format!("{}.{}", order.column, direction)));
        }

        params
    }

    /// Text of a non-2xx body; an unreadable body degrades to empty
    fn error_body<E: std::fmt::Display>(status: StatusCode, body: Result<String, E>) -> String {
        body.unwrap_or_else(|e| {
            tracing::warn!(
                status = %status,
                error = %e,
                "Failed to read backend error body"
            );
            String::new()
        })
    }

    /// Builds the error object for a non-2xx response.
    ///
    /// PostgREST answers with a JSON object carrying `message`; anything else
    /// (gateway pages, empty bodies) is kept as raw text.
    fn parse_error_body(status: StatusCode, body: &str) -> BackendError {
        if let Ok(error) = serde_json::from_str::<BackendError>(body) {
            return error;
        }

        let message = if body.trim().is_empty() {
            status.to_string()
        } else {
            body.to_string()
        };

        BackendError {
            code: Some(status.as_u16().to_string()),
            ..BackendError::new(message)
        }
    }
}

#[async_trait::async_trait]
impl MovieBackend for PostgrestClient {
    async fn select(&self, query: &MovieQuery) -> AppResult<BackendResponse> {
        let params = Self::query_params(query);

        tracing::debug!(
            table = %self.table,
            params = ?params,
            "Executing backend select"
        );

        let response = self
            .http_client
            .get(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = Self::error_body(status, response.text().await);
            return Ok(BackendResponse::failed(Self::parse_error_body(
                status, &body,
            )));
        }

        let rows: Option<Vec<Movie>> = response.json().await?;

        tracing::debug!(
            table = %self.table,
            rows = rows.as_ref().map(Vec::len).unwrap_or(0),
            "Backend select completed"
        );

        Ok(BackendResponse {
            data: rows,
            error: None,
        })
    }

    fn name(&self) -> &'static str {
        "postgrest"
    }
}
