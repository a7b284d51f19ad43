use crate::{
    error::AppResult,
    models::{BackendResponse, MovieQuery},
};

pub mod postgrest;

pub use postgrest::PostgrestClient;

/// Thin client over the hosted movie table
///
/// Implementations execute a filter specification and hand back the
/// backend's `{data, error}` envelope untouched. An `Err` means the request
/// never produced an envelope at all (connection refused, undecodable body).
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieBackend: Send + Sync {
    /// Select every column of the rows matching `query`
    async fn select(&self, query: &MovieQuery) -> AppResult<BackendResponse>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
