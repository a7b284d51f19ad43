/// Search/filter coordination for the catalog view
///
/// Holds the observable state a front end renders (displayed movies, the
/// pristine full listing, the three filter fields, derived option lists, and
/// the loading flag) and dispatches fetches to a [`MovieCatalog`].
///
/// Operations return as soon as the loading flag is raised; the fetch itself
/// runs on a spawned task whose handle is returned for callers that want to
/// wait. Every dispatch takes a new request token and only the newest
/// outstanding request may write the displayed list, so a slow early response
/// can never overwrite a later one. The newest full load still refreshes the
/// pristine list and option lists when a search was dispatched after it.
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::{
    models::{
        filter_option::{genre_options, year_options},
        FilterOption, Movie, SearchCriteria,
    },
    services::{movie_service::MovieCatalog, observable::Observable},
};

/// Point-in-time copy of the controller state
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogSnapshot {
    pub movies: Vec<Movie>,
    pub all_movies_count: usize,
    pub query: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub loading: bool,
    pub genres: Vec<FilterOption<String>>,
    pub years: Vec<FilterOption<i32>>,
}

#[derive(Clone)]
pub struct SearchController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    catalog: Arc<dyn MovieCatalog>,
    movies: Observable<Vec<Movie>>,
    all_movies: Observable<Vec<Movie>>,
    query: Observable<String>,
    genre: Observable<Option<String>>,
    year: Observable<Option<i32>>,
    loading: Observable<bool>,
    genre_options: Observable<Vec<FilterOption<String>>>,
    year_options: Observable<Vec<FilterOption<i32>>>,
    /// Completions and snapshots both run under this lock
    tokens: Mutex<RequestTokens>,
}

#[derive(Debug, Default)]
struct RequestTokens {
    /// Newest dispatched request of any kind
    latest: u64,
    /// Newest dispatched full load
    latest_load: u64,
}

impl ControllerInner {
    fn lock_tokens(&self) -> MutexGuard<'_, RequestTokens> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_request(&self, full_load: bool) -> u64 {
        let mut tokens = self.lock_tokens();
        tokens.latest += 1;
        if full_load {
            tokens.latest_load = tokens.latest;
        }
        self.loading.set(true);
        tokens.latest
    }

    /// Applies a full-load completion.
    ///
    /// The pristine list and option lists only change on a full load, so the
    /// newest load refreshes them even when a later search has been
    /// dispatched. The displayed list and the loading flag belong to the
    /// newest request overall.
    fn finish_load(&self, token: u64, movies: Option<Vec<Movie>>) {
        let tokens = self.lock_tokens();

        if token != tokens.latest_load {
            tracing::debug!(
                token,
                latest_load = tokens.latest_load,
                "Discarding stale load response"
            );
            return;
        }

        if let Some(movies) = &movies {
            self.genre_options.set(genre_options(movies));
            self.year_options.set(year_options(movies));
            self.all_movies.set(movies.clone());
        }

        if token == tokens.latest {
            if let Some(movies) = movies {
                self.movies.set(movies);
            }
            self.loading.set(false);
        }
    }

    /// Applies a search completion if it belongs to the newest request
    fn finish_search(&self, token: u64, movies: Option<Vec<Movie>>) {
        let tokens = self.lock_tokens();

        if token != tokens.latest {
            tracing::debug!(
                token,
                latest = tokens.latest,
                "Discarding stale search response"
            );
            return;
        }

        if let Some(movies) = movies {
            self.movies.set(movies);
        }
        self.loading.set(false);
    }
}

impl SearchController {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                catalog,
                movies: Observable::default(),
                all_movies: Observable::default(),
                query: Observable::default(),
                genre: Observable::default(),
                year: Observable::default(),
                loading: Observable::new(false),
                genre_options: Observable::default(),
                year_options: Observable::default(),
                tokens: Mutex::new(RequestTokens::default()),
            }),
        }
    }

    /// Runs the initial full load when the catalog becomes active
    pub fn initialize(&self) -> JoinHandle<()> {
        tracing::info!("Initializing movie catalog");
        self.load_all()
    }

    /// Fetches the full listing, refreshing the pristine list and filter options
    pub fn load_all(&self) -> JoinHandle<()> {
        let token = self.inner.begin_request(true);
        let inner = self.inner.clone();

        tokio::spawn(async move {
            let movies = match inner.catalog.fetch_all().await {
                Ok(movies) => Some(movies),
                Err(e) => {
                    tracing::error!(error = %e, "Error loading movies");
                    None
                }
            };
            inner.finish_load(token, movies);
        })
    }

    /// Fetches movies matching the filter fields as currently held
    ///
    /// Only the displayed list changes; the pristine list and option lists
    /// keep whatever the last full load produced.
    pub fn search(&self) -> JoinHandle<()> {
        let token = self.inner.begin_request(false);
        let criteria = self.criteria();
        let inner = self.inner.clone();

        tokio::spawn(async move {
            let movies = match inner.catalog.search(&criteria).await {
                Ok(movies) => Some(movies),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        query = %criteria.query,
                        "Error running movie search"
                    );
                    None
                }
            };
            inner.finish_search(token, movies);
        })
    }

    /// Resets every filter field and reloads the full listing
    pub fn clear_search(&self) -> JoinHandle<()> {
        self.inner.query.set(String::new());
        self.inner.genre.set(None);
        self.inner.year.set(None);
        self.load_all()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.inner.query.set(query.into());
    }

    pub fn set_genre(&self, genre: Option<String>) {
        self.inner.genre.set(genre);
    }

    pub fn set_year(&self, year: Option<i32>) {
        self.inner.year.set(year);
    }

    /// Replaces all three filter fields without fetching
    pub fn set_criteria(&self, criteria: SearchCriteria) {
        self.inner.query.set(criteria.query);
        self.inner.genre.set(criteria.genre);
        self.inner.year.set(criteria.year);
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: self.inner.query.get(),
            genre: self.inner.genre.get(),
            year: self.inner.year.get(),
        }
    }

    pub fn movies(&self) -> &Observable<Vec<Movie>> {
        &self.inner.movies
    }

    pub fn all_movies(&self) -> &Observable<Vec<Movie>> {
        &self.inner.all_movies
    }

    pub fn query(&self) -> &Observable<String> {
        &self.inner.query
    }

    pub fn genre(&self) -> &Observable<Option<String>> {
        &self.inner.genre
    }

    pub fn year(&self) -> &Observable<Option<i32>> {
        &self.inner.year
    }

    pub fn loading(&self) -> &Observable<bool> {
        &self.inner.loading
    }

    pub fn genre_options(&self) -> &Observable<Vec<FilterOption<String>>> {
        &self.inner.genre_options
    }

    pub fn year_options(&self) -> &Observable<Vec<FilterOption<i32>>> {
        &self.inner.year_options
    }

    /// Reads every cell while no completion can be applied
    pub fn snapshot(&self) -> CatalogSnapshot {
        let _tokens = self.inner.lock_tokens();
        CatalogSnapshot {
            movies: self.inner.movies.get(),
            all_movies_count: self.inner.all_movies.get().len(),
            query: self.inner.query.get(),
            genre: self.inner.genre.get(),
            year: self.inner.year.get(),
            loading: self.inner.loading.get(),
            genres: self.inner.genre_options.get(),
            years: self.inner.year_options.get(),
        }
    }
}
