pub mod movie_service;
pub mod observable;
pub mod search_controller;

pub use movie_service::{MovieCatalog, MovieService};
pub use observable::Observable;
pub use search_controller::{CatalogSnapshot, SearchController};
