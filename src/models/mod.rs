pub mod filter_option;
pub mod movie;
pub mod query;

pub use filter_option::FilterOption;
pub use movie::Movie;
pub use query::{BackendError, BackendResponse, MovieQuery, OrderBy, SearchCriteria};
