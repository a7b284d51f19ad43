use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Movie;

/// A label/value pair offered for narrowing results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOption<V> {
    pub label: String,
    pub value: V,
}

/// Distinct non-empty genres, ascending
pub fn genre_options(movies: &[Movie]) -> Vec<FilterOption<String>> {
    let genres: BTreeSet<&str> = movies
        .iter()
        .filter_map(|m| m.genre.as_deref())
        .filter(|g| !g.is_empty())
        .collect();

    genres
        .into_iter()
        .map(|genre| FilterOption {
            label: genre.to_string(),
            value: genre.to_string(),
        })
        .collect()
}

/// Distinct release years, newest first
pub fn year_options(movies: &[Movie]) -> Vec<FilterOption<i32>> {
    let years: BTreeSet<i32> = movies.iter().filter_map(|m| m.release_year).collect();

    years
        .into_iter()
        .rev()
        .map(|year| FilterOption {
            label: year.to_string(),
            value: year,
        })
        .collect()
}
