//! Search Aggregation
//!
//! Pure merge-and-filter over place collections. Given the two ordered
//! collections (popular destinations, recommended places), search produces
//! one ordered sequence: all destinations in their original order, then all
//! recommended places in theirs, filtered to names containing the query.
//!
//! Matching is a case-folded substring test. Filtering preserves relative
//! order and never re-sorts by relevance or rating.

use crate::model::Place;

/// Case-folded substring match of `query` within `name`.
///
/// An empty query matches every name.
#[must_use]
pub fn matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Concatenate destinations then recommended places, preserving each
/// collection's original order.
#[must_use]
pub fn merge(destinations: Vec<Place>, recommended: Vec<Place>) -> Vec<Place> {
    let mut all = destinations;
    all.extend(recommended);
    all
}

/// Keep the places whose `name` matches `query`, preserving relative order.
#[must_use]
pub fn filter_by_name(places: Vec<Place>, query: &str) -> Vec<Place> {
    let folded = query.to_lowercase();
    places
        .into_iter()
        .filter(|place| place.name.to_lowercase().contains(&folded))
        .collect()
}
