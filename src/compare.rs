//! Named orderings over records, each a strict weak ordering `less(a, b)`.

use crate::models::{Authored, Book, Song};

/// Year ascending, then title. Books with an invalid year sort after every
/// book with a valid one.
pub fn by_year(lhs: &Book, rhs: &Book) -> bool {
    match (lhs.year, rhs.year) {
        (Some(a), Some(b)) if a != b => a < b,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        _ => lhs.title < rhs.title,
    }
}

pub fn by_title(lhs: &Book, rhs: &Book) -> bool {
    lhs.title < rhs.title
}

pub fn by_name(lhs: &Song, rhs: &Song) -> bool {
    lhs.name < rhs.name
}

/// Shortest first. Equal durations are not ordered further.
pub fn by_duration(lhs: &Song, rhs: &Song) -> bool {
    lhs.duration.total_seconds() < rhs.duration.total_seconds()
}

/// Longest first. Equal durations are not ordered further.
pub fn by_duration_descending(lhs: &Song, rhs: &Song) -> bool {
    lhs.duration.total_seconds() > rhs.duration.total_seconds()
}

pub fn by_author<T: Authored>(lhs: &T, rhs: &T) -> bool {
    lhs.author() < rhs.author()
}

/// Reverse an ordering.
pub fn reversed<T, F>(less: F) -> impl Fn(&T, &T) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    move |lhs, rhs| less(rhs, lhs)
}
