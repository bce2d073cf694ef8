//! Named record tests, each `matches(record) -> bool`.

use crate::models::{Authored, Book, Category, ClosedSet, Genre, Record, Song};

/// Exact, case-sensitive author match.
pub fn author_is<T: Authored>(target: &str) -> impl Fn(&T) -> bool + '_ {
    move |record| record.author() == target
}

/// Classification equality for any record kind.
pub fn class_is<T: Record>(target: T::Class) -> impl Fn(&T) -> bool {
    move |record| record.class() == target
}

pub fn genre_is(target: Genre) -> impl Fn(&Book) -> bool {
    class_is::<Book>(target)
}

pub fn category_is(target: Category) -> impl Fn(&Song) -> bool {
    class_is::<Song>(target)
}

/// Inclusive year range. Books with an invalid year never match.
pub fn year_between(low: u32, high: u32) -> impl Fn(&Book) -> bool {
    move |book| book.year.is_some_and(|year| low <= year && year <= high)
}

/// Strictly longer than `seconds`.
pub fn longer_than(seconds: u32) -> impl Fn(&Song) -> bool {
    move |song| song.duration.total_seconds() > seconds
}

pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |record| !predicate(record)
}

pub fn all_of<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |record| first(record) && second(record)
}

/// Whether `value` names a variant other than the fallback.
pub fn is_known<E: ClosedSet>(value: E) -> bool {
    value != E::FALLBACK
}
