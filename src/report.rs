//! Filtering and aggregate reporting over an in-memory record collection.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::models::{ClosedSet, Record, Song};
use crate::sort::sorted_copy;

/// Count of records per classification variant, in declaration order.
pub type Histogram<E> = BTreeMap<E, usize>;

/// Lazily yield the records matching `predicate`, in their original order.
pub fn filter<'a, T, P>(records: &'a [T], predicate: P) -> impl Iterator<Item = &'a T> + 'a
where
    P: Fn(&T) -> bool + 'a,
{
    records.iter().filter(move |&record| predicate(record))
}

/// Write each matching record as it is found. Returns the number written.
pub fn filter_and_emit<T, P, W>(records: &[T], predicate: P, out: &mut W) -> Result<usize>
where
    T: Record,
    P: Fn(&T) -> bool,
    W: Write,
{
    let mut written = 0;
    for record in filter(records, predicate) {
        writeln!(out, "{}", record)?;
        written += 1;
    }
    Ok(written)
}

/// Count records per classification. Every variant is present, including
/// those with a zero count.
pub fn class_histogram<T: Record>(records: &[T]) -> Histogram<T::Class> {
    let mut counts: Histogram<T::Class> = <T::Class as ClosedSet>::ALL
        .iter()
        .map(|&v| (v, 0))
        .collect();
    for record in records {
        *counts.entry(record.class()).or_insert(0) += 1;
    }
    counts
}

/// Sum of all song durations in seconds.
pub fn total_duration(songs: &[Song]) -> u64 {
    songs
        .iter()
        .map(|s| u64::from(s.duration.total_seconds()))
        .fold(0u64, u64::saturating_add)
}

/// The first `k` records after selection sorting a copy by `less`.
///
/// `k` is clamped to the collection size. The input is left untouched.
pub fn top_k<T, F>(records: &[T], k: usize, less: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut sorted = sorted_copy(records, less);
    sorted.truncate(k.min(records.len()));
    sorted
}

/// Length statistics for a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationSummary {
    pub count: usize,
    pub total_seconds: u64,
    pub shortest_seconds: u32,
    pub longest_seconds: u32,
    /// Rounded down. Zero for an empty playlist.
    pub mean_seconds: u64,
}

impl DurationSummary {
    pub fn of(songs: &[Song]) -> Self {
        let seconds = songs.iter().map(|s| s.duration.total_seconds());
        let total_seconds = total_duration(songs);
        let count = songs.len();

        Self {
            count,
            total_seconds,
            shortest_seconds: seconds.clone().min().unwrap_or(0),
            longest_seconds: seconds.max().unwrap_or(0),
            mean_seconds: if count == 0 { 0 } else { total_seconds / count as u64 },
        }
    }
}
