//! Canonical text rendering of records and aggregates.
//!
//! Rendering is the display inverse of parsing but not byte-identical to the
//! input: unknown enumeration names come back as `Other`, invalid years as
//! `-1` and truncated text stays truncated.

use std::fmt;

use crate::models::{Book, Category, ClosedSet, Duration, Genre, Record, Song};

/// Display value of an invalid year.
pub const INVALID_YEAR: i64 = -1;

const FIELD_SEPARATOR: &str = " | ";

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year.map_or(INVALID_YEAR, i64::from);
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.title.as_str(),
            self.author.as_str(),
            year,
            self.genre,
            sep = FIELD_SEPARATOR
        )
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.name.as_str(),
            self.author.as_str(),
            self.duration,
            self.category,
            sep = FIELD_SEPARATOR
        )
    }
}

/// Render a number of seconds as `HH:MM:SS`.
///
/// Every part is zero-padded to two digits; hours grow past two digits
/// once the total reaches 100 hours.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// One formatted line per record, each terminated by `\n`.
pub fn format_listing<'a, T, I>(records: I) -> String
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().map(|r| format!("{}\n", r)).collect()
}
