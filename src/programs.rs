//! The book library and song playlist reports.

use std::io::Write;

use crate::compare::{by_duration, by_duration_descending, by_title, by_year};
use crate::error::Result;
use crate::formatter::format_hms;
use crate::models::{Book, Category, Genre, Song};
use crate::predicates::{author_is, category_is, genre_is, longer_than, year_between};
use crate::report::{class_histogram, top_k, total_duration, DurationSummary};
use crate::sort::selection_sort;
use crate::writer::ReportWriter;

/// Filter targets for the library report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryOptions {
    pub author: String,
    pub genre: Genre,
    pub year_from: u32,
    pub year_to: u32,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            author: "Jane Austen".to_string(),
            genre: Genre::Fantasy,
            year_from: 1990,
            year_to: 2010,
        }
    }
}

/// Filter targets for the playlist report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistOptions {
    pub min_seconds: u32,
    pub top: usize,
    pub category: Category,
    /// Append a length statistics section.
    pub summary: bool,
}

impl Default for PlaylistOptions {
    fn default() -> Self {
        Self {
            min_seconds: 200,
            top: 3,
            category: Category::HipHop,
            summary: false,
        }
    }
}

/// Sort the library in place and write every library section.
///
/// Filters run over the library in its final (title) order.
pub fn run_library<W: Write>(
    books: &mut [Book],
    options: &LibraryOptions,
    writer: &mut ReportWriter<W>,
) -> Result<()> {
    selection_sort(books, by_year);
    writer.records("Sort by year:", books.iter())?;

    selection_sort(books, by_title);
    writer.records("Sort by title:", books.iter())?;

    writer.filtered("Search by author:", books, author_is::<Book>(&options.author))?;
    writer.filtered("Filter by genre:", books, genre_is(options.genre))?;
    writer.filtered(
        "Filter by year interval:",
        books,
        year_between(options.year_from, options.year_to),
    )?;

    writer.histogram("Genre stats:", &class_histogram(books))?;
    Ok(())
}

/// Sort the playlist in place and write every playlist section.
pub fn run_playlist<W: Write>(
    songs: &mut [Song],
    options: &PlaylistOptions,
    writer: &mut ReportWriter<W>,
) -> Result<()> {
    selection_sort(songs, by_duration);
    writer.records("Sort by duration:", songs.iter())?;

    writer.filtered("Filter by duration:", songs, longer_than(options.min_seconds))?;
    writer.value("Total duration:", &format_hms(total_duration(songs)))?;

    let top = top_k(songs, options.top, by_duration_descending);
    writer.records("Top songs by duration:", &top)?;

    writer.filtered("Filter songs by category:", songs, category_is(options.category))?;

    if options.summary {
        let summary = DurationSummary::of(songs);
        writer.value(
            "Duration summary:",
            &format!(
                "{} song(s), shortest {}, longest {}, mean {}",
                summary.count,
                format_hms(u64::from(summary.shortest_seconds)),
                format_hms(u64::from(summary.longest_seconds)),
                format_hms(summary.mean_seconds)
            ),
        )?;
    }
    Ok(())
}
