//! # Catalog Processor
//!
//! A small Rust library for reading delimited record catalogs (a book
//! library or a song playlist) into memory and producing sorted, filtered
//! and aggregated reports from them.
//!
//! ## Features
//!
//! - **Forgiving parsing**: a malformed field never fails its record; it
//!   resolves to a sentinel (`None` year, zero duration, `Other` category)
//! - **Bounded text**: titles, names and authors are truncated to a fixed length
//! - **Pluggable ordering**: selection sort over any `less(a, b)` function
//! - **Pluggable filters**: predicates are plain closures
//! - **Text or JSON reports**
//!
//! ## Quick Start
//!
//! ```
//! use catalog_processor::{compare, predicates, report, sort, Book, CatalogReader};
//!
//! let input = "3\n\
//!              Emma;Jane Austen;1990;Classic\n\
//!              Dune;Frank Herbert;1965;Sci-fi\n\
//!              IT;Stephen King;1986;Crime\n";
//!
//! let mut books: Vec<Book> = CatalogReader::from_text(input).read_all()?;
//! sort::selection_sort(&mut books, compare::by_year);
//!
//! let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
//! assert_eq!(titles, ["Dune", "IT", "Emma"]);
//!
//! let nineties: Vec<&Book> = report::filter(&books, predicates::year_between(1990, 2010)).collect();
//! assert_eq!(nineties.len(), 1);
//! # Ok::<(), catalog_processor::Error>(())
//! ```
//!
//! ## Input Layout
//!
//! The first line holds the record count N, followed by N records:
//!
//! - **Book**: `<title>;<author>;<year>;<genre>`
//! - **Song**: `<name>|<author>|<MM:SS>|<category>`
//!
//! ## Error Handling
//!
//! Only whole-input problems are errors:
//!
//! ```
//! use catalog_processor::{CatalogReader, Error, Song};
//!
//! match CatalogReader::from_text("2\nSolo|Artist|03:00|Jazz\n").read_all::<Song>() {
//!     Err(Error::StreamExhausted { expected, found, .. }) => {
//!         assert_eq!((expected, found), (2, 1));
//!     }
//!     other => panic!("unexpected result: {:?}", other.map(|s| s.len())),
//! }
//! ```

// Public API modules
pub mod error;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use error::{Error, Result};
pub use reader::{CatalogReader, CatalogReaderBuilder, RecordIter};
pub use writer::{ReportWriter, WriteStats};

// Re-export models for users who need them
pub use models::{
    Authored, Book, BoundedText, Category, ClosedSet, Duration, Genre, OutputFormat, Record, Song,
    MAX_TEXT_LEN,
};
pub use programs::{run_library, run_playlist, LibraryOptions, PlaylistOptions};

// Building blocks (public but not part of the high-level API)
pub mod compare;
pub mod fields;
pub mod formatter;
pub mod models;
pub mod predicates;
pub mod programs;
pub mod report;
pub mod scanner;
pub mod sort;

