use serde::Serialize;

use crate::fields::{parse_duration, parse_enum, parse_year};

/// Maximum number of characters kept for a title, name or author.
pub const MAX_TEXT_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A closed enumeration with a catch-all fallback variant.
///
/// `ALL` lists the variants in declaration order, which is also the order
/// histograms are reported in.
pub trait ClosedSet: Copy + Ord + std::fmt::Debug + 'static {
    const ALL: &'static [Self];
    const FALLBACK: Self;

    fn name(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Genre {
    Classic,
    #[serde(rename = "Sci-fi")]
    SciFi,
    Fantasy,
    Romance,
    Crime,
    NonFiction,
    Educational,
    Other,
}

impl ClosedSet for Genre {
    const ALL: &'static [Self] = &[
        Genre::Classic,
        Genre::SciFi,
        Genre::Fantasy,
        Genre::Romance,
        Genre::Crime,
        Genre::NonFiction,
        Genre::Educational,
        Genre::Other,
    ];
    const FALLBACK: Self = Genre::Other;

    fn name(self) -> &'static str {
        match self {
            Genre::Classic => "Classic",
            Genre::SciFi => "Sci-fi",
            Genre::Fantasy => "Fantasy",
            Genre::Romance => "Romance",
            Genre::Crime => "Crime",
            Genre::NonFiction => "NonFiction",
            Genre::Educational => "Educational",
            Genre::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Pop,
    Rock,
    HipHop,
    Jazz,
    Latin,
    Chalga,
    Techno,
    Other,
}

impl ClosedSet for Category {
    const ALL: &'static [Self] = &[
        Category::Pop,
        Category::Rock,
        Category::HipHop,
        Category::Jazz,
        Category::Latin,
        Category::Chalga,
        Category::Techno,
        Category::Other,
    ];
    const FALLBACK: Self = Category::Other;

    fn name(self) -> &'static str {
        match self {
            Category::Pop => "Pop",
            Category::Rock => "Rock",
            Category::HipHop => "HipHop",
            Category::Jazz => "Jazz",
            Category::Latin => "Latin",
            Category::Chalga => "Chalga",
            Category::Techno => "Techno",
            Category::Other => "Other",
        }
    }
}

/// Text truncated to a character bound when constructed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct BoundedText(String);

impl BoundedText {
    pub fn new(text: &str, max_len: usize) -> Self {
        match text.char_indices().nth(max_len) {
            Some((end, _)) => {
                log::debug!("Truncating {:?} to {} characters", text, max_len);
                Self(text[..end].to_string())
            }
            None => Self(text.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A song length. `total_seconds` always equals `minutes * 60 + seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Duration {
    minutes: u32,
    seconds: u32,
    total_seconds: u32,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        minutes: 0,
        seconds: 0,
        total_seconds: 0,
    };

    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self {
            minutes,
            seconds,
            total_seconds: minutes.saturating_mul(60).saturating_add(seconds),
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }
}

/// A fixed-shape record read from one delimited input line.
pub trait Record: Clone + std::fmt::Display + Serialize {
    /// Lowercase record kind, used in diagnostics.
    const KIND: &'static str;
    const DELIMITER: char;
    const FIELD_COUNT: usize = 4;

    type Class: ClosedSet;

    /// Build a record from raw fields. Never fails: missing or malformed
    /// fields become sentinel values.
    fn from_fields(fields: &[&str], max_text_len: usize) -> Self;

    fn class(&self) -> Self::Class;
}

/// Records that carry an author field.
pub trait Authored {
    fn author(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: BoundedText,
    pub author: BoundedText,
    /// `None` when the year field was missing or not a non-negative integer.
    pub year: Option<u32>,
    pub genre: Genre,
}

impl Book {
    pub fn new(title: &str, author: &str, year: Option<u32>, genre: Genre) -> Self {
        Self {
            title: BoundedText::new(title, MAX_TEXT_LEN),
            author: BoundedText::new(author, MAX_TEXT_LEN),
            year,
            genre,
        }
    }
}

impl Record for Book {
    const KIND: &'static str = "book";
    const DELIMITER: char = ';';

    type Class = Genre;

    fn from_fields(fields: &[&str], max_text_len: usize) -> Self {
        let field = |i: usize| fields.get(i).copied().unwrap_or("");
        Self {
            title: BoundedText::new(field(0), max_text_len),
            author: BoundedText::new(field(1), max_text_len),
            year: parse_year(field(2)),
            genre: parse_enum(field(3)),
        }
    }

    fn class(&self) -> Genre {
        self.genre
    }
}

impl Authored for Book {
    fn author(&self) -> &str {
        self.author.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    pub name: BoundedText,
    pub author: BoundedText,
    pub duration: Duration,
    pub category: Category,
}

impl Song {
    pub fn new(name: &str, author: &str, duration: Duration, category: Category) -> Self {
        Self {
            name: BoundedText::new(name, MAX_TEXT_LEN),
            author: BoundedText::new(author, MAX_TEXT_LEN),
            duration,
            category,
        }
    }
}

impl Record for Song {
    const KIND: &'static str = "song";
    const DELIMITER: char = '|';

    type Class = Category;

    fn from_fields(fields: &[&str], max_text_len: usize) -> Self {
        let field = |i: usize| fields.get(i).copied().unwrap_or("");
        Self {
            name: BoundedText::new(field(0), max_text_len),
            author: BoundedText::new(field(1), max_text_len),
            duration: parse_duration(field(2)),
            category: parse_enum(field(3)),
        }
    }

    fn class(&self) -> Category {
        self.category
    }
}

impl Authored for Song {
    fn author(&self) -> &str {
        self.author.as_str()
    }
}
