//! Test utilities for building catalog input text
#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Builder for creating catalog test input
pub struct CatalogInputBuilder {
    delimiter: char,
    declared: Option<usize>,
    lines: Vec<String>,
}

impl CatalogInputBuilder {
    /// Create a builder for `;`-delimited book records
    pub fn books() -> Self {
        Self {
            delimiter: ';',
            declared: None,
            lines: Vec::new(),
        }
    }

    /// Create a builder for `|`-delimited song records
    pub fn songs() -> Self {
        Self {
            delimiter: '|',
            declared: None,
            lines: Vec::new(),
        }
    }

    /// Add a book record line
    pub fn book(self, title: &str, author: &str, year: &str, genre: &str) -> Self {
        self.fields(&[title, author, year, genre])
    }

    /// Add a song record line
    pub fn song(self, name: &str, author: &str, duration: &str, category: &str) -> Self {
        self.fields(&[name, author, duration, category])
    }

    /// Add a record line joined with the builder's delimiter
    pub fn fields(mut self, fields: &[&str]) -> Self {
        let mut line = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(self.delimiter);
            }
            line.push_str(field);
        }
        self.lines.push(line);
        self
    }

    /// Add a line verbatim
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Override the declared record count (defaults to the number of lines)
    pub fn declare(mut self, count: usize) -> Self {
        self.declared = Some(count);
        self
    }

    /// Build the final input text
    pub fn build(self) -> String {
        let count = self.declared.unwrap_or(self.lines.len());
        let mut text = format!("{}\n", count);
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Write the input text to `name` inside `dir`
    pub fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path)
            .unwrap()
            .write_all(self.build().as_bytes())
            .unwrap();
        path
    }
}

/// The three-book library used across scenario tests
pub fn sample_library() -> CatalogInputBuilder {
    CatalogInputBuilder::books()
        .book("Emma", "Jane Austen", "1990", "Classic")
        .book("Dune", "Frank Herbert", "1965", "Sci-fi")
        .book("IT", "Stephen King", "1986", "Crime")
}

/// A five-song playlist with one malformed duration
pub fn sample_playlist() -> CatalogInputBuilder {
    CatalogInputBuilder::songs()
        .song("Intro", "DJ One", "01:10", "Techno")
        .song("Ballad", "Singer", "04:05", "Pop")
        .song("Cypher", "MC Two", "05:30", "HipHop")
        .song("Groove", "Band", "03:20", "Jazz")
        .song("Broken", "X", "4:5", "Rock")
}
