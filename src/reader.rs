//! High-level API for reading record catalogs.

use crate::error::{Error, Result};
use crate::fields::parse_non_negative_integer;
use crate::models::{Record, MAX_TEXT_LEN};
use crate::scanner::{split_fields, LineScanner};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::Path;

/// A reader for catalog input: a record count line followed by that many
/// delimited records.
///
/// # Examples
///
/// ```
/// use catalog_processor::{Book, CatalogReader, Genre};
///
/// let input = "2\nDune;Frank Herbert;1965;Sci-fi\nEmma;Jane Austen;1815;Classic\n";
/// let books: Vec<Book> = CatalogReader::from_text(input).read_all()?;
///
/// assert_eq!(books.len(), 2);
/// assert_eq!(books[0].genre, Genre::SciFi);
/// # Ok::<(), catalog_processor::Error>(())
/// ```
pub struct CatalogReader<R> {
    scanner: LineScanner<R>,
    max_text_len: usize,
    strict_count: bool,
}

impl CatalogReader<BufReader<File>> {
    /// Create a new catalog reader from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<'a> CatalogReader<&'a [u8]> {
    /// Create a new catalog reader over in-memory text.
    pub fn from_text(text: &'a str) -> Self {
        Self::from_reader(text.as_bytes())
    }
}

impl<R: BufRead> CatalogReader<R> {
    /// Create a new catalog reader over any buffered stream, such as locked stdin.
    pub fn from_reader(reader: R) -> Self {
        Self {
            scanner: LineScanner::new(reader),
            max_text_len: MAX_TEXT_LEN,
            strict_count: true,
        }
    }

    /// Read the leading record count line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the input is empty or the first
    /// line is not a non-negative integer.
    pub fn read_count(&mut self) -> Result<usize> {
        let line = self
            .scanner
            .next_line()?
            .ok_or_else(|| Error::InvalidFormat("missing record count".to_string()))?
            .trim()
            .to_string();

        parse_non_negative_integer(&line)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                Error::InvalidFormat(format!(
                    "line {}: expected a record count, found {:?}",
                    self.scanner.line_number(),
                    line
                ))
            })
    }

    /// Iterate over the next `count` records.
    ///
    /// The iterator yields [`Error::StreamExhausted`] once if the input ends
    /// early and the reader is strict; a lenient reader logs a warning and
    /// stops instead.
    pub fn records<T: Record>(&mut self, count: usize) -> RecordIter<'_, R, T> {
        RecordIter {
            reader: self,
            expected: count,
            found: 0,
            done: false,
            _record: PhantomData,
        }
    }

    /// Read the count line and then every declared record.
    ///
    /// # Errors
    ///
    /// Returns an error if the count line is malformed, the input cannot be
    /// read, or (for a strict reader) the input holds fewer records than
    /// declared. Malformed fields never fail a record.
    pub fn read_all<T: Record>(mut self) -> Result<Vec<T>> {
        let count = self.read_count()?;
        debug!("Expecting {} {} record(s)", count, T::KIND);

        let records = self.records::<T>(count).collect::<Result<Vec<T>>>()?;
        info!("Read {} {} record(s)", records.len(), T::KIND);
        Ok(records)
    }

    fn read_record<T: Record>(&mut self) -> Result<Option<T>> {
        let max_text_len = self.max_text_len;
        let record = self.scanner.next_line()?.map(|line| {
            let fields = split_fields(line, T::DELIMITER, T::FIELD_COUNT);
            T::from_fields(&fields, max_text_len)
        });
        Ok(record)
    }
}

/// Lazy iterator over a fixed number of records. See [`CatalogReader::records`].
pub struct RecordIter<'r, R, T> {
    reader: &'r mut CatalogReader<R>,
    expected: usize,
    found: usize,
    done: bool,
    _record: PhantomData<T>,
}

impl<R: BufRead, T: Record> Iterator for RecordIter<'_, R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.found == self.expected {
            return None;
        }

        match self.reader.read_record::<T>() {
            Ok(Some(record)) => {
                self.found += 1;
                Some(Ok(record))
            }
            Ok(None) => {
                self.done = true;
                if self.reader.strict_count {
                    Some(Err(Error::StreamExhausted {
                        kind: T::KIND,
                        expected: self.expected,
                        found: self.found,
                    }))
                } else {
                    warn!(
                        "Input ended after {} of {} declared {} record(s)",
                        self.found,
                        self.expected,
                        T::KIND
                    );
                    None
                }
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Builder for configuring catalog reading options.
///
/// # Examples
///
/// ```
/// use catalog_processor::{CatalogReaderBuilder, Song};
///
/// let songs: Vec<Song> = CatalogReaderBuilder::new()
///     .strict_count(false)
///     .from_text("3\nIntro|Band|01:10|Rock\n")
///     .read_all()?;
///
/// assert_eq!(songs.len(), 1);
/// # Ok::<(), catalog_processor::Error>(())
/// ```
pub struct CatalogReaderBuilder {
    max_text_len: usize,
    strict_count: bool,
}

impl CatalogReaderBuilder {
    /// Create a new reader builder with default options.
    pub fn new() -> Self {
        Self {
            max_text_len: MAX_TEXT_LEN,
            strict_count: true,
        }
    }

    /// Set the character bound for text fields.
    ///
    /// Default is [`MAX_TEXT_LEN`].
    pub fn max_text_len(mut self, len: usize) -> Self {
        self.max_text_len = len;
        self
    }

    /// Whether running out of input before the declared count is an error.
    ///
    /// Default is `true`.
    pub fn strict_count(mut self, strict: bool) -> Self {
        self.strict_count = strict;
        self
    }

    /// Build a reader over any buffered stream.
    pub fn from_reader<R: BufRead>(self, reader: R) -> CatalogReader<R> {
        CatalogReader {
            scanner: LineScanner::new(reader),
            max_text_len: self.max_text_len,
            strict_count: self.strict_count,
        }
    }

    /// Build a reader from a file path.
    pub fn from_file<P: AsRef<Path>>(self, path: P) -> Result<CatalogReader<BufReader<File>>> {
        let file = File::open(path.as_ref())?;
        Ok(self.from_reader(BufReader::new(file)))
    }

    /// Build a reader over in-memory text.
    pub fn from_text(self, text: &str) -> CatalogReader<&[u8]> {
        self.from_reader(text.as_bytes())
    }
}

impl Default for CatalogReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
