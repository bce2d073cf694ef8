//! High-level API for writing labeled report sections.

use crate::error::Result;
use crate::models::{ClosedSet, OutputFormat, Record};
use crate::report::{filter, filter_and_emit, Histogram};
use log::info;
use serde::Serialize;
use std::io::Write;

/// Writer for report sections, as plain text or as one JSON document.
///
/// Text sections are written as soon as they are added; JSON sections are
/// collected and written by [`finish`](ReportWriter::finish).
///
/// # Examples
///
/// ```
/// use catalog_processor::{Book, Genre, OutputFormat, ReportWriter};
///
/// let books = vec![Book::new("Dune", "Frank Herbert", Some(1965), Genre::SciFi)];
/// let mut out = Vec::new();
///
/// let mut writer = ReportWriter::new(&mut out, OutputFormat::Text, "library");
/// writer.records("Sort by year:", &books)?;
/// let stats = writer.finish()?;
///
/// assert_eq!(stats.num_records, 1);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Sort by year:\nDune | Frank Herbert | 1965 | Sci-fi\n"
/// );
/// # Ok::<(), catalog_processor::Error>(())
/// ```
pub struct ReportWriter<W: Write> {
    out: W,
    format: OutputFormat,
    kind: &'static str,
    sections: Vec<Section>,
    num_sections: usize,
    num_records: usize,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    kind: &'a str,
    sections: &'a [Section],
}

#[derive(Debug, Serialize)]
struct Section {
    title: String,
    #[serde(flatten)]
    body: SectionBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum SectionBody {
    Records(Vec<serde_json::Value>),
    Histogram(Vec<HistogramEntry>),
    Value(String),
}

#[derive(Debug, Serialize)]
struct HistogramEntry {
    name: &'static str,
    count: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Create a report writer. `kind` names the report in JSON output.
    pub fn new(out: W, format: OutputFormat, kind: &'static str) -> Self {
        Self {
            out,
            format,
            kind,
            sections: Vec::new(),
            num_sections: 0,
            num_records: 0,
        }
    }

    /// Add a section listing every record in order.
    pub fn records<'a, T, I>(&mut self, title: &str, records: I) -> Result<()>
    where
        T: Record + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        match self.format {
            OutputFormat::Text => {
                self.begin_text_section(title)?;
                for record in records {
                    writeln!(self.out, "{}", record)?;
                    self.num_records += 1;
                }
            }
            OutputFormat::Json => {
                let values = records
                    .into_iter()
                    .map(serde_json::to_value)
                    .collect::<serde_json::Result<Vec<_>>>()?;
                self.num_records += values.len();
                self.push_section(title, SectionBody::Records(values));
            }
        }
        Ok(())
    }

    /// Add a section listing the records that match `predicate`.
    pub fn filtered<T, P>(&mut self, title: &str, records: &[T], predicate: P) -> Result<()>
    where
        T: Record,
        P: Fn(&T) -> bool,
    {
        match self.format {
            OutputFormat::Text => {
                self.begin_text_section(title)?;
                self.num_records += filter_and_emit(records, predicate, &mut self.out)?;
                Ok(())
            }
            OutputFormat::Json => {
                let matching: Vec<&T> = filter(records, predicate).collect();
                self.records(title, matching)
            }
        }
    }

    /// Add a `Name: count` section, one line per variant.
    pub fn histogram<E: ClosedSet>(&mut self, title: &str, histogram: &Histogram<E>) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.begin_text_section(title)?;
                for (variant, count) in histogram {
                    writeln!(self.out, "{}: {}", variant.name(), count)?;
                }
            }
            OutputFormat::Json => {
                let entries = histogram
                    .iter()
                    .map(|(variant, &count)| HistogramEntry {
                        name: variant.name(),
                        count,
                    })
                    .collect();
                self.push_section(title, SectionBody::Histogram(entries));
            }
        }
        Ok(())
    }

    /// Add a section holding a single value line.
    pub fn value(&mut self, title: &str, value: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.begin_text_section(title)?;
                writeln!(self.out, "{}", value)?;
            }
            OutputFormat::Json => self.push_section(title, SectionBody::Value(value.to_string())),
        }
        Ok(())
    }

    /// Write any pending output, flush, and return statistics.
    pub fn finish(mut self) -> Result<WriteStats> {
        if self.format == OutputFormat::Json {
            let report = Report {
                kind: self.kind,
                sections: &self.sections,
            };
            serde_json::to_writer_pretty(&mut self.out, &report)?;
            writeln!(self.out)?;
        }
        self.out.flush()?;

        let stats = WriteStats {
            num_sections: self.num_sections,
            num_records: self.num_records,
        };
        info!("{}", stats.summary());
        Ok(stats)
    }

    fn begin_text_section(&mut self, title: &str) -> Result<()> {
        if self.num_sections > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", title)?;
        self.num_sections += 1;
        Ok(())
    }

    fn push_section(&mut self, title: &str, body: SectionBody) {
        self.sections.push(Section {
            title: title.to_string(),
            body,
        });
        self.num_sections += 1;
    }
}

/// Statistics about a report write.
#[derive(Debug, Clone)]
pub struct WriteStats {
    /// Number of sections written
    pub num_sections: usize,
    /// Number of record lines across all listing sections
    pub num_records: usize,
}

impl WriteStats {
    /// Get a human-readable summary of the write operation.
    pub fn summary(&self) -> String {
        format!(
            "Wrote {} section(s) listing {} record(s)",
            self.num_sections, self.num_records
        )
    }
}
