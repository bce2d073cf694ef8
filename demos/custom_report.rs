//! Build a custom playlist report from the building blocks instead of the
//! fixed `run_playlist` sequence.

use catalog_processor::compare::{by_name, reversed};
use catalog_processor::formatter::format_hms;
use catalog_processor::predicates::{all_of, category_is, longer_than, not};
use catalog_processor::report::{class_histogram, DurationSummary};
use catalog_processor::sort::selection_sort;
use catalog_processor::{CatalogReader, Category, OutputFormat, ReportWriter, Song};
use std::io;

const PLAYLIST: &str = "\
5
Intro|DJ One|01:10|Techno
Ballad|Singer|04:05|Pop
Cypher|MC Two|05:30|HipHop
Groove|Band|03:20|Jazz
Outro|DJ One|02:45|Techno
";

fn main() -> Result<(), catalog_processor::Error> {
    let mut songs: Vec<Song> = CatalogReader::from_text(PLAYLIST).read_all()?;

    let summary = DurationSummary::of(&songs);
    println!("📊 Statistics:");
    println!("  Songs: {}", summary.count);
    println!("  Total: {}", format_hms(summary.total_seconds));
    println!("  Longest: {}", format_hms(u64::from(summary.longest_seconds)));
    println!();

    let mut writer = ReportWriter::new(io::stdout().lock(), OutputFormat::Text, "playlist");

    selection_sort(&mut songs, reversed(by_name));
    writer.records("Names, Z to A:", &songs)?;

    writer.filtered(
        "Techno longer than two minutes:",
        &songs,
        all_of(category_is(Category::Techno), longer_than(120)),
    )?;
    writer.filtered("Everything but Techno:", &songs, not(category_is(Category::Techno)))?;
    writer.histogram("Category stats:", &class_histogram(&songs))?;

    let stats = writer.finish()?;
    eprintln!("{}", stats.summary());
    Ok(())
}
