//! Command-line interface for the catalog processor.
//!
//! Reads a book library or song playlist from standard input (or a file)
//! and prints the sorted, filtered and aggregated report.

use anyhow::{Context, Result};
use catalog_processor::fields::parse_enum;
use catalog_processor::predicates::is_known;
use catalog_processor::{
    run_library, run_playlist, Book, CatalogReaderBuilder, Category, ClosedSet, Genre,
    LibraryOptions, OutputFormat, PlaylistOptions, Record, ReportWriter, Song,
};
use clap::{Args, Parser, Subcommand};
use log::{info, warn, LevelFilter};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sort, filter and summarize a book library or song playlist",
    long_about = "Reads a record count followed by that many delimited records and prints \
                  sorted listings, filtered listings and aggregate statistics.\n\n\
                  Books:  <title>;<author>;<year>;<genre>\n\
                  Songs:  <name>|<author>|<MM:SS>|<category>"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Read from FILE instead of standard input
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,

    /// Report output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Accept fewer records than the declared count
    #[arg(long, global = true)]
    lenient: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process a book library (`;` delimited)
    Books(BookArgs),
    /// Process a song playlist (`|` delimited)
    Songs(SongArgs),
}

#[derive(Args, Debug)]
struct BookArgs {
    /// Author to search for (exact match)
    #[arg(long, default_value = "Jane Austen")]
    author: String,

    /// Genre to filter by
    #[arg(long, default_value = "Fantasy")]
    genre: String,

    /// First year of the year interval filter
    #[arg(long, default_value_t = 1990)]
    year_from: u32,

    /// Last year of the year interval filter (inclusive)
    #[arg(long, default_value_t = 2010)]
    year_to: u32,
}

#[derive(Args, Debug)]
struct SongArgs {
    /// Keep songs strictly longer than this many seconds
    #[arg(long, default_value_t = 200)]
    min_seconds: u32,

    /// Number of longest songs to list
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Category to filter by
    #[arg(long, default_value = "HipHop")]
    category: String,

    /// Append playlist length statistics
    #[arg(long)]
    summary: bool,
}

/// Resolve an option value the same way record fields are parsed.
fn enum_option<E: ClosedSet>(flag: &str, value: &str) -> E {
    let parsed = parse_enum::<E>(value);
    if !is_known(parsed) && value != parsed.name() {
        warn!("Unknown {} {:?}, filtering by {}", flag, value, parsed.name());
    }
    parsed
}

fn read_records<T: Record>(cli: &Cli) -> Result<Vec<T>> {
    let builder = CatalogReaderBuilder::new().strict_count(!cli.lenient);

    let records = match &cli.input {
        Some(path) => {
            info!("📄 Reading {}s from {}", T::KIND, path.display());
            builder
                .from_file(path)
                .with_context(|| format!("cannot open '{}'", path.display()))?
                .read_all()?
        }
        None => {
            info!("📄 Reading {}s from standard input", T::KIND);
            builder.from_reader(io::stdin().lock()).read_all()?
        }
    };

    Ok(records)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let start_time = Instant::now();
    let stdout = io::stdout().lock();

    let stats = match &cli.command {
        Command::Books(args) => {
            let options = LibraryOptions {
                author: args.author.clone(),
                genre: enum_option::<Genre>("genre", &args.genre),
                year_from: args.year_from,
                year_to: args.year_to,
            };
            if options.year_from > options.year_to {
                warn!(
                    "Year interval {}..={} is empty",
                    options.year_from, options.year_to
                );
            }

            let mut books: Vec<Book> = read_records(&cli)?;
            let mut writer = ReportWriter::new(stdout, cli.format, "library");
            run_library(&mut books, &options, &mut writer)?;
            writer.finish()?
        }
        Command::Songs(args) => {
            let options = PlaylistOptions {
                min_seconds: args.min_seconds,
                top: args.top,
                category: enum_option::<Category>("category", &args.category),
                summary: args.summary,
            };

            let mut songs: Vec<Song> = read_records(&cli)?;
            let mut writer = ReportWriter::new(stdout, cli.format, "playlist");
            run_playlist(&mut songs, &options, &mut writer)?;
            writer.finish()?
        }
    };

    info!("🏁 {} in {:.2?}", stats.summary(), start_time.elapsed());
    Ok(())
}
