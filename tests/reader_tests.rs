mod common;

use catalog_processor::{
    Book, CatalogReader, CatalogReaderBuilder, Category, Duration, Error, Genre, Song,
    MAX_TEXT_LEN,
};
use common::{sample_library, sample_playlist, CatalogInputBuilder};
use tempfile::tempdir;

// ============================================================================
// BOOK RECORDS
// ============================================================================

#[test]
fn test_read_sample_library() {
    let input = sample_library().build();
    let books: Vec<Book> = CatalogReader::from_text(&input).read_all().unwrap();

    assert_eq!(books.len(), 3);
    assert_eq!(books[0], Book::new("Emma", "Jane Austen", Some(1990), Genre::Classic));
    assert_eq!(books[1], Book::new("Dune", "Frank Herbert", Some(1965), Genre::SciFi));
    assert_eq!(books[2], Book::new("IT", "Stephen King", Some(1986), Genre::Crime));
}

#[test]
fn test_malformed_fields_become_sentinels() {
    let input = CatalogInputBuilder::books()
        .book("Lost", "Nobody", "19x5", "Poetry")
        .book("Blank", "Nobody", "", "classic")
        .book("Negative", "Nobody", "-1", "Fantasy")
        .build();
    let books: Vec<Book> = CatalogReader::from_text(&input).read_all().unwrap();

    assert_eq!(books.len(), 3);
    assert!(books.iter().all(|b| b.year.is_none()));
    assert_eq!(books[0].genre, Genre::Other);
    assert_eq!(books[1].genre, Genre::Other);
    assert_eq!(books[2].genre, Genre::Fantasy);
}

#[test]
fn test_missing_fields_do_not_fail_record() {
    let input = CatalogInputBuilder::books().raw_line("Only a title").build();
    let books: Vec<Book> = CatalogReader::from_text(&input).read_all().unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title.as_str(), "Only a title");
    assert_eq!(books[0].author.as_str(), "");
    assert_eq!(books[0].year, None);
    assert_eq!(books[0].genre, Genre::Other);
}

#[test]
fn test_long_text_is_truncated() {
    let long_title = "T".repeat(80);
    let input = CatalogInputBuilder::books()
        .book(&long_title, "Author", "2000", "Romance")
        .build();
    let books: Vec<Book> = CatalogReader::from_text(&input).read_all().unwrap();

    assert_eq!(books[0].title.as_str(), &long_title[..MAX_TEXT_LEN]);
    assert_eq!(books[0].year, Some(2000));
    assert_eq!(books[0].genre, Genre::Romance);
}

#[test]
fn test_custom_text_bound() {
    let input = sample_library().build();
    let books: Vec<Book> = CatalogReaderBuilder::new()
        .max_text_len(3)
        .from_text(&input)
        .read_all()
        .unwrap();

    assert_eq!(books[0].title.as_str(), "Emm");
    assert_eq!(books[0].author.as_str(), "Jan");
    assert_eq!(books[2].title.as_str(), "IT");
}

// ============================================================================
// SONG RECORDS
// ============================================================================

#[test]
fn test_read_sample_playlist() {
    let input = sample_playlist().build();
    let songs: Vec<Song> = CatalogReader::from_text(&input).read_all().unwrap();

    assert_eq!(songs.len(), 5);
    assert_eq!(songs[0].duration, Duration::new(1, 10));
    assert_eq!(songs[0].category, Category::Techno);
    assert_eq!(songs[2].duration.total_seconds(), 330);
    assert_eq!(songs[4].duration, Duration::ZERO);
    assert_eq!(songs[4].category, Category::Rock);
}

#[test]
fn test_song_with_book_delimiter_is_one_field() {
    let input = CatalogInputBuilder::songs()
        .raw_line("Name;Author;03:00;Pop")
        .build();
    let songs: Vec<Song> = CatalogReader::from_text(&input).read_all().unwrap();

    assert_eq!(songs[0].name.as_str(), "Name;Author;03:00;Pop");
    assert_eq!(songs[0].duration, Duration::ZERO);
    assert_eq!(songs[0].category, Category::Other);
}

#[test]
fn test_crlf_line_endings() {
    let input = "2\r\nA|B|02:00|Jazz\r\nC|D|03:00|Latin\r\n";
    let songs: Vec<Song> = CatalogReader::from_text(input).read_all().unwrap();

    assert_eq!(songs[0].category, Category::Jazz);
    assert_eq!(songs[1].category, Category::Latin);
}

#[test]
fn test_invalid_utf8_title_does_not_fail_catalog() {
    let input: &[u8] = b"2\nCaf\xe9;Someone;1990;Classic\nDune;Frank Herbert;1965;Sci-fi\n";
    let books: Vec<Book> = CatalogReaderBuilder::new()
        .from_reader(input)
        .read_all()
        .unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title.as_str(), "Caf\u{FFFD}");
    assert_eq!(books[0].year, Some(1990));
    assert_eq!(books[0].genre, Genre::Classic);
    assert_eq!(books[1], Book::new("Dune", "Frank Herbert", Some(1965), Genre::SciFi));
}

#[test]
fn test_whitespace_only_lines_are_not_records() {
    let input = "2\nEmma;Jane Austen;1990;Classic\n   \n\t\nIT;Stephen King;1986;Crime\n";
    let books: Vec<Book> = CatalogReader::from_text(input).read_all().unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title.as_str(), "Emma");
    assert_eq!(books[1].title.as_str(), "IT");
}

// ============================================================================
// RECORD COUNT
// ============================================================================

#[test]
fn test_declared_count_exceeds_input() {
    let input = sample_library().declare(5).build();
    let result = CatalogReader::from_text(&input).read_all::<Book>();

    match result {
        Err(Error::StreamExhausted {
            kind,
            expected,
            found,
        }) => {
            assert_eq!(kind, "book");
            assert_eq!(expected, 5);
            assert_eq!(found, 3);
        }
        other => panic!("expected StreamExhausted, got {:?}", other),
    }
}

#[test]
fn test_lenient_reader_returns_partial() {
    let input = sample_playlist().declare(9).build();
    let songs: Vec<Song> = CatalogReaderBuilder::new()
        .strict_count(false)
        .from_text(&input)
        .read_all()
        .unwrap();

    assert_eq!(songs.len(), 5);
}

#[test]
fn test_extra_lines_are_ignored() {
    let input = sample_library().declare(2).build();
    let books: Vec<Book> = CatalogReader::from_text(&input).read_all().unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[1].title.as_str(), "Dune");
}

#[test]
fn test_zero_records() {
    let books: Vec<Book> = CatalogReader::from_text("0\n").read_all().unwrap();
    assert!(books.is_empty());
}

#[test]
fn test_invalid_count_line() {
    for input in ["", "three\nA;B;1;Classic\n", "-1\n"] {
        let result = CatalogReader::from_text(input).read_all::<Book>();
        assert!(
            matches!(result, Err(Error::InvalidFormat(_))),
            "input {:?} gave {:?}",
            input,
            result
        );
    }
}

#[test]
fn test_count_line_whitespace_is_trimmed() {
    let books: Vec<Book> = CatalogReader::from_text("  1  \nA;B;2001;Crime\n")
        .read_all()
        .unwrap();
    assert_eq!(books.len(), 1);
}

#[test]
fn test_streaming_records() {
    let input = sample_library().build();
    let mut reader = CatalogReader::from_text(&input);
    let count = reader.read_count().unwrap();

    let titles: Vec<String> = reader
        .records::<Book>(count)
        .map(|r| r.unwrap().title.as_str().to_string())
        .collect();
    assert_eq!(titles, vec!["Emma", "Dune", "IT"]);
}

// ============================================================================
// FILE INPUT
// ============================================================================

#[test]
fn test_read_from_file() {
    let dir = tempdir().unwrap();
    let path = sample_playlist().write_to(dir.path(), "playlist.txt");

    let songs: Vec<Song> = CatalogReader::from_file(&path).unwrap().read_all().unwrap();
    assert_eq!(songs.len(), 5);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = CatalogReader::from_file(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
}
