// crates/jsonfeed/examples/parse_feed.rs
//! Example of decoding and validating JSON feeds
//!
//! Run with `RUST_LOG=debug` to see the decoder's log output.

use jsonfeed::{Entry, ErrorKind, Extended, Feed, FeedParser, ParserOptions};
use serde::Deserialize;
use std::io::Cursor;

fn main() {
    env_logger::init();

    println!("=== JSON Feed Parser Demo ===\n");

    // Example 1: Decode and validate
    println!("Example 1: Basic Feed");
    println!("{}", "=".repeat(60));
    basic_example();

    println!("\n");

    // Example 2: Extension fields
    println!("Example 2: Extended Feed");
    println!("{}", "=".repeat(60));
    extension_example();

    println!("\n");

    // Example 3: Error kinds
    println!("Example 3: Errors");
    println!("{}", "=".repeat(60));
    error_example();
}

const PODCAST: &str = r#"{
    "version": "https://jsonfeed.org/version/1.1",
    "title": "Classic Audiobooks",
    "home_page_url": "https://example.com/audiobooks",
    "description": "Public domain audiobooks read by volunteers",
    "authors": [{"name": "Volunteer Narrators"}],
    "_podcast_category": "Arts",
    "items": [
        {
            "id": "pride-ch1",
            "title": "Pride and Prejudice - Chapter 1",
            "content_text": "By Jane Austen. Read by volunteer narrator.",
            "date_published": "2024-01-01T12:00:00Z",
            "_chapter": 1,
            "attachments": [
                {
                    "url": "https://example.com/audio/pride-ch1.mp3",
                    "mime_type": "audio/mpeg",
                    "size_in_bytes": 15000000,
                    "duration_in_seconds": 1820
                }
            ]
        },
        {
            "id": "pride-ch2",
            "title": "Pride and Prejudice - Chapter 2",
            "date_published": "2024-01-02T12:00:00Z",
            "_chapter": 2
        }
    ]
}"#;

fn basic_example() {
    let feed = match FeedParser::parse(PODCAST) {
        Ok(feed) => feed,
        Err(e) => {
            eprintln!("Failed to parse: {}", e);
            return;
        }
    };

    println!("Title: {}", feed.title);
    if let Some(desc) = &feed.description {
        println!("Description: {}", desc);
    }
    println!("Entries: {}", feed.entry_count());
    println!("Valid entries: {}", feed.valid_entries().count());

    for entry in feed.entries.iter().flatten() {
        println!("\n  Entry: {}", entry.title.as_deref().unwrap_or(&entry.id));
        if let Some(date) = entry.published_or_modified() {
            println!("  Published: {}", date.format("%Y-%m-%d"));
        }
        for attachment in entry.attachments.iter().flatten() {
            let kind = if attachment.is_audio() { "audio" } else { "other" };
            println!("  Attachment ({}): {}", kind, attachment.url);
        }
    }

    match feed.validate() {
        Ok(()) => println!("\nFeed is valid"),
        Err(errors) => {
            for error in errors {
                println!("\nValidation: {}", error);
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct PodcastExt {
    #[serde(rename = "_podcast_category")]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChapterExt {
    #[serde(rename = "_chapter")]
    chapter: Option<u32>,
}

type PodcastFeed = Extended<Feed<Extended<Entry, ChapterExt>>, PodcastExt>;

fn extension_example() {
    let feed: PodcastFeed = match FeedParser::from_reader(Cursor::new(PODCAST)) {
        Ok(feed) => feed,
        Err(e) => {
            eprintln!("Failed to parse: {}", e);
            return;
        }
    };

    println!("Title: {}", feed.title);
    println!("Category: {}", feed.ext.category.as_deref().unwrap_or("none"));

    for entry in feed.entries.iter().flatten() {
        let chapter = entry
            .ext
            .chapter
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        println!("  Chapter {}: {}", chapter, entry.id);
    }
}

fn error_example() {
    for input in ["", "[]", "{}", r#"{"title": "#] {
        match FeedParser::parse(input) {
            Ok(_) => println!("{:?}: decoded", input),
            Err(e) => {
                let what = match e.kind() {
                    ErrorKind::Syntax => "not JSON",
                    ErrorKind::SemanticEmpty => "JSON, but not a feed",
                    _ => "other error",
                };
                println!("{:?}: {} ({})", input, what, e);
            }
        }
    }

    let parser = match FeedParser::with_options(ParserOptions::new().with_max_input_bytes(64)) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Bad options: {}", e);
            return;
        }
    };
    if let Err(e) = parser.decode_str::<Feed>(PODCAST) {
        println!("With a 64 byte limit: {}", e);
    }
}
