// crates/jsonfeed/src/lib.rs
//! JSON Feed 1.1 decoder and validator
//!
//! This crate turns JSON Feed documents into typed values:
//! - Decoding from bytes, strings or any `Read` source
//! - Validity checks for feeds, entries, authors, hubs and attachments
//! - Caller-defined extension fields at feed and entry level
//!
//! Decoding and validation are separate steps. A successful decode only
//! means the input is JSON that looks like a feed; call `is_valid()` to
//! check the format's required fields.
//!
//! # Example
//!
//! ```rust
//! use jsonfeed::FeedParser;
//!
//! let json = r#"{
//!     "version": "https://jsonfeed.org/version/1.1",
//!     "title": "My Example Feed",
//!     "items": [
//!         { "id": "1", "content_html": "<p>Hello, world!</p>" }
//!     ]
//! }"#;
//!
//! let feed = FeedParser::parse(json).expect("Failed to parse feed");
//! assert!(feed.is_valid());
//! println!("Feed: {} with {} entries", feed.title, feed.entry_count());
//! ```

mod de;
mod error;
mod extension;
mod feed;
mod options;
mod parser;

pub use error::{ErrorKind, FeedError, FeedResult, ValidationError};
pub use extension::{Extended, NoExtension};
pub use feed::{
    Attachment, Author, Entry, Feed, FeedDocument, Hub, Validate, CURRENT_VERSION,
};
pub use options::ParserOptions;
pub use parser::FeedParser;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // Verify all types are exported
        let _: Feed = Feed::new("Test");
        let _: Entry = Entry::new("1");
        let _: Author = Author::named("Jane");
        let _: Hub = Hub::default();
        let _: Attachment = Attachment::new("http://example.com", "audio/mpeg");
        let _: Extended<Entry, NoExtension> = Extended::new(Entry::new("1"), NoExtension {});
        let _: ParserOptions = ParserOptions::default();
        let _: FeedParser = FeedParser::new();
    }

    #[test]
    fn test_complete_workflow() {
        let json = r#"{
            "version": "https://jsonfeed.org/version/1.1",
            "title": "Test Audiobook Feed",
            "description": "Audiobooks for testing",
            "authors": [{"name": "Narrator"}],
            "items": [
                {
                    "id": "book1-ch1",
                    "title": "Book 1 - Chapter 1",
                    "content_text": "First chapter",
                    "date_published": "2024-01-01T12:00:00Z",
                    "attachments": [
                        {
                            "url": "http://example.com/book1_ch1.mp3",
                            "mime_type": "audio/mpeg",
                            "size_in_bytes": 5000000
                        }
                    ]
                }
            ]
        }"#;

        let feed = FeedParser::parse(json).expect("Should parse");
        assert_eq!(feed.title, "Test Audiobook Feed");
        assert_eq!(feed.entry_count(), 1);
        assert!(feed.is_valid());

        let entry = &feed.entries.as_ref().expect("Should have items")[0];
        assert_eq!(entry.title.as_deref(), Some("Book 1 - Chapter 1"));
        assert!(entry.date_published.is_some());

        let attachment = &entry.attachments.as_ref().expect("Should have attachments")[0];
        assert!(attachment.is_audio());
        assert_eq!(attachment.size_in_bytes, Some(5_000_000));
    }
}
