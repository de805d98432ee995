// crates/jsonfeed/src/extension.rs
//! Caller-defined extension fields
//!
//! An extended shape is a base shape plus an extension struct, both
//! flattened into one JSON object. Feed- and entry-level extensions compose:
//!
//! ```rust
//! use jsonfeed::{Entry, Extended, Feed, FeedParser};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Podcast {
//!     #[serde(rename = "_itunes_category")]
//!     category: Option<String>,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct Episode {
//!     #[serde(rename = "_episode")]
//!     number: Option<u32>,
//! }
//!
//! type PodcastFeed = Extended<Feed<Extended<Entry, Episode>>, Podcast>;
//!
//! let json = r#"{
//!     "version": "https://jsonfeed.org/version/1.1",
//!     "title": "Show",
//!     "_itunes_category": "Arts",
//!     "items": [{ "id": "1", "content_text": "Pilot", "_episode": 1 }]
//! }"#;
//!
//! let feed: PodcastFeed = FeedParser::from_str(json).expect("Should decode");
//! assert_eq!(feed.title, "Show");
//! assert_eq!(feed.ext.category.as_deref(), Some("Arts"));
//! let entries = feed.entries.as_ref().expect("Should have items");
//! assert_eq!(entries[0].ext.number, Some(1));
//! ```

use crate::error::ValidationError;
use crate::feed::{FeedDocument, Validate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// A base shape `B` with extension fields `X` decoded from the same object
///
/// Keys claimed by `B` are matched first; whatever is left is offered to `X`.
/// Keys neither side knows are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extended<B, X> {
    /// Base fields
    #[serde(flatten)]
    pub base: B,
    /// Extension fields
    #[serde(flatten)]
    pub ext: X,
}

impl<B, X> Extended<B, X> {
    /// Combines a base value with its extension fields
    pub fn new(base: B, ext: X) -> Self {
        Self { base, ext }
    }

    /// Splits into base and extension
    pub fn into_parts(self) -> (B, X) {
        (self.base, self.ext)
    }
}

impl<B, X> Deref for Extended<B, X> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.base
    }
}

impl<B, X> DerefMut for Extended<B, X> {
    fn deref_mut(&mut self) -> &mut B {
        &mut self.base
    }
}

impl<B: Validate, X> Validate for Extended<B, X> {
    fn is_valid(&self) -> bool {
        self.base.is_valid()
    }
}

impl<B, X> FeedDocument for Extended<B, X>
where
    B: FeedDocument,
    X: DeserializeOwned,
{
    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        self.base.validate()
    }
}

/// Extension slot that carries no fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoExtension {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Entry, Feed};

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Stars {
        #[serde(rename = "_stars")]
        stars: Option<i64>,
    }

    #[test]
    fn test_deref_reaches_base_fields() {
        let mut entry = Entry::new("1");
        entry.content_text = Some("x".to_string());
        let mut extended = Extended::new(entry, Stars { stars: Some(3) });

        assert_eq!(extended.id, "1");
        extended.title = Some("changed".to_string());
        assert_eq!(extended.base.title.as_deref(), Some("changed"));
    }

    #[test]
    fn test_validity_follows_base() {
        let extended = Extended::new(Entry::new("1"), Stars::default());
        assert!(!extended.is_valid());

        let mut entry = Entry::new("1");
        entry.content_html = Some("<p>x</p>".to_string());
        let extended = Extended::new(entry, Stars::default());
        assert!(extended.is_valid());
    }

    #[test]
    fn test_emptiness_follows_base() {
        let feed: Extended<Feed, Stars> = Extended::default();
        assert!(FeedDocument::is_empty(&feed));
    }

    #[test]
    fn test_entry_extension_from_json() {
        let entry: Extended<Entry, Stars> =
            serde_json::from_str(r#"{"id": "7", "_stars": 5, "_unknown": true}"#)
                .expect("Should decode");
        assert_eq!(entry.id, "7");
        assert_eq!(entry.ext.stars, Some(5));
    }

    #[test]
    fn test_no_extension_decodes_anything() {
        let entry: Extended<Entry, NoExtension> =
            serde_json::from_str(r#"{"id": "7", "_stars": 5}"#).expect("Should decode");
        let (base, ext) = entry.into_parts();
        assert_eq!(base.id, "7");
        assert_eq!(ext, NoExtension {});
    }
}
