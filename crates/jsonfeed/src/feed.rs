// crates/jsonfeed/src/feed.rs
//! Feed data structures and validity rules
//!
//! Optional scalars are `Option<_>` and optional collections are
//! `Option<Vec<_>>`, so a missing field is never confused with an empty one.
//! Collections follow an "exists-one" rule: absent is fine, but a present
//! collection needs at least one valid element, so an empty one fails.

use crate::de::{null_as_empty, objects};
use crate::error::ValidationError;
use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The only feed version accepted by validation
pub const CURRENT_VERSION: &str = "https://jsonfeed.org/version/1.1";

/// Types that can check themselves against the format's required-field rules
pub trait Validate {
    /// Returns true if the value satisfies its validity rules
    fn is_valid(&self) -> bool;
}

/// A present entity is checked; an absent one is invalid.
impl<T: Validate> Validate for Option<T> {
    fn is_valid(&self) -> bool {
        self.as_ref().is_some_and(Validate::is_valid)
    }
}

/// A decodable feed shape: the base [`Feed`], an extended one, or any
/// caller type that embeds a feed.
///
/// This is the bound for the typed decode functions on
/// [`FeedParser`](crate::FeedParser).
pub trait FeedDocument: DeserializeOwned {
    /// True when the decoded value carries no feed data at all
    fn is_empty(&self) -> bool;

    /// Checks the feed-level validity rules, listing every failure
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

fn valid_str(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

fn any_valid<T: Validate>(collection: Option<&[T]>) -> bool {
    collection.map_or(true, |items| items.iter().any(Validate::is_valid))
}

/// A JSON feed: metadata plus an ordered list of entries
///
/// `E` is the entry shape. It defaults to [`Entry`]; use
/// `Feed<Extended<Entry, X>>` to decode entries with extension fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>"))]
pub struct Feed<E = Entry> {
    /// Format version URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,
    /// Feed title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// URL of the resource the feed describes
    pub home_page_url: Option<String>,
    /// URL of the feed itself
    pub feed_url: Option<String>,
    /// Feed description
    #[serde(alias = "Description")]
    pub description: Option<String>,
    /// Note for whoever is reading the raw feed
    pub user_comment: Option<String>,
    /// URL of the next page, for paginated feeds
    pub next_url: Option<String>,
    /// Large feed image
    pub icon: Option<String>,
    /// Small feed image
    pub favicon: Option<String>,
    /// Primary language (RFC 5646)
    pub language: Option<String>,
    /// Whether the feed has finished publishing
    pub expired: Option<bool>,
    /// Feed authors
    #[serde(default, deserialize_with = "objects")]
    pub authors: Option<Vec<Author>>,
    /// Real-time subscription endpoints
    #[serde(default, deserialize_with = "objects")]
    pub hubs: Option<Vec<Hub>>,
    /// Feed entries
    #[serde(rename = "items", default, deserialize_with = "objects")]
    pub entries: Option<Vec<E>>,
}

impl<E> Default for Feed<E> {
    fn default() -> Self {
        Self {
            version: String::new(),
            title: String::new(),
            home_page_url: None,
            feed_url: None,
            description: None,
            user_comment: None,
            next_url: None,
            icon: None,
            favicon: None,
            language: None,
            expired: None,
            authors: None,
            hubs: None,
            entries: None,
        }
    }
}

impl<E> Feed<E> {
    /// Creates an empty feed with the current version and the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns true if nothing was decoded: every optional field is absent
    /// and both version and title are empty
    pub fn is_empty(&self) -> bool {
        self.authors.is_none()
            && self.hubs.is_none()
            && self.entries.is_none()
            && self.home_page_url.is_none()
            && self.feed_url.is_none()
            && self.description.is_none()
            && self.user_comment.is_none()
            && self.next_url.is_none()
            && self.icon.is_none()
            && self.favicon.is_none()
            && self.language.is_none()
            && self.expired.is_none()
            && self.version.is_empty()
            && self.title.is_empty()
    }

    /// Returns the number of entries in the feed
    pub fn entry_count(&self) -> usize {
        self.entries.as_ref().map_or(0, Vec::len)
    }
}

impl<E: Validate> Feed<E> {
    /// Returns true if the feed satisfies every validity rule
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty()
            && !self.version.is_empty()
            && self.version == CURRENT_VERSION
            && any_valid(self.hubs.as_deref())
            && any_valid(self.authors.as_deref())
            && self
                .entries
                .as_deref()
                .is_some_and(|entries| entries.iter().any(Validate::is_valid))
    }

    /// Checks the validity rules and reports every one that fails
    ///
    /// Returns `Ok(())` exactly when [`is_valid`](Self::is_valid) is true.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push(ValidationError::new("title", "must not be empty"));
        }

        if self.version.is_empty() {
            errors.push(ValidationError::new("version", "must not be empty"));
        } else if self.version != CURRENT_VERSION {
            errors.push(ValidationError::new(
                "version",
                format!(
                    "unsupported version '{}', expected '{}'",
                    self.version, CURRENT_VERSION
                ),
            ));
        }

        if !any_valid(self.hubs.as_deref()) {
            errors.push(ValidationError::new("hubs", "contains no valid hub"));
        }

        if !any_valid(self.authors.as_deref()) {
            errors.push(ValidationError::new("authors", "contains no valid author"));
        }

        match self.entries.as_deref() {
            None => errors.push(ValidationError::new("items", "missing")),
            Some(entries) if !entries.iter().any(Validate::is_valid) => {
                errors.push(ValidationError::new("items", "contains no valid item"))
            }
            Some(_) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Iterates over the entries that pass validation
    pub fn valid_entries(&self) -> impl Iterator<Item = &E> {
        self.entries
            .iter()
            .flatten()
            .filter(|entry| entry.is_valid())
    }
}

impl<E: Validate> Validate for Feed<E> {
    fn is_valid(&self) -> bool {
        Feed::<E>::is_valid(self)
    }
}

impl<E: Validate + DeserializeOwned> FeedDocument for Feed<E> {
    fn is_empty(&self) -> bool {
        Feed::<E>::is_empty(self)
    }

    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Feed::<E>::validate(self)
    }
}

/// Author of a feed or entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name
    pub name: Option<String>,
    /// Author's site or profile
    pub url: Option<String>,
    /// Author image
    pub avatar: Option<String>,
}

impl Author {
    /// Creates an author with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Validate for Author {
    fn is_valid(&self) -> bool {
        valid_str(self.name.as_deref())
            || valid_str(self.url.as_deref())
            || valid_str(self.avatar.as_deref())
    }
}

/// Real-time subscription endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    /// Protocol, e.g. "WebSub"
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub hub_type: String,
    /// Endpoint URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl Validate for Hub {
    fn is_valid(&self) -> bool {
        !self.hub_type.is_empty() && !self.url.is_empty()
    }
}

/// A single item in a feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier within the feed
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    /// Permalink
    pub url: Option<String>,
    /// URL of the page the entry links to
    pub external_url: Option<String>,
    /// Entry title
    pub title: Option<String>,
    /// HTML body
    pub content_html: Option<String>,
    /// Plain-text body
    pub content_text: Option<String>,
    /// Short summary
    pub summary: Option<String>,
    /// Main image
    pub image: Option<String>,
    /// Banner image
    pub banner_image: Option<String>,
    /// Publication time (RFC 3339)
    pub date_published: Option<DateTime<FixedOffset>>,
    /// Last modification time (RFC 3339)
    pub date_modified: Option<DateTime<FixedOffset>>,
    /// Entry language
    pub language: Option<String>,
    /// Entry authors
    #[serde(default, deserialize_with = "objects")]
    pub authors: Option<Vec<Author>>,
    /// Free-form tags
    pub tags: Option<Vec<String>>,
    /// Related media
    #[serde(default, deserialize_with = "objects")]
    pub attachments: Option<Vec<Attachment>>,
}

impl Entry {
    /// Creates an entry with the given id and no content
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the body, preferring HTML over plain text
    pub fn content(&self) -> Option<&str> {
        self.content_html
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.content_text.as_deref().filter(|s| !s.is_empty()))
    }

    /// Returns the publication time, falling back to the modification time
    pub fn published_or_modified(&self) -> Option<&DateTime<FixedOffset>> {
        self.date_published.as_ref().or(self.date_modified.as_ref())
    }
}

impl Validate for Entry {
    fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && (valid_str(self.content_html.as_deref()) || valid_str(self.content_text.as_deref()))
            && any_valid(self.authors.as_deref())
            && any_valid(self.attachments.as_deref())
    }
}

/// Media resource attached to an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Location of the resource
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// MIME type (e.g., "audio/mpeg")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mime_type: String,
    /// Name distinguishing this attachment from others of the same entry
    pub title: Option<String>,
    /// Size in bytes
    pub size_in_bytes: Option<i64>,
    /// Duration in seconds
    pub duration_in_seconds: Option<i64>,
}

impl Attachment {
    /// Creates an attachment
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
            ..Self::default()
        }
    }

    /// Returns true if this is an audio attachment
    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }

    /// Returns true if this is a video attachment
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }
}

impl Validate for Attachment {
    fn is_valid(&self) -> bool {
        !self.url.is_empty() && !self.mime_type.is_empty()
    }
}
