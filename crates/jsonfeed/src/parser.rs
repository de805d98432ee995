// crates/jsonfeed/src/parser.rs
//! Feed decoding
//!
//! Every input adapter drains its source to bytes and hands them to
//! [`FeedParser::from_bytes`], so bytes, text and streams with the same
//! content always decode to the same result.

use crate::de::Object;
use crate::error::{FeedError, FeedResult};
use crate::feed::{Feed, FeedDocument};
use crate::options::ParserOptions;
use serde::de::{Deserialize, DeserializeOwned};
use std::io::Read;

/// Feed parser
///
/// The associated functions decode with the default policy: JSON syntax
/// errors pass through unchanged, and a `null` or empty feed is rejected
/// with [`FeedError::EmptyFeed`]. Validity is never checked there; call
/// `is_valid()` on the result when you need it.
///
/// A parser built with [`FeedParser::with_options`] adds a size limit and
/// optional validation on top of the same decode path.
#[derive(Debug, Clone, Default)]
pub struct FeedParser {
    options: ParserOptions,
}

impl FeedParser {
    /// Creates a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given options
    pub fn with_options(options: ParserOptions) -> FeedResult<Self> {
        options.validate().map_err(FeedError::InvalidOptions)?;
        Ok(Self { options })
    }

    /// Returns the parser's options
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a base feed from a string
    pub fn parse(content: &str) -> FeedResult<Feed> {
        Self::from_str(content)
    }

    /// Decodes a feed shape from raw bytes
    pub fn from_bytes<F: FeedDocument>(bytes: &[u8]) -> FeedResult<F> {
        match decode_object::<F>(bytes)? {
            Some(feed) if !feed.is_empty() => {
                log::debug!(
                    "Decoded {} from {} bytes",
                    std::any::type_name::<F>(),
                    bytes.len()
                );
                Ok(feed)
            }
            _ => Err(FeedError::EmptyFeed),
        }
    }

    /// Decodes a feed shape from a string
    pub fn from_str<F: FeedDocument>(content: &str) -> FeedResult<F> {
        Self::from_bytes(content.as_bytes())
    }

    /// Decodes a feed shape from a reader, draining it first
    ///
    /// Read failures are returned as [`FeedError::Io`] before any decoding.
    pub fn from_reader<F: FeedDocument, R: Read>(reader: R) -> FeedResult<F> {
        let bytes = read_to_end(reader, None)?;
        Self::from_bytes(&bytes)
    }

    /// Decodes a feed shape from an optional reader
    ///
    /// A missing source is [`FeedError::NilSource`]; nothing is read.
    pub fn from_source<F: FeedDocument, R: Read>(source: Option<R>) -> FeedResult<F> {
        let reader = source.ok_or(FeedError::NilSource)?;
        Self::from_reader(reader)
    }

    /// Decodes raw bytes into an existing value
    ///
    /// Works for any deserializable shape that is a JSON object on the
    /// wire. No emptiness check is made; a JSON `null` is
    /// [`FeedError::NilTarget`]. On error `target` is left unchanged.
    pub fn unmarshal_from_bytes<F: DeserializeOwned>(bytes: &[u8], target: &mut F) -> FeedResult<()> {
        *target = decode_object::<F>(bytes)?.ok_or(FeedError::NilTarget)?;

        log::debug!(
            "Decoded {} in place from {} bytes",
            std::any::type_name::<F>(),
            bytes.len()
        );
        Ok(())
    }

    /// Decodes a string into an existing value
    pub fn unmarshal_from_str<F: DeserializeOwned>(content: &str, target: &mut F) -> FeedResult<()> {
        Self::unmarshal_from_bytes(content.as_bytes(), target)
    }

    /// Decodes a reader's content into an existing value
    pub fn unmarshal_from_reader<F: DeserializeOwned, R: Read>(
        reader: R,
        target: &mut F,
    ) -> FeedResult<()> {
        let bytes = read_to_end(reader, None)?;
        Self::unmarshal_from_bytes(&bytes, target)
    }

    /// Decodes raw bytes, applying this parser's options
    pub fn decode<F: FeedDocument>(&self, bytes: &[u8]) -> FeedResult<F> {
        if let Some(limit) = self.options.max_input_bytes {
            if bytes.len() as u64 > limit {
                return Err(FeedError::TooLarge { limit });
            }
        }

        let feed: F = Self::from_bytes(bytes)?;

        if self.options.require_valid {
            feed.validate().map_err(FeedError::Invalid)?;
        }

        Ok(feed)
    }

    /// Decodes a string, applying this parser's options
    pub fn decode_str<F: FeedDocument>(&self, content: &str) -> FeedResult<F> {
        self.decode(content.as_bytes())
    }

    /// Decodes a reader's content, applying this parser's options
    ///
    /// With a size limit set, reading stops as soon as the limit is passed.
    pub fn decode_reader<F: FeedDocument, R: Read>(&self, reader: R) -> FeedResult<F> {
        let bytes = read_to_end(reader, self.options.max_input_bytes)?;
        self.decode(&bytes)
    }
}

/// Decodes a JSON object or `null`; any other top-level value is a
/// decoder error
fn decode_object<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<Option<T>> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = Option::<Object<T>>::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value.map(|Object(value)| value))
}

/// Drains a reader, reading at most one byte past `limit`
fn read_to_end<R: Read>(reader: R, limit: Option<u64>) -> FeedResult<Vec<u8>> {
    let mut bytes = Vec::new();

    match limit {
        Some(limit) => {
            reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
            if bytes.len() as u64 > limit {
                return Err(FeedError::TooLarge { limit });
            }
        }
        None => {
            let mut reader = reader;
            reader.read_to_end(&mut bytes)?;
        }
    }

    log::trace!("Read {} bytes of feed input", bytes.len());
    Ok(bytes)
}
