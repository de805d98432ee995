// crates/jsonfeed/src/options.rs
//! Parser configuration
//!
//! All fields use `#[serde(default)]`, so the options can sit in an
//! application's own config file with any subset of keys.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Options for a configured [`FeedParser`](crate::FeedParser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Largest accepted input, in bytes. `None` means unlimited.
    pub max_input_bytes: Option<u64>,

    /// Fail decoding when the feed does not pass validation
    pub require_valid: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: None,
            require_valid: false,
        }
    }
}

impl ParserOptions {
    /// Creates options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input size limit
    pub fn with_max_input_bytes(mut self, limit: u64) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    /// Sets whether decoded feeds must be valid
    pub fn with_require_valid(mut self, require_valid: bool) -> Self {
        self.require_valid = require_valid;
        self
    }

    /// Validates the options
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.max_input_bytes == Some(0) {
            errors.push(ValidationError::new(
                "max_input_bytes",
                "must be greater than 0",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
