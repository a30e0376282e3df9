//! Configuration options for Markdown serialization.
//!
//! This module provides types to customize the rendered document:
//!
//! - [`MarkdownOptions`]: Main configuration struct
//! - [`EntryNumbering`]: How mapping entries are numbered in their labels
//!
//! ## Examples
//!
//! ```rust
//! use serde_markdown::{to_string_with_options, MarkdownOptions};
//!
//! let empty: Vec<i32> = Vec::new();
//!
//! // Empty collections render as a header by default
//! let md = serde_markdown::to_string(&empty, "numbers").unwrap();
//! assert_eq!(md, "# numbers\n");
//!
//! // ...or are suppressed entirely
//! let options = MarkdownOptions::new().with_include_empty_collections(false);
//! let md = to_string_with_options(&empty, "numbers", &options).unwrap();
//! assert_eq!(md, "");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Highest accepted value for [`MarkdownOptions::max_depth`].
pub const MAX_DEPTH_LIMIT: u8 = 15;

/// Deepest Markdown header level (`######`).
pub const MAX_HEADER_LEVEL: usize = 6;

/// Numbering scheme for the `"{index}. Key "` / `"{index}. Value "` labels of mapping entries.
///
/// # Examples
///
/// ```rust
/// use serde_markdown::EntryNumbering;
///
/// assert_eq!(EntryNumbering::Sequential.index_for(2), 3);
/// assert_eq!(EntryNumbering::Repeated.index_for(2), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryNumbering {
    /// Entries are numbered 1, 2, 3, ...
    #[default]
    Sequential,
    /// Every entry is numbered 1, matching output produced by older tooling.
    Repeated,
}

impl EntryNumbering {
    /// Returns the label index for the zero-based entry `position`.
    #[must_use]
    pub const fn index_for(self, position: usize) -> usize {
        match self {
            EntryNumbering::Sequential => position + 1,
            EntryNumbering::Repeated => 1,
        }
    }
}

/// Configuration options for Markdown serialization.
///
/// Fields are public for struct-literal and config-file use; every entry point
/// calls [`MarkdownOptions::validate`] before rendering, so an out-of-range
/// `max_depth` is rejected up front rather than mid-document.
///
/// # Examples
///
/// ```rust
/// use serde_markdown::{EntryNumbering, MarkdownOptions};
///
/// let options = MarkdownOptions::new()
///     .with_include_null_values(true)
///     .with_entry_numbering(EntryNumbering::Repeated)
///     .with_max_depth(10)
///     .unwrap();
/// assert_eq!(options.max_depth, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Render absent values as `"{label}: Null"` instead of dropping them.
    pub include_null_values: bool,
    /// Render empty mappings and sequences as a bare header instead of dropping them.
    pub include_empty_collections: bool,
    /// Deepest container nesting allowed, in `1..=15`.
    pub max_depth: u8,
    /// How mapping entries are numbered in their `Key`/`Value` labels.
    pub entry_numbering: EntryNumbering,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        MarkdownOptions {
            include_null_values: false,
            include_empty_collections: true,
            max_depth: 6,
            entry_numbering: EntryNumbering::default(),
        }
    }
}

impl MarkdownOptions {
    /// Creates default options (nulls omitted, empty collections kept, depth limit 6).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_markdown::MarkdownOptions;
    ///
    /// let options = MarkdownOptions::new();
    /// assert!(!options.include_null_values);
    /// assert!(options.include_empty_collections);
    /// assert_eq!(options.max_depth, 6);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `"{label}: Null"` for absent values instead of dropping them.
    #[must_use]
    pub fn with_include_null_values(mut self, include: bool) -> Self {
        self.include_null_values = include;
        self
    }

    /// Emit a header-only block for empty mappings and sequences instead of dropping them.
    #[must_use]
    pub fn with_include_empty_collections(mut self, include: bool) -> Self {
        self.include_empty_collections = include;
        self
    }

    /// Sets the numbering scheme for mapping entry labels.
    #[must_use]
    pub fn with_entry_numbering(mut self, numbering: EntryNumbering) -> Self {
        self.entry_numbering = numbering;
        self
    }

    /// Sets the deepest container nesting level that may be rendered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxDepth`] unless `1 <= depth <= 15`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_markdown::MarkdownOptions;
    ///
    /// assert!(MarkdownOptions::new().with_max_depth(15).is_ok());
    /// assert!(MarkdownOptions::new().with_max_depth(0).is_err());
    /// ```
    pub fn with_max_depth(mut self, depth: u8) -> Result<Self> {
        self.max_depth = depth;
        self.validate()?;
        Ok(self)
    }

    /// Checks that the options describe a renderable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxDepth`] if `max_depth` is outside `1..=15`.
    pub fn validate(&self) -> Result<()> {
        if (1..=MAX_DEPTH_LIMIT).contains(&self.max_depth) {
            Ok(())
        } else {
            Err(Error::invalid_max_depth(self.max_depth))
        }
    }
}

/// Returns the header marks for a container at `depth`, capped at `######`.
///
/// # Examples
///
/// ```rust
/// use serde_markdown::options::header_marks;
///
/// assert_eq!(header_marks(0), "#");
/// assert_eq!(header_marks(9), "######");
/// ```
#[must_use]
pub fn header_marks(depth: usize) -> String {
    "#".repeat((depth + 1).min(MAX_HEADER_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_depth_bounds() {
        for depth in 1..=MAX_DEPTH_LIMIT {
            assert!(MarkdownOptions::new().with_max_depth(depth).is_ok());
        }
        assert_eq!(
            MarkdownOptions::new().with_max_depth(0),
            Err(Error::InvalidMaxDepth { depth: 0 })
        );
        assert_eq!(
            MarkdownOptions::new().with_max_depth(16),
            Err(Error::InvalidMaxDepth { depth: 16 })
        );
    }

    #[test]
    fn test_struct_literal_is_validated() {
        let options = MarkdownOptions {
            max_depth: 40,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_header_marks_cap() {
        assert_eq!(header_marks(0), "#");
        assert_eq!(header_marks(4), "#####");
        assert_eq!(header_marks(5), "######");
        assert_eq!(header_marks(6), "######");
        assert_eq!(header_marks(100), "######");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let options: MarkdownOptions =
            serde_json::from_str(r#"{"include_null_values": true, "entry_numbering": "repeated"}"#)
                .unwrap();
        assert!(options.include_null_values);
        assert!(options.include_empty_collections);
        assert_eq!(options.max_depth, 6);
        assert_eq!(options.entry_numbering, EntryNumbering::Repeated);
        assert!(options.validate().is_ok());
    }
}
