//! Error types for Markdown serialization.
//!
//! Rendering itself never fails for a well-formed value. Errors come from three places:
//!
//! - **Configuration**: `max_depth` outside `1..=15`, caught before any recursion starts
//! - **Depth limit**: a container nested deeper than `max_depth`
//! - **User `Serialize` impls**: custom errors raised while the value is being
//!   introspected are propagated unchanged
//!
//! ## Examples
//!
//! ```rust
//! use serde_markdown::{Error, MarkdownOptions};
//!
//! let err = MarkdownOptions::new().with_max_depth(16).unwrap_err();
//! assert!(matches!(err, Error::InvalidMaxDepth { depth: 16 }));
//! assert!(err.to_string().contains("1..=15"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during Markdown serialization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `max_depth` outside the supported range
    #[error("Invalid max depth {depth}: expected a value in 1..=15")]
    InvalidMaxDepth { depth: u8 },

    /// A container was nested deeper than the configured limit
    #[error("Depth limit exceeded: '{label}' is nested at depth {depth}, but max_depth is {max_depth}")]
    DepthExceeded {
        max_depth: u8,
        depth: usize,
        label: String,
    },

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error, usually raised by a `Serialize` implementation
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an error for a `max_depth` outside `1..=15`.
    pub fn invalid_max_depth(depth: u8) -> Self {
        Error::InvalidMaxDepth { depth }
    }

    /// Creates a depth-limit error for the container labeled `label`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_markdown::Error;
    ///
    /// let err = Error::depth_exceeded(6, 7, "7.");
    /// assert!(err.to_string().contains("depth 7"));
    /// ```
    pub fn depth_exceeded(max_depth: u8, depth: usize, label: &str) -> Self {
        Error::DepthExceeded {
            max_depth,
            depth,
            label: label.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
