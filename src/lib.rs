//! # serde_markdown
//!
//! A Serde-compatible serializer that renders any value as a nested Markdown document,
//! for injecting structured context into prompts sent to Large Language Models.
//!
//! ## How Values Are Rendered
//!
//! - **Mappings** and **sequences** become headers whose level follows nesting depth
//!   (`#` at the top, capped at `######`)
//! - **Sequence items** become `- ` list lines
//! - **Structs** are transparent: each field is rendered in declaration order, with no
//!   header of their own
//! - **Scalars** (bools, numbers, strings, dates) are written as plain text
//! - **Nulls** and **empty collections** are kept or dropped according to
//!   [`MarkdownOptions`]
//!
//! The transformation is one-way: there is no Markdown deserializer.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_markdown::to_string;
//!
//! #[derive(Serialize)]
//! struct Ticket {
//!     title: String,
//!     labels: Vec<String>,
//! }
//!
//! let ticket = Ticket {
//!     title: "Crash on start".to_string(),
//!     labels: vec!["bug".to_string(), "p1".to_string()],
//! };
//!
//! let md = to_string(&ticket, "Ticket").unwrap();
//! assert_eq!(md, "Crash on start\n\n## labels\n- bug\n\n- p1\n\n\n");
//! ```
//!
//! ### Dynamic Values with the md! Macro
//!
//! ```rust
//! use serde_markdown::{md, value_to_string, MarkdownOptions};
//!
//! let data = md!({ "city": "Lisbon", "nights": 2 });
//! let md = value_to_string(&data, "Trip", &MarkdownOptions::new()).unwrap();
//! assert!(md.starts_with("# Trip\ncity\n"));
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` per call, `trace` per container and
//! `warn` when the depth limit trips. It never installs a subscriber.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Rendering a struct
//! - **`macro.rs`** - Building values with the md! macro
//! - **`dynamic_values.rs`** - Working with `Value` directly
//! - **`custom_options.rs`** - Null, empty-collection and depth settings
//! - **`structured_prompt.rs`** - Assembling a prompt with a data block
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod prompt;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::{Mapping, Record};
pub use options::{EntryNumbering, MarkdownOptions};
pub use prompt::StructuredPrompt;
pub use ser::{Serializer, ValueSerializer};
pub use value::{Number, Value};

use serde::Serialize;
use std::io;
use tracing::debug;

/// Serialize any `T: Serialize` to Markdown captioned `label`, with default options.
///
/// # Examples
///
/// ```rust
/// use serde_markdown::to_string;
///
/// assert_eq!(to_string(&42, "Primitive test").unwrap(), "42\n");
/// assert_eq!(to_string(&None::<String>, "x").unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` impl fails or it nests containers
/// deeper than the default `max_depth` of 6.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T, label: &str) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, label, &MarkdownOptions::default())
}

/// Serialize any `T: Serialize` to Markdown with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_markdown::{to_string_with_options, MarkdownOptions};
///
/// let options = MarkdownOptions::new().with_include_null_values(true);
/// let md = to_string_with_options(&None::<i32>, "missing", &options).unwrap();
/// assert_eq!(md, "missing: Null");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidMaxDepth`] for invalid options, before anything is
/// rendered, and otherwise any error from [`Serializer::serialize`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, label: &str, options: &MarkdownOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let serializer = Serializer::new(options.clone())?;
    let value = to_value(value)?;
    debug!(label, "serializing value to markdown");
    serializer.serialize(&value, label)
}

/// Render an already-built [`Value`] as Markdown.
///
/// # Errors
///
/// Same as [`to_string_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn value_to_string(value: &Value, label: &str, options: &MarkdownOptions) -> Result<String> {
    let serializer = Serializer::new(options.clone())?;
    debug!(label, "serializing value to markdown");
    serializer.serialize(value, label)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_markdown::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_record());
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` impl fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` as Markdown into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_markdown::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2], "numbers").unwrap();
/// assert_eq!(buffer, b"# numbers\n- 1\n\n- 2\n\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T, label: &str) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, label, &MarkdownOptions::default())
}

/// Serialize any `T: Serialize` as Markdown into a writer, with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    label: &str,
    options: &MarkdownOptions,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let markdown = to_string_with_options(value, label, options)?;
    writer
        .write_all(markdown.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Person {
        name: String,
        description: Option<String>,
    }

    #[test]
    fn test_struct_with_null_field_skipped() {
        let person = Person {
            name: "John".to_string(),
            description: None,
        };
        assert_eq!(to_string(&person, "Test").unwrap(), "John\n\n\n");
    }

    #[test]
    fn test_struct_with_null_field_included() {
        let person = Person {
            name: "John".to_string(),
            description: None,
        };
        let options = MarkdownOptions::new().with_include_null_values(true);
        assert_eq!(
            to_string_with_options(&person, "Test", &options).unwrap(),
            "John\n\ndescription: Null\n"
        );
    }

    #[test]
    fn test_nested_collections_header_levels() {
        let mut inner = BTreeMap::new();
        inner.insert("key1", "value1");
        let list = vec![inner];

        assert_eq!(
            to_string(&list, "Test").unwrap(),
            "# Test\n- ## 1.\nkey1\n\nvalue1\n\n\n"
        );
    }

    #[test]
    fn test_invalid_options_fail_before_serializing() {
        let options = MarkdownOptions {
            max_depth: 99,
            ..Default::default()
        };
        assert_eq!(
            to_string_with_options(&1, "x", &options),
            Err(Error::InvalidMaxDepth { depth: 99 })
        );
    }

    #[test]
    fn test_serialize_error_is_propagated() {
        struct Failing;

        impl Serialize for Failing {
            fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("getter failed"))
            }
        }

        #[derive(Serialize)]
        struct Holder {
            ok: u8,
            broken: Failing,
        }

        let err = to_string(&Holder { ok: 1, broken: Failing }, "h").unwrap_err();
        assert_eq!(err, Error::Custom("getter failed".to_string()));
    }

    #[test]
    fn test_to_writer_reports_io_errors() {
        struct Closed;

        impl io::Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        assert!(matches!(to_writer(Closed, &1, "x"), Err(Error::Io(_))));
    }
}
