//! Prompt bundle carrying serialized context data.
//!
//! [`StructuredPrompt`] groups the plain-text parts of a prompt with a Markdown
//! block rendered from structured input data. The data is serialized once, under
//! the fixed caption [`INPUT_DATA_LABEL`], and stored verbatim.
//!
//! ```rust
//! use serde_markdown::{MarkdownOptions, StructuredPrompt};
//! use std::collections::BTreeMap;
//!
//! let mut data = BTreeMap::new();
//! data.insert("city".to_string(), "Lisbon");
//!
//! let prompt = StructuredPrompt::new("You are a travel agent.")
//!     .with_user_prompt("Plan a weekend.")
//!     .with_input_data(Some(&data), &MarkdownOptions::new())
//!     .unwrap();
//! assert!(prompt.structured_data.starts_with("# Input Data\n"));
//! ```

use crate::{to_string_with_options, MarkdownOptions, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Caption of the Markdown block holding the input data.
pub const INPUT_DATA_LABEL: &str = "Input Data";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructuredPrompt {
    pub system_prompt: String,
    pub user_prompt: Option<String>,
    pub closing_prompt: Option<String>,
    /// Markdown rendering of the input data; empty when there is none.
    pub structured_data: String,
}

impl StructuredPrompt {
    #[must_use]
    pub fn new(system_prompt: impl Into<String>) -> Self {
        StructuredPrompt {
            system_prompt: system_prompt.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_user_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.user_prompt = Some(prompt.into());
        self
    }

    #[must_use]
    pub fn with_closing_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.closing_prompt = Some(prompt.into());
        self
    }

    /// Serializes `input_data` under [`INPUT_DATA_LABEL`] and stores the result.
    ///
    /// `None` renders like any other null: empty unless `include_null_values`
    /// is set.
    ///
    /// # Errors
    ///
    /// Propagates any serialization error, including invalid `options`.
    pub fn with_input_data<T: Serialize>(
        mut self,
        input_data: Option<&BTreeMap<String, T>>,
        options: &MarkdownOptions,
    ) -> Result<Self> {
        self.structured_data = to_string_with_options(&input_data, INPUT_DATA_LABEL, options)?;
        Ok(self)
    }
}
