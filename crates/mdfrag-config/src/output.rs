//! Output configuration.
//!
//! Controls how the command-line front end prepares text before handing
//! it to the formatters and how it prints the result.

use serde::Deserialize;

/// Output configuration section (`[output]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Escape Markdown punctuation in text arguments before formatting.
    /// Link targets and code block bodies are never escaped.
    /// Default: false
    #[serde(default)]
    pub escape_input: bool,

    /// Print a newline after the generated fragment.
    /// Default: false
    #[serde(default)]
    pub trailing_newline: bool,
}

/// Partial `[output]` section; keys left out of the override are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputOverride {
    #[serde(default)]
    pub escape_input: Option<bool>,
    #[serde(default)]
    pub trailing_newline: Option<bool>,
}

impl OutputConfig {
    /// Apply the keys set in `other`, keeping the rest.
    pub fn merge(&mut self, other: &OutputOverride) {
        if let Some(escape_input) = other.escape_input {
            self.escape_input = escape_input;
        }
        if let Some(trailing_newline) = other.trailing_newline {
            self.trailing_newline = trailing_newline;
        }
    }
}
