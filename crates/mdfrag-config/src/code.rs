//! Code block configuration.

use serde::Deserialize;

/// Code block configuration section (`[code]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeConfig {
    /// Language tag used by `code-block` when `--lang` is not given.
    /// Default: "" (untagged fence)
    #[serde(default)]
    pub language: String,
}

/// Partial `[code]` section; keys left out of the override are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeOverride {
    #[serde(default)]
    pub language: Option<String>,
}

impl CodeConfig {
    /// Apply the keys set in `other`, keeping the rest.
    pub fn merge(&mut self, other: &CodeOverride) {
        if let Some(language) = &other.language {
            self.language = language.clone();
        }
    }

    /// Pick the language for a code block, preferring an explicit one.
    pub fn language_or<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit.unwrap_or(&self.language)
    }
}
