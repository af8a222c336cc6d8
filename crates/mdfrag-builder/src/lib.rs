//! mdfrag Builder
//!
//! Pure, stateless helpers that assemble Markdown fragments. Every
//! function takes borrowed text and returns a freshly allocated
//! [`String`]; none of them can fail.
//!
//! # Overview
//!
//! - [`escape`] - Backslash-escaping of ASCII punctuation
//! - [`block`] - Headings, blockquotes, lists, tasks, fenced code, rules
//! - [`inline`] - Bold, italic, strikethrough, code spans, links, images
//! - [`control`] - Joining, conditional inclusion and mapping helpers
//!
//! Functions that take "any number of fragments" accept an
//! [`IntoIterator`] of [`AsRef<str>`] items. The exported macros
//! (`h1!`, `bold!`, `doc!`, ...) are variadic sugar over them.
//!
//! # Example
//!
//! ```
//! use mdfrag_builder::{bold, code_block, doc, h1, ul, HR};
//!
//! let page = doc([
//!     h1(["Release notes"]),
//!     ul([bold(["fast"]), "small".to_string()]),
//!     HR.to_string(),
//!     code_block("sh", "cargo install mdfrag"),
//! ]);
//!
//! assert!(page.starts_with("# Release notes\n- **fast**\n- small\n\n---\n\n"));
//! ```

pub mod block;
pub mod control;
pub mod escape;
pub mod inline;
mod macros;

pub use block::{code_block, h1, h2, h3, h4, h5, h6, heading, ol, quote, task, ul, HR, L};
pub use control::{doc, for_each, if_, if_else};
pub use escape::{escape, is_punctuation, PUNCTUATION};
pub use inline::{bold, code, emphasize, img, italic, link, strikethrough, wrap_around};

pub use mdfrag_core::{HeadingLevel, Marker};
