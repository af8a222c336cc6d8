//! Block-level fragments.
//!
//! Headings, blockquotes, task items and code blocks end with a newline.
//! Lists do not: their items are joined by `\n` with nothing after the
//! last one, so the caller decides how the list is terminated.

use mdfrag_core::HeadingLevel;

use crate::control::doc;

/// Horizontal rule surrounded by blank lines.
pub const HR: &str = "\n\n---\n\n";

/// A single line break.
pub const L: &str = "\n";

/// Render an ATX heading: `#` run, one space, the fragments, newline.
///
/// # Example
///
/// ```
/// use mdfrag_builder::{heading, HeadingLevel};
/// assert_eq!(heading(HeadingLevel::H2, ["Usage"]), "## Usage\n");
/// ```
pub fn heading<I, S>(level: HeadingLevel, fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("{} {}\n", level.prefix(), doc(fragments))
}

macro_rules! heading_fn {
    ($name:ident, $level:ident) => {
        #[doc = concat!("Shorthand for [`heading`] at [`HeadingLevel::", stringify!($level), "`].")]
        pub fn $name<I, S>(fragments: I) -> String
        where
            I: IntoIterator<Item = S>,
            S: AsRef<str>,
        {
            heading(HeadingLevel::$level, fragments)
        }
    };
}

heading_fn!(h1, H1);
heading_fn!(h2, H2);
heading_fn!(h3, H3);
heading_fn!(h4, H4);
heading_fn!(h5, H5);
heading_fn!(h6, H6);

/// Blockquote line: `> ` prefix, newline suffix.
pub fn quote<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("> {}\n", doc(fragments))
}

/// Unordered list, one `- ` item per line.
///
/// ```
/// use mdfrag_builder::ul;
/// assert_eq!(ul(["a", "b"]), "- a\n- b");
/// ```
pub fn ul<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ordered list numbered from 1.
///
/// ```
/// use mdfrag_builder::ol;
/// assert_eq!(ol(["a", "b"]), "1. a\n2. b");
/// ```
pub fn ol<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// GFM task list item, checked when `done`.
pub fn task<I, S>(done: bool, fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let check = if done { "x" } else { " " };
    format!("- [{}] {}\n", check, doc(fragments))
}

/// Fenced code block with a language tag.
///
/// `text` is embedded verbatim. A fence inside `text` is not escaped.
pub fn code_block(language: &str, text: &str) -> String {
    format!("\n```{}\n{}\n```\n", language, text)
}
