//! Inline fragments: emphasis, code spans, links and images.
//!
//! Emphasis markers next to whitespace are not recognised by Markdown
//! (`** bold**` renders literally), so every emphasis helper goes through
//! [`wrap_around`], which places the markers inside the surrounding
//! whitespace instead of outside it.

use mdfrag_core::Marker;

use crate::control::doc;

/// Characters treated as boundary whitespace when placing markers.
const BOUNDARY: [char; 2] = [' ', '\n'];

/// Wrap the non-whitespace core of `content` in `marker`.
///
/// Leading and trailing runs of spaces and newlines are copied verbatim
/// outside the markers. Content that is empty or made only of those
/// characters is returned unchanged, without markers.
///
/// Tabs and other Unicode whitespace count as content.
///
/// # Example
///
/// ```
/// use mdfrag_builder::wrap_around;
/// assert_eq!(wrap_around("**", "  hi  "), "  **hi**  ");
/// assert_eq!(wrap_around("**", "\n \n"), "\n \n");
/// ```
pub fn wrap_around(marker: &str, content: &str) -> String {
    let core = content.trim_matches(&BOUNDARY[..]);
    if core.is_empty() {
        return content.to_string();
    }

    // Both boundary characters are ASCII, so these offsets are char boundaries.
    let start = content.len() - content.trim_start_matches(&BOUNDARY[..]).len();
    let end = start + core.len();

    let mut out = String::with_capacity(content.len() + marker.len() * 2);
    out.push_str(&content[..start]);
    out.push_str(marker);
    out.push_str(core);
    out.push_str(marker);
    out.push_str(&content[end..]);
    out
}

/// Concatenate `fragments` and wrap the result in `marker`.
pub fn emphasize<I, S>(marker: Marker, fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap_around(marker.as_str(), &doc(fragments))
}

/// Strong emphasis (`**text**`).
///
/// ```
/// use mdfrag_builder::bold;
/// assert_eq!(bold(["Note:", " "]), "**Note:** ");
/// ```
pub fn bold<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    emphasize(Marker::Bold, fragments)
}

/// Emphasis (`*text*`).
pub fn italic<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    emphasize(Marker::Italic, fragments)
}

/// Strikethrough (`~~text~~`).
pub fn strikethrough<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    emphasize(Marker::Strikethrough, fragments)
}

/// Inline code span (`` `text` ``). Backticks inside `text` are not escaped.
pub fn code(text: &str) -> String {
    wrap_around(Marker::Code.as_str(), text)
}

/// Inline link, `[text](target)`. Neither argument is escaped.
///
/// ```
/// use mdfrag_builder::link;
/// assert_eq!(link("http://a", "b"), "[b](http://a)");
/// ```
pub fn link(target: &str, text: &str) -> String {
    format!("[{}]({})", text, target)
}

/// Image on its own line, `![alt_text](target)` plus a newline.
pub fn img(target: &str, alt_text: &str) -> String {
    format!("![{}]({})\n", alt_text, target)
}
