//! Composition helpers: joining, conditional inclusion and mapping.

/// Concatenate fragments with no separator.
///
/// This is the top-level join used to assemble a whole document.
///
/// # Example
///
/// ```
/// use mdfrag_builder::{doc, h2, L};
/// assert_eq!(doc([h2(["Intro"]), L.to_string()]), "## Intro\n\n");
/// ```
pub fn doc<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .fold(String::new(), |mut out, fragment| {
            out.push_str(fragment.as_ref());
            out
        })
}

/// Concatenate fragments when `condition` holds, otherwise return `""`.
pub fn if_<I, S>(condition: bool, fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if condition {
        doc(fragments)
    } else {
        String::new()
    }
}

/// Pick `a` when `condition` holds, otherwise `b`.
///
/// Works for any value type, not only fragments.
///
/// ```
/// use mdfrag_builder::if_else;
/// assert_eq!(if_else(true, "a", "b"), "a");
/// assert_eq!(if_else(false, 1, 2), 2);
/// ```
pub fn if_else<T>(condition: bool, a: T, b: T) -> T {
    if condition {
        a
    } else {
        b
    }
}

/// Map every element of `sequence` to a fragment and concatenate the
/// results in order.
///
/// # Example
///
/// ```
/// use mdfrag_builder::{for_each, task};
///
/// let todo = [("write docs", true), ("ship", false)];
/// let list = for_each(todo, |(what, done)| task(done, [what]));
/// assert_eq!(list, "- [x] write docs\n- [ ] ship\n");
/// ```
pub fn for_each<T, I, F, S>(sequence: I, f: F) -> String
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> S,
    S: AsRef<str>,
{
    doc(sequence.into_iter().map(f))
}
