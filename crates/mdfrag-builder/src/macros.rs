//! Variadic sugar over the fragment functions.
//!
//! Each macro accepts zero or more arguments of any type implementing
//! `AsRef<str>` (string literals, `String`, `&String`, ...), so mixed
//! argument lists work without conversions:
//!
//! ```
//! use mdfrag_builder::{bold, doc, h1, h3, task};
//!
//! let name = String::from("mdfrag");
//! assert_eq!(h1!("About ", name), "# About mdfrag\n");
//! assert_eq!(h3!(), "### \n");
//! assert_eq!(task!(true, "ship ", bold!("it")), "- [x] ship **it**\n");
//! assert_eq!(doc!(), "");
//! ```

/// Expands to an iterable of `&str` borrowed from the given expressions.
#[doc(hidden)]
#[macro_export]
macro_rules! __fragments {
    () => {
        ::core::iter::empty::<&str>()
    };
    ($($fragment:expr),+ $(,)?) => {
        [$(::core::convert::AsRef::<str>::as_ref(&$fragment)),+]
    };
}

/// Defines a variadic macro forwarding to a function that takes fragments.
///
/// `$d` carries a literal `$` so the generated macros can declare their
/// own repetitions.
macro_rules! variadic {
    ($d:tt $($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[macro_export]
            macro_rules! $name {
                ($d($d fragment:expr),* $d(,)?) => {
                    $crate::$name($crate::__fragments!($d($d fragment),*))
                };
            }
        )+
    };
}

variadic! { $
    /// Variadic form of [`h1`](crate::h1).
    h1;
    /// Variadic form of [`h2`](crate::h2).
    h2;
    /// Variadic form of [`h3`](crate::h3).
    h3;
    /// Variadic form of [`h4`](crate::h4).
    h4;
    /// Variadic form of [`h5`](crate::h5).
    h5;
    /// Variadic form of [`h6`](crate::h6).
    h6;
    /// Variadic form of [`quote`](crate::quote).
    quote;
    /// Variadic form of [`ul`](crate::ul).
    ul;
    /// Variadic form of [`ol`](crate::ol).
    ol;
    /// Variadic form of [`doc`](crate::doc).
    doc;
    /// Variadic form of [`bold`](crate::bold).
    bold;
    /// Variadic form of [`italic`](crate::italic).
    italic;
    /// Variadic form of [`strikethrough`](crate::strikethrough).
    strikethrough;
}

/// Variadic form of [`task`](crate::task): `task!(done, fragments...)`.
#[macro_export]
macro_rules! task {
    ($done:expr $(, $fragment:expr)* $(,)?) => {
        $crate::task($done, $crate::__fragments!($($fragment),*))
    };
}

/// Variadic form of [`if_`](crate::if_): `if_!(condition, fragments...)`.
#[macro_export]
macro_rules! if_ {
    ($condition:expr $(, $fragment:expr)* $(,)?) => {
        $crate::if_($condition, $crate::__fragments!($($fragment),*))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_variadic_headings() {
        assert_eq!(h1!("x"), "# x\n");
        assert_eq!(h2!("a", "b"), "## ab\n");
        assert_eq!(h3!(), "### \n");
        assert_eq!(h6!(String::from("deep")), "###### deep\n");
    }

    #[test]
    fn test_variadic_lists() {
        assert_eq!(ul!("a", "b"), "- a\n- b");
        assert_eq!(ol!("a", "b",), "1. a\n2. b");
        assert_eq!(ul!(), "");
    }

    #[test]
    fn test_variadic_inline() {
        let word = String::from("hi");
        assert_eq!(bold!("  ", word, "  "), "  **hi**  ");
        assert_eq!(italic!("a"), "*a*");
        assert_eq!(strikethrough!(), "");
        assert_eq!(bold!(bold!("x")), "****x****");
    }

    #[test]
    fn test_variadic_control() {
        assert_eq!(doc!("a", format!("{}", 1), "b"), "a1b");
        assert_eq!(if_!(false, "x"), "");
        assert_eq!(if_!(true, "x", "y"), "xy");
        assert_eq!(task!(false, "todo"), "- [ ] todo\n");
        assert_eq!(task!(true), "- [x] \n");
        assert_eq!(quote!("q"), "> q\n");
    }
}
