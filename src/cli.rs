//! Command-line interface for mdfrag.
//!
//! Every formatter of the fragment builder is exposed as a subcommand.

use clap::{Parser, Subcommand};

/// mdfrag - print Markdown fragments built from plain text.
///
/// Text arguments are concatenated in order. When a subcommand that takes
/// text gets none, the text is read from stdin.
#[derive(Parser, Debug)]
#[command(
    name = "mdfrag",
    author = "mdfrag Contributors",
    version,
    about = "Print Markdown fragments built from plain text",
    after_help = "Examples:\n  \
                  mdfrag heading -n 2 Installation\n  \
                  mdfrag bold '  spaced  '\n  \
                  mdfrag ul one two three\n  \
                  git log --format=%s | mdfrag --escape ul\n  \
                  mdfrag code-block --lang sh < install.sh"
)]
pub struct Cli {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn", global = true)]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Escape Markdown punctuation in text arguments
    #[arg(short = 'e', long = "escape", global = true)]
    pub escape: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write a default config file (if none exists), print its path and exit
    #[arg(long = "init-config")]
    pub init_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Fragment to print.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Backslash-escape Markdown punctuation
    Escape {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// ATX heading
    Heading {
        /// Heading level
        #[arg(
            short = 'n',
            long = "level",
            default_value_t = 1,
            value_parser = clap::value_parser!(u8).range(1..=6)
        )]
        level: u8,

        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Blockquote line
    Quote {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Unordered list, one item per argument (or per stdin line)
    Ul {
        #[arg(value_name = "ITEM")]
        items: Vec<String>,
    },

    /// Ordered list, one item per argument (or per stdin line)
    Ol {
        #[arg(value_name = "ITEM")]
        items: Vec<String>,
    },

    /// Task list item
    Task {
        /// Mark the task as done
        #[arg(long = "done")]
        done: bool,

        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Strong emphasis
    Bold {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Emphasis
    Italic {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Strikethrough
    Strike {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Inline code span
    Code {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Inline link
    Link {
        target: String,
        text: String,
    },

    /// Image line
    Img {
        target: String,
        alt: String,
    },

    /// Fenced code block (body read from stdin when omitted)
    CodeBlock {
        /// Language tag (defaults to the configured language)
        #[arg(long = "lang")]
        lang: Option<String>,

        text: Option<String>,
    },

    /// Horizontal rule
    Hr,
}

/// Show paths information.
pub fn show_paths() {
    use mdfrag_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
