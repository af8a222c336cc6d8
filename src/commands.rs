//! Turns a parsed subcommand into a Markdown fragment.

use log::{debug, trace};
use mdfrag_builder as md;
use mdfrag_config::Config;
use mdfrag_core::{HeadingLevel, Result};

use crate::cli::Command;

/// Settings resolved from the command line and configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Escape punctuation in text arguments before formatting
    pub escape_input: bool,
    /// Language tag for code blocks without `--lang`
    pub code_language: String,
}

impl RenderOptions {
    /// Resolve options, letting the `--escape` flag switch escaping on.
    pub fn new(config: &Config, escape_flag: bool) -> Self {
        Self {
            escape_input: escape_flag || config.output.escape_input,
            code_language: config.code.language.clone(),
        }
    }

    fn prepare(&self, text: &str) -> String {
        if self.escape_input {
            md::escape(text)
        } else {
            text.to_string()
        }
    }
}

/// Render `command` to a fragment.
///
/// `read_stdin` is called at most once, and only when the subcommand
/// needs text but got no arguments.
pub fn render<F>(command: &Command, options: &RenderOptions, mut read_stdin: F) -> Result<String>
where
    F: FnMut() -> Result<String>,
{
    debug!("Rendering {:?}", command);

    let mut text_of = |args: &[String]| -> Result<String> {
        if args.is_empty() {
            read_stdin().map(|input| strip_line_ending(&input).to_string())
        } else {
            Ok(md::doc(args))
        }
    };

    let fragment = match command {
        Command::Escape { text } => md::escape(&text_of(text)?),
        Command::Heading { level, text } => {
            let level = HeadingLevel::try_from(*level)?;
            debug!("Heading level {}", level);
            md::heading(level, [options.prepare(&text_of(text)?)])
        }
        Command::Quote { text } => md::quote([options.prepare(&text_of(text)?)]),
        Command::Ul { items } => md::ul(list_items(items, options, &mut text_of)?),
        Command::Ol { items } => md::ol(list_items(items, options, &mut text_of)?),
        Command::Task { done, text } => md::task(*done, [options.prepare(&text_of(text)?)]),
        Command::Bold { text } => md::bold([options.prepare(&text_of(text)?)]),
        Command::Italic { text } => md::italic([options.prepare(&text_of(text)?)]),
        Command::Strike { text } => md::strikethrough([options.prepare(&text_of(text)?)]),
        Command::Code { text } => md::code(&text_of(text)?),
        Command::Link { target, text } => md::link(target, &options.prepare(text)),
        Command::Img { target, alt } => md::img(target, &options.prepare(alt)),
        Command::CodeBlock { lang, text } => {
            let body = match text {
                Some(text) => text.clone(),
                None => text_of(&[])?,
            };
            let language = lang.as_deref().unwrap_or(&options.code_language);
            md::code_block(language, &body)
        }
        Command::Hr => md::HR.to_string(),
    };

    trace!("Rendered {} bytes", fragment.len());
    Ok(fragment)
}

/// List items come from the arguments, or one per stdin line.
fn list_items<F>(items: &[String], options: &RenderOptions, text_of: &mut F) -> Result<Vec<String>>
where
    F: FnMut(&[String]) -> Result<String>,
{
    let items = if items.is_empty() {
        text_of(items)?.lines().map(str::to_string).collect()
    } else {
        items.to_vec()
    };

    Ok(items.iter().map(|item| options.prepare(item)).collect())
}

/// Drop one trailing line ending, the way shell command substitution does.
fn strip_line_ending(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}
