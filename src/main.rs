//! mdfrag - print Markdown fragments from the command line.
//!
//! This binary is a thin front end over the `mdfrag-builder` library:
//! it resolves configuration, gathers text from arguments or stdin, and
//! prints the fragment produced by the chosen formatter.

mod cli;
mod commands;

use clap::Parser as ClapParser;
use cli::Cli;
use commands::RenderOptions;
use log::{debug, error, info, LevelFilter};
use mdfrag_config::Config;
use mdfrag_core::{MdfragError, Result};
use std::io::{self, Read, Write};
use std::path::Path;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("mdfrag v{}", env!("CARGO_PKG_VERSION"));

    let result = if cli.init_config {
        Config::config_dir()
            .ok_or_else(|| MdfragError::Config("Could not determine config directory".into()))
            .and_then(|dir| init_config(&mut io::stdout().lock(), &dir))
    } else {
        run(&cli)
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Create the default config file in `config_dir` and print its path.
fn init_config<W: Write>(out: &mut W, config_dir: &Path) -> Result<()> {
    let path = Config::ensure_config_file(config_dir)?;
    info!("Config file at {}", path.display());
    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let command = cli
        .command
        .as_ref()
        .ok_or_else(|| MdfragError::Input("no subcommand given (see --help)".into()))?;

    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    let options = RenderOptions::new(&config, cli.escape);
    let fragment = commands::render(command, &options, || {
        read_input(atty::is(atty::Stream::Stdin), io::stdin().lock())
    })?;

    write_fragment(
        &mut io::stdout().lock(),
        &fragment,
        config.output.trailing_newline,
    )
}

/// Write the fragment, optionally followed by a newline, and flush.
fn write_fragment<W: Write>(out: &mut W, fragment: &str, trailing_newline: bool) -> Result<()> {
    out.write_all(fragment.as_bytes())?;
    if trailing_newline {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Read all input, refusing to wait on an interactive terminal.
fn read_input<R: Read>(is_terminal: bool, mut reader: R) -> Result<String> {
    if is_terminal {
        return Err(MdfragError::Input(
            "no text given and stdin is a terminal".into(),
        ));
    }

    info!("Reading from stdin");
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input)
}
