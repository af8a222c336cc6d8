//! Error types for mdfrag
//!
//! The formatters themselves never fail; these errors come from the
//! layers around them (configuration loading, CLI input handling).

use thiserror::Error;

/// Main error type for mdfrag operations
#[derive(Error, Debug)]
pub enum MdfragError {
    /// IO error during file or stdin operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Heading level outside 1..=6
    #[error("Invalid heading level: {0} (expected 1-6)")]
    InvalidHeadingLevel(u8),

    /// Unusable command-line input
    #[error("Input error: {0}")]
    Input(String),
}

/// Result type alias for mdfrag operations
pub type Result<T> = std::result::Result<T, MdfragError>;
