//! mdfrag Core
//!
//! This crate provides the shared types and error definitions
//! for the mdfrag Markdown fragment builder.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Marker`] - Inline emphasis markers (`**`, `*`, `~~`, `` ` ``)
//! - [`HeadingLevel`] - ATX heading levels one through six
//! - [`MdfragError`] - Error types for the configuration and CLI layers

pub mod enums;
pub mod error;

pub use enums::{HeadingLevel, Marker};
pub use error::{MdfragError, Result};
