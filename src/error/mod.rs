//! # Error Module
//!
//! Error types for the media organizer.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Per-file failures are events, not errors** - only conditions that
//!   prevent a run from starting at all surface here; everything that goes
//!   wrong with an individual file is reported through the event stream and
//!   the run keeps going

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum MediaOrganizerError {
    #[error("Organize error: {0}")]
    Organize(#[from] OrganizeError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors that prevent an organize run from starting.
///
/// Once the per-file loop is running, failures are reported as
/// `OutcomeKind` events instead and never abort the run.
#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, MediaOrganizerError>;
