//! # Media Organizer
//!
//! Organizes the media files of a single directory into year-month
//! subfolders (e.g. `202411`) derived from their EXIF capture dates.
//!
//! ## Core Philosophy
//! - **Never lose a file** - collisions and move failures are reported,
//!   never overwritten or dropped
//! - **One outcome per file** - every candidate reports exactly what
//!   happened to it
//! - **Headless core** - the pipeline emits events; any UI can subscribe
//!
//! ## Architecture
//! The library is split into a core engine (GUI-agnostic) and presentation
//! layers:
//! - `core` - The organize pipeline
//! - `events` - Event-driven outcome reporting (GUI-ready)
//! - `error` - Run-level error types
//! - `cli` - Command-line interface

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{MediaOrganizerError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
