//! # Core Module
//!
//! The GUI-agnostic organize engine.
//!
//! ## Modules
//! - `category` - Media categories and the extension filter
//! - `metadata` - Capture-timestamp extraction from EXIF
//! - `hasher` - Whole-file digests for duplicate detection
//! - `organizer` - The classification and relocation pipeline

pub mod category;
pub mod hasher;
pub mod metadata;
pub mod organizer;

// Re-export commonly used types
pub use category::{MediaCategory, MediaFilter};
pub use metadata::{ExifMetadataSource, MediaMetadata, MetadataSource};
pub use organizer::{
    CancellationToken, OrganizeConfig, OrganizeResult, Organizer, OrganizerBuilder,
};
