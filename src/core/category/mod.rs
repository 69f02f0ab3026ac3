//! # Category Module
//!
//! Media categories and the extension filter.
//!
//! ## Supported Extensions
//! - Image: .png, .jpg, .jpeg, .tiff, .bmp, .gif
//! - Audio: .mp3, .wav, .flac, .aac
//! - Video: .mp4, .avi, .mov, .mkv
//!
//! Extension matching is case-insensitive. The sets are static
//! configuration, not derived at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A category of media files, each with a fixed extension set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaCategory {
    Image,
    Audio,
    Video,
}

impl MediaCategory {
    /// The recognized extensions for this category, lower-case, no dot
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaCategory::Image => &["png", "jpg", "jpeg", "tiff", "bmp", "gif"],
            MediaCategory::Audio => &["mp3", "wav", "flac", "aac"],
            MediaCategory::Video => &["mp4", "avi", "mov", "mkv"],
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaCategory::Image => write!(f, "image"),
            MediaCategory::Audio => write!(f, "audio"),
            MediaCategory::Video => write!(f, "video"),
        }
    }
}

/// Filters files against the union of the enabled categories' extensions
pub struct MediaFilter {
    /// Lower-cased extensions to include
    extensions: HashSet<&'static str>,
}

impl MediaFilter {
    /// Create a filter for the given set of enabled categories.
    ///
    /// An empty set matches nothing.
    pub fn new(categories: &HashSet<MediaCategory>) -> Self {
        let extensions = categories
            .iter()
            .flat_map(|c| c.extensions().iter().copied())
            .collect();
        Self { extensions }
    }

    /// Check if a file should be considered a candidate
    pub fn should_include(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            let ext_lower = ext.to_lowercase();
            self.extensions.contains(ext_lower.as_str())
        } else {
            false
        }
    }
}
