//! # Metadata Module
//!
//! Extracts the EXIF capture timestamp from media files.
//!
//! ## Extracted Fields
//! - Capture date/time (DateTimeOriginal), kept as the raw
//!   `YYYY:MM:DD HH:MM:SS` string the file carries - the organizer derives
//!   folder names from the string itself, never from a parsed calendar date
//!
//! ## Failure Representation
//! Extraction failures (missing file, corrupt container, unsupported
//! codec) are represented as `None`, never raised. A file whose container
//! decodes but carries no capture date yields metadata with an empty
//! timestamp - the two cases are reported differently downstream.

use exif::{In, Reader, Tag, Value};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Metadata decoded from one media file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Original capture date/time, raw EXIF string form
    pub capture_timestamp: Option<String>,
}

impl MediaMetadata {
    /// Check if a capture date was extracted
    pub fn has_capture_date(&self) -> bool {
        self.capture_timestamp.is_some()
    }
}

/// Source of capture metadata for the organizer.
///
/// Implement this trait to supply metadata from somewhere other than EXIF
/// (e.g., for testing the pipeline without real image fixtures).
pub trait MetadataSource: Send + Sync {
    /// Decode the file's metadata block.
    ///
    /// Returns `None` when the file has no readable metadata at all;
    /// returns `Some` with an empty `capture_timestamp` when metadata
    /// exists but carries no capture date.
    fn read(&self, path: &Path) -> Option<MediaMetadata>;
}

/// EXIF-backed metadata source using kamadak-exif
#[derive(Debug, Default)]
pub struct ExifMetadataSource;

impl ExifMetadataSource {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSource for ExifMetadataSource {
    fn read(&self, path: &Path) -> Option<MediaMetadata> {
        let file = File::open(path).ok()?;
        let mut bufreader = BufReader::new(&file);
        let exif_reader = Reader::new().read_from_container(&mut bufreader).ok()?;

        let capture_timestamp = exif_reader
            .get_field(Tag::DateTimeOriginal, In::PRIMARY)
            .and_then(|field| get_string_value(&field.value));

        Some(MediaMetadata { capture_timestamp })
    }
}

/// Helper to extract string from EXIF ASCII value
fn get_string_value(value: &Value) -> Option<String> {
    if let Value::Ascii(ref vec) = value {
        if let Some(bytes) = vec.first() {
            if let Ok(s) = std::str::from_utf8(bytes) {
                let trimmed = s.trim_end_matches('\0').trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_default_has_no_capture_date() {
        let meta = MediaMetadata::default();
        assert!(!meta.has_capture_date());
    }

    #[test]
    fn metadata_with_timestamp_has_capture_date() {
        let meta = MediaMetadata {
            capture_timestamp: Some("2024:11:03 10:22:01".to_string()),
        };
        assert!(meta.has_capture_date());
    }

    #[test]
    fn read_from_nonexistent_returns_none() {
        let source = ExifMetadataSource::new();
        assert!(source.read(Path::new("/nonexistent/file.jpg")).is_none());
    }

    #[test]
    fn read_from_non_image_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.jpg");
        std::fs::write(&path, b"this is not a valid image file").unwrap();

        let source = ExifMetadataSource::new();
        assert!(source.read(&path).is_none());
    }

    #[test]
    fn get_string_value_trims_nul_terminator() {
        let value = Value::Ascii(vec![b"2024:11:03 10:22:01\0".to_vec()]);
        assert_eq!(
            get_string_value(&value),
            Some("2024:11:03 10:22:01".to_string())
        );
    }

    #[test]
    fn get_string_value_rejects_empty() {
        let value = Value::Ascii(vec![b"\0".to_vec()]);
        assert_eq!(get_string_value(&value), None);
    }
}
