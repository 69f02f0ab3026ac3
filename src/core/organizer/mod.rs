//! # Organizer Module
//!
//! The file classification and relocation pipeline.
//!
//! ## Pipeline Steps (per candidate file)
//! 1. **Filter** - extension must belong to an enabled category
//! 2. **Dedup** (optional) - skip files whose content was already seen
//! 3. **Metadata** - read the capture timestamp
//! 4. **Route** - derive the year-month folder from the timestamp
//! 5. **Move** - ensure the folder exists and relocate the file
//!
//! Exactly one outcome event is emitted per candidate file, in
//! directory-listing order. Files outside the enabled categories are not
//! candidates and produce nothing. Nothing that happens to an individual
//! file aborts the run.

use crate::core::category::{MediaCategory, MediaFilter};
use crate::core::hasher::hash_file;
use crate::core::metadata::{ExifMetadataSource, MetadataSource};
use crate::error::OrganizeError;
use crate::events::{
    null_sender, Event, EventSender, FileOutcome, OrganizeEvent, OrganizeSummary, OutcomeKind,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use walkdir::WalkDir;

/// Configuration for one organize run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizeConfig {
    /// Directory whose immediate entries are organized
    pub source_dir: PathBuf,
    /// Enabled media categories; an empty set yields no candidates
    pub categories: HashSet<MediaCategory>,
    /// Skip files whose byte content duplicates an earlier file this run
    pub dedup: bool,
}

/// Cooperative cancellation signal, checked between files.
///
/// Cancelling never interrupts a file mid-pipeline, so per-file behavior
/// is unchanged; the run simply stops before starting the next file.
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the run
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Result of an organize run
#[derive(Debug)]
pub struct OrganizeResult {
    /// One terminal outcome per candidate file, in listing order
    pub outcomes: Vec<FileOutcome>,
    /// Aggregate counters
    pub summary: OrganizeSummary,
    /// Whether the run was cancelled before visiting every file
    pub cancelled: bool,
}

/// Builder for the organizer
pub struct OrganizerBuilder {
    config: OrganizeConfig,
    metadata: Option<Box<dyn MetadataSource>>,
    cancellation: CancellationToken,
}

impl OrganizerBuilder {
    /// Create a new organizer builder
    pub fn new() -> Self {
        Self {
            config: OrganizeConfig::default(),
            metadata: None,
            cancellation: CancellationToken::new(),
        }
    }

    /// Set the directory to organize
    pub fn source_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.source_dir = path.into();
        self
    }

    /// Replace the enabled category set
    pub fn categories(mut self, categories: HashSet<MediaCategory>) -> Self {
        self.config.categories = categories;
        self
    }

    /// Enable one category
    pub fn category(mut self, category: MediaCategory) -> Self {
        self.config.categories.insert(category);
        self
    }

    /// Enable or disable the duplicate-content filter
    pub fn dedup(mut self, enabled: bool) -> Self {
        self.config.dedup = enabled;
        self
    }

    /// Override the metadata source (e.g., for testing)
    pub fn metadata_source(mut self, source: Box<dyn MetadataSource>) -> Self {
        self.metadata = Some(source);
        self
    }

    /// Attach a cancellation token
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Build the organizer
    pub fn build(self) -> Organizer {
        Organizer {
            config: self.config,
            metadata: self
                .metadata
                .unwrap_or_else(|| Box::new(ExifMetadataSource::new())),
            cancellation: self.cancellation,
        }
    }
}

impl Default for OrganizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The file classification and relocation pipeline
pub struct Organizer {
    config: OrganizeConfig,
    metadata: Box<dyn MetadataSource>,
    cancellation: CancellationToken,
}

impl Organizer {
    /// Create a new organizer builder
    pub fn builder() -> OrganizerBuilder {
        OrganizerBuilder::new()
    }

    /// Run the organizer without events
    pub fn run(&self) -> Result<OrganizeResult, OrganizeError> {
        self.run_with_events(&null_sender())
    }

    /// Run the organizer, delivering one event per candidate file as it
    /// completes.
    ///
    /// The only fatal errors are those that prevent the run from starting
    /// (missing or unreadable source directory). Once the loop is running,
    /// every candidate file reports exactly one terminal outcome and the
    /// run continues to the end.
    pub fn run_with_events(
        &self,
        events: &EventSender,
    ) -> Result<OrganizeResult, OrganizeError> {
        let start = Instant::now();
        let source_dir = &self.config.source_dir;

        if !source_dir.exists() {
            return Err(OrganizeError::DirectoryNotFound {
                path: source_dir.clone(),
            });
        }
        if !source_dir.is_dir() {
            return Err(OrganizeError::NotADirectory {
                path: source_dir.clone(),
            });
        }

        // Snapshot the listing up front so files moved into year-month
        // subfolders during the run cannot re-enter the iteration.
        let mut entries = Vec::new();
        for entry in WalkDir::new(source_dir).min_depth(1).max_depth(1) {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    let fatal = err.path().map_or(true, |p| p == source_dir.as_path());
                    if fatal {
                        let source = err.into_io_error().unwrap_or_else(|| {
                            std::io::Error::new(
                                std::io::ErrorKind::Other,
                                "directory listing failed",
                            )
                        });
                        return Err(OrganizeError::ReadDirectory {
                            path: source_dir.clone(),
                            source,
                        });
                    }
                    tracing::warn!("skipping unreadable entry: {}", err);
                }
            }
        }

        events.send(Event::Organize(OrganizeEvent::Started {
            source: source_dir.clone(),
        }));

        let filter = MediaFilter::new(&self.config.categories);
        let mut seen_hashes: HashSet<u128> = HashSet::new();
        let mut summary = OrganizeSummary::default();
        let mut outcomes = Vec::new();
        let mut cancelled = false;

        for entry in entries {
            if self.cancellation.is_cancelled() {
                cancelled = true;
                events.send(Event::Organize(OrganizeEvent::Cancelled));
                break;
            }

            // Only regular files are candidates; the year-month folders
            // themselves land here on re-runs and are ignored.
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !filter.should_include(path) {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            let kind = self.process_file(path, &file_name, &mut seen_hashes);

            match &kind {
                OutcomeKind::Moved { .. } => summary.moved += 1,
                OutcomeKind::SkippedDuplicate => summary.skipped_duplicates += 1,
                OutcomeKind::NoMetadata => summary.no_metadata += 1,
                OutcomeKind::NoDateInMetadata => summary.no_date += 1,
                OutcomeKind::MoveFailed { .. } => summary.failed += 1,
            }

            let outcome = FileOutcome { file_name, kind };
            events.send(Event::Organize(OrganizeEvent::File(outcome.clone())));
            outcomes.push(outcome);
        }

        summary.duration_ms = start.elapsed().as_millis() as u64;

        if !cancelled {
            events.send(Event::Organize(OrganizeEvent::Completed {
                summary: summary.clone(),
            }));
        }

        Ok(OrganizeResult {
            outcomes,
            summary,
            cancelled,
        })
    }

    /// Run one candidate file through the pipeline to its terminal outcome
    fn process_file(
        &self,
        path: &Path,
        file_name: &str,
        seen_hashes: &mut HashSet<u128>,
    ) -> OutcomeKind {
        if self.config.dedup {
            match hash_file(path) {
                Ok(digest) => {
                    if !seen_hashes.insert(digest) {
                        return OutcomeKind::SkippedDuplicate;
                    }
                }
                Err(err) => {
                    // An unreadable file cannot be confirmed as a duplicate;
                    // it falls through and reports NoMetadata below.
                    tracing::debug!("content hash failed for {}: {}", path.display(), err);
                }
            }
        }

        let metadata = match self.metadata.read(path) {
            Some(metadata) => metadata,
            None => return OutcomeKind::NoMetadata,
        };

        let timestamp = match metadata.capture_timestamp {
            Some(timestamp) => timestamp,
            None => return OutcomeKind::NoDateInMetadata,
        };

        let destination = self.config.source_dir.join(year_month_folder(&timestamp));

        if let Err(err) = fs::create_dir_all(&destination) {
            return OutcomeKind::MoveFailed {
                reason: format!("failed to create {}: {}", destination.display(), err),
            };
        }

        let dest_path = destination.join(file_name);
        if dest_path.exists() {
            return OutcomeKind::MoveFailed {
                reason: format!("destination already exists: {}", dest_path.display()),
            };
        }

        match move_file(path, &dest_path) {
            Ok(()) => {
                tracing::debug!("moved {} to {}", path.display(), destination.display());
                OutcomeKind::Moved { destination }
            }
            Err(err) => OutcomeKind::MoveFailed {
                reason: err.to_string(),
            },
        }
    }
}

/// Derive the year-month folder name from a raw capture timestamp.
///
/// Takes the first 7 characters and strips `:`, so `"2024:11:03 10:22:01"`
/// becomes `"202411"`. This is a string transform, not a calendar parse:
/// malformed timestamps produce malformed but harmless folder names.
fn year_month_folder(timestamp: &str) -> String {
    timestamp.chars().take(7).filter(|c| *c != ':').collect()
}

/// Relocate a file, falling back to copy + delete when rename crosses
/// filesystems. The copy is size-verified before the source is removed.
fn move_file(source: &Path, dest: &Path) -> std::io::Result<()> {
    fs::rename(source, dest).or_else(|_| {
        let source_size = fs::metadata(source)?.len();
        fs::copy(source, dest)?;

        let dest_size = fs::metadata(dest)?.len();
        if dest_size != source_size {
            // Copy was incomplete, don't delete source
            let _ = fs::remove_file(dest);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!(
                    "copy verification failed: source {} bytes, dest {} bytes",
                    source_size, dest_size
                ),
            ));
        }

        fs::remove_file(source)
    })
}
