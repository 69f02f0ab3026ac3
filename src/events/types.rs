//! Event type definitions for outcome reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the organizer pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Organize run events
    Organize(OrganizeEvent),
}

/// Events during an organize run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OrganizeEvent {
    /// The run has started
    Started { source: PathBuf },
    /// A candidate file reached its terminal outcome
    File(FileOutcome),
    /// The run was cancelled between files
    Cancelled,
    /// The run completed
    Completed { summary: OrganizeSummary },
}

/// Terminal outcome for one candidate file.
///
/// Every file that passes the extension filter produces exactly one of
/// these; files outside the enabled categories produce nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// File name (no directory component)
    pub file_name: String,
    /// What happened to the file
    pub kind: OutcomeKind,
}

/// How a candidate file was handled
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The file was relocated into the given year-month folder
    Moved { destination: PathBuf },
    /// Duplicate content already seen this run; file left in place
    SkippedDuplicate,
    /// No readable metadata block; file left in place
    NoMetadata,
    /// Metadata present but no capture date; file left in place
    NoDateInMetadata,
    /// Folder creation or relocation failed; file left in place
    MoveFailed { reason: String },
}

/// Summary of a completed (or cancelled) run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizeSummary {
    /// Files relocated
    pub moved: usize,
    /// Files skipped as duplicate content
    pub skipped_duplicates: usize,
    /// Files with no readable metadata
    pub no_metadata: usize,
    /// Files with metadata but no capture date
    pub no_date: usize,
    /// Files whose folder creation or move failed
    pub failed: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl OrganizeSummary {
    /// Total number of candidate files that produced an outcome
    pub fn total(&self) -> usize {
        self.moved + self.skipped_duplicates + self.no_metadata + self.no_date + self.failed
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeKind::Moved { destination } => {
                write!(f, "moved to {}", destination.display())
            }
            OutcomeKind::SkippedDuplicate => write!(f, "skipped duplicate"),
            OutcomeKind::NoMetadata => write!(f, "no metadata"),
            OutcomeKind::NoDateInMetadata => write!(f, "no date in metadata"),
            OutcomeKind::MoveFailed { reason } => write!(f, "move failed: {}", reason),
        }
    }
}
