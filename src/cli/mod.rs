//! # CLI Module
//!
//! Command-line interface for the media organizer.
//!
//! ## Usage
//! ```bash
//! # Organize the images of a folder into year-month subfolders
//! media-organize organize ~/Pictures
//!
//! # Include audio and video files
//! media-organize organize ~/Pictures --audio --video
//!
//! # Skip files whose content duplicates an earlier file
//! media-organize organize ~/Pictures --dedup
//!
//! # JSON output
//! media-organize organize ~/Pictures --output json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use media_organizer::core::{MediaCategory, OrganizeResult, Organizer};
use media_organizer::error::Result;
use media_organizer::events::{Event, EventChannel, FileOutcome, OrganizeEvent, OutcomeKind};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::thread;

/// Media Organizer - sort a folder's media files by capture date
#[derive(Parser, Debug)]
#[command(name = "media-organize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Move a directory's media files into year-month subfolders
    Organize {
        /// Directory to organize (immediate entries only, no recursion)
        path: PathBuf,

        /// Include image files (.png .jpg .jpeg .tiff .bmp .gif)
        #[arg(long)]
        image: bool,

        /// Include audio files (.mp3 .wav .flac .aac)
        #[arg(long)]
        audio: bool,

        /// Include video files (.mp4 .avi .mov .mkv)
        #[arg(long)]
        video: bool,

        /// Skip files whose byte content duplicates an earlier file
        #[arg(short, long)]
        dedup: bool,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (moved files only)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    media_organizer::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Organize {
            path,
            image,
            audio,
            video,
            dedup,
            output,
            verbose,
        } => run_organize(path, image, audio, video, dedup, output, verbose),
    }
}

fn run_organize(
    path: PathBuf,
    image: bool,
    audio: bool,
    video: bool,
    dedup: bool,
    output: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let term = Term::stderr();

    let mut categories: HashSet<MediaCategory> = HashSet::new();
    if image {
        categories.insert(MediaCategory::Image);
    }
    if audio {
        categories.insert(MediaCategory::Audio);
    }
    if video {
        categories.insert(MediaCategory::Video);
    }
    // No category flag means images, like the original tool
    if categories.is_empty() {
        categories.insert(MediaCategory::Image);
    }

    // Print header
    if matches!(output, OutputFormat::Pretty) {
        term.write_line(&format!(
            "{} {}",
            style("Media Organizer").bold().cyan(),
            style(format!("organizing {}", display_path(&path))).dim()
        ))
        .ok();
        term.write_line("").ok();
    }

    let organizer = Organizer::builder()
        .source_dir(path)
        .categories(categories)
        .dedup(dedup)
        .build();

    // Set up event handling
    let (sender, receiver) = EventChannel::new();

    // Spinner for pretty output
    let progress = if matches!(output, OutputFormat::Pretty) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        Some(pb)
    } else {
        None
    };

    let progress_clone = progress.clone();

    // Handle events in a separate thread
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Organize(OrganizeEvent::File(outcome)) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message(outcome.file_name.clone());
                        pb.println(outcome_line(&outcome));
                    }
                }
                Event::Organize(OrganizeEvent::Completed { .. })
                | Event::Organize(OrganizeEvent::Cancelled) => {
                    if let Some(ref pb) = progress_clone {
                        pb.finish_and_clear();
                    }
                }
                _ => {}
            }
        }
    });

    // Run the pipeline
    let result = organizer.run_with_events(&sender)?;

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();

    // Output results
    match output {
        OutputFormat::Pretty => print_pretty_results(&term, &result, verbose),
        OutputFormat::Json => print_json_results(&result),
        OutputFormat::Minimal => print_minimal_results(&result),
    }

    Ok(())
}

/// One styled line per file outcome
fn outcome_line(outcome: &FileOutcome) -> String {
    match &outcome.kind {
        OutcomeKind::Moved { destination } => format!(
            "  {} {} -> {}",
            style("moved").green(),
            outcome.file_name,
            destination.display()
        ),
        OutcomeKind::SkippedDuplicate => format!(
            "  {} {}",
            style("duplicate").dim(),
            outcome.file_name
        ),
        OutcomeKind::NoMetadata => format!(
            "  {} {}",
            style("no metadata").yellow(),
            outcome.file_name
        ),
        OutcomeKind::NoDateInMetadata => format!(
            "  {} {}",
            style("no date").yellow(),
            outcome.file_name
        ),
        OutcomeKind::MoveFailed { reason } => format!(
            "  {} {}: {}",
            style("failed").red().bold(),
            outcome.file_name,
            reason
        ),
    }
}

fn print_pretty_results(term: &Term, result: &OrganizeResult, verbose: bool) {
    term.write_line("").ok();

    if result.cancelled {
        term.write_line(&format!("{} Cancelled", style("!").yellow().bold()))
            .ok();
    } else {
        term.write_line(&format!("{} Organize Complete", style("✓").green().bold()))
            .ok();
    }
    term.write_line("").ok();

    let summary = &result.summary;
    term.write_line(&format!(
        "  {} files moved in {:.1}s",
        style(summary.moved).cyan(),
        summary.duration_ms as f64 / 1000.0
    ))
    .ok();

    if summary.skipped_duplicates > 0 {
        term.write_line(&format!(
            "  {} duplicates skipped",
            style(summary.skipped_duplicates).cyan()
        ))
        .ok();
    }

    if summary.no_metadata > 0 {
        term.write_line(&format!(
            "  {} files without readable metadata",
            style(summary.no_metadata).yellow()
        ))
        .ok();
    }

    if summary.no_date > 0 {
        term.write_line(&format!(
            "  {} files without a capture date",
            style(summary.no_date).yellow()
        ))
        .ok();
    }

    if summary.failed > 0 {
        term.write_line(&format!(
            "  {} files failed to move",
            style(summary.failed).red()
        ))
        .ok();

        if verbose {
            for outcome in &result.outcomes {
                if let OutcomeKind::MoveFailed { reason } = &outcome.kind {
                    term.write_line(&format!(
                        "    {} {}: {}",
                        style("✗").red(),
                        outcome.file_name,
                        reason
                    ))
                    .ok();
                }
            }
        }
    }

    if summary.total() == 0 {
        term.write_line(&format!(
            "  {} Nothing to organize in this folder",
            style("•").dim()
        ))
        .ok();
    }
}

fn print_json_results(result: &OrganizeResult) {
    let output = serde_json::json!({
        "moved": result.summary.moved,
        "skipped_duplicates": result.summary.skipped_duplicates,
        "no_metadata": result.summary.no_metadata,
        "no_date": result.summary.no_date,
        "failed": result.summary.failed,
        "duration_ms": result.summary.duration_ms,
        "cancelled": result.cancelled,
        "outcomes": result.outcomes,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn print_minimal_results(result: &OrganizeResult) {
    for outcome in &result.outcomes {
        if let OutcomeKind::Moved { destination } = &outcome.kind {
            println!("{}", destination.join(&outcome.file_name).display());
        }
    }
}

/// Shorten paths under the home directory to ~/...
fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}
