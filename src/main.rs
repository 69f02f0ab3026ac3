//! # media-organize CLI
//!
//! Command-line interface for the media organizer.
//!
//! ## Usage
//! ```bash
//! media-organize organize ~/Pictures --dedup
//! media-organize organize ~/Pictures --video --output json
//! ```

mod cli;

use media_organizer::Result;

fn main() -> Result<()> {
    cli::run()
}
