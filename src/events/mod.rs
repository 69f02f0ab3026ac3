//! # Events Module
//!
//! Event-driven outcome reporting for UI-agnostic runs.
//!
//! ## Design
//! The core library emits one event per candidate file through a channel,
//! allowing any UI (CLI, GUI, web) to subscribe and render outcomes as they
//! arrive rather than batched at the end. The receiver side of the channel
//! is the lazy outcome sequence the presentation layer iterates.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! // In a separate thread, listen for events
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         match event {
//!             Event::Organize(OrganizeEvent::File(outcome)) => {
//!                 println!("{}: {}", outcome.file_name, outcome.kind)
//!             }
//!             _ => {}
//!         }
//!     }
//! });
//!
//! // Run the organizer with the sender
//! organizer.run_with_events(&sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
