//! # Data Loader Crate
//!
//! This crate handles loading the raw track-play log and grouping it by
//! listener.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (PlayEvent, EventLog, id aliases)
//! - **parser**: Parse `tracks.csv` lines into `(ListenerId, PlayEvent)` pairs
//! - **group**: Build the EventLog (group-by-listener) in one pass
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::EventLog;
//! use std::path::Path;
//!
//! // Load and group the whole play log
//! let log = EventLog::load_from_file(Path::new("source_data/tracks.csv"))?;
//!
//! for (listener, events) in log.iter() {
//!     println!("{} played {} tracks", listener, events.len());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod group;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    ListenerId,
    TrackId,
    // Core types
    PlayEvent,
    EventLog,
};
