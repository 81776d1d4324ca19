//! # Error Types
//!
//! Errors only arise while turning a song document into a [`Song`](crate::Song).
//! Once a song is loaded, lookup, transposition, aggregation and the playback
//! clock degrade to defaults instead of failing.
//!
//! ## Error Types
//! - `MetadataError` - The document could not be read into a song
//! - `ValidationError` - The song loaded but its timeline breaks an ordering rule
//!
//! ## Usage
//! ```rust
//! use chordsync::{load_song, SyncError};
//!
//! let source = "title: Broken\nduration: 0\ntimeline: []\n";
//! match load_song(source) {
//!     Ok(song) => println!("Loaded {}", song.title),
//!     Err(SyncError::ValidationError { event, message }) => {
//!         eprintln!("Event {}: {}", event, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    /// The song document is malformed.
    ///
    /// Raised for YAML/JSON syntax errors, unparseable `m:ss` times and
    /// missing or non-positive durations.
    ///
    /// # Example
    /// ```
    /// # use chordsync::SyncError;
    /// let err = SyncError::MetadataError("invalid time \"1:7x\"".to_string());
    /// assert_eq!(err.to_string(), "Invalid song document: invalid time \"1:7x\"");
    /// ```
    #[error("Invalid song document: {0}")]
    MetadataError(String),

    /// Timeline validation error with the offending event position.
    ///
    /// `event` is 1-indexed so it matches what a person counting entries in the
    /// document would see.
    ///
    /// # Example
    /// ```
    /// # use chordsync::SyncError;
    /// let err = SyncError::ValidationError {
    ///     event: 3,
    ///     message: "time 8s is not after previous event at 8s".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Timeline error at event 3: time 8s is not after previous event at 8s"
    /// );
    /// ```
    #[error("Timeline error at event {event}: {message}")]
    ValidationError { event: usize, message: String },
}
