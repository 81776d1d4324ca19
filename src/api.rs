//! # Public API
//!
//! Entry points used by the host application.
//!
//! ## Functions
//!
//! - [`load_song()`] - Parse and validate a song document (recommended)
//! - [`load_song_unchecked()`] - Parse without timeline validation
//! - [`get_active_event()`] - Active event at a playback percentage
//! - [`get_aggregated_chords()`] - Unique chords with all occurrences
//! - [`format_time`](crate::format_time) - `m:ss` label for a playback percentage
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordsync::{get_active_event, get_aggregated_chords, load_song};
//!
//! let source = r#"
//! title: Demo
//! duration: "0:20"
//! timeline:
//!   - { time: 0, chord: Fmaj7, section: Verse, lyric: first }
//!   - { time: 10, chord: Gm7, section: Verse, lyric: second }
//! "#;
//!
//! let song = load_song(source)?;
//! let event = get_active_event(&song.timeline, 75.0, song.duration);
//! assert_eq!(event.chord, "Gm7");
//!
//! let groups = get_aggregated_chords(&song.timeline, 2);
//! assert_eq!(groups[0].chord, "Gmaj7");
//! # Ok::<(), chordsync::SyncError>(())
//! ```

use crate::aggregate::{aggregate, ChordGroup};
use crate::error::SyncError;
use crate::semantic::validate;
use crate::song::{parse_song, ChordEvent, Song};
use crate::timeline::active_event;

/// Parse a song document and validate its timeline.
///
/// # Pipeline
/// 1. Deserialize the YAML/JSON document
/// 2. Convert `m:ss` times to seconds
/// 3. Check the timeline is strictly increasing and inside the track
///
/// # Errors
/// [`SyncError::MetadataError`] for unreadable documents,
/// [`SyncError::ValidationError`] for timeline ordering problems.
pub fn load_song(source: &str) -> Result<Song, SyncError> {
    let song = parse_song(source)?;
    validate(&song)?;
    Ok(song)
}

/// Parse a song document without timeline validation.
///
/// Lookups on an unsorted timeline give unspecified results; use this only
/// for documents known to be well-formed or for partial drafts.
pub fn load_song_unchecked(source: &str) -> Result<Song, SyncError> {
    parse_song(source)
}

/// Active event at `progress_percent` of a track lasting `duration` seconds
pub fn get_active_event(timeline: &[ChordEvent], progress_percent: f64, duration: f64) -> ChordEvent {
    active_event(timeline, progress_percent / 100.0 * duration, duration)
}

/// Unique chords of `timeline` transposed by `semitones`, in first-heard order
pub fn get_aggregated_chords(timeline: &[ChordEvent], semitones: i32) -> Vec<ChordGroup> {
    aggregate(timeline, semitones)
}
