//! # Timeline Validation
//!
//! Lookup assumes a well-formed timeline but never checks it, since it runs on
//! every clock tick. This module is the opt-in check that loaders run once.
//!
//! ## Validation Rules
//! - Event times are finite and non-negative
//! - Event times strictly increase
//! - Every event starts before the end of the track
//!
//! ## Entry Point
//! `validate(song: &Song) -> Result<(), SyncError>`
//!
//! ## Example
//! ```rust
//! use chordsync::{validate, ChordEvent, Song};
//!
//! let song = Song::new("Demo", "Band", 20.0, vec![
//!     ChordEvent::new(0.0, "C", "Verse", ""),
//!     ChordEvent::new(10.0, "G", "Verse", ""),
//! ]);
//! assert!(validate(&song).is_ok());
//! ```

use crate::error::SyncError;
use crate::song::Song;

/// Validate a song's timeline ordering
pub fn validate(song: &Song) -> Result<(), SyncError> {
    let mut previous: Option<f64> = None;

    for (i, event) in song.timeline.iter().enumerate() {
        let event_number = i + 1;

        if !event.time.is_finite() || event.time < 0.0 {
            return Err(SyncError::ValidationError {
                event: event_number,
                message: format!("time {}s must be a non-negative number", event.time),
            });
        }

        if let Some(prev) = previous {
            if event.time <= prev {
                return Err(SyncError::ValidationError {
                    event: event_number,
                    message: format!(
                        "time {}s is not after previous event at {}s",
                        event.time, prev
                    ),
                });
            }
        }

        if event.time >= song.duration {
            return Err(SyncError::ValidationError {
                event: event_number,
                message: format!(
                    "time {}s is not before the end of the track ({}s)",
                    event.time, song.duration
                ),
            });
        }

        previous = Some(event.time);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::ChordEvent;

    fn song(times: &[f64]) -> Song {
        let timeline = times
            .iter()
            .map(|&t| ChordEvent::new(t, "C", "", ""))
            .collect();
        Song::new("t", "a", 20.0, timeline)
    }

    #[test]
    fn test_valid_timelines() {
        assert!(validate(&song(&[])).is_ok());
        assert!(validate(&song(&[0.0])).is_ok());
        assert!(validate(&song(&[0.0, 4.0, 8.0, 19.5])).is_ok());
    }

    #[test]
    fn test_duplicate_time_rejected() {
        let err = validate(&song(&[0.0, 8.0, 8.0])).unwrap_err();
        assert_eq!(
            err,
            SyncError::ValidationError {
                event: 3,
                message: "time 8s is not after previous event at 8s".to_string(),
            }
        );
    }

    #[test]
    fn test_decreasing_time_rejected() {
        let result = validate(&song(&[4.0, 2.0]));
        assert!(matches!(result, Err(SyncError::ValidationError { event: 2, .. })));
    }

    #[test]
    fn test_negative_time_rejected() {
        let result = validate(&song(&[-1.0, 2.0]));
        assert!(matches!(result, Err(SyncError::ValidationError { event: 1, .. })));
    }

    #[test]
    fn test_event_past_duration_rejected() {
        let result = validate(&song(&[0.0, 20.0]));
        assert!(matches!(result, Err(SyncError::ValidationError { event: 2, .. })));
    }
}
