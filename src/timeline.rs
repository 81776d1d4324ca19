//! # Active Event Lookup
//!
//! Resolves which timeline entry is sounding at a given elapsed time.
//!
//! ## Interval Rule
//! Event `i` owns `[time_i, time_{i+1})`; the last event owns
//! `[time_last, duration)`. Times before the first event resolve to the first
//! event, times at or past `duration` resolve to the last.
//!
//! ## Search Strategy
//! Lookups run on every frame, so timelines longer than
//! [`DEFAULT_BINARY_SEARCH_THRESHOLD`] events are searched with
//! `partition_point`; shorter ones use a linear scan.
//!
//! The timeline must be sorted by time. Unsorted input gives an unspecified
//! (but in-bounds) answer.

use crate::song::ChordEvent;

pub const DEFAULT_BINARY_SEARCH_THRESHOLD: usize = 32;

/// Interval lookup over a borrowed timeline
#[derive(Debug, Clone, Copy)]
pub struct TimelineIndex<'a> {
    events: &'a [ChordEvent],
    duration: f64,
    binary_search_threshold: usize,
}

impl<'a> TimelineIndex<'a> {
    pub fn new(events: &'a [ChordEvent], duration: f64) -> Self {
        Self::with_threshold(events, duration, DEFAULT_BINARY_SEARCH_THRESHOLD)
    }

    pub fn with_threshold(events: &'a [ChordEvent], duration: f64, binary_search_threshold: usize) -> Self {
        TimelineIndex {
            events,
            duration,
            binary_search_threshold,
        }
    }

    /// Position of the active event, or `None` for an empty timeline
    pub fn active_index(&self, elapsed_seconds: f64) -> Option<usize> {
        if self.events.is_empty() {
            return None;
        }
        let elapsed = self.clamp_elapsed(elapsed_seconds);

        // Number of events that have started by `elapsed`
        let started = if self.events.len() > self.binary_search_threshold {
            self.events.partition_point(|e| e.time <= elapsed)
        } else {
            self.events
                .iter()
                .position(|e| e.time > elapsed)
                .unwrap_or(self.events.len())
        };

        Some(started.saturating_sub(1))
    }

    /// The active event itself, or the `"C"` sentinel for an empty timeline
    pub fn active_event(&self, elapsed_seconds: f64) -> ChordEvent {
        self.active_index(elapsed_seconds)
            .map(|i| self.events[i].clone())
            .unwrap_or_else(ChordEvent::sentinel)
    }

    /// End of the interval owned by event `index`
    pub fn event_end(&self, index: usize) -> f64 {
        self.events
            .get(index + 1)
            .map(|next| next.time)
            .unwrap_or(self.duration)
    }

    fn clamp_elapsed(&self, elapsed_seconds: f64) -> f64 {
        if elapsed_seconds.is_nan() || elapsed_seconds < 0.0 {
            0.0
        } else if elapsed_seconds >= self.duration {
            // Anything past the end belongs to the last event
            f64::INFINITY
        } else {
            elapsed_seconds
        }
    }
}

/// One-shot lookup: the event sounding at `elapsed_seconds`
pub fn active_event(timeline: &[ChordEvent], elapsed_seconds: f64, duration: f64) -> ChordEvent {
    TimelineIndex::new(timeline, duration).active_event(elapsed_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chords() -> Vec<ChordEvent> {
        vec![
            ChordEvent::new(0.0, "Fmaj7", "Verse 1", "first"),
            ChordEvent::new(10.0, "Gm7", "Verse 1", "second"),
        ]
    }

    fn evenly_spaced(count: usize, spacing: f64) -> Vec<ChordEvent> {
        (0..count)
            .map(|i| ChordEvent::new(i as f64 * spacing, format!("E{}", i), "", ""))
            .collect()
    }

    #[test]
    fn test_interval_boundary() {
        let timeline = two_chords();
        assert_eq!(active_event(&timeline, 9.999, 20.0).chord, "Fmaj7");
        assert_eq!(active_event(&timeline, 10.0, 20.0).chord, "Gm7");
        assert_eq!(active_event(&timeline, 0.0, 20.0).chord, "Fmaj7");
        assert_eq!(active_event(&timeline, 19.99, 20.0).chord, "Gm7");
    }

    #[test]
    fn test_empty_timeline_sentinel() {
        let event = active_event(&[], 5.0, 20.0);
        assert_eq!(event.chord, "C");
        assert_eq!(event.lyric, "");
        assert_eq!(event.section, "");
        assert_eq!(TimelineIndex::new(&[], 20.0).active_index(5.0), None);
    }

    #[test]
    fn test_before_first_event_clamps_to_first() {
        let timeline = vec![
            ChordEvent::new(3.0, "Am", "", ""),
            ChordEvent::new(6.0, "F", "", ""),
        ];
        assert_eq!(active_event(&timeline, 1.0, 10.0).chord, "Am");
        assert_eq!(active_event(&timeline, -5.0, 10.0).chord, "Am");
        assert_eq!(active_event(&timeline, f64::NAN, 10.0).chord, "Am");
    }

    #[test]
    fn test_past_duration_clamps_to_last() {
        let timeline = two_chords();
        assert_eq!(active_event(&timeline, 20.0, 20.0).chord, "Gm7");
        assert_eq!(active_event(&timeline, 500.0, 20.0).chord, "Gm7");
    }

    #[test]
    fn test_linear_and_binary_agree() {
        let timeline = evenly_spaced(100, 2.0);
        let linear = TimelineIndex::with_threshold(&timeline, 200.0, usize::MAX);
        let binary = TimelineIndex::with_threshold(&timeline, 200.0, 0);

        let mut t = -1.0;
        while t < 201.0 {
            assert_eq!(linear.active_index(t), binary.active_index(t), "at {}", t);
            t += 0.25;
        }
        assert_eq!(binary.active_index(2.0), Some(1));
        assert_eq!(binary.active_index(3.999), Some(1));
        assert_eq!(binary.active_index(199.0), Some(99));
    }

    #[test]
    fn test_event_end() {
        let timeline = two_chords();
        let index = TimelineIndex::new(&timeline, 20.0);
        assert_eq!(index.event_end(0), 10.0);
        assert_eq!(index.event_end(1), 20.0);
    }
}
