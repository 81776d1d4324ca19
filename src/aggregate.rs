//! # Chord Aggregation
//!
//! Groups a timeline by transposed chord symbol. Groups appear in the order
//! their chord is first heard; each group lists every occurrence in timeline
//! order.
//!
//! ## Invariants
//! - One group per distinct transposed symbol
//! - Occurrence counts across all groups sum to the timeline length
//!
//! ## Example
//! ```rust
//! use chordsync::{aggregate, ChordEvent};
//!
//! let timeline = vec![
//!     ChordEvent::new(0.0, "C", "Verse", "a"),
//!     ChordEvent::new(4.0, "G", "Verse", "b"),
//!     ChordEvent::new(8.0, "C", "Chorus", "c"),
//! ];
//! let groups = aggregate(&timeline, 2);
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].chord, "D");
//! assert_eq!(groups[0].occurrences.len(), 2);
//! assert_eq!(groups[1].chord, "A");
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::chord::transpose;
use crate::song::ChordEvent;

/// Where a chord is heard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub time: f64,
    pub lyric: String,
    pub section: String,
    /// Position of the event in the source timeline
    pub index: usize,
}

/// All occurrences of one (transposed) chord
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordGroup {
    pub chord: String,
    pub first_time: f64,
    pub first_lyric: String,
    pub first_section: String,
    pub occurrences: Vec<Occurrence>,
}

/// Build chord groups for `timeline` transposed by `semitones`
pub fn aggregate(timeline: &[ChordEvent], semitones: i32) -> Vec<ChordGroup> {
    let mut groups: Vec<ChordGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (index, event) in timeline.iter().enumerate() {
        let chord = transpose(&event.chord, semitones);

        let position = match positions.get(&chord) {
            Some(&position) => position,
            None => {
                groups.push(ChordGroup {
                    chord: chord.clone(),
                    first_time: event.time,
                    first_lyric: event.lyric.clone(),
                    first_section: event.section.clone(),
                    occurrences: Vec::new(),
                });
                positions.insert(chord, groups.len() - 1);
                groups.len() - 1
            }
        };

        groups[position].occurrences.push(Occurrence {
            time: event.time,
            lyric: event.lyric.clone(),
            section: event.section.clone(),
            index,
        });
    }

    tracing::debug!(
        events = timeline.len(),
        groups = groups.len(),
        semitones,
        "aggregated chords"
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progression() -> Vec<ChordEvent> {
        ["Fmaj7", "Gm7", "Fmaj7", "C7", "Fmaj7", "Gm7", "Bb", "A#"]
            .iter()
            .enumerate()
            .map(|(i, c)| ChordEvent::new(i as f64 * 4.0, *c, "Verse", format!("line {}", i)))
            .collect()
    }

    #[test]
    fn test_first_seen_order() {
        let groups = aggregate(&progression(), 0);
        let chords: Vec<&str> = groups.iter().map(|g| g.chord.as_str()).collect();
        assert_eq!(chords, vec!["Fmaj7", "Gm7", "C7", "A#"]);
    }

    #[test]
    fn test_occurrences_in_timeline_order() {
        let groups = aggregate(&progression(), 0);
        let fmaj7 = &groups[0];
        let indices: Vec<usize> = fmaj7.occurrences.iter().map(|o| o.index).collect();
        assert_eq!(indices, vec![0, 2, 4]);
        assert_eq!(fmaj7.first_time, 0.0);
        assert_eq!(fmaj7.first_lyric, "line 0");
        assert_eq!(fmaj7.first_section, "Verse");
        assert_eq!(fmaj7.occurrences[1].time, 8.0);
        assert_eq!(fmaj7.occurrences[1].lyric, "line 2");
    }

    #[test]
    fn test_enharmonic_spellings_merge() {
        // "Bb" and "A#" are the same chord once spelled canonically
        let groups = aggregate(&progression(), 0);
        let a_sharp = groups.iter().find(|g| g.chord == "A#").unwrap();
        assert_eq!(a_sharp.occurrences.len(), 2);
        assert_eq!(a_sharp.first_lyric, "line 6");
    }

    #[test]
    fn test_transposed_groups() {
        let groups = aggregate(&progression(), 2);
        let chords: Vec<&str> = groups.iter().map(|g| g.chord.as_str()).collect();
        assert_eq!(chords, vec!["Gmaj7", "Am7", "D7", "C"]);
    }

    #[test]
    fn test_completeness_and_distinct_count() {
        let timeline = progression();
        for n in -12..=12 {
            let groups = aggregate(&timeline, n);
            let total: usize = groups.iter().map(|g| g.occurrences.len()).sum();
            assert_eq!(total, timeline.len());

            let mut distinct: Vec<String> = timeline.iter().map(|e| transpose(&e.chord, n)).collect();
            distinct.sort();
            distinct.dedup();
            assert_eq!(groups.len(), distinct.len());
        }
    }

    #[test]
    fn test_deterministic() {
        let timeline = progression();
        assert_eq!(aggregate(&timeline, 5), aggregate(&timeline, 5));
    }

    #[test]
    fn test_empty_timeline() {
        assert!(aggregate(&[], 3).is_empty());
    }

    #[test]
    fn test_malformed_chords_group_verbatim() {
        let timeline = vec![
            ChordEvent::new(0.0, "N.C.", "", ""),
            ChordEvent::new(1.0, "C", "", ""),
            ChordEvent::new(2.0, "N.C.", "", ""),
        ];
        let groups = aggregate(&timeline, 4);
        assert_eq!(groups[0].chord, "N.C.");
        assert_eq!(groups[0].occurrences.len(), 2);
        assert_eq!(groups[1].chord, "E");
    }
}
