//! # Song Data Model
//!
//! Types for a track and its chord timeline, plus the loader that turns a YAML
//! (or JSON) song document into them.
//!
//! ## Type Hierarchy
//! ```text
//! Song
//!   ├── title, artist, album
//!   ├── duration (seconds)
//!   └── timeline: Vec<ChordEvent>
//!         ├── time (seconds from track start)
//!         ├── chord ("Fmaj7", "Bb7", ...)
//!         ├── section ("Verse 1")
//!         └── lyric (may be empty)
//! ```
//!
//! ## Document Format
//! ```yaml
//! title: Leave the Door Open
//! artist: Silk Sonic
//! duration: "3:00"        # seconds or m:ss
//! timeline:
//!   - { time: "0:00", chord: Fmaj7, section: Verse 1, lyric: Candles on the table }
//!   - { time: 4, chord: Gm7, section: Verse 1, lyric: City lights outside }
//! ```
//! `duration-ms` may replace `duration`; the snake_case keys `duration_ms` and
//! `duration_seconds` are read too. Event `section` and `lyric` default to
//! empty strings.

use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// One entry of the timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordEvent {
    pub time: f64,
    pub chord: String,
    pub section: String,
    pub lyric: String,
}

impl ChordEvent {
    pub fn new(
        time: f64,
        chord: impl Into<String>,
        section: impl Into<String>,
        lyric: impl Into<String>,
    ) -> Self {
        ChordEvent {
            time,
            chord: chord.into(),
            section: section.into(),
            lyric: lyric.into(),
        }
    }

    /// Placeholder reported when the timeline has no events
    pub fn sentinel() -> Self {
        ChordEvent::new(0.0, "C", "", "")
    }
}

/// Time-ordered chord events covering a track
pub type Timeline = Vec<ChordEvent>;

/// A track with its chord timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: f64,
    pub timeline: Timeline,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: f64, timeline: Timeline) -> Self {
        Song {
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration,
            timeline,
        }
    }
}

/// Either plain seconds or an `m:ss` / `h:mm:ss` clock string
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum RawTime {
    Seconds(f64),
    Clock(String),
}

impl RawTime {
    fn to_seconds(&self) -> Result<f64, SyncError> {
        match self {
            RawTime::Seconds(s) => Ok(*s),
            RawTime::Clock(s) => parse_clock_time(s),
        }
    }
}

#[derive(Deserialize, Debug)]
struct RawChordEvent {
    time: RawTime,
    chord: String,
    #[serde(default)]
    section: String,
    #[serde(default)]
    lyric: String,
}

/// Raw song document for YAML deserialization
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
struct RawSong {
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    #[serde(alias = "duration_seconds")]
    duration: Option<RawTime>,
    #[serde(alias = "duration_ms")]
    duration_ms: Option<u64>,
    #[serde(default)]
    timeline: Vec<RawChordEvent>,
}

/// Parse a clock string like `"0:28"`, `"3:00"`, `"1:02:03"` or `"12.5"` into seconds.
///
/// ```
/// use chordsync::song::parse_clock_time;
///
/// assert_eq!(parse_clock_time("0:28").unwrap(), 28.0);
/// assert_eq!(parse_clock_time("3:00").unwrap(), 180.0);
/// assert_eq!(parse_clock_time("1:02:03").unwrap(), 3723.0);
/// assert!(parse_clock_time("1:xx").is_err());
/// ```
pub fn parse_clock_time(s: &str) -> Result<f64, SyncError> {
    let invalid = || SyncError::MetadataError(format!("invalid time \"{}\"", s));
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(invalid());
    }

    let mut seconds = 0.0;
    for (i, part) in parts.iter().enumerate() {
        let value: f64 = part.trim().parse().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }
        // Minutes and seconds fields past the leading one must stay below 60
        if i > 0 && value >= 60.0 {
            return Err(invalid());
        }
        seconds = seconds * 60.0 + value;
    }
    Ok(seconds)
}

/// Parse a song document without validating the timeline.
///
/// The duration must still be present and positive since every lookup
/// divides by it.
pub fn parse_song(source: &str) -> Result<Song, SyncError> {
    let raw: RawSong =
        serde_yaml::from_str(source).map_err(|e| SyncError::MetadataError(e.to_string()))?;

    let duration = match (&raw.duration, raw.duration_ms) {
        (Some(d), _) => d.to_seconds()?,
        (None, Some(ms)) => ms as f64 / 1000.0,
        (None, None) => {
            return Err(SyncError::MetadataError(
                "missing duration (or duration-ms)".to_string(),
            ))
        }
    };
    if !duration.is_finite() || duration <= 0.0 {
        return Err(SyncError::MetadataError(format!(
            "duration must be positive, got {}",
            duration
        )));
    }

    let timeline = raw
        .timeline
        .into_iter()
        .map(|event| {
            Ok(ChordEvent {
                time: event.time.to_seconds()?,
                chord: event.chord,
                section: event.section,
                lyric: event.lyric,
            })
        })
        .collect::<Result<Timeline, SyncError>>()?;

    tracing::debug!(events = timeline.len(), duration, "parsed song document");

    Ok(Song {
        title: raw.title.unwrap_or_default(),
        artist: raw.artist.unwrap_or_default(),
        album: raw.album,
        duration,
        timeline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_song_clock_and_seconds() {
        let source = r#"
title: Test Song
artist: Someone
album: Something
duration: "1:00"
timeline:
  - { time: "0:00", chord: C, section: Intro, lyric: "" }
  - { time: 15, chord: Am, section: Verse 1, lyric: hello }
  - { time: "0:30.5", chord: F }
"#;
        let song = parse_song(source).unwrap();
        assert_eq!(song.title, "Test Song");
        assert_eq!(song.artist, "Someone");
        assert_eq!(song.album.as_deref(), Some("Something"));
        assert_eq!(song.duration, 60.0);
        assert_eq!(song.timeline.len(), 3);
        assert_eq!(song.timeline[1], ChordEvent::new(15.0, "Am", "Verse 1", "hello"));
        assert_eq!(song.timeline[2].time, 30.5);
        assert_eq!(song.timeline[2].section, "");
        assert_eq!(song.timeline[2].lyric, "");
    }

    #[test]
    fn test_parse_song_json_document() {
        let source = r#"{"title": "J", "duration-ms": 90000, "timeline": [{"time": 0, "chord": "G"}]}"#;
        let song = parse_song(source).unwrap();
        assert_eq!(song.duration, 90.0);
        assert_eq!(song.timeline[0].chord, "G");
        assert_eq!(song.artist, "");
    }

    #[test]
    fn test_parse_song_snake_case_durations() {
        let source = r#"{
            "title": "Leave the Door Open",
            "artist": "Silk Sonic",
            "duration_ms": 258000,
            "timeline": [
                {"time": "0:00", "chord": "Fmaj7", "section": "Verse 1", "lyric": "What you doing?"},
                {"time": "0:04", "chord": "Gm7", "section": "Verse 1", "lyric": ""}
            ]
        }"#;
        let song = parse_song(source).unwrap();
        assert_eq!(song.duration, 258.0);
        assert_eq!(song.timeline[1].time, 4.0);

        let song = parse_song(r#"{"duration_seconds": 180, "timeline": []}"#).unwrap();
        assert_eq!(song.duration, 180.0);
    }

    #[test]
    fn test_parse_song_empty_timeline() {
        let song = parse_song("duration: 10").unwrap();
        assert!(song.timeline.is_empty());
    }

    #[test]
    fn test_parse_song_missing_duration() {
        let result = parse_song("title: Nope\ntimeline: []");
        assert!(matches!(result, Err(SyncError::MetadataError(_))));
    }

    #[test]
    fn test_parse_song_non_positive_duration() {
        assert!(parse_song("duration: 0").is_err());
        assert!(parse_song("duration: -4").is_err());
    }

    #[test]
    fn test_parse_song_bad_event_time() {
        let source = r#"
duration: 20
timeline:
  - { time: "0:7x", chord: C }
"#;
        let err = parse_song(source).unwrap_err();
        assert_eq!(err, SyncError::MetadataError("invalid time \"0:7x\"".to_string()));
    }

    #[test]
    fn test_parse_song_yaml_syntax_error() {
        assert!(matches!(
            parse_song("timeline: [unclosed"),
            Err(SyncError::MetadataError(_))
        ));
    }

    #[test]
    fn test_parse_clock_time_rejects_out_of_range_fields() {
        assert!(parse_clock_time("1:75").is_err());
        assert!(parse_clock_time("-1:00").is_err());
        assert!(parse_clock_time("").is_err());
        assert!(parse_clock_time("1:2:3:4").is_err());
        assert_eq!(parse_clock_time("90").unwrap(), 90.0);
    }
}
