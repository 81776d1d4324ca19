//! # chordsync
//!
//! Keeps a chord/lyric timeline in step with a simulated playback clock.
//!
//! ## Modules
//! - `chord` - Chord symbol parsing and transposition
//! - `song` - Song/ChordEvent data model and document loading
//! - `semantic` - Timeline ordering validation
//! - `timeline` - Active-event lookup
//! - `aggregate` - Unique-chord grouping
//! - `playback` - Clock state machine and the `Player` owner
//! - `config` - `PlayerConfig`
//! - `api` - Host-facing entry points

pub mod aggregate;
pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod playback;
pub mod semantic;
pub mod song;
pub mod timeline;

pub use aggregate::{aggregate, ChordGroup, Occurrence};
pub use api::{get_active_event, get_aggregated_chords, load_song, load_song_unchecked};
pub use chord::{transpose, Chord, PitchClass, Transposition};
pub use config::PlayerConfig;
pub use error::*;
pub use playback::{format_time, ClockState, PlaybackClock, Player, Tick, TransportState};
pub use semantic::validate;
pub use song::{ChordEvent, Song, Timeline};
pub use timeline::{active_event, TimelineIndex};
