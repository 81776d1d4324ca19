//! # Playback Module
//!
//! Drives a song's timeline forward in (simulated) real time.
//!
//! ## Sub-modules
//! - `types` - ClockState, TransportState, Tick
//! - `clock` - The play/pause/seek/tick state machine and `m:ss` formatting
//! - `player` - Owner of song + clock + transposition + cached chord groups
//!
//! ## Scheduling Model
//! Single-threaded and cooperative. The host (a browser frame callback, the
//! CLI's simulation loop) calls `tick` once per frame with a timestamp in
//! seconds. Nothing here blocks or spawns; to cancel playback, stop ticking.
//!
//! ## Example
//! ```rust
//! use chordsync::playback::Player;
//! use chordsync::{ChordEvent, Song};
//!
//! let song = Song::new("Demo", "Band", 20.0, vec![
//!     ChordEvent::new(0.0, "Fmaj7", "Verse", ""),
//!     ChordEvent::new(10.0, "Gm7", "Verse", ""),
//! ]);
//! let mut player = Player::new(song);
//!
//! player.play();
//! player.tick(100.0); // first tick anchors the host clock
//! let changed = player.tick(110.0).unwrap();
//!
//! assert_eq!(changed.chord, "Gm7");
//! assert_eq!(player.formatted_time(), "0:10");
//! ```
//!
//! ## Clock Completion
//! When progress reaches 100% the clock wraps to 0 and stops. It does not
//! loop on its own.

mod types;
mod clock;
mod player;


pub use types::{ClockState, Tick, TransportState};
pub use clock::{format_time, PlaybackClock};
pub use player::Player;
