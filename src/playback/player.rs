//! Player: the single owner of playback state
//!
//! Bundles the loaded [`Song`], its [`PlaybackClock`], the current
//! [`Transposition`] and the cached chord aggregation. Every mutation goes
//! through `&mut self`, so the cached groups can never disagree with the song
//! or offset they were built from.

use crate::aggregate::{aggregate, ChordGroup};
use crate::chord::{transpose, Transposition};
use crate::config::PlayerConfig;
use crate::song::{ChordEvent, Song};
use crate::timeline::TimelineIndex;

use super::clock::{format_time, PlaybackClock};
use super::types::{ClockState, Tick};

#[derive(Debug, Clone)]
pub struct Player {
    song: Song,
    clock: PlaybackClock,
    transposition: Transposition,
    groups: Vec<ChordGroup>,
    active: Option<usize>,
    binary_search_threshold: usize,
}

impl Player {
    pub fn new(song: Song) -> Self {
        Self::with_config(song, &PlayerConfig::default())
    }

    pub fn with_config(song: Song, config: &PlayerConfig) -> Self {
        let mut player = Player {
            clock: PlaybackClock::new(song.duration),
            song,
            transposition: Transposition::new(config.transpose),
            groups: Vec::new(),
            active: None,
            binary_search_threshold: config.binary_search_threshold,
        };
        player.rebuild_groups();
        player.active = player.lookup_active();
        player
    }

    /// Replace the song. The clock resets to a stopped 0%; the transposition is kept.
    pub fn load(&mut self, song: Song) {
        tracing::debug!(title = %song.title, events = song.timeline.len(), "loading song");
        self.clock = PlaybackClock::new(song.duration);
        self.song = song;
        self.rebuild_groups();
        self.active = self.lookup_active();
    }

    /// Start the clock. Ignored while the song has no events.
    pub fn play(&mut self) {
        if self.song.timeline.is_empty() {
            tracing::debug!("play ignored: empty timeline");
            return;
        }
        self.clock.play();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn toggle(&mut self) {
        if self.clock.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance the clock to host time `now` (seconds).
    ///
    /// Returns the newly active event (with its chord transposed) when the
    /// tick moved playback into a different timeline entry.
    pub fn tick(&mut self, now: f64) -> Option<ChordEvent> {
        match self.clock.tick(now) {
            Tick::Idle | Tick::Anchored => None,
            Tick::Advanced | Tick::Completed => self.refresh_active(),
        }
    }

    /// Jump to `percent` of the track; returns the new event if it changed
    pub fn seek(&mut self, percent: f64) -> Option<ChordEvent> {
        self.clock.seek(percent);
        self.refresh_active()
    }

    /// Set the offset directly; unwrapped values are wrapped modulo 12
    pub fn set_transposition(&mut self, semitones: i32) {
        let next = Transposition::new(semitones);
        if next != self.transposition {
            self.transposition = next;
            self.rebuild_groups();
        }
    }

    /// Step the offset, as the `+`/`-` buttons do
    pub fn transpose_by(&mut self, delta: i32) {
        let next = self.transposition.step(delta);
        self.set_transposition(next.semitones());
    }

    pub fn transposition(&self) -> Transposition {
        self.transposition
    }

    pub fn song(&self) -> &Song {
        &self.song
    }

    pub fn state(&self) -> ClockState {
        self.clock.state()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn progress(&self) -> f64 {
        self.clock.progress()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    pub fn formatted_time(&self) -> String {
        format_time(self.clock.progress(), self.song.duration)
    }

    /// Timeline position of the active event, `None` for an empty timeline
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The active event with its chord transposed, or the sentinel
    pub fn active_event(&self) -> ChordEvent {
        match self.active {
            Some(i) => self.transposed_event(i),
            None => ChordEvent::sentinel(),
        }
    }

    /// The event at `seconds` into the track with its chord transposed, or the
    /// sentinel. Leaves the clock where it is.
    pub fn event_at(&self, seconds: f64) -> ChordEvent {
        match self.index().active_index(seconds) {
            Some(i) => self.transposed_event(i),
            None => ChordEvent::sentinel(),
        }
    }

    /// Unique chords under the current transposition
    pub fn chord_groups(&self) -> &[ChordGroup] {
        &self.groups
    }

    fn index(&self) -> TimelineIndex<'_> {
        TimelineIndex::with_threshold(
            &self.song.timeline,
            self.song.duration,
            self.binary_search_threshold,
        )
    }

    fn lookup_active(&self) -> Option<usize> {
        self.index().active_index(self.clock.elapsed_seconds())
    }

    fn refresh_active(&mut self) -> Option<ChordEvent> {
        let active = self.lookup_active();
        if active == self.active {
            return None;
        }
        self.active = active;
        active.map(|i| self.transposed_event(i))
    }

    fn transposed_event(&self, index: usize) -> ChordEvent {
        let event = &self.song.timeline[index];
        ChordEvent {
            chord: transpose(&event.chord, self.transposition.semitones()),
            ..event.clone()
        }
    }

    fn rebuild_groups(&mut self) {
        self.groups = aggregate(&self.song.timeline, self.transposition.semitones());
    }
}
