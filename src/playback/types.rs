//! Playback state type definitions

use serde::Serialize;

/// Whether the clock advances on each tick
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportState {
    #[default]
    Stopped,
    Running,
}

/// What a single `tick` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Clock is stopped; nothing happened
    Idle,
    /// First tick after `play()`: the timestamp was recorded, progress unchanged
    Anchored,
    /// Progress moved forward (possibly by zero for a non-positive delta)
    Advanced,
    /// Progress reached 100%, wrapped to 0 and the clock stopped
    Completed,
}

/// Snapshot of the playback clock
///
/// # Fields
/// - `progress_percent`: position in the track, `0.0 <= p < 100.0`
/// - `is_playing`: true while the clock is running
/// - `last_tick_timestamp`: host timestamp (seconds) of the latest tick since
///   `play()`, `None` until the first tick arrives
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClockState {
    pub progress_percent: f64,
    pub is_playing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_tick_timestamp: Option<f64>,
}
