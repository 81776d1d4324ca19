//! Simulated playback clock
//!
//! Progress is a percentage of the track. The host calls [`PlaybackClock::tick`]
//! once per frame with a monotonic timestamp in seconds; the clock turns the
//! gap since the previous tick into progress.

use super::types::{ClockState, Tick, TransportState};

/// Largest representable progress below 100%
fn progress_ceiling() -> f64 {
    f64::from_bits(100f64.to_bits() - 1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackClock {
    duration: f64,
    progress: f64,
    transport: TransportState,
    last_tick: Option<f64>,
}

impl PlaybackClock {
    /// Stopped clock at 0% for a track of `duration` seconds
    pub fn new(duration: f64) -> Self {
        PlaybackClock {
            duration,
            progress: 0.0,
            transport: TransportState::Stopped,
            last_tick: None,
        }
    }

    pub fn play(&mut self) {
        if self.transport == TransportState::Running {
            return;
        }
        self.transport = TransportState::Running;
        // Re-anchor on the next tick so time spent paused is not counted
        self.last_tick = None;
    }

    pub fn pause(&mut self) {
        if self.transport == TransportState::Stopped {
            return;
        }
        self.transport = TransportState::Stopped;
        self.last_tick = None;
    }

    pub fn toggle(&mut self) {
        match self.transport {
            TransportState::Running => self.pause(),
            TransportState::Stopped => self.play(),
        }
    }

    /// Advance by the time elapsed since the previous tick.
    ///
    /// Deltas that are zero, negative or NaN leave progress untouched. A huge
    /// delta (the host suspended us for a while) completes the track rather
    /// than overshooting.
    pub fn tick(&mut self, now: f64) -> Tick {
        if self.transport == TransportState::Stopped {
            return Tick::Idle;
        }

        let last = match self.last_tick {
            Some(last) => last,
            None => {
                if now.is_finite() {
                    self.last_tick = Some(now);
                }
                return Tick::Anchored;
            }
        };

        let delta = now - last;
        if delta.is_nan() || delta <= 0.0 {
            tracing::warn!(now, last, "ignoring non-positive tick delta");
            if now.is_finite() {
                self.last_tick = Some(now);
            }
            return Tick::Advanced;
        }
        self.last_tick = Some(now);

        if self.duration.is_nan() || self.duration <= 0.0 {
            return Tick::Advanced;
        }

        let progress = self.progress + delta / self.duration * 100.0;
        if !progress.is_finite() || progress >= 100.0 {
            tracing::debug!(delta, "playback complete");
            self.reset();
            return Tick::Completed;
        }

        tracing::trace!(delta, progress, "tick");
        self.progress = progress;
        Tick::Advanced
    }

    /// Jump to `percent`, clamped to `[0, 100)`. Does not start or stop playback.
    pub fn seek(&mut self, percent: f64) {
        self.progress = if percent.is_nan() || percent <= 0.0 {
            0.0
        } else {
            percent.min(progress_ceiling())
        };
    }

    /// Back to a stopped clock at 0%
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.transport = TransportState::Stopped;
        self.last_tick = None;
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_playing(&self) -> bool {
        self.transport == TransportState::Running
    }

    pub fn transport(&self) -> TransportState {
        self.transport
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.progress / 100.0 * self.duration
    }

    pub fn state(&self) -> ClockState {
        ClockState {
            progress_percent: self.progress,
            is_playing: self.is_playing(),
            last_tick_timestamp: self.last_tick,
        }
    }
}

/// Format the playback position as `m:ss`.
///
/// ```
/// use chordsync::format_time;
///
/// assert_eq!(format_time(0.0, 180.0), "0:00");
/// assert_eq!(format_time(50.0, 180.0), "1:30");
/// assert_eq!(format_time(15.5, 180.0), "0:27");
/// ```
pub fn format_time(progress_percent: f64, duration: f64) -> String {
    let total = progress_percent / 100.0 * duration;
    let total = if total.is_finite() && total > 0.0 { total.floor() as u64 } else { 0 };
    format!("{}:{:02}", total / 60, total % 60)
}
