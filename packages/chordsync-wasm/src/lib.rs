use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct LoadError {
    message: String,
    event: Option<usize>,
}

fn error_to_load_error(e: chordsync::SyncError) -> LoadError {
    match e {
        chordsync::SyncError::MetadataError(message) => LoadError {
            message,
            event: None,
        },
        chordsync::SyncError::ValidationError { event, message } => LoadError {
            message,
            event: Some(event),
        },
    }
}

fn to_js_error(e: chordsync::SyncError) -> JsValue {
    let error = error_to_load_error(e);
    JsValue::from_str(&serde_json::to_string(&error).unwrap_or_else(|_| error.message.clone()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Browser-side player. One instance per loaded track, ticked from
/// `requestAnimationFrame`.
#[wasm_bindgen]
pub struct SongPlayer {
    inner: chordsync::Player,
}

#[wasm_bindgen]
impl SongPlayer {
    /// Load a song document (YAML or JSON)
    #[wasm_bindgen(constructor)]
    pub fn new(source: &str) -> Result<SongPlayer, JsValue> {
        let song = chordsync::load_song(source).map_err(to_js_error)?;
        Ok(SongPlayer {
            inner: chordsync::Player::new(song),
        })
    }

    /// Load one of the embedded demo songs
    pub fn from_library(name: &str) -> Result<SongPlayer, JsValue> {
        let document = chordsync_songs::get_song(name)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown song: {}", name)))?;
        SongPlayer::new(&document.content)
    }

    /// Replace the track; playback resets to a stopped 0:00
    pub fn load(&mut self, source: &str) -> Result<(), JsValue> {
        let song = chordsync::load_song(source).map_err(to_js_error)?;
        self.inner.load(song);
        Ok(())
    }

    pub fn play(&mut self) {
        self.inner.play();
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    pub fn toggle(&mut self) {
        self.inner.toggle();
    }

    /// Frame callback. `now_ms` is `performance.now()`.
    /// Returns the new active event as JSON when it changed.
    pub fn tick(&mut self, now_ms: f64) -> Option<String> {
        self.inner.tick(now_ms / 1000.0).map(|event| to_json(&event))
    }

    pub fn seek(&mut self, percent: f64) -> Option<String> {
        self.inner.seek(percent).map(|event| to_json(&event))
    }

    pub fn transpose_by(&mut self, delta: i32) {
        self.inner.transpose_by(delta);
    }

    pub fn set_transposition(&mut self, semitones: i32) {
        self.inner.set_transposition(semitones);
    }

    /// Offset label for the transpose control, e.g. `"+2"`
    pub fn transposition_label(&self) -> String {
        self.inner.transposition().to_string()
    }

    pub fn active_event(&self) -> String {
        to_json(&self.inner.active_event())
    }

    pub fn chord_groups(&self) -> String {
        to_json(self.inner.chord_groups())
    }

    pub fn state(&self) -> String {
        to_json(&self.inner.state())
    }

    pub fn progress(&self) -> f64 {
        self.inner.progress()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    pub fn formatted_time(&self) -> String {
        self.inner.formatted_time()
    }
}

/// Active event of a song document at `progress_percent`, as JSON
#[wasm_bindgen]
pub fn get_active_event(source: &str, progress_percent: f64) -> Result<String, JsValue> {
    let song = chordsync::load_song(source).map_err(to_js_error)?;
    let event = chordsync::get_active_event(&song.timeline, progress_percent, song.duration);
    Ok(to_json(&event))
}

/// Unique chords of a song document, as a JSON array of groups
#[wasm_bindgen]
pub fn get_aggregated_chords(source: &str, semitones: i32) -> Result<String, JsValue> {
    let song = chordsync::load_song(source).map_err(to_js_error)?;
    Ok(to_json(&chordsync::get_aggregated_chords(&song.timeline, semitones)))
}

#[wasm_bindgen]
pub fn transpose_chord(symbol: &str, semitones: i32) -> String {
    chordsync::transpose(symbol, semitones)
}

#[wasm_bindgen]
pub fn format_time(progress_percent: f64, duration: f64) -> String {
    chordsync::format_time(progress_percent, duration)
}

/// Names of the embedded demo songs, as a JSON array
#[wasm_bindgen]
pub fn list_songs() -> String {
    to_json(&chordsync_songs::list_songs())
}
