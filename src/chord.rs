//! # Chord Symbols and Transposition
//!
//! Parses chord symbols (`C`, `Am`, `Bb7`, `F#maj7`, ...) into a root pitch class
//! and a quality suffix, and shifts the root by a number of semitones.
//!
//! ## Transposition Rules
//! - Only the root moves. The quality suffix is copied back verbatim.
//! - Roots are spelled with sharps after transposition: `Bb` + 0 = `A#`.
//! - Symbols that do not parse are returned unchanged.
//!
//! ## Example
//! ```rust
//! use chordsync::chord::transpose;
//!
//! assert_eq!(transpose("C7", 2), "D7");
//! assert_eq!(transpose("Fmaj7", -1), "Emaj7");
//! assert_eq!(transpose("Bb", 2), "C");
//! assert_eq!(transpose("N.C.", 5), "N.C.");
//! ```

use std::fmt;

/// Sharp spellings of the twelve pitch classes, indexed by semitone above C
pub const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Recognized quality suffixes.
///
/// The first eight are the core triad/seventh vocabulary; the rest are
/// lead-sheet aliases and extensions.
pub const QUALITIES: &[&str] = &[
    "", "m", "maj7", "7", "dim", "aug", "sus2", "sus4",
    "m7", "maj", "M", "min", "-", "M7", "min7", "-7", "dim7", "°", "+",
    "7sus4", "7sus", "9", "maj9", "M9", "m9", "min9",
];

/// Pitch class (0 = C, 11 = B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build from any semitone count; wraps into `0..12`
    pub fn from_semitone(semitone: i32) -> Self {
        PitchClass(semitone.rem_euclid(12) as u8)
    }

    /// Parse a root like `"C"`, `"F#"`, `"Bb"`, `"E♭"`.
    ///
    /// Flats and enharmonic spellings (`Cb`, `E#`) collapse onto the
    /// equivalent pitch class.
    pub fn parse(root: &str) -> Option<Self> {
        let mut chars = root.chars();
        let base: i32 = match chars.next()? {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let accidental = match chars.next() {
            None => 0,
            Some('#') | Some('♯') => 1,
            Some('b') | Some('♭') => -1,
            Some(_) => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Self::from_semitone(base + accidental))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Canonical (sharp) spelling
    pub fn name(self) -> &'static str {
        PITCH_NAMES[self.0 as usize]
    }

    pub fn transpose(self, semitones: i32) -> Self {
        // i64 so that extreme offsets cannot overflow before wrapping
        let shifted = (self.0 as i64 + semitones as i64).rem_euclid(12);
        PitchClass(shifted as u8)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed chord symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub root: PitchClass,
    /// Quality suffix exactly as written
    pub quality: String,
}

impl Chord {
    /// Parse a chord symbol into root and quality.
    ///
    /// The root is one letter `A`-`G` plus an optional `#`/`b` (or `♯`/`♭`).
    /// Everything after it must be one of [`QUALITIES`]; otherwise the symbol
    /// is rejected.
    ///
    /// ```
    /// use chordsync::chord::Chord;
    ///
    /// let chord = Chord::parse("Ebm7").unwrap();
    /// assert_eq!(chord.root.name(), "D#");
    /// assert_eq!(chord.quality, "m7");
    ///
    /// assert!(Chord::parse("H7").is_none());
    /// assert!(Chord::parse("C13b9").is_none());
    /// ```
    pub fn parse(symbol: &str) -> Option<Self> {
        let mut boundaries = symbol.char_indices().map(|(i, _)| i).skip(1);
        let after_letter = boundaries.next().unwrap_or(symbol.len());
        let after_accidental = boundaries.next().unwrap_or(symbol.len());

        // Longest root first: "Bb" must win over "B" + quality "b"
        for split in [after_accidental, after_letter] {
            let (root, quality) = symbol.split_at(split);
            if let Some(root) = PitchClass::parse(root) {
                if QUALITIES.contains(&quality) {
                    return Some(Chord {
                        root,
                        quality: quality.to_string(),
                    });
                }
            }
        }
        None
    }

    pub fn transpose(&self, semitones: i32) -> Chord {
        Chord {
            root: self.root.transpose(semitones),
            quality: self.quality.clone(),
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)
    }
}

/// Transpose a chord symbol by `semitones`.
///
/// Malformed symbols pass through untouched, so a bad label never interrupts
/// playback.
pub fn transpose(symbol: &str, semitones: i32) -> String {
    match Chord::parse(symbol) {
        Some(chord) => chord.transpose(semitones).to_string(),
        None => symbol.to_string(),
    }
}

/// Accumulated transposition offset, kept in `0..=11`.
///
/// The transpose buttons step this by ±1; stepping below 0 wraps to 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Transposition(u8);

impl Transposition {
    /// Accepts wrapped or unwrapped offsets (`-1`, `11` and `23` are all the same)
    pub fn new(semitones: i32) -> Self {
        Transposition(semitones.rem_euclid(12) as u8)
    }

    pub fn semitones(self) -> i32 {
        self.0 as i32
    }

    pub fn step(self, delta: i32) -> Self {
        Self::new(self.0 as i32 + delta.rem_euclid(12))
    }
}

impl fmt::Display for Transposition {
    /// Offset label for the transpose control: `"0"`, `"+2"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            f.write_str("0")
        } else {
            write!(f, "+{}", self.0)
        }
    }
}
