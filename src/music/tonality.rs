// Tonality: the set of reference pitches that counts as "in key".
//
// A tonality is a key (pitch class of the tonic) plus a scale type. Its
// notes are rooted in octave 4, but membership is octave-invariant: a pitch
// is in key iff it differs from some reference note by a multiple of 12.

use crate::error::{MelodevoError, Result};
use crate::music::pitch::{parse_pitch_class, pitch_class};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// MIDI pitch of C4, the octave reference notes are rooted in.
const REFERENCE_OCTAVE_ROOT: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    Minor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    Chromatic,
}

impl ScaleType {
    /// Semitone offsets of each scale degree from the tonic.
    pub fn intervals(self) -> &'static [i32] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor | ScaleType::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleType::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        }
    }
}

impl FromStr for ScaleType {
    type Err = MelodevoError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        let scale = match normalized.as_str() {
            "major" | "ionian" => ScaleType::Major,
            "minor" | "natural minor" => ScaleType::Minor,
            "harmonic minor" => ScaleType::HarmonicMinor,
            "melodic minor" => ScaleType::MelodicMinor,
            "dorian" => ScaleType::Dorian,
            "phrygian" => ScaleType::Phrygian,
            "lydian" => ScaleType::Lydian,
            "mixolydian" => ScaleType::Mixolydian,
            "aeolian" => ScaleType::Aeolian,
            "locrian" => ScaleType::Locrian,
            "major pentatonic" | "pentatonic" => ScaleType::MajorPentatonic,
            "minor pentatonic" => ScaleType::MinorPentatonic,
            "chromatic" => ScaleType::Chromatic,
            _ => {
                return Err(MelodevoError::Tonality(format!(
                    "Unknown scale type '{}'",
                    s
                )))
            }
        };
        Ok(scale)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tonality {
    tonic: i32,
    scale: ScaleType,
    notes: Vec<i32>,
}

impl Tonality {
    /// Build a tonality from a key name ("C", "F#", "Bb") and a scale type
    /// name ("major", "harmonic minor", "dorian", ...).
    pub fn new(key_name: &str, scale_type: &str) -> Result<Self> {
        let tonic = parse_pitch_class(key_name)
            .ok_or_else(|| MelodevoError::Tonality(format!("Unknown key '{}'", key_name)))?;
        let scale = scale_type.parse()?;
        Ok(Self::from_parts(tonic, scale))
    }

    pub fn from_parts(tonic: i32, scale: ScaleType) -> Self {
        let tonic = pitch_class(tonic);
        let root = REFERENCE_OCTAVE_ROOT + tonic;
        let notes = scale.intervals().iter().map(|&offset| root + offset).collect();
        Self { tonic, scale, notes }
    }

    /// C major, the default tonality.
    pub fn c_major() -> Self {
        Self::from_parts(0, ScaleType::Major)
    }

    pub fn tonic(&self) -> i32 {
        self.tonic
    }

    pub fn scale(&self) -> ScaleType {
        self.scale
    }

    /// Reference pitches, rooted in octave 4.
    pub fn notes(&self) -> &[i32] {
        &self.notes
    }

    /// Octave-invariant membership test.
    pub fn contains(&self, pitch: i32) -> bool {
        self.notes.iter().any(|&note| (pitch - note).rem_euclid(12) == 0)
    }
}

impl Default for Tonality {
    fn default() -> Self {
        Self::c_major()
    }
}
