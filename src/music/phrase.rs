// Phrase: the concrete chromosome evolved by the engine.
//
// A phrase is a flat list of note events. Each note carries its pitch, how
// long it sounds, and a step: the distance from its onset to the next
// note's onset. Onsets are never stored; they are the running sum of steps.
// A step of zero stacks the next note on the same onset (a chord tone).
//
// All time values are in bars. The structural length of a phrase is the sum
// of its steps, which makes slicing and concatenation length-preserving:
// every note lands in exactly one side of a cut.

use crate::engines::generation::chromosome::Chromosome;
use crate::music::interval::Interval;
use crate::music::pitch::pitch_name;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: i32,
    /// Sounding length in bars.
    pub duration: f64,
    /// Bars from this note's onset to the next note's onset.
    pub step: f64,
}

impl Note {
    pub fn new(pitch: i32, duration: f64, step: f64) -> Self {
        Self { pitch, duration, step }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub notes: Vec<Note>,
}

impl Phrase {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Monophonic phrase of equally spaced notes, each lasting `step` bars.
    pub fn from_pitches(pitches: &[i32], step: f64) -> Self {
        Self::new(pitches.iter().map(|&p| Note::new(p, step, step)).collect())
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Onset of every note in bars, relative to the phrase start.
    pub fn onsets(&self) -> Vec<f64> {
        let mut onset = 0.0;
        self.notes
            .iter()
            .map(|note| {
                let current = onset;
                onset += note.step;
                current
            })
            .collect()
    }
}

impl Chromosome for Phrase {
    fn intervals(&self) -> Vec<Interval> {
        self.notes
            .windows(2)
            .map(|pair| Interval::between(pair[0].pitch, pair[1].pitch))
            .collect()
    }

    fn structural_length(&self) -> f64 {
        self.notes.iter().map(|note| note.step).sum()
    }

    /// Notes whose onset falls in `[from, to)`. When `to` reaches the end of
    /// the phrase the range is closed, so zero-step notes sitting exactly on
    /// the end are kept.
    fn slice(&self, from: f64, to: f64) -> Self {
        if from >= to {
            return Self::default();
        }

        let closed = to >= self.structural_length();
        let notes = self
            .notes
            .iter()
            .zip(self.onsets())
            .filter(|&(_, onset)| onset >= from && (closed || onset < to))
            .map(|(note, _)| *note)
            .collect();

        Self::new(notes)
    }

    fn concat(&self, other: &Self) -> Self {
        let mut notes = Vec::with_capacity(self.notes.len() + other.notes.len());
        notes.extend_from_slice(&self.notes);
        notes.extend_from_slice(&other.notes);
        Self::new(notes)
    }

    fn pitches(&self) -> impl Iterator<Item = i32> + '_ {
        self.notes.iter().map(|note| note.pitch)
    }

    fn pitches_mut(&mut self) -> impl Iterator<Item = &mut i32> + '_ {
        self.notes.iter_mut().map(|note| &mut note.pitch)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.notes.iter().map(|n| pitch_name(n.pitch)).collect();
        let durations: Vec<String> = self.notes.iter().map(|n| n.duration.to_string()).collect();
        let steps: Vec<String> = self.notes.iter().map(|n| n.step.to_string()).collect();

        write!(
            f,
            "Phrase(notes=[{}], durations=[{}], steps=[{}])",
            names.join(", "),
            durations.join(", "),
            steps.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arpeggio() -> Phrase {
        // C4 E4 G4 C5, quarter-bar steps
        Phrase::from_pitches(&[60, 64, 67, 72], 0.25)
    }

    #[test]
    fn test_intervals() {
        let numbers: Vec<u32> = arpeggio().intervals().iter().map(|i| i.number()).collect();
        assert_eq!(numbers, vec![3, 3, 4]);
        assert!(Phrase::from_pitches(&[60], 1.0).intervals().is_empty());
    }

    #[test]
    fn test_structural_length_and_onsets() {
        let phrase = arpeggio();
        assert_eq!(phrase.structural_length(), 1.0);
        assert_eq!(phrase.onsets(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_slice_at_non_integral_point() {
        let phrase = arpeggio();

        let head = phrase.slice(0.0, 0.3);
        let tail = phrase.slice(0.3, phrase.structural_length());

        assert_eq!(head.pitches().collect::<Vec<_>>(), vec![60, 64]);
        assert_eq!(tail.pitches().collect::<Vec<_>>(), vec![67, 72]);
        assert_eq!(
            head.structural_length() + tail.structural_length(),
            phrase.structural_length()
        );
    }

    #[test]
    fn test_slice_keeps_trailing_chord_tone() {
        // Final note stacked on the end with a zero step
        let phrase = Phrase::new(vec![
            Note::new(60, 0.5, 0.5),
            Note::new(64, 0.5, 0.5),
            Note::new(67, 0.5, 0.0),
        ]);
        let length = phrase.structural_length();

        assert_eq!(phrase.slice(0.0, length).len(), 3);
        assert_eq!(phrase.slice(0.75, length).pitches().collect::<Vec<_>>(), vec![67]);
        assert!(phrase.slice(length, length).is_empty());
    }

    #[test]
    fn test_concat_preserves_order() {
        let a = Phrase::from_pitches(&[60, 62], 0.5);
        let b = Phrase::from_pitches(&[64], 1.0);

        let joined = a.concat(&b);
        assert_eq!(joined.pitches().collect::<Vec<_>>(), vec![60, 62, 64]);
        assert_eq!(joined.structural_length(), 2.0);
    }

    #[test]
    fn test_pitches_mut() {
        let mut phrase = arpeggio();
        for pitch in phrase.pitches_mut() {
            *pitch += 12;
        }
        assert_eq!(phrase.pitches().collect::<Vec<_>>(), vec![72, 76, 79, 84]);
    }

    #[test]
    fn test_display() {
        let phrase = Phrase::from_pitches(&[60, 61], 0.5);
        assert_eq!(
            phrase.to_string(),
            "Phrase(notes=[C4, C#4], durations=[0.5, 0.5], steps=[0.5, 0.5])"
        );
    }

    #[test]
    fn test_json_roundtrip_shape() {
        let json = r#"{"notes":[{"pitch":60,"duration":0.25,"step":0.25}]}"#;
        let phrase: Phrase = serde_json::from_str(json).unwrap();
        assert_eq!(phrase, Phrase::from_pitches(&[60], 0.25));
    }
}
