// Pitch numbering and naming.
//
// Pitches are MIDI-style integers (60 = C4) but stored as i32: mutation
// shifts them by a semitone without any range clamping, so a pitch may
// drift below 0 or above 127 during a run.

const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Pitch class in 0..12, octave-invariant.
pub fn pitch_class(pitch: i32) -> i32 {
    pitch.rem_euclid(12)
}

/// Scientific pitch name, e.g. 60 -> "C4", 61 -> "C#4", 0 -> "C-1".
pub fn pitch_name(pitch: i32) -> String {
    let octave = pitch.div_euclid(12) - 1;
    format!("{}{}", PITCH_CLASS_NAMES[pitch_class(pitch) as usize], octave)
}

/// Parse a key name such as "C", "f#", "Bb" or "Ebb" into a pitch class.
pub fn parse_pitch_class(name: &str) -> Option<i32> {
    let mut chars = name.trim().chars();
    let base = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let mut accidental = 0;
    for c in chars {
        match c {
            '#' | '♯' => accidental += 1,
            'b' | '♭' => accidental -= 1,
            _ => return None,
        }
    }

    Some(pitch_class(base + accidental))
}
