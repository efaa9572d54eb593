/// Diatonic size class of each interval within one octave, indexed by
/// semitone count (the tritone is counted as a diminished fifth).
const SIMPLE_NUMBERS: [u32; 12] = [1, 2, 2, 3, 3, 4, 5, 5, 6, 6, 7, 7];

/// Melodic interval between two successive notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Signed distance; negative when the melody descends.
    pub semitones: i32,
}

impl Interval {
    pub fn new(semitones: i32) -> Self {
        Self { semitones }
    }

    pub fn between(from: i32, to: i32) -> Self {
        Self::new(to - from)
    }

    /// Size class ("number") of the interval: 1 = unison, 2 = second, ...,
    /// 8 = octave, 9 = ninth and so on. Direction is ignored.
    pub fn number(self) -> u32 {
        let size = self.semitones.unsigned_abs();
        let octaves = size / 12;
        let remainder = size % 12;

        if size > 0 && remainder == 0 {
            // Exact octaves count as 8, 15, 22...
            1 + 7 * octaves
        } else {
            SIMPLE_NUMBERS[remainder as usize] + 7 * octaves
        }
    }

    pub fn is_ascending(self) -> bool {
        self.semitones > 0
    }
}
