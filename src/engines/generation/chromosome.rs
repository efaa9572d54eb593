use crate::music::interval::Interval;
use std::fmt;

/// Capability set the engine needs from an evolvable musical fragment.
///
/// The engine never looks inside a chromosome: it scores it through its
/// intervals and pitches, recombines it by cutting along its structural
/// length, and mutates its pitches in place. `Display` is the textual form
/// written to the result sink.
pub trait Chromosome: Clone + fmt::Display {
    /// Melodic intervals between successive notes, in performance order.
    fn intervals(&self) -> Vec<Interval>;

    /// Length of the fragment in bars.
    fn structural_length(&self) -> f64;

    /// Sub-fragment covering `[from, to)` bars. The cut points need not
    /// fall on note boundaries.
    fn slice(&self, from: f64, to: f64) -> Self;

    /// This fragment followed by `other`.
    fn concat(&self, other: &Self) -> Self;

    /// Pitch of every note, in performance order.
    fn pitches(&self) -> impl Iterator<Item = i32> + '_;

    fn pitches_mut(&mut self) -> impl Iterator<Item = &mut i32> + '_;
}
