use crate::engines::generation::chromosome::Chromosome;
use crate::music::interval::Interval;
use serde::{Deserialize, Serialize};

/// Hand-tuned dissonance weight for interval size classes 1 (unison)
/// through 8 (octave).
pub const DEFAULT_INTERVAL_WEIGHTS: [f64; 8] = [1.0, 3.0, 2.0, 1.0, 1.0, 2.0, 3.0, 1.0];

/// Weight of every interval wider than an octave.
pub const COMPOUND_INTERVAL_WEIGHT: f64 = 5.0;

/// Maps a melodic interval to its dissonance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalQualityTable {
    weights: [f64; 8],
    compound_weight: f64,
}

impl IntervalQualityTable {
    pub fn new(weights: [f64; 8]) -> Self {
        Self {
            weights,
            compound_weight: COMPOUND_INTERVAL_WEIGHT,
        }
    }

    pub fn weight(&self, interval: Interval) -> f64 {
        match interval.number() {
            n @ 1..=8 => self.weights[(n - 1) as usize],
            _ => self.compound_weight,
        }
    }

    /// Weight of every interval of the chromosome, in order.
    pub fn weights_of<C: Chromosome>(&self, chromosome: &C) -> Vec<f64> {
        chromosome
            .intervals()
            .into_iter()
            .map(|interval| self.weight(interval))
            .collect()
    }
}

impl Default for IntervalQualityTable {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_WEIGHTS)
    }
}
