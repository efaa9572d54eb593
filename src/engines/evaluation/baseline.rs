use crate::engines::evaluation::quality_table::IntervalQualityTable;
use crate::engines::generation::chromosome::Chromosome;
use crate::error::{MelodevoError, Result};

/// Mean and (population) variance of a set of dissonance weights.
///
/// Computed once over the seed population, these are the target the run
/// evolves toward: fitness rewards fragments whose own dissonance profile
/// matches the seed's, not absolute consonance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReferenceStatistics {
    pub mean: f64,
    pub variance: f64,
}

impl ReferenceStatistics {
    /// Statistics of `weights`, or `None` when there are none.
    pub fn from_weights(weights: &[f64]) -> Option<Self> {
        if weights.is_empty() {
            return None;
        }

        let n = weights.len() as f64;
        let mean = weights.iter().sum::<f64>() / n;
        let variance = weights.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / n;

        Some(Self { mean, variance })
    }

    /// Pool the interval weights of the whole population and freeze their
    /// statistics.
    pub fn baseline<C: Chromosome>(table: &IntervalQualityTable, population: &[C]) -> Result<Self> {
        if population.is_empty() {
            return Err(MelodevoError::EmptySeedPopulation);
        }

        let weights: Vec<f64> = population
            .iter()
            .flat_map(|chromosome| table.weights_of(chromosome))
            .collect();

        let stats = Self::from_weights(&weights).ok_or(MelodevoError::NoIntervals)?;
        log::debug!(
            "Baseline over {} fragments ({} intervals): mean = {:.4}, variance = {:.4}",
            population.len(),
            weights.len(),
            stats.mean,
            stats.variance
        );
        Ok(stats)
    }
}
