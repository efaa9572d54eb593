use super::traits::{validate_rate, ConfigSection};
use crate::engines::generation::objective::OptimizationDirection;
use crate::error::MelodevoError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Per-note probability of a semitone shift.
    pub mutation_rate: f64,
    /// Probability that a selected pair is recombined.
    pub crossover_rate: f64,
    /// Fraction of the population drawn into the mating pool each generation.
    pub selection_rate: f64,
    pub generations: usize,
    pub direction: OptimizationDirection,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            selection_rate: 1.0,
            generations: 100,
            direction: OptimizationDirection::Minimize,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), MelodevoError> {
        validate_rate(Self::section_name(), "mutation_rate", self.mutation_rate)?;
        validate_rate(Self::section_name(), "crossover_rate", self.crossover_rate)?;
        validate_rate(Self::section_name(), "selection_rate", self.selection_rate)?;
        if self.generations == 0 {
            return Err(MelodevoError::Configuration(
                "evolution.generations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
