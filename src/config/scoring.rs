use super::traits::ConfigSection;
use crate::engines::evaluation::fitness::DissonanceFitness;
use crate::engines::evaluation::quality_table::{IntervalQualityTable, DEFAULT_INTERVAL_WEIGHTS};
use crate::error::{MelodevoError, Result};
use crate::music::tonality::Tonality;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub key_name: String,
    pub scale_type: String,
    /// Dissonance weight of interval classes 1 (unison) to 8 (octave).
    pub interval_weights: [f64; 8],
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            gamma: 1.0,
            key_name: "C".to_string(),
            scale_type: "major".to_string(),
            interval_weights: DEFAULT_INTERVAL_WEIGHTS,
        }
    }
}

impl ScoringConfig {
    pub fn tonality(&self) -> Result<Tonality> {
        Tonality::new(&self.key_name, &self.scale_type)
    }

    pub fn fitness(&self) -> DissonanceFitness {
        DissonanceFitness::new(self.alpha, self.beta, self.gamma)
    }

    pub fn quality_table(&self) -> IntervalQualityTable {
        IntervalQualityTable::new(self.interval_weights)
    }
}

impl ConfigSection for ScoringConfig {
    fn section_name() -> &'static str {
        "scoring"
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !value.is_finite() || value < 0.0 {
                return Err(MelodevoError::Configuration(format!(
                    "scoring.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.interval_weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(MelodevoError::Configuration(
                "scoring.interval_weights must all be positive".to_string(),
            ));
        }
        self.tonality()?;
        Ok(())
    }
}
