use serde::{Deserialize, Serialize};

/// How raw fitness scores are read by selection and by the per-generation
/// "best" report.
///
/// `Minimize` treats scores as penalties, which is what the dissonance
/// score is: selection samples with weight `1 / (1 + score)` and the best
/// individual has the lowest score. `Maximize` samples with the raw score as
/// weight and reports the highest score, reproducing the reference
/// behavior exactly (which favors worse individuals under a penalty score).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationDirection {
    #[default]
    Minimize,
    Maximize,
}

impl OptimizationDirection {
    /// Sampling weight of an individual with the given score.
    pub fn selection_weight(self, score: f64) -> f64 {
        match self {
            OptimizationDirection::Minimize => 1.0 / (1.0 + score.max(0.0)),
            OptimizationDirection::Maximize => score,
        }
    }

    /// True if `candidate` strictly beats `incumbent`.
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            OptimizationDirection::Minimize => candidate < incumbent,
            OptimizationDirection::Maximize => candidate > incumbent,
        }
    }

    /// Index of the best score; ties go to the earliest index.
    pub fn best_index(self, scores: &[f64]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &score) in scores.iter().enumerate() {
            match best {
                Some(b) if !self.is_better(score, scores[b]) => {}
                _ => best = Some(i),
            }
        }
        best
    }
}
