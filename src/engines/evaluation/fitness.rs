use crate::engines::evaluation::baseline::ReferenceStatistics;
use crate::engines::evaluation::quality_table::IntervalQualityTable;
use crate::engines::generation::chromosome::Chromosome;
use crate::music::tonality::Tonality;

/// Everything a fitness function may consult. Frozen for the whole run.
#[derive(Debug, Clone)]
pub struct FitnessContext {
    pub table: IntervalQualityTable,
    pub baseline: ReferenceStatistics,
    pub tonality: Tonality,
}

impl FitnessContext {
    pub fn new(table: IntervalQualityTable, baseline: ReferenceStatistics, tonality: Tonality) -> Self {
        Self {
            table,
            baseline,
            tonality,
        }
    }
}

/// Pure scoring function. Must return a finite, non-negative score.
pub trait FitnessFunction<C: Chromosome> {
    fn evaluate(&self, context: &FitnessContext, chromosome: &C) -> f64;
}

impl<C, F> FitnessFunction<C> for F
where
    C: Chromosome,
    F: Fn(&FitnessContext, &C) -> f64,
{
    fn evaluate(&self, context: &FitnessContext, chromosome: &C) -> f64 {
        self(context, chromosome)
    }
}

/// Penalty score: out-of-key notes plus distance of the fragment's
/// dissonance mean and variance from the baseline. Lower is fitter; a fully
/// in-key fragment with the baseline's exact profile scores 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DissonanceFitness {
    /// Weight of the mean deviation.
    pub alpha: f64,
    /// Weight of the variance deviation.
    pub beta: f64,
    /// Weight of each out-of-key note.
    pub gamma: f64,
}

impl DissonanceFitness {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn out_of_key_count<C: Chromosome>(tonality: &Tonality, chromosome: &C) -> usize {
        chromosome.pitches().filter(|&pitch| !tonality.contains(pitch)).count()
    }
}

impl Default for DissonanceFitness {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl<C: Chromosome> FitnessFunction<C> for DissonanceFitness {
    fn evaluate(&self, context: &FitnessContext, chromosome: &C) -> f64 {
        let weights = context.table.weights_of(chromosome);
        // A single note has no intervals; its profile counts as all zeros
        let own = ReferenceStatistics::from_weights(&weights).unwrap_or_default();

        let out_of_key = Self::out_of_key_count(&context.tonality, chromosome);

        self.gamma * out_of_key as f64
            + self.alpha * (own.mean - context.baseline.mean).abs()
            + self.beta * (own.variance - context.baseline.variance).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Phrase;

    fn context(baseline: ReferenceStatistics) -> FitnessContext {
        FitnessContext::new(IntervalQualityTable::default(), baseline, Tonality::c_major())
    }

    #[test]
    fn test_matching_profile_in_key_scores_zero() {
        // Seconds only: weights [3, 3], mean 3, variance 0
        let phrase = Phrase::from_pitches(&[60, 62, 64], 0.25);
        let ctx = context(ReferenceStatistics { mean: 3.0, variance: 0.0 });

        assert_eq!(DissonanceFitness::default().evaluate(&ctx, &phrase), 0.0);
    }

    #[test]
    fn test_out_of_key_notes_counted_per_note() {
        // C#4, F#4, C#5: all out of C major
        let phrase = Phrase::from_pitches(&[61, 66, 73], 0.25);
        let own = IntervalQualityTable::default().weights_of(&phrase);
        let ctx = context(ReferenceStatistics::from_weights(&own).unwrap());

        assert_eq!(DissonanceFitness::out_of_key_count(&ctx.tonality, &phrase), 3);
        assert_eq!(DissonanceFitness::default().evaluate(&ctx, &phrase), 3.0);
        assert_eq!(DissonanceFitness::new(1.0, 1.0, 0.5).evaluate(&ctx, &phrase), 1.5);
    }

    #[test]
    fn test_mean_and_variance_deviation() {
        // Weights [3, 1]: mean 2, variance 1
        let phrase = Phrase::from_pitches(&[60, 62, 67], 0.25);
        let ctx = context(ReferenceStatistics { mean: 1.5, variance: 0.25 });

        let score = DissonanceFitness::new(2.0, 4.0, 1.0).evaluate(&ctx, &phrase);
        // 2 * |2 - 1.5| + 4 * |1 - 0.25|
        assert_eq!(score, 4.0);
    }

    #[test]
    fn test_single_note_profile_is_zero() {
        let phrase = Phrase::from_pitches(&[60], 1.0);
        let ctx = context(ReferenceStatistics { mean: 2.0, variance: 0.5 });

        assert_eq!(DissonanceFitness::default().evaluate(&ctx, &phrase), 2.5);
    }

    #[test]
    fn test_closure_as_fitness_function() {
        let note_count = |_: &FitnessContext, phrase: &Phrase| phrase.len() as f64;
        let ctx = context(ReferenceStatistics::default());

        assert_eq!(note_count.evaluate(&ctx, &Phrase::from_pitches(&[60, 62], 0.5)), 2.0);
    }
}
