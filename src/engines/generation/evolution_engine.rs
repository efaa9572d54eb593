use crate::config::evolution::EvolutionConfig;
use crate::config::traits::ConfigSection;
use crate::engines::evaluation::baseline::ReferenceStatistics;
use crate::engines::evaluation::fitness::{FitnessContext, FitnessFunction};
use crate::engines::evaluation::quality_table::IntervalQualityTable;
use crate::engines::generation::chromosome::Chromosome;
use crate::engines::generation::operators::{crossover, mutate, selection_count, weighted_selection};
use crate::engines::generation::progress::ProgressCallback;
use crate::error::{MelodevoError, Result};
use crate::music::tonality::Tonality;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Best individual of one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult<C> {
    /// Zero-based generation index.
    pub generation: usize,
    pub best: C,
    pub fitness: f64,
    pub population_size: usize,
}

/// Generational evolutionary search over chromosomes.
///
/// The engine is a finite iterator: each `next()` runs exactly one
/// generation (selection, pairwise crossover and mutation, scoring) and
/// yields its best individual, for `generations` items in total. Dropping
/// the iterator early simply stops the run. A generation that ends with an
/// empty population yields an error and ends the iteration.
pub struct EvolutionEngine<C, F, R = StdRng>
where
    C: Chromosome,
    F: FitnessFunction<C>,
    R: Rng,
{
    config: EvolutionConfig,
    fitness: F,
    context: FitnessContext,
    population: Vec<C>,
    scores: Vec<f64>,
    generation: usize,
    failed: bool,
    rng: R,
}

impl<C, F> EvolutionEngine<C, F, StdRng>
where
    C: Chromosome,
    F: FitnessFunction<C>,
{
    /// Engine with the default interval table, seeded from `config.seed`
    /// (fresh entropy when unset).
    pub fn new(config: EvolutionConfig, population: Vec<C>, fitness: F, tonality: Tonality) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, population, fitness, tonality, rng)
    }
}

impl<C, F, R> EvolutionEngine<C, F, R>
where
    C: Chromosome,
    F: FitnessFunction<C>,
    R: Rng,
{
    pub fn with_rng(
        config: EvolutionConfig,
        population: Vec<C>,
        fitness: F,
        tonality: Tonality,
        rng: R,
    ) -> Result<Self> {
        Self::with_quality_table(
            config,
            population,
            fitness,
            IntervalQualityTable::default(),
            tonality,
            rng,
        )
    }

    /// Validates the configuration and freezes the baseline statistics of
    /// the seed population.
    pub fn with_quality_table(
        config: EvolutionConfig,
        population: Vec<C>,
        fitness: F,
        table: IntervalQualityTable,
        tonality: Tonality,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;

        let baseline = ReferenceStatistics::baseline(&table, &population)?;
        let context = FitnessContext::new(table, baseline, tonality);

        let mut engine = Self {
            config,
            fitness,
            context,
            population: Vec::new(),
            scores: Vec::new(),
            generation: 0,
            failed: false,
            rng,
        };
        engine.scores = engine.evaluate_population(&population);
        engine.population = population;

        log::info!(
            "Seed population of {} fragments, baseline mean = {:.4}, variance = {:.4}",
            engine.population.len(),
            baseline.mean,
            baseline.variance
        );
        Ok(engine)
    }

    /// Drive every remaining generation, reporting each to `callback`.
    /// Returns the best result of the run, or `None` if no generation was
    /// left to run.
    pub fn run<P: ProgressCallback<C>>(&mut self, callback: &mut P) -> Result<Option<GenerationResult<C>>> {
        let mut best: Option<GenerationResult<C>> = None;

        while !self.is_finished() {
            callback.on_generation_start(self.generation, self.config.generations);

            let result = match self.next() {
                Some(result) => result?,
                None => break,
            };
            callback.on_generation_complete(&result)?;

            let improved = best
                .as_ref()
                .map_or(true, |b| self.config.direction.is_better(result.fitness, b.fitness));
            if improved {
                best = Some(result);
            }
        }

        Ok(best)
    }

    pub fn is_finished(&self) -> bool {
        self.failed || self.generation >= self.config.generations
    }

    /// Number of generations run so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[C] {
        &self.population
    }

    /// Scores of the current population, index-aligned with `population()`.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn baseline(&self) -> ReferenceStatistics {
        self.context.baseline
    }

    pub fn context(&self) -> &FitnessContext {
        &self.context
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Run one generation regardless of the configured count. The iterator
    /// and `run` stop at `generations`; this does not.
    pub fn step(&mut self) -> Result<GenerationResult<C>> {
        let generation = self.generation;
        self.generation += 1;

        let direction = self.config.direction;
        let weights: Vec<f64> = self
            .scores
            .iter()
            .map(|&score| direction.selection_weight(score))
            .collect();
        let count = selection_count(self.config.selection_rate, self.population.len());
        let selected = weighted_selection(&self.population, &weights, count, &mut self.rng);

        let population = self.create_next_generation(selected);
        self.scores = self.evaluate_population(&population);
        self.population = population;

        let best_idx = direction
            .best_index(&self.scores)
            .ok_or(MelodevoError::EmptyPopulation { generation })?;

        let result = GenerationResult {
            generation,
            best: self.population[best_idx].clone(),
            fitness: self.scores[best_idx],
            population_size: self.population.len(),
        };
        log::debug!(
            "Generation {}: best fitness {:.4} among {} individuals",
            generation,
            result.fitness,
            result.population_size
        );
        Ok(result)
    }

    /// Pair the mating pool in order; an odd last individual is dropped.
    fn create_next_generation(&mut self, selected: Vec<C>) -> Vec<C> {
        if selected.len() % 2 == 1 {
            log::debug!("Dropping unpaired individual from a pool of {}", selected.len());
        }

        let mut next_generation = Vec::with_capacity(selected.len());
        let mut parents = selected.into_iter();

        while let (Some(parent1), Some(parent2)) = (parents.next(), parents.next()) {
            let (mut child1, mut child2) =
                crossover(parent1, parent2, self.config.crossover_rate, &mut self.rng);

            mutate(&mut child1, self.config.mutation_rate, &mut self.rng);
            mutate(&mut child2, self.config.mutation_rate, &mut self.rng);

            next_generation.push(child1);
            next_generation.push(child2);
        }

        next_generation
    }

    fn evaluate_population(&self, population: &[C]) -> Vec<f64> {
        population
            .iter()
            .map(|chromosome| self.fitness.evaluate(&self.context, chromosome))
            .collect()
    }
}

impl<C, F, R> Iterator for EvolutionEngine<C, F, R>
where
    C: Chromosome,
    F: FitnessFunction<C>,
    R: Rng,
{
    type Item = Result<GenerationResult<C>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let result = self.step();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.config.generations.saturating_sub(self.generation);
        (0, Some(remaining))
    }
}
