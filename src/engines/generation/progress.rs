use super::chromosome::Chromosome;
use super::evolution_engine::GenerationResult;
use crate::error::Result;

/// Observer of a run driven by `EvolutionEngine::run`.
pub trait ProgressCallback<C: Chromosome> {
    fn on_generation_start(&mut self, _generation: usize, _total: usize) {}

    /// An error stops the run.
    fn on_generation_complete(&mut self, result: &GenerationResult<C>) -> Result<()>;
}

/// Reports every generation through the `log` facade.
pub struct LogProgressCallback;

impl<C: Chromosome> ProgressCallback<C> for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize, total: usize) {
        log::debug!("Generation {}/{} starting...", generation + 1, total);
    }

    fn on_generation_complete(&mut self, result: &GenerationResult<C>) -> Result<()> {
        log::info!(
            "Epoch = {}; Best Fitness = {:.4}; Population = {}",
            result.generation,
            result.fitness,
            result.population_size
        );
        Ok(())
    }
}

/// Fan out to two callbacks, left first.
impl<C, A, B> ProgressCallback<C> for (A, B)
where
    C: Chromosome,
    A: ProgressCallback<C>,
    B: ProgressCallback<C>,
{
    fn on_generation_start(&mut self, generation: usize, total: usize) {
        self.0.on_generation_start(generation, total);
        self.1.on_generation_start(generation, total);
    }

    fn on_generation_complete(&mut self, result: &GenerationResult<C>) -> Result<()> {
        self.0.on_generation_complete(result)?;
        self.1.on_generation_complete(result)
    }
}
