pub mod chromosome;
pub mod evolution_engine;
pub mod objective;
pub mod operators;
pub mod progress;

pub use chromosome::Chromosome;
pub use evolution_engine::{EvolutionEngine, GenerationResult};
pub use objective::OptimizationDirection;
pub use operators::{crossover, mutate, selection_count, weighted_selection};
pub use progress::{LogProgressCallback, ProgressCallback};
