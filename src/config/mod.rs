pub mod corpus;
pub mod evolution;
pub mod manager;
pub mod output;
pub mod scoring;
pub mod traits;

pub use corpus::CorpusConfig;
pub use evolution::EvolutionConfig;
pub use manager::AppConfig;
pub use output::OutputConfig;
pub use scoring::ScoringConfig;
pub use traits::ConfigSection;
