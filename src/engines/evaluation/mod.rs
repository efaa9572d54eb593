pub mod baseline;
pub mod fitness;
pub mod quality_table;

pub use baseline::ReferenceStatistics;
pub use fitness::{DissonanceFitness, FitnessContext, FitnessFunction};
pub use quality_table::IntervalQualityTable;
