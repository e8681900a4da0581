pub mod traits;
pub mod simulation;
pub mod course;
pub mod evolution;
pub mod fitness;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use traits::ConfigSection;
pub use simulation::SimulationConfig;
pub use course::CourseConfig;
pub use evolution::{
    CrossoverPolicy, EvolutionConfig, MutationBias, SeedPolicy, SelectionPool,
};
pub use fitness::{FitnessConfig, FitnessScheme};
