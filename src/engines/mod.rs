pub mod evaluation;
pub mod generation;
pub mod runner;

pub use evaluation::{Agent, Course, Population};
pub use generation::{EvolutionEngine, GenerationObserver, Genome};
pub use runner::SimulationState;
