pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod progress;

pub use evolution_engine::{EvolutionEngine, GenerationObserver};
pub use genome::Genome;
pub use progress::{ChannelObserver, ConsoleObserver, NullObserver};
