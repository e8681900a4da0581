pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use engines::SimulationState;
pub use error::{BoxevolveError, Result};
