use super::traits::ConfigSection;
use crate::error::BoxevolveError;
use serde::{Deserialize, Serialize};

/// Physics and track constants. All values are injected at process start and
/// never change while a simulation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub track_width: f64,
    pub track_height: f64,
    /// Ground line in screen coordinates (y grows downward).
    pub ground_y: f64,
    /// Side length of the square agent bounding box.
    pub agent_size: f64,
    /// Agent spawn x at generation start.
    pub start_x: f64,
    pub horizontal_speed: f64,
    pub gravity: f64,
    /// Upward impulse applied on a jump (stored positive, applied negative).
    pub jump_velocity: f64,
    /// Ticks an agent waits in PreStart before physics begins.
    pub start_delay_ticks: u32,
    /// Ticks per second the external driver should pace at. The core never
    /// sleeps; this is advisory for the caller.
    pub tick_rate: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            track_width: 800.0,
            track_height: 400.0,
            ground_y: 340.0,
            agent_size: 20.0,
            start_x: 5.0,
            horizontal_speed: 3.0,
            gravity: 0.5,
            jump_velocity: 10.0,
            start_delay_ticks: 0,
            tick_rate: 60,
        }
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<(), BoxevolveError> {
        let section = Self::section_name();
        if self.horizontal_speed <= 0.0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] horizontal speed must be positive",
                section
            )));
        }
        if self.gravity <= 0.0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] gravity must be positive",
                section
            )));
        }
        if self.jump_velocity <= 0.0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] jump velocity must be positive",
                section
            )));
        }
        if self.ground_y <= 0.0 || self.ground_y > self.track_height {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] ground line must lie within the track",
                section
            )));
        }
        if self.agent_size <= 0.0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] agent size must be positive",
                section
            )));
        }
        if self.tick_rate == 0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] tick rate must be at least 1",
                section
            )));
        }
        Ok(())
    }
}
