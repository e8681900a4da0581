use super::traits::ConfigSection;
use crate::error::BoxevolveError;
use serde::{Deserialize, Serialize};

/// How agents are scored. Both schemes are valid behavior profiles; the
/// distance scheme is the default because its monotone signal keeps early
/// generations from collapsing to zero selection pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessScheme {
    /// fitness = max x reached; cleared-obstacle bonus and goal bonus added
    /// once at terminal time.
    Distance,
    /// fitness = cleared bonuses + partial credit toward the next uncleared
    /// obstacle + goal bonus, with a one-time jump penalty at terminal time.
    Shaped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessConfig {
    pub scheme: FitnessScheme,
    /// Bonus per obstacle whose right edge the agent has passed.
    pub obstacle_bonus: f64,
    /// Bonus for touching the goal (Distance) or passing its left edge (Shaped).
    pub goal_bonus: f64,
    /// Shaped scheme only: deducted per executed jump at terminal time.
    pub jump_penalty: f64,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            scheme: FitnessScheme::Distance,
            obstacle_bonus: 300.0,
            goal_bonus: 10_000.0,
            jump_penalty: 10.0,
        }
    }
}

impl ConfigSection for FitnessConfig {
    fn section_name() -> &'static str {
        "fitness"
    }

    fn validate(&self) -> Result<(), BoxevolveError> {
        let section = Self::section_name();
        if self.obstacle_bonus < 0.0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] obstacle bonus must be non-negative",
                section
            )));
        }
        if self.goal_bonus < 0.0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] goal bonus must be non-negative",
                section
            )));
        }
        if self.jump_penalty < 0.0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] jump penalty must be non-negative",
                section
            )));
        }
        Ok(())
    }
}
