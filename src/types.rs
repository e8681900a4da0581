use serde::{Deserialize, Serialize};

/// A single genome entry: jump this tick, or do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Jump,
    Noop,
}

impl Decision {
    pub fn flipped(self) -> Self {
        match self {
            Decision::Jump => Decision::Noop,
            Decision::Noop => Decision::Jump,
        }
    }
}

/// Axis-aligned rectangle in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Agent lifecycle. `Crashed` and `ReachedGoal` are both terminal; a crash is
/// a normal simulated outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentPhase {
    PreStart { remaining: u32 },
    Alive,
    Crashed,
    ReachedGoal,
}

impl AgentPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AgentPhase::Crashed | AgentPhase::ReachedGoal)
    }
}

/// Per-generation summary delivered to observers after each evolve call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub all_time_best: f64,
    pub goal_reachers: usize,
}
