use super::agent::Agent;
use super::course::Course;
use crate::config::{FitnessConfig, SimulationConfig};
use rayon::prelude::*;

/// One generation's agents, in a fixed order.
///
/// Agents never read each other's state within a tick, so ticking is done in
/// parallel; the vector order is preserved, keeping fitness reduction and
/// log output deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct Population {
    agents: Vec<Agent>,
    generation: u64,
}

impl Population {
    pub fn new(agents: Vec<Agent>, generation: u64) -> Self {
        Self { agents, generation }
    }

    /// Advance every non-terminal agent by one tick.
    pub fn tick_all(&mut self, course: &Course, sim: &SimulationConfig, fit: &FitnessConfig) {
        self.agents
            .par_iter_mut()
            .for_each(|agent| agent.update(course, sim, fit));
    }

    /// The generational barrier: evolve may only run once this is true.
    pub fn all_terminal(&self) -> bool {
        self.agents.iter().all(Agent::is_terminal)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn best_fitness(&self) -> f64 {
        self.agents
            .iter()
            .map(Agent::fitness)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mean_fitness(&self) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.agents.iter().map(Agent::fitness).sum::<f64>() / self.agents.len() as f64
    }
}
