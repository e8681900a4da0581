use super::traits::ConfigSection;
use crate::error::BoxevolveError;
use serde::{Deserialize, Serialize};

/// Which agents compete in roulette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPool {
    Full,
    TopHalf,
}

/// Crossover cut-point distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverPolicy {
    /// Cut drawn uniformly from [0, genome_length).
    UniformCut,
    /// Cut drawn from Beta(2,5) scaled to genome_length. Early decisions
    /// matter more, so they get mixed more finely.
    FrontBiased,
}

/// Positional scaling applied to the per-gene mutation probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MutationBias {
    Uniform,
    /// First half of the genome mutates at rate * early_scale, second half
    /// at rate * late_scale.
    FrontLoaded { early_scale: f64, late_scale: f64 },
}

/// Genome seeding for generation zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedPolicy {
    /// Start from all-NOOP genomes and let mutation discover jumps.
    AllNoop,
    /// Uniform random Jump/Noop per gene.
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub genome_length: usize,
    pub mutation_rate: f64,
    pub mutation_bias: MutationBias,
    /// Probability of replacing global mutation with a windowed mutation
    /// centered on the later-dying parent's genome cursor.
    pub window_prob: f64,
    /// Half-width of the death-correlated mutation window, in genes.
    pub window_radius: usize,
    pub selection_pool: SelectionPool,
    pub crossover_policy: CrossoverPolicy,
    pub seed_policy: SeedPolicy,
    /// RNG seed for deterministic runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            genome_length: 120,
            mutation_rate: 0.1,
            mutation_bias: MutationBias::Uniform,
            window_prob: 0.0,
            window_radius: 100,
            selection_pool: SelectionPool::TopHalf,
            crossover_policy: CrossoverPolicy::FrontBiased,
            seed_policy: SeedPolicy::AllNoop,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), BoxevolveError> {
        let section = Self::section_name();
        if self.population_size < 2 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] population size must be at least 2",
                section
            )));
        }
        if self.genome_length == 0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] genome length must be at least 1",
                section
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] mutation rate must be between 0 and 1",
                section
            )));
        }
        if !(0.0..=1.0).contains(&self.window_prob) {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] window probability must be between 0 and 1",
                section
            )));
        }
        if let MutationBias::FrontLoaded {
            early_scale,
            late_scale,
        } = self.mutation_bias
        {
            if early_scale < 0.0 || late_scale < 0.0 {
                return Err(BoxevolveError::Configuration(format!(
                    "[{}] mutation bias scales must be non-negative",
                    section
                )));
            }
        }
        Ok(())
    }
}
