use super::genome::Genome;
use super::operators::{crossover, mutate, mutate_windowed, roulette_select};
use crate::config::{EvolutionConfig, SeedPolicy, SelectionPool, SimulationConfig};
use crate::engines::evaluation::{Agent, Population};
use crate::error::{BoxevolveError, Result};
use crate::types::{AgentPhase, GenerationStats};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Receives the per-generation summary after each evolve call. Diagnostics
/// only; implementations must not feed anything back into the core.
pub trait GenerationObserver {
    fn on_generation_complete(&mut self, stats: &GenerationStats);
}

/// Builds each next generation from a fully terminal population.
///
/// All randomness flows through one seedable RNG, so a seeded engine driving
/// a fixed course replays identically.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    rng: StdRng,
    generation: u64,
    all_time_best: f64,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            generation: 0,
            all_time_best: f64::NEG_INFINITY,
        }
    }

    /// Generations completed so far; incremented once per evolve call.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn all_time_best(&self) -> f64 {
        self.all_time_best
    }

    /// Build generation zero.
    pub fn seed_population(&mut self, sim: &SimulationConfig) -> Population {
        let agents = (0..self.config.population_size)
            .map(|_| {
                let genome = match self.config.seed_policy {
                    SeedPolicy::AllNoop => Genome::all_noop(self.config.genome_length),
                    SeedPolicy::Random => Genome::random(self.config.genome_length, &mut self.rng),
                };
                Agent::new(genome, sim)
            })
            .collect();
        Population::new(agents, self.generation)
    }

    /// Consume a terminal population and produce the next one, same size,
    /// every agent reset to initial physical state with zero fitness.
    pub fn evolve<O: GenerationObserver>(
        &mut self,
        population: &Population,
        sim: &SimulationConfig,
        observer: &mut O,
    ) -> Result<Population> {
        if population.is_empty() {
            return Err(BoxevolveError::Evolution(
                "cannot evolve an empty population".to_string(),
            ));
        }
        if !population.all_terminal() {
            return Err(BoxevolveError::Evolution(
                "generation barrier violated: evolve called before every agent was terminal"
                    .to_string(),
            ));
        }

        let pool = self.selection_pool(population);
        let pool_fitness: Vec<f64> = pool.iter().map(|agent| agent.fitness()).collect();

        let mut children = Vec::with_capacity(self.config.population_size);
        while children.len() < self.config.population_size {
            let p1 = pool[roulette_select(&pool_fitness, &mut self.rng)];
            let p2 = pool[roulette_select(&pool_fitness, &mut self.rng)];

            let mut child = crossover(
                p1.genome(),
                p2.genome(),
                self.config.crossover_policy,
                &mut self.rng,
            )?;

            if self.rng.gen::<f64>() < self.config.window_prob {
                // Focus new mutations where the later-dying parent ran out
                // of road
                let center = p1
                    .genes_consumed()
                    .max(p2.genes_consumed())
                    .saturating_sub(1);
                mutate_windowed(
                    &mut child,
                    self.config.mutation_rate,
                    center,
                    self.config.window_radius,
                    &mut self.rng,
                );
            } else {
                mutate(
                    &mut child,
                    self.config.mutation_rate,
                    self.config.mutation_bias,
                    &mut self.rng,
                );
            }

            children.push(Agent::new(child, sim));
        }

        let stats = self.summarize(population);
        self.generation += 1;
        observer.on_generation_complete(&stats);

        Ok(Population::new(children, self.generation))
    }

    fn selection_pool<'a>(&self, population: &'a Population) -> Vec<&'a Agent> {
        let mut ranked: Vec<&Agent> = population.agents().iter().collect();
        ranked.sort_by(|a, b| {
            b.fitness()
                .partial_cmp(&a.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        match self.config.selection_pool {
            SelectionPool::Full => ranked,
            SelectionPool::TopHalf => {
                let keep = (ranked.len() / 2).max(1);
                ranked.truncate(keep);
                ranked
            }
        }
    }

    fn summarize(&mut self, population: &Population) -> GenerationStats {
        let best = population.best_fitness();
        if best > self.all_time_best {
            self.all_time_best = best;
        }
        GenerationStats {
            generation: population.generation(),
            best_fitness: best,
            mean_fitness: population.mean_fitness(),
            all_time_best: self.all_time_best,
            goal_reachers: population
                .agents()
                .iter()
                .filter(|agent| agent.phase() == AgentPhase::ReachedGoal)
                .count(),
        }
    }
}
