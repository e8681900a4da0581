use crate::config::AppConfig;
use crate::engines::evaluation::{Course, Population};
use crate::engines::generation::{EvolutionEngine, GenerationObserver};
use crate::error::Result;
use crate::types::GenerationStats;

/// Everything a running simulation owns: the immutable course, the current
/// population, the evolution engine, and the configs driving both. There is
/// no other simulation state; an external driver calls `tick` each frame and
/// `advance_generation` once `all_terminal` holds.
pub struct SimulationState {
    course: Course,
    population: Population,
    engine: EvolutionEngine,
    config: AppConfig,
}

impl SimulationState {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let course = Course::new(&config.course);
        let mut engine = EvolutionEngine::new(config.evolution.clone());
        let population = engine.seed_population(&config.simulation);
        Ok(Self {
            course,
            population,
            engine,
            config,
        })
    }

    /// Advance every non-terminal agent one tick.
    pub fn tick(&mut self) {
        self.population
            .tick_all(&self.course, &self.config.simulation, &self.config.fitness);
    }

    pub fn all_terminal(&self) -> bool {
        self.population.all_terminal()
    }

    /// Replace the population with its evolved successor. Only legal once
    /// every agent is terminal.
    pub fn advance_generation<O: GenerationObserver>(&mut self, observer: &mut O) -> Result<()> {
        self.population =
            self.engine
                .evolve(&self.population, &self.config.simulation, observer)?;
        Ok(())
    }

    /// Tick until the whole population is terminal, then evolve. Returns the
    /// summary of the completed generation.
    pub fn run_generation<O: GenerationObserver>(
        &mut self,
        observer: &mut O,
    ) -> Result<GenerationStats> {
        while !self.all_terminal() {
            self.tick();
        }
        let mut capture = CaptureObserver {
            inner: observer,
            stats: None,
        };
        self.advance_generation(&mut capture)?;
        let stats = capture.stats.expect("evolve reports exactly one summary");
        Ok(stats)
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

struct CaptureObserver<'a, O: GenerationObserver> {
    inner: &'a mut O,
    stats: Option<GenerationStats>,
}

impl<O: GenerationObserver> GenerationObserver for CaptureObserver<'_, O> {
    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        self.stats = Some(*stats);
        self.inner.on_generation_complete(stats);
    }
}
