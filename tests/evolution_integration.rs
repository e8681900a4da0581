use boxevolve::config::{AppConfig, EvolutionConfig, SeedPolicy, SelectionPool};
use boxevolve::engines::evaluation::Course;
use boxevolve::engines::generation::{ChannelObserver, NullObserver};
use boxevolve::types::AgentPhase;
use boxevolve::SimulationState;
use std::sync::mpsc;

const MAX_TICKS: usize = 100_000;

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.evolution = EvolutionConfig {
        population_size: 20,
        seed: Some(42),
        ..EvolutionConfig::default()
    };
    config
}

fn tick_until_terminal(state: &mut SimulationState) {
    for _ in 0..MAX_TICKS {
        if state.all_terminal() {
            return;
        }
        state.tick();
    }
    panic!("population did not terminate within {} ticks", MAX_TICKS);
}

#[test]
fn evolve_returns_a_fresh_population_of_the_same_size() {
    let config = test_config();
    let genome_length = config.evolution.genome_length;
    let start_x = config.simulation.start_x;
    let population_size = config.evolution.population_size;

    let mut state = SimulationState::new(config).unwrap();
    assert_eq!(state.generation(), 0);
    assert_eq!(state.population().len(), population_size);

    tick_until_terminal(&mut state);
    state.advance_generation(&mut NullObserver).unwrap();

    assert_eq!(state.generation(), 1);
    assert_eq!(state.population().len(), population_size);
    assert_eq!(state.population().generation(), 1);
    for agent in state.population().agents() {
        assert_eq!(agent.genome().len(), genome_length);
        assert_eq!(agent.x(), start_x);
        assert_eq!(agent.fitness(), 0.0);
        assert!(!agent.is_terminal());
        assert_eq!(agent.genes_consumed(), 0);
    }
}

#[test]
fn evolve_before_the_barrier_is_an_error() {
    let mut state = SimulationState::new(test_config()).unwrap();
    state.tick();
    let err = state.advance_generation(&mut NullObserver).unwrap_err();
    assert!(err.to_string().contains("barrier"));
}

#[test]
fn generation_counter_and_all_time_best_are_consistent() {
    let (tx, rx) = mpsc::channel();
    let mut observer = ChannelObserver::new(tx);

    let mut state = SimulationState::new(test_config()).unwrap();
    for expected in 0..10u64 {
        let stats = state.run_generation(&mut observer).unwrap();
        assert_eq!(stats.generation, expected);
        assert_eq!(state.generation(), expected + 1);
    }

    let all_stats: Vec<_> = rx.try_iter().collect();
    assert_eq!(all_stats.len(), 10);
    let mut running_best = f64::NEG_INFINITY;
    for stats in &all_stats {
        assert!(stats.best_fitness <= stats.all_time_best);
        assert!(stats.all_time_best >= running_best);
        assert!(stats.mean_fitness <= stats.best_fitness + 1e-9);
        running_best = stats.all_time_best;
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let mut state = SimulationState::new(test_config()).unwrap();
        for _ in 0..5 {
            state.run_generation(&mut NullObserver).unwrap();
        }
        state
            .population()
            .agents()
            .iter()
            .map(|agent| agent.genome().clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn full_pool_and_random_seeding_also_converge_to_a_valid_generation() {
    let mut config = test_config();
    config.evolution.selection_pool = SelectionPool::Full;
    config.evolution.seed_policy = SeedPolicy::Random;
    config.evolution.window_prob = 0.6;
    let population_size = config.evolution.population_size;

    let mut state = SimulationState::new(config).unwrap();
    for _ in 0..3 {
        let stats = state.run_generation(&mut NullObserver).unwrap();
        assert!(stats.best_fitness.is_finite());
    }
    assert_eq!(state.population().len(), population_size);
}

#[test]
fn goal_reachers_are_counted_in_the_stats() {
    // Open course: every all-noop agent walks straight into the goal
    let mut config = test_config();
    config.course.obstacles.clear();

    let mut state = SimulationState::new(config).unwrap();
    let stats = state.run_generation(&mut NullObserver).unwrap();
    assert_eq!(stats.goal_reachers, state.population().len());
}

#[test]
fn course_thresholds_come_from_the_configured_obstacles() {
    let config = test_config();
    let course = Course::new(&config.course);
    assert_eq!(course.thresholds(), &[290.0, 640.0]);
}

#[test]
fn population_reports_terminal_phases() {
    let mut state = SimulationState::new(test_config()).unwrap();
    tick_until_terminal(&mut state);
    for agent in state.population().agents() {
        assert!(matches!(
            agent.phase(),
            AgentPhase::Crashed | AgentPhase::ReachedGoal
        ));
    }
}
