use anyhow::Context;
use boxevolve::config::ConfigManager;
use boxevolve::engines::generation::ConsoleObserver;
use boxevolve::SimulationState;
use std::env;

/// Headless driver: runs the simulation generation by generation and logs
/// each summary. Rendering front-ends drive the same SimulationState API.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).filter(|s| s.as_str() != "-");
    let generations: u64 = args
        .get(2)
        .map(|s| s.parse())
        .transpose()
        .context("generations must be an integer")?
        .unwrap_or(50);

    let manager = ConfigManager::new();
    if let Some(path) = config_path {
        manager.load_from_file(path)?;
    }

    let mut state = SimulationState::new(manager.get())?;
    let mut observer = ConsoleObserver;

    log::info!(
        "Running {} generations, population {}, genome length {}",
        generations,
        state.config().evolution.population_size,
        state.config().evolution.genome_length
    );

    while state.generation() < generations {
        state.run_generation(&mut observer)?;
    }

    Ok(())
}
