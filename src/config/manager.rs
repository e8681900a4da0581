use super::{
    course::CourseConfig, evolution::EvolutionConfig, fitness::FitnessConfig,
    simulation::SimulationConfig, traits::ConfigSection,
};
use crate::error::BoxevolveError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub course: CourseConfig,
    pub evolution: EvolutionConfig,
    pub fitness: FitnessConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), BoxevolveError> {
        self.simulation.validate()?;
        self.course.validate()?;
        self.evolution.validate()?;
        self.fitness.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a config file, dispatching on extension: `.json` via serde_json,
    /// anything else is treated as TOML.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BoxevolveError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BoxevolveError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&contents)
                .map_err(|e| BoxevolveError::Configuration(format!("Failed to parse config: {}", e)))?
        } else {
            toml::from_str(&contents)
                .map_err(|e| BoxevolveError::Configuration(format!("Failed to parse config: {}", e)))?
        };

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BoxevolveError> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| BoxevolveError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| BoxevolveError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    /// Apply an edit and commit it only if the result validates; a rejected
    /// edit leaves the stored config untouched.
    pub fn update<F>(&self, f: F) -> Result<(), BoxevolveError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        let mut edited = config.clone();
        f(&mut edited);
        edited.validate()?;
        *config = edited;
        Ok(())
    }
}
