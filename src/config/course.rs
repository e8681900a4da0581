use super::traits::ConfigSection;
use crate::error::BoxevolveError;
use crate::types::Rect;
use serde::{Deserialize, Serialize};

/// Obstacle and goal layout. Fixed for the process lifetime; the derived
/// threshold list lives on `Course`, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    pub obstacles: Vec<Rect>,
    pub goal: Rect,
}

impl Default for CourseConfig {
    fn default() -> Self {
        // Two-obstacle layout on an 800x400 track with the ground at y=340.
        Self {
            obstacles: vec![
                Rect::new(250.0, 300.0, 290.0, 340.0),
                Rect::new(600.0, 280.0, 640.0, 340.0),
            ],
            goal: Rect::new(750.0, 290.0, 790.0, 340.0),
        }
    }
}

impl ConfigSection for CourseConfig {
    fn section_name() -> &'static str {
        "course"
    }

    fn validate(&self) -> Result<(), BoxevolveError> {
        let section = Self::section_name();
        for (i, obs) in self.obstacles.iter().enumerate() {
            if obs.width() <= 0.0 || obs.height() <= 0.0 {
                return Err(BoxevolveError::Configuration(format!(
                    "[{}] obstacle {} has a degenerate extent",
                    section, i
                )));
            }
        }
        if self.goal.width() <= 0.0 || self.goal.height() <= 0.0 {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] goal region has a degenerate extent",
                section
            )));
        }
        if self
            .obstacles
            .iter()
            .any(|obs| obs.intersects(&self.goal))
        {
            return Err(BoxevolveError::Configuration(format!(
                "[{}] an obstacle overlaps the goal region",
                section
            )));
        }
        Ok(())
    }
}
