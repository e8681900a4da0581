use crate::config::CourseConfig;
use crate::types::Rect;

/// Immutable obstacle/goal layout shared read-only by every agent.
///
/// Construction derives the ascending sequence of obstacle right edges
/// ("thresholds") once; fitness shaping counts how many of them an agent
/// has passed.
#[derive(Debug, Clone)]
pub struct Course {
    obstacles: Vec<Rect>,
    goal: Rect,
    thresholds: Vec<f64>,
}

impl Course {
    pub fn new(config: &CourseConfig) -> Self {
        let mut thresholds: Vec<f64> = config.obstacles.iter().map(|obs| obs.max_x).collect();
        thresholds.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            obstacles: config.obstacles.clone(),
            goal: config.goal,
            thresholds,
        }
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    pub fn goal(&self) -> &Rect {
        &self.goal
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn hits_obstacle(&self, body: &Rect) -> bool {
        self.obstacles.iter().any(|obs| body.intersects(obs))
    }

    pub fn touches_goal(&self, body: &Rect) -> bool {
        body.intersects(&self.goal)
    }

    /// Number of obstacle right edges strictly behind `x`.
    pub fn cleared_count(&self, x: f64) -> usize {
        self.thresholds.iter().filter(|&&th| x > th).count()
    }

    /// Fraction of the way from the previous threshold (or `start_x`) to the
    /// next uncleared one, in [0, 1]. None once every obstacle is cleared.
    pub fn progress_to_next(&self, x: f64, start_x: f64) -> Option<f64> {
        let cleared = self.cleared_count(x);
        let next = *self.thresholds.get(cleared)?;
        let prev = if cleared == 0 {
            start_x
        } else {
            self.thresholds[cleared - 1]
        };
        if next <= prev {
            return Some(0.0);
        }
        Some(((x - prev) / (next - prev)).clamp(0.0, 1.0))
    }
}
