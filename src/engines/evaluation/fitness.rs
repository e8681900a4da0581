use super::course::Course;
use crate::config::FitnessConfig;

/// Shaped score for an agent at `x`: cleared-obstacle bonuses, partial
/// credit toward the next uncleared obstacle, and the goal bonus once the
/// goal's left edge is behind the agent. The jump penalty is not included
/// here; it is deducted once at terminal time.
pub fn shaped_score(course: &Course, x: f64, start_x: f64, config: &FitnessConfig) -> f64 {
    let cleared = course.cleared_count(x) as f64 * config.obstacle_bonus;
    let partial = course
        .progress_to_next(x, start_x)
        .map(|fraction| fraction * config.obstacle_bonus)
        .unwrap_or(0.0);
    let goal = if x > course.goal().min_x {
        config.goal_bonus
    } else {
        0.0
    };
    cleared + partial + goal
}

/// One-shot bonus added when a distance-scored agent goes terminal.
pub fn clearance_bonus(course: &Course, x: f64, config: &FitnessConfig) -> f64 {
    course.cleared_count(x) as f64 * config.obstacle_bonus
}
