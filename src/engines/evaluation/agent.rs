use super::course::Course;
use super::fitness;
use crate::config::{FitnessConfig, FitnessScheme, SimulationConfig};
use crate::engines::generation::Genome;
use crate::types::{AgentPhase, Decision, Rect};

/// RGB tag for the external renderer; the core never draws.
pub const COLOR_ALIVE: (u8, u8, u8) = (0, 150, 200);
pub const COLOR_TERMINAL: (u8, u8, u8) = (200, 200, 0);

/// A simulated box: constant forward speed, gravity, jump impulses, and a
/// genome deciding one jump/no-op per tick.
///
/// The agent owns its genome exclusively; the evolution engine only reads it
/// during crossover. All per-tick state changes happen in `update`, which is
/// RNG-free, so a genome replayed against the same course always produces
/// the same trajectory.
#[derive(Debug, Clone)]
pub struct Agent {
    x: f64,
    y: f64,
    vel_y: f64,
    on_ground: bool,
    phase: AgentPhase,
    cursor: usize,
    genome: Genome,
    fitness: f64,
    jumps_used: usize,
    terminal_scored: bool,
}

impl Agent {
    pub fn new(genome: Genome, sim: &SimulationConfig) -> Self {
        let phase = if sim.start_delay_ticks > 0 {
            AgentPhase::PreStart {
                remaining: sim.start_delay_ticks,
            }
        } else {
            AgentPhase::Alive
        };
        Self {
            x: sim.start_x,
            y: sim.ground_y,
            vel_y: 0.0,
            on_ground: true,
            phase,
            cursor: 0,
            genome,
            fitness: 0.0,
            jumps_used: 0,
            terminal_scored: false,
        }
    }

    /// Advance one simulation tick. Terminal agents ignore further calls;
    /// the terminal-time fitness accounting runs exactly once.
    pub fn update(&mut self, course: &Course, sim: &SimulationConfig, fit: &FitnessConfig) {
        match self.phase {
            AgentPhase::PreStart { remaining } => {
                self.phase = if remaining <= 1 {
                    AgentPhase::Alive
                } else {
                    AgentPhase::PreStart {
                        remaining: remaining - 1,
                    }
                };
            }
            AgentPhase::Alive => self.step(course, sim, fit),
            AgentPhase::Crashed | AgentPhase::ReachedGoal => {}
        }
    }

    fn step(&mut self, course: &Course, sim: &SimulationConfig, fit: &FitnessConfig) {
        // Constant forward movement
        self.x += sim.horizontal_speed;

        // One decision per tick; an exhausted genome coasts
        let action = self.genome.get(self.cursor).unwrap_or(Decision::Noop);
        if self.cursor < self.genome.len() {
            self.cursor += 1;
        }

        if action == Decision::Jump && self.on_ground {
            self.vel_y = -sim.jump_velocity;
            self.on_ground = false;
            self.jumps_used += 1;
        }

        // Gravity, then ground clamp
        self.vel_y += sim.gravity;
        self.y += self.vel_y;
        if self.y >= sim.ground_y {
            self.y = sim.ground_y;
            self.vel_y = 0.0;
            self.on_ground = true;
        }

        let body = self.body(sim);
        if course.hits_obstacle(&body) {
            self.finish(AgentPhase::Crashed, course, sim, fit);
            return;
        }
        if course.touches_goal(&body) {
            self.finish(AgentPhase::ReachedGoal, course, sim, fit);
            return;
        }
        // Leaping the goal would otherwise run forever
        if self.x > sim.track_width {
            self.finish(AgentPhase::Crashed, course, sim, fit);
            return;
        }

        match fit.scheme {
            FitnessScheme::Distance => {
                self.fitness = self.fitness.max(self.x);
            }
            FitnessScheme::Shaped => {
                self.fitness = fitness::shaped_score(course, self.x, sim.start_x, fit);
            }
        }
    }

    fn finish(
        &mut self,
        terminal: AgentPhase,
        course: &Course,
        sim: &SimulationConfig,
        fit: &FitnessConfig,
    ) {
        debug_assert!(terminal.is_terminal());
        self.phase = terminal;
        if self.terminal_scored {
            return;
        }
        self.terminal_scored = true;

        match fit.scheme {
            FitnessScheme::Distance => {
                self.fitness = self.fitness.max(self.x);
                self.fitness += fitness::clearance_bonus(course, self.x, fit);
                if terminal == AgentPhase::ReachedGoal {
                    self.fitness += fit.goal_bonus;
                }
            }
            FitnessScheme::Shaped => {
                self.fitness = fitness::shaped_score(course, self.x, sim.start_x, fit);
                if terminal == AgentPhase::ReachedGoal && self.x <= course.goal().min_x {
                    // Touched the goal's near face before passing its edge
                    self.fitness += fit.goal_bonus;
                }
                self.fitness -= fit.jump_penalty * self.jumps_used as f64;
            }
        }
    }

    fn body(&self, sim: &SimulationConfig) -> Rect {
        Rect::new(
            self.x,
            self.y - sim.agent_size,
            self.x + sim.agent_size,
            self.y,
        )
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn phase(&self) -> AgentPhase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Genes consumed so far; for a terminal agent this is its death cursor.
    pub fn genes_consumed(&self) -> usize {
        self.cursor
    }

    pub fn jumps_used(&self) -> usize {
        self.jumps_used
    }

    /// Display tag for the rendering collaborator.
    pub fn color(&self) -> (u8, u8, u8) {
        if self.is_terminal() {
            COLOR_TERMINAL
        } else {
            COLOR_ALIVE
        }
    }
}
