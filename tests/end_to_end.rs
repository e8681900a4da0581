use boxevolve::config::{CourseConfig, FitnessConfig, SimulationConfig};
use boxevolve::engines::evaluation::{Agent, Course};
use boxevolve::engines::generation::Genome;
use boxevolve::types::{AgentPhase, Decision, Rect};

const MAX_TICKS: usize = 10_000;

/// One obstacle spanning x in [300, 340], 40 high, and a ground-level goal
/// past x = 750. The jump impulse is sized so the first airborne tick
/// already clears the obstacle height.
fn scenario_sim() -> SimulationConfig {
    SimulationConfig {
        jump_velocity: 50.0,
        gravity: 1.0,
        agent_size: 5.0,
        ..SimulationConfig::default()
    }
}

fn scenario_course() -> Course {
    Course::new(&CourseConfig {
        obstacles: vec![Rect::new(300.0, 300.0, 340.0, 340.0)],
        goal: Rect::new(750.0, 290.0, 790.0, 340.0),
    })
}

fn run(agent: &mut Agent, course: &Course, sim: &SimulationConfig, fit: &FitnessConfig) {
    for _ in 0..MAX_TICKS {
        if agent.is_terminal() {
            return;
        }
        agent.update(course, sim, fit);
    }
    panic!("agent did not terminate");
}

#[test]
fn one_well_timed_jump_clears_the_obstacle_and_reaches_the_goal() {
    let sim = scenario_sim();
    let fit = FitnessConfig::default();
    let course = scenario_course();

    // Gene 96 fires on tick 97, at x = 5 + 3 * 97 = 296
    let mut decisions = vec![Decision::Noop; 120];
    decisions[96] = Decision::Jump;
    let mut agent = Agent::new(Genome::from_decisions(decisions), &sim);
    run(&mut agent, &course, &sim, &fit);

    assert_eq!(agent.phase(), AgentPhase::ReachedGoal);
    assert_eq!(agent.jumps_used(), 1);

    // Distance scheme: final x, plus one cleared obstacle, plus the goal
    let expected = agent.x() + fit.obstacle_bonus + fit.goal_bonus;
    assert!(
        (agent.fitness() - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        agent.fitness()
    );
    assert!(agent.x() > course.goal().min_x - sim.agent_size);
}

#[test]
fn without_the_jump_the_same_course_ends_in_a_crash() {
    let sim = scenario_sim();
    let fit = FitnessConfig::default();
    let course = scenario_course();

    let mut agent = Agent::new(Genome::all_noop(120), &sim);
    run(&mut agent, &course, &sim, &fit);

    assert_eq!(agent.phase(), AgentPhase::Crashed);
    assert!(agent.x() < 340.0, "crash must happen at the obstacle");
    assert!(agent.fitness() < fit.goal_bonus);
}

#[test]
fn a_jump_scheduled_past_the_crash_point_never_fires() {
    let sim = scenario_sim();
    let fit = FitnessConfig::default();
    let course = scenario_course();

    // Gene 104 would fire on tick 105 at x = 320, but the crash at x = 296
    // ends decision consumption first
    let mut decisions = vec![Decision::Noop; 120];
    decisions[104] = Decision::Jump;
    let mut agent = Agent::new(Genome::from_decisions(decisions), &sim);
    run(&mut agent, &course, &sim, &fit);

    assert_eq!(agent.phase(), AgentPhase::Crashed);
    assert_eq!(agent.jumps_used(), 0);
    assert_eq!(agent.genes_consumed(), 97);
}
