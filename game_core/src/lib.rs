pub mod arena;
pub mod components;
pub mod config;
pub mod params;
pub mod phase;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use phase::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the game simulation.
///
/// Ordering guarantee: the start signal and countdown clock are evaluated
/// first, then intents, then physics, then scoring. The physics pipeline
/// only runs while the phase is `Playing`.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    phase: &mut PhaseController,
    input: &FrameInput,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    dt_ms: f32,
) {
    events.clear();

    if input.start_pressed {
        phase.activate_start();
    }
    phase.tick(dt_ms);

    if !phase.is_playing() {
        return;
    }

    // 1. Normalize intents onto paddles (right side per mode)
    ingest_intents(world, input, config);

    // 2. Opponent drives the right paddle in single mode
    if config.mode == GameMode::Single {
        drive_opponent(world, arena, rng);
    }

    // 3. Apply intents and clamp both paddles
    move_paddles(world, arena);

    // 4. Integrate ball position
    move_ball(world);

    // 5. Resolve collisions (walls, then paddles)
    check_wall_bounce(world, arena, events, rng);
    check_paddle_bounce(world, arena, config, events, rng);

    // 6. Scoring and rally reset
    check_scoring(world, arena, config, score, events, rng);

    if events.point_scored() {
        phase.on_score(config.auto_start);
    }
}

/// Helper to create a paddle entity at its centered spawn
pub fn create_paddle(world: &mut World, side: Side, arena: &Arena) -> hecs::Entity {
    world.spawn((Paddle::new(side, arena.paddle_spawn_y()), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// A complete session: the world plus every resource the step needs.
///
/// One instance per mounted game view; nothing is shared between sessions,
/// so instances can coexist (parallel tests included).
pub struct LocalGame {
    pub world: World,
    pub arena: Arena,
    pub config: Config,
    pub phase: PhaseController,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub input: FrameInput,
}

impl LocalGame {
    pub fn new(arena: Arena, config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let phase = PhaseController::new(config.auto_start);

        create_paddle(&mut world, Side::Left, &arena);
        create_paddle(&mut world, Side::Right, &arena);

        let mut ball = Ball::new(arena.center(), Vec2::ZERO);
        ball.reset(&arena, 1.0, config.base_speed(), &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            arena,
            config,
            phase,
            score: Score::new(),
            events: Events::new(),
            rng,
            input: FrameInput::new(),
        }
    }

    /// Advance one frame using the intents currently staged in `input`.
    /// The start signal is edge-triggered and consumed here.
    pub fn frame(&mut self, dt_ms: f32) {
        let input = self.input;
        self.input.start_pressed = false;

        step(
            &mut self.world,
            &mut self.phase,
            &input,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            dt_ms,
        );
    }

    /// Current ball position and velocity
    pub fn ball(&self) -> Option<(Vec2, Vec2)> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| (b.pos, b.vel))
    }

    /// Current top-edge Y for a paddle side
    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap_or_else(|| self.arena.paddle_spawn_y())
    }
}
