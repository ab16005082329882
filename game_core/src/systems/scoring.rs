use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};

/// Check if the ball left the surface, award the point and reset the rally.
///
/// The phase controller reacts to the scored events after the step.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut serve_direction = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_right();
            events.right_scored = true;
            serve_direction = Some(1.0);
        } else if ball.pos.x > arena.width {
            score.increment_left();
            events.left_scored = true;
            serve_direction = Some(-1.0);
        }

        if let Some(direction) = serve_direction {
            ball.reset(arena, direction, config.base_speed(), rng);
        }
    }

    // A point also recenters both paddles
    if serve_direction.is_some() {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.y = arena.paddle_spawn_y();
        }
    }
}
