use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle, Side};
use crate::params::Params;
use crate::resources::GameRng;

/// Drive the right paddle in single-player mode.
///
/// Tracks the ball only once it is inbound and past the midpoint, with a
/// mistake chance and a reaction-lag blend so the opponent stays beatable.
/// While the ball is elsewhere the paddle drifts back toward center.
pub fn drive_opponent(world: &mut World, arena: &Arena, rng: &mut GameRng) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, b)| (b.pos, b.vel));

    let Some((ball_pos, ball_vel)) = ball else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }

        let tracking = ball_vel.x > 0.0 && ball_pos.x > arena.width / 2.0;
        if tracking {
            let target_y = if rng.chance(Params::AI_MISTAKE_CHANCE) {
                // Missed read: aim somewhere near the ball, not at it
                ball_pos.y + rng.range(-Params::AI_MISTAKE_SPREAD, Params::AI_MISTAKE_SPREAD)
            } else {
                // Reaction lag: blend of ball position and current position
                ball_pos.y * Params::AI_REACTION_BLEND
                    + paddle.center_y() * (1.0 - Params::AI_REACTION_BLEND)
            };

            let diff = target_y - paddle.center_y();
            if diff.abs() > Params::AI_TRACK_DEADZONE {
                let speed = Params::AI_MAX_SPEED.min(diff.abs() * Params::AI_GAIN);
                paddle.y += speed.copysign(diff);
            }
        } else {
            let diff = arena.paddle_spawn_y() - paddle.y;
            if diff.abs() > Params::AI_RECENTER_DEADZONE {
                paddle.y += diff * Params::AI_RECENTER_FACTOR;
            }
        }
    }
}
