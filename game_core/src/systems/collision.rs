use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::params::Params;
use crate::resources::{Events, GameRng};

/// Reflect the ball off the top/bottom walls with a randomized damping
/// factor and a small horizontal deflection. The velocity-direction guard
/// keeps a bounce from resolving twice across frames.
pub fn check_wall_bounce(world: &mut World, arena: &Arena, events: &mut Events, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = Params::BALL_RADIUS;
        let hit_top = ball.pos.y <= r && ball.vel.y < 0.0;
        let hit_bottom = ball.pos.y >= arena.height - r && ball.vel.y > 0.0;
        if !(hit_top || hit_bottom) {
            continue;
        }

        ball.vel.y = -ball.vel.y * rng.range(Params::WALL_DAMPING_MIN, Params::WALL_DAMPING_MAX);
        ball.vel.x += rng.range(-Params::WALL_DEFLECT, Params::WALL_DEFLECT);
        ball.pos.y = ball.pos.y.clamp(r, arena.height - r);
        events.ball_hit_wall = true;
    }
}

/// Resolve ball/paddle hits: reflect the horizontal velocity with a
/// randomized scale, set the vertical velocity from where on the paddle the
/// ball struck (spin), then perturb the horizontal velocity again.
pub fn check_paddle_bounce(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !paddle_hit(ball, paddle, arena) {
                continue;
            }

            // Normalized offset of ball-y from paddle center, in [-1, 1]
            let hit_pos = (ball.pos.y - paddle.center_y()) / (Params::PADDLE_HEIGHT / 2.0);
            let spin = hit_pos * Params::SPIN_STRENGTH
                + rng.range(-Params::SPIN_JITTER, Params::SPIN_JITTER);

            ball.vel.x =
                -ball.vel.x * rng.range(Params::PADDLE_SCALE_MIN, Params::PADDLE_SCALE_MAX);
            ball.vel.y = spin;
            ball.vel.x += rng.range(-Params::PADDLE_DEFLECT, Params::PADDLE_DEFLECT);

            // Explicit speed policy: collision scaling never grows the ball
            // past a fixed multiple of the configured base speed.
            let speed = ball.vel.length();
            let cap = config.max_speed();
            if speed > cap {
                ball.vel *= cap / speed;
            }

            events.ball_hit_paddle = true;
        }
    }
}

/// Hit test: leading edge crosses the paddle's x-plane, ball y within the
/// paddle's vertical extent, and the ball is moving toward the paddle.
fn paddle_hit(ball: &Ball, paddle: &Paddle, arena: &Arena) -> bool {
    let x = arena.paddle_x(paddle.side);
    let in_extent = ball.pos.y >= paddle.y && ball.pos.y <= paddle.y + Params::PADDLE_HEIGHT;
    match paddle.side {
        Side::Left => {
            ball.pos.x <= x + Params::PADDLE_WIDTH + Params::BALL_RADIUS
                && in_extent
                && ball.vel.x < 0.0
        }
        Side::Right => ball.pos.x >= x - Params::BALL_RADIUS && in_extent && ball.vel.x > 0.0,
    }
}
