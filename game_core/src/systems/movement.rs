use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle, PaddleIntent, Side};
use crate::config::{Config, GameMode};
use crate::params::Params;
use crate::resources::FrameInput;

/// Copy the frame's normalized intents onto the paddle entities.
///
/// In single mode the right paddle ignores human intents; the opponent
/// system drives it directly.
pub fn ingest_intents(world: &mut World, input: &FrameInput, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        match paddle.side {
            Side::Left => {
                intent.up = input.left_up;
                intent.down = input.left_down;
            }
            Side::Right => {
                if config.mode == GameMode::Multi {
                    intent.up = input.right_up;
                    intent.down = input.right_down;
                } else {
                    intent.clear();
                }
            }
        }
    }
}

/// Apply held intents as fixed per-frame steps, then clamp every paddle to
/// the surface. Clamping runs unconditionally so out-of-range positions are
/// corrected rather than reported.
pub fn move_paddles(world: &mut World, arena: &Arena) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up {
            paddle.y -= Params::PADDLE_STEP;
        }
        if intent.down {
            paddle.y += Params::PADDLE_STEP;
        }
        paddle.y = arena.clamp_paddle_y(paddle.y);
    }
}

/// Integrate ball position one frame
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_intents_move_left_paddle() {
        let mut world = World::new();
        let arena = Arena::new(800.0, 400.0);
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Left, &arena);

        let input = FrameInput {
            left_up: true,
            ..Default::default()
        };
        ingest_intents(&mut world, &input, &config);
        move_paddles(&mut world, &arena);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, arena.paddle_spawn_y() - Params::PADDLE_STEP);
    }

    #[test]
    fn test_right_paddle_ignores_intents_in_single_mode() {
        let mut world = World::new();
        let arena = Arena::new(800.0, 400.0);
        let config = Config::new(); // single
        let entity = create_paddle(&mut world, Side::Right, &arena);

        let input = FrameInput {
            right_down: true,
            ..Default::default()
        };
        ingest_intents(&mut world, &input, &config);
        move_paddles(&mut world, &arena);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, arena.paddle_spawn_y());
    }

    #[test]
    fn test_right_paddle_follows_intents_in_multi_mode() {
        let mut world = World::new();
        let arena = Arena::new(800.0, 400.0);
        let mut config = Config::new();
        config.mode = GameMode::Multi;
        let entity = create_paddle(&mut world, Side::Right, &arena);

        let input = FrameInput {
            right_down: true,
            ..Default::default()
        };
        ingest_intents(&mut world, &input, &config);
        move_paddles(&mut world, &arena);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, arena.paddle_spawn_y() + Params::PADDLE_STEP);
    }

    #[test]
    fn test_paddles_clamp_to_surface() {
        let mut world = World::new();
        let arena = Arena::new(800.0, 400.0);
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Left, &arena);

        let input = FrameInput {
            left_up: true,
            ..Default::default()
        };
        // Hold up far longer than it takes to reach the edge
        for _ in 0..100 {
            ingest_intents(&mut world, &input, &config);
            move_paddles(&mut world, &arena);
        }

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, 0.0);
    }

    #[test]
    fn test_move_ball_integrates_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 200.0), Vec2::new(-3.0, 2.0));

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(397.0, 202.0));
        }
    }
}
