use glam::Vec2;

use crate::arena::Arena;
use crate::params::Params;
use crate::resources::GameRng;

/// Which side of the surface a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - `y` is the top edge, x is fixed per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self) -> f32 {
        self.y + Params::PADDLE_HEIGHT / 2.0
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Recenter the ball and serve it toward `direction` (+1 right, -1 left)
    /// with randomized speed and angle.
    pub fn reset(&mut self, arena: &Arena, direction: f32, base_speed: f32, rng: &mut GameRng) {
        self.pos = arena.center();

        let speed_variation = rng.range(Params::SERVE_SPEED_MIN, Params::SERVE_SPEED_MAX);
        let angle_variation = rng.range(-1.0, 1.0);

        self.vel.x = direction * base_speed * speed_variation;
        self.vel.y = angle_variation * base_speed
            + rng.range(-Params::SERVE_ANGLE_JITTER, Params::SERVE_ANGLE_JITTER);
    }
}

/// Per-frame movement intent for a paddle, rebuilt from device state
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.up = false;
        self.down = false;
    }
}
