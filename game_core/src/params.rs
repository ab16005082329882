/// Game tuning parameters for the paddle game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface sizing (pixels, derived from the viewport at construction)
    pub const MAX_SURFACE_WIDTH: f32 = 800.0;
    pub const MAX_SURFACE_HEIGHT: f32 = 400.0;
    pub const SURFACE_MARGIN_X: f32 = 20.0;
    pub const DESKTOP_MARGIN_Y: f32 = 200.0;
    pub const MOBILE_MARGIN_Y: f32 = 300.0;
    pub const MOBILE_HEIGHT_SHARE: f32 = 0.5;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_STEP: f32 = 5.0; // units per frame while an intent is held
    pub const LEFT_PADDLE_X: f32 = 20.0;
    pub const RIGHT_PADDLE_INSET: f32 = 30.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BASE_BALL_SPEED: f32 = 3.0;
    // Cap on speed growth from repeated collision scaling, as a multiple of
    // the configured base speed.
    pub const MAX_SPEED_FACTOR: f32 = 6.0;

    // Wall rebound variation
    pub const WALL_DAMPING_MIN: f32 = 0.98;
    pub const WALL_DAMPING_MAX: f32 = 1.02;
    pub const WALL_DEFLECT: f32 = 0.15;

    // Paddle rebound variation
    pub const PADDLE_SCALE_MIN: f32 = 0.95;
    pub const PADDLE_SCALE_MAX: f32 = 1.05;
    pub const SPIN_STRENGTH: f32 = 4.0;
    pub const SPIN_JITTER: f32 = 0.4;
    pub const PADDLE_DEFLECT: f32 = 0.25;

    // Serve variation
    pub const SERVE_SPEED_MIN: f32 = 0.8;
    pub const SERVE_SPEED_MAX: f32 = 1.2;
    pub const SERVE_ANGLE_JITTER: f32 = 2.0;

    // Opponent heuristic
    pub const AI_REACTION_BLEND: f32 = 0.7;
    pub const AI_MISTAKE_CHANCE: f32 = 0.15;
    pub const AI_MISTAKE_SPREAD: f32 = 50.0;
    pub const AI_MAX_SPEED: f32 = 4.5;
    pub const AI_GAIN: f32 = 0.1;
    pub const AI_TRACK_DEADZONE: f32 = 20.0;
    pub const AI_RECENTER_FACTOR: f32 = 0.02;
    pub const AI_RECENTER_DEADZONE: f32 = 5.0;

    // Countdown
    pub const COUNTDOWN_START: u8 = 3;
    pub const COUNTDOWN_TICK_MS: f32 = 1000.0;
}
