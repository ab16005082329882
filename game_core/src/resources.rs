use rand::Rng;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn point_scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Normalized per-frame input intents, rebuilt from raw device state by the
/// host each frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub start_pressed: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Seedable random source. All draws in the simulation go through this so a
/// fixed seed reproduces a full session.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[lo, hi)`
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        self.0.gen_range(lo..hi)
    }

    /// Bernoulli draw with probability `p`
    pub fn chance(&mut self, p: f32) -> bool {
        self.0.gen::<f32>() < p
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
