use crate::params::Params;

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Right paddle is driven by the opponent heuristic
    Single,
    /// Right paddle is human-controlled (same device)
    Multi,
}

impl GameMode {
    /// Parse a host-supplied mode string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(GameMode::Single),
            "multi" => Some(GameMode::Multi),
            _ => None,
        }
    }
}

/// Ball speed setting, mapped to a multiplier on the base speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallSpeed {
    Slow,
    Normal,
    Fast,
    UltraFast,
}

impl BallSpeed {
    pub fn multiplier(&self) -> f32 {
        match self {
            BallSpeed::Slow => 0.7,
            BallSpeed::Normal => 1.0,
            BallSpeed::Fast => 1.4,
            BallSpeed::UltraFast => 2.0,
        }
    }

    /// Parse a host-supplied speed string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "slow" => Some(BallSpeed::Slow),
            "normal" => Some(BallSpeed::Normal),
            "fast" => Some(BallSpeed::Fast),
            "ultraFast" => Some(BallSpeed::UltraFast),
            _ => None,
        }
    }
}

/// Session configuration accepted from the host
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: GameMode,
    pub ball_speed: BallSpeed,
    pub auto_start: bool,
    pub is_mobile: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::Single,
            ball_speed: BallSpeed::Normal,
            auto_start: true,
            is_mobile: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve speed after the configured multiplier
    pub fn base_speed(&self) -> f32 {
        Params::BASE_BALL_SPEED * self.ball_speed.multiplier()
    }

    /// Ceiling on ball velocity magnitude after a paddle rebound
    pub fn max_speed(&self) -> f32 {
        self.base_speed() * Params::MAX_SPEED_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_speed_multipliers() {
        assert_eq!(BallSpeed::Slow.multiplier(), 0.7);
        assert_eq!(BallSpeed::Normal.multiplier(), 1.0);
        assert_eq!(BallSpeed::Fast.multiplier(), 1.4);
        assert_eq!(BallSpeed::UltraFast.multiplier(), 2.0);
    }

    #[test]
    fn test_parse_ball_speed() {
        assert_eq!(BallSpeed::parse("slow"), Some(BallSpeed::Slow));
        assert_eq!(BallSpeed::parse("ultraFast"), Some(BallSpeed::UltraFast));
        assert_eq!(BallSpeed::parse("turbo"), None);
    }

    #[test]
    fn test_parse_game_mode() {
        assert_eq!(GameMode::parse("single"), Some(GameMode::Single));
        assert_eq!(GameMode::parse("multi"), Some(GameMode::Multi));
        assert_eq!(GameMode::parse("online"), None);
    }

    #[test]
    fn test_base_speed_scales_with_setting() {
        let mut config = Config::new();
        assert_eq!(config.base_speed(), 3.0);
        config.ball_speed = BallSpeed::UltraFast;
        assert_eq!(config.base_speed(), 6.0);
    }

    #[test]
    fn test_max_speed_is_a_multiple_of_base() {
        let config = Config::new();
        assert_eq!(config.max_speed(), config.base_speed() * 6.0);
    }
}
