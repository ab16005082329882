use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Playing surface dimensions, sampled once from the viewport at construction
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Derive surface dimensions from the current viewport.
    ///
    /// Desktop caps at 800x400 minus fixed margins; mobile takes the viewport
    /// width and half the viewport height, both minus margins.
    pub fn from_viewport(viewport_w: f32, viewport_h: f32, is_mobile: bool) -> Self {
        let width = if is_mobile {
            viewport_w - Params::SURFACE_MARGIN_X
        } else {
            Params::MAX_SURFACE_WIDTH.min(viewport_w - Params::SURFACE_MARGIN_X)
        };
        let height = if is_mobile {
            (viewport_h * Params::MOBILE_HEIGHT_SHARE).min(viewport_h - Params::MOBILE_MARGIN_Y)
        } else {
            Params::MAX_SURFACE_HEIGHT.min(viewport_h - Params::DESKTOP_MARGIN_Y)
        };
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Fixed X position for a paddle side (left face of the rectangle)
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => Params::LEFT_PADDLE_X,
            Side::Right => self.width - Params::RIGHT_PADDLE_INSET,
        }
    }

    /// Centered paddle top-edge Y
    pub fn paddle_spawn_y(&self) -> f32 {
        self.height / 2.0 - Params::PADDLE_HEIGHT / 2.0
    }

    /// Clamp a paddle top-edge Y to the surface
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.height - Params::PADDLE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_sizing_caps_at_800x400() {
        let arena = Arena::from_viewport(1920.0, 1080.0, false);
        assert_eq!(arena.width, 800.0);
        assert_eq!(arena.height, 400.0);
    }

    #[test]
    fn test_desktop_sizing_respects_small_windows() {
        let arena = Arena::from_viewport(640.0, 480.0, false);
        assert_eq!(arena.width, 620.0);
        assert_eq!(arena.height, 280.0);
    }

    #[test]
    fn test_mobile_sizing() {
        let arena = Arena::from_viewport(390.0, 844.0, true);
        assert_eq!(arena.width, 370.0);
        assert_eq!(arena.height, 422.0);
    }

    #[test]
    fn test_paddle_x_per_side() {
        let arena = Arena::new(800.0, 400.0);
        assert_eq!(arena.paddle_x(Side::Left), 20.0);
        assert_eq!(arena.paddle_x(Side::Right), 770.0);
    }

    #[test]
    fn test_clamp_paddle_y() {
        let arena = Arena::new(800.0, 400.0);
        assert_eq!(arena.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(arena.clamp_paddle_y(500.0), 300.0);
        assert_eq!(arena.clamp_paddle_y(150.0), 150.0);
    }
}
