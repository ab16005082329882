//! Keyboard and touch input handling
//!
//! Raw device state is tracked as held/released flags and folded into a
//! `FrameInput` once per frame; intents are "currently held", never
//! edge-triggered.

use game_core::FrameInput;

/// Held/released state of every key and touch region the game reads
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    w_held: bool,
    s_held: bool,
    arrow_up_held: bool,
    arrow_down_held: bool,
    touch_upper: bool,
    touch_lower: bool,
    start_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: &str, held: bool) {
        match key {
            "w" | "W" => self.w_held = held,
            "s" | "S" => self.s_held = held,
            "ArrowUp" => self.arrow_up_held = held,
            "ArrowDown" => self.arrow_down_held = held,
            _ => {}
        }
    }

    /// A touch point at surface-relative `y`: upper half steers up, lower
    /// half steers down (touch always drives the left paddle).
    pub fn touch_at(&mut self, y: f32, surface_height: f32) {
        if y < surface_height / 2.0 {
            self.touch_upper = true;
        } else {
            self.touch_lower = true;
        }
    }

    pub fn touch_end(&mut self) {
        self.touch_upper = false;
        self.touch_lower = false;
    }

    /// One-shot start activation, consumed by the next frame
    pub fn press_start(&mut self) {
        self.start_pressed = true;
    }

    /// Fold the current device state into this frame's intents
    pub fn frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            left_up: self.w_held || self.touch_upper,
            left_down: self.s_held || self.touch_lower,
            right_up: self.arrow_up_held,
            right_down: self.arrow_down_held,
            start_pressed: self.start_pressed,
        };
        self.start_pressed = false;
        input
    }
}
