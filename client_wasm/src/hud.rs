//! Overlay geometry and pulse animation math
//!
//! Kept free of canvas calls so the click hit-test and the draw pass share
//! one rectangle, and so the math is testable off-browser.

/// Start control rectangle, centered on the surface
pub const START_BUTTON_WIDTH: f64 = 160.0;
pub const START_BUTTON_HEIGHT: f64 = 50.0;

/// Top-left corner and size of the start control
pub fn start_button_rect(surface_w: f64, surface_h: f64) -> (f64, f64, f64, f64) {
    (
        surface_w / 2.0 - START_BUTTON_WIDTH / 2.0,
        surface_h / 2.0 - START_BUTTON_HEIGHT / 2.0,
        START_BUTTON_WIDTH,
        START_BUTTON_HEIGHT,
    )
}

/// Whether a surface-relative click lands on the start control
pub fn start_button_contains(surface_w: f64, surface_h: f64, x: f64, y: f64) -> bool {
    let (bx, by, bw, bh) = start_button_rect(surface_w, surface_h);
    x >= bx && x <= bx + bw && y >= by && y <= by + bh
}

/// Sinusoidal pulse around 1.0, keyed off the frame timestamp
pub fn pulse(now_ms: f64, rate: f64, amount: f64) -> f64 {
    1.0 + (now_ms * rate).sin() * amount
}
