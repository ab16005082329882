//! Canvas client for the paddle game
//!
//! Binds the pure `game_core` simulation to a browser canvas: DOM input
//! normalization, a 2D-canvas render pass, and one animation-frame loop
//! with explicit teardown. Pure helpers (input mapping, overlay geometry)
//! stay off the wasm boundary so they test natively.

pub mod draw;
pub mod hud;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub use app::*;
