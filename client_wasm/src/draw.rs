//! 2D-canvas render pass
//!
//! Pure read of the session: paints field, paddles, ball, net and scores
//! every frame, then the phase-dependent overlays.

use game_core::{LocalGame, Params, Side};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::hud;

const ACCENT: &str = "#93E51F";
const ACCENT_DARK: &str = "#7BC01A";
const NET: &str = "#333333";
const BALL: &str = "#ffffff";
const BACKGROUND: &str = "#000000";

pub fn render(
    ctx: &CanvasRenderingContext2d,
    game: &LocalGame,
    now_ms: f64,
    start_label: &str,
    countdown_label: &str,
) -> Result<(), JsValue> {
    let w = game.arena.width as f64;
    let h = game.arena.height as f64;

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, w, h);

    draw_paddles(ctx, game);
    draw_ball(ctx, game)?;
    draw_net(ctx, w, h)?;
    draw_scores(ctx, game, w)?;

    if let Some(n) = game.phase.countdown() {
        draw_countdown(ctx, n, w, h, now_ms, countdown_label)?;
    }
    if game.phase.start_visible() {
        draw_start_button(ctx, w, h, now_ms, start_label)?;
    }

    Ok(())
}

fn draw_paddles(ctx: &CanvasRenderingContext2d, game: &LocalGame) {
    ctx.set_fill_style_str(ACCENT);
    for side in [Side::Left, Side::Right] {
        ctx.fill_rect(
            game.arena.paddle_x(side) as f64,
            game.paddle_y(side) as f64,
            Params::PADDLE_WIDTH as f64,
            Params::PADDLE_HEIGHT as f64,
        );
    }
}

fn draw_ball(ctx: &CanvasRenderingContext2d, game: &LocalGame) -> Result<(), JsValue> {
    let Some((pos, _vel)) = game.ball() else {
        return Ok(());
    };
    ctx.begin_path();
    ctx.arc(
        pos.x as f64,
        pos.y as f64,
        Params::BALL_RADIUS as f64,
        0.0,
        std::f64::consts::TAU,
    )?;
    ctx.set_fill_style_str(BALL);
    ctx.fill();
    Ok(())
}

fn draw_net(ctx: &CanvasRenderingContext2d, w: f64, h: f64) -> Result<(), JsValue> {
    let dashes = js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(15.0));
    ctx.set_line_dash(&dashes)?;
    ctx.begin_path();
    ctx.move_to(w / 2.0, 0.0);
    ctx.line_to(w / 2.0, h);
    ctx.set_stroke_style_str(NET);
    ctx.stroke();
    ctx.set_line_dash(&js_sys::Array::new())?;
    Ok(())
}

fn draw_scores(
    ctx: &CanvasRenderingContext2d,
    game: &LocalGame,
    w: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(ACCENT);
    ctx.set_font("32px Arial");
    ctx.set_text_align("center");
    ctx.fill_text(&game.score.left.to_string(), w / 4.0, 50.0)?;
    ctx.fill_text(&game.score.right.to_string(), w * 3.0 / 4.0, 50.0)?;
    Ok(())
}

fn draw_countdown(
    ctx: &CanvasRenderingContext2d,
    n: u8,
    w: f64,
    h: f64,
    now_ms: f64,
    label: &str,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(ACCENT);
    ctx.set_font("48px Arial");
    ctx.set_text_align("center");
    ctx.fill_text(&n.to_string(), w / 2.0, h / 2.0)?;

    // Pulsing caption beneath the digit
    let scale = hud::pulse(now_ms, 0.01, 0.2);
    ctx.save();
    ctx.translate(w / 2.0, h / 2.0 + 60.0)?;
    ctx.scale(scale, scale)?;
    ctx.set_fill_style_str(BALL);
    ctx.set_font("16px Arial");
    ctx.fill_text(label, 0.0, 0.0)?;
    ctx.restore();
    Ok(())
}

fn draw_start_button(
    ctx: &CanvasRenderingContext2d,
    w: f64,
    h: f64,
    now_ms: f64,
    label: &str,
) -> Result<(), JsValue> {
    let (bx, by, bw, bh) = hud::start_button_rect(w, h);
    let scale = hud::pulse(now_ms, 0.008, 0.05);
    let shadow_offset = (now_ms * 0.01).sin() * 2.0;

    // Drop shadow trailing the pulse
    ctx.set_fill_style_str("rgba(147, 229, 31, 0.3)");
    ctx.fill_rect(
        bx + 2.0 + shadow_offset,
        by + 2.0 + shadow_offset,
        (bw - 4.0) * scale,
        (bh - 4.0) * scale,
    );

    let gradient = ctx.create_linear_gradient(bx, by, bx + bw, by + bh);
    gradient.add_color_stop(0.0, ACCENT)?;
    gradient.add_color_stop(1.0, ACCENT_DARK)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(bx, by, bw * scale, bh * scale);

    ctx.set_fill_style_str(BACKGROUND);
    ctx.set_font(&format!("bold {}px Arial", 18.0 * scale));
    ctx.set_text_align("center");
    ctx.fill_text(label, w / 2.0, h / 2.0 + 6.0)?;

    // Pulsing outline
    let alpha = 0.5 + (now_ms * 0.01).sin() * 0.3;
    ctx.set_stroke_style_str(&format!("rgba(147, 229, 31, {alpha:.3})"));
    ctx.set_line_width(2.0);
    ctx.stroke_rect(bx - 2.0, by - 2.0, bw + 4.0, bh + 4.0);
    Ok(())
}
