//! Browser host: canvas setup, event listeners, frame loop, teardown
//!
//! One continuously re-scheduled animation-frame callback drives input
//! sampling, physics and rendering in order. Teardown cancels the callback
//! and releases every listener so nothing leaks across sessions.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use game_core::{Arena, BallSpeed, Config, GameMode, LocalGame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent,
    MouseEvent, TouchEvent, Window,
};

use crate::draw;
use crate::hud;
use crate::input::InputState;

/// Host-supplied session options
#[wasm_bindgen(getter_with_clone)]
pub struct GameOptions {
    pub game_type: String,
    pub is_mobile: bool,
    pub auto_start: bool,
    pub ball_speed: String,
    pub start_label: String,
    pub countdown_label: String,
}

#[wasm_bindgen]
impl GameOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GameOptions {
        GameOptions {
            game_type: "single".into(),
            is_mobile: false,
            auto_start: true,
            ball_speed: "normal".into(),
            start_label: "Start".into(),
            countdown_label: "Starting...".into(),
        }
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl GameOptions {
    fn to_config(&self) -> Result<Config, JsValue> {
        let mode = GameMode::parse(&self.game_type)
            .ok_or_else(|| JsValue::from_str("unrecognized gameType"))?;
        let ball_speed = BallSpeed::parse(&self.ball_speed)
            .ok_or_else(|| JsValue::from_str("unrecognized ballSpeed"))?;
        Ok(Config {
            mode,
            ball_speed,
            auto_start: self.auto_start,
            is_mobile: self.is_mobile,
        })
    }
}

/// Everything the frame callback touches
struct Session {
    game: LocalGame,
    input: Rc<RefCell<InputState>>,
    ctx: CanvasRenderingContext2d,
    start_label: String,
    countdown_label: String,
    last_ts: Option<f64>,
}

impl Session {
    /// Input sampling, then physics, then render - in that order
    fn frame(&mut self, ts: f64) -> Result<(), JsValue> {
        let dt_ms = self.last_ts.map(|t| (ts - t).max(0.0)).unwrap_or(0.0);
        self.last_ts = Some(ts);

        self.game.input = self.input.borrow_mut().frame_input();
        self.game.frame(dt_ms as f32);

        draw::render(
            &self.ctx,
            &self.game,
            ts,
            &self.start_label,
            &self.countdown_label,
        )
    }
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A mounted game instance bound to one canvas
#[wasm_bindgen]
pub struct PongGame {
    session: Rc<RefCell<Session>>,
    canvas: HtmlCanvasElement,
    raf_id: Rc<Cell<Option<i32>>>,
    frame_closure: FrameClosure,
    on_key_down: Closure<dyn FnMut(KeyboardEvent)>,
    on_key_up: Closure<dyn FnMut(KeyboardEvent)>,
    on_touch_start: Closure<dyn FnMut(TouchEvent)>,
    on_touch_move: Closure<dyn FnMut(TouchEvent)>,
    on_touch_end: Closure<dyn FnMut(TouchEvent)>,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

#[wasm_bindgen]
impl PongGame {
    /// Mount a session on the given canvas. Fails if the environment cannot
    /// provide a 2D context; no simulation starts in that case.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, options: &GameOptions) -> Result<PongGame, JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let config = options.to_config()?;

        // Surface dimensions are sampled from the viewport once, here.
        let vw = window.inner_width()?.as_f64().unwrap_or(0.0) as f32;
        let vh = window.inner_height()?.as_f64().unwrap_or(0.0) as f32;
        let arena = Arena::from_viewport(vw, vh, config.is_mobile);
        canvas.set_width(arena.width as u32);
        canvas.set_height(arena.height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = js_sys::Date::now() as u64;
        let input = Rc::new(RefCell::new(InputState::new()));
        let session = Rc::new(RefCell::new(Session {
            game: LocalGame::new(arena, config, seed),
            input: input.clone(),
            ctx,
            start_label: options.start_label.clone(),
            countdown_label: options.countdown_label.clone(),
            last_ts: None,
        }));

        let on_key_down = {
            let input = input.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                input.borrow_mut().key_down(&e.key());
            })
        };
        let on_key_up = {
            let input = input.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                input.borrow_mut().key_up(&e.key());
            })
        };
        window.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;

        let on_touch_start = {
            let input = input.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
                e.prevent_default();
                let rect = canvas.get_bounding_client_rect();
                let height = canvas.height() as f32;
                let touches = e.touches();
                for i in 0..touches.length() {
                    if let Some(touch) = touches.item(i) {
                        let y = touch.client_y() as f64 - rect.top();
                        input.borrow_mut().touch_at(y as f32, height);
                    }
                }
            })
        };
        let on_touch_move = Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
            e.prevent_default();
        });
        let on_touch_end = {
            let input = input.clone();
            Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
                e.prevent_default();
                input.borrow_mut().touch_end();
            })
        };
        let non_passive = AddEventListenerOptions::new();
        non_passive.set_passive(false);
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            on_touch_start.as_ref().unchecked_ref(),
            &non_passive,
        )?;
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            on_touch_move.as_ref().unchecked_ref(),
            &non_passive,
        )?;
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchend",
            on_touch_end.as_ref().unchecked_ref(),
            &non_passive,
        )?;

        let on_click = {
            let session = session.clone();
            let input = input.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                let session = session.borrow();
                // Clicks only matter while the start control is shown
                if !session.game.phase.start_visible() {
                    return;
                }
                let rect = canvas.get_bounding_client_rect();
                let x = e.client_x() as f64 - rect.left();
                let y = e.client_y() as f64 - rect.top();
                let w = session.game.arena.width as f64;
                let h = session.game.arena.height as f64;
                if hud::start_button_contains(w, h, x, y) {
                    input.borrow_mut().press_start();
                }
            })
        };
        canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let frame_closure: FrameClosure = Rc::new(RefCell::new(None));
        {
            let session = session.clone();
            let raf_id = raf_id.clone();
            let inner = frame_closure.clone();
            let window = window.clone();
            let cb = Closure::<dyn FnMut(f64)>::new(move |ts: f64| {
                // Torn down between scheduling and firing
                if raf_id.get().is_none() {
                    return;
                }
                if let Err(e) = session.borrow_mut().frame(ts) {
                    web_sys::console::error_1(&e);
                }
                if let Some(cb) = inner.borrow().as_ref() {
                    match request_frame(&window, cb) {
                        Ok(id) => raf_id.set(Some(id)),
                        Err(e) => web_sys::console::error_1(&e),
                    }
                }
            });
            *frame_closure.borrow_mut() = Some(cb);
        }
        let first = request_frame(
            &window,
            frame_closure
                .borrow()
                .as_ref()
                .ok_or_else(|| JsValue::from_str("frame callback missing"))?,
        )?;
        raf_id.set(Some(first));

        Ok(PongGame {
            session,
            canvas,
            raf_id,
            frame_closure,
            on_key_down,
            on_key_up,
            on_touch_start,
            on_touch_move,
            on_touch_end,
            on_click,
        })
    }

    /// Stop the frame loop and release every registered listener
    pub fn destroy(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        if let Some(id) = self.raf_id.replace(None) {
            window.cancel_animation_frame(id)?;
        }
        // Break the closure's self-reference so it can drop
        *self.frame_closure.borrow_mut() = None;

        window
            .remove_event_listener_with_callback("keydown", self.on_key_down.as_ref().unchecked_ref())?;
        window
            .remove_event_listener_with_callback("keyup", self.on_key_up.as_ref().unchecked_ref())?;
        self.canvas.remove_event_listener_with_callback(
            "touchstart",
            self.on_touch_start.as_ref().unchecked_ref(),
        )?;
        self.canvas.remove_event_listener_with_callback(
            "touchmove",
            self.on_touch_move.as_ref().unchecked_ref(),
        )?;
        self.canvas.remove_event_listener_with_callback(
            "touchend",
            self.on_touch_end.as_ref().unchecked_ref(),
        )?;
        self.canvas
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())?;
        Ok(())
    }

    /// Current scores, for host-side chrome
    pub fn left_score(&self) -> u32 {
        self.session.borrow().game.score.left
    }

    pub fn right_score(&self) -> u32 {
        self.session.borrow().game.score.right
    }
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window.request_animation_frame(cb.as_ref().unchecked_ref())
}
