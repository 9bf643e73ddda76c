//! Browser host
//!
//! Wires the session to the page: canvas, HUD elements, pointer/touch
//! input, resize, start/restart buttons, and a `requestAnimationFrame` loop
//! that stops for good once the session ends.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, HtmlCanvasElement, PointerEvent, TouchEvent};

use crate::renderer::canvas::CanvasTarget;
use crate::session::{FrameControl, GameSession, HudView, PointerPhase, PointerSample};
use crate::tuning::Tuning;

const CANVAS_ID: &str = "cookie-catcher-canvas";
const TUNING_ID: &str = "cc-tuning";
const SCORE_ID: &str = "cc-score";
const LIVES_ID: &str = "cc-lives";
const OVERLAY_ID: &str = "cc-overlay";
const GAME_OVER_ID: &str = "cc-gameover";
const FINAL_SCORE_ID: &str = "cc-final-score";
const START_BTN_ID: &str = "cc-start-btn";
const RESTART_BTN_ID: &str = "cc-restart-btn";

/// `requestAnimationFrame` scheduling state
#[derive(Debug, Default)]
struct AnimationFrameLoop {
    /// Handle of the frame callback that has been requested but not run
    pending: Option<i32>,
}

impl AnimationFrameLoop {
    /// Request the next frame unless one is already pending
    fn schedule(app: &Rc<RefCell<App>>) {
        if app.borrow().frames.pending.is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let app_for_frame = app.clone();
        let closure = Closure::once(move |time: f64| {
            on_animation_frame(app_for_frame, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => app.borrow_mut().frames.pending = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    /// Drop the pending frame callback, if any
    fn cancel(&mut self) {
        if let (Some(handle), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Everything the page callbacks share
struct App {
    session: GameSession,
    target: CanvasTarget,
    document: Document,
    frames: AnimationFrameLoop,
}

impl App {
    /// Refresh the playfield size and origin from the canvas layout
    fn sync_layout(&mut self, resized: bool) {
        let (left, top, width, height) = self.target.client_rect();
        self.session.set_origin(left, top);
        if resized {
            let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
            self.target.fit_to_display(dpr);
            self.session.on_resize(width, height);
        }
    }

    /// Paint the current frame and HUD
    fn draw(&self) {
        self.target.paint(&self.session.render());
        self.update_hud(&self.session.hud());
    }

    fn update_hud(&self, hud: &HudView) {
        let document = &self.document;

        if let Some(el) = document.get_element_by_id(SCORE_ID) {
            el.set_text_content(Some(&hud.score));
        }
        if let Some(el) = document.get_element_by_id(LIVES_ID) {
            el.set_text_content(Some(&hud.lives));
        }
        if let Some(el) = document.get_element_by_id(FINAL_SCORE_ID) {
            if let Some(final_score) = &hud.final_score {
                el.set_text_content(Some(final_score));
            }
        }
        set_hidden(document, OVERLAY_ID, !hud.show_overlay);
        set_hidden(document, GAME_OVER_ID, !hud.show_game_over);
    }
}

fn set_hidden(document: &Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let classes = el.class_list();
        let _ = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
    }
}

fn on_animation_frame(app: Rc<RefCell<App>>, time: f64) {
    let control = {
        let mut a = app.borrow_mut();
        a.frames.pending = None;
        let control = a.session.on_frame(time);
        a.draw();
        control
    };

    if control == FrameControl::Continue {
        AnimationFrameLoop::schedule(&app);
    }
}

/// Optional balance overrides embedded in the page as JSON
fn load_tuning(document: &Document) -> Tuning {
    let Some(json) = document.get_element_by_id(TUNING_ID).and_then(|el| el.text_content()) else {
        return Tuning::default();
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning overrides");
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring malformed tuning: {}", e);
            Tuning::default()
        }
    }
}

/// Start the game on this page; does nothing if the canvas is missing
pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::warn!("No #{} canvas on this page, game disabled", CANVAS_ID);
        return;
    };
    let Some(target) = CanvasTarget::new(canvas) else {
        log::warn!("Canvas has no 2D context, game disabled");
        return;
    };

    target.fit_to_display(window.device_pixel_ratio());
    let (left, top, width, height) = target.client_rect();

    let seed = js_sys::Date::now() as u64;
    let mut session = GameSession::new(width, height, load_tuning(&document), seed);
    session.set_origin(left, top);
    log::info!("Cookie Catcher ready ({}x{}, seed {})", width, height, seed);

    let app = Rc::new(RefCell::new(App {
        session,
        target,
        document,
        frames: AnimationFrameLoop::default(),
    }));

    setup_input_handlers(&app);
    setup_resize_handler(&app);
    setup_buttons(&app);

    // Static first frame behind the start overlay
    app.borrow().draw();
}

fn setup_input_handlers(app: &Rc<RefCell<App>>) {
    let canvas = app.borrow().target.canvas().clone();

    for (event_name, phase) in [("pointerdown", PointerPhase::Down), ("pointermove", PointerPhase::Move)] {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            let sample = PointerSample {
                phase,
                client_x: event.client_x() as f32,
                buttons: event.buttons(),
                is_touch: event.pointer_type() == "touch",
            };
            let mut a = app.borrow_mut();
            a.sync_layout(false);
            if a.session.handle_pointer(sample) && !a.session.is_running() {
                a.draw();
            }
        });
        let _ = canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Keep touch drags from scrolling the page
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &options,
        );
        closure.forget();
    }
}

fn setup_resize_handler(app: &Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let app = app.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        let mut a = app.borrow_mut();
        a.sync_layout(true);
        if !a.session.is_running() {
            a.draw();
        }
    });
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_buttons(app: &Rc<RefCell<App>>) {
    let document = app.borrow().document.clone();

    for id in [START_BTN_ID, RESTART_BTN_ID] {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("No #{} button", id);
            continue;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            {
                let mut a = app.borrow_mut();
                a.frames.cancel();
                a.sync_layout(true);
                a.session.start();
                a.update_hud(&a.session.hud());
            }
            AnimationFrameLoop::schedule(&app);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
