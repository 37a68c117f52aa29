//! Browser client for the two-paddle game
//!
//! Draws on a `<canvas>` through the 2D context, follows the mouse for the
//! left paddle and paces frames with `requestAnimationFrame`. All game rules
//! live in `game_core`.
//!
//! Note: only available when compiling for wasm32 target

#![cfg(target_arch = "wasm32")]

mod canvas;
mod error;
mod input;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasTarget;
pub use error::ClientError;
use game_core::{Config, GameRng, MatchController, MatchSimulator};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Start a match on the canvas with id `canvas_id`
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    run(canvas_id).map_err(|err| {
        log::error!("failed to start match: {err}");
        err.into()
    })
}

fn run(canvas_id: &str) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoDocument)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| ClientError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into()
        .map_err(|_| ClientError::NotACanvas(canvas_id.to_string()))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(ClientError::NoContext)?
        .dyn_into()
        .map_err(|_| ClientError::NoContext)?;

    // Surface size is read once; the match does not follow resizes
    let config = Config::with_surface(canvas.width() as f32, canvas.height() as f32);
    let simulator = MatchSimulator::new(config, GameRng::from_entropy())?;

    // Filled in below, once the controller it drives exists
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let scheduler = {
        let frame = frame.clone();
        let window = window.clone();
        move || request_animation_frame(&window, &frame)
    };

    let controller = Rc::new(RefCell::new(MatchController::new(
        simulator,
        CanvasTarget::new(ctx),
        scheduler,
    )));

    {
        let controller = controller.clone();
        let surface = canvas.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let y = input::pointer_y(&surface, &event);
            controller.borrow_mut().pointer_moved(y);
        });
        canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        // Listener lives as long as the page
        on_move.forget();
    }

    {
        let controller = controller.clone();
        *frame.borrow_mut() = Some(Closure::new(move || {
            if let Err(err) = controller.borrow_mut().tick() {
                log::error!("frame failed, stopping loop: {err:?}");
            }
        }));
    }

    controller.borrow_mut().start()?;
    log::info!(
        "match started on #{canvas_id} ({}x{})",
        canvas.width(),
        canvas.height()
    );
    Ok(())
}

fn request_animation_frame(window: &Window, frame: &FrameCallback) {
    if let Some(callback) = frame.borrow().as_ref() {
        if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {err:?}");
        }
    }
}
