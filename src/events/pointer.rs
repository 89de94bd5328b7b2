use super::{play_all, refresh_hint};
use crate::audio::{self, SynthBank};
use crate::input;
use room_core::{ClickOutcome, NoteEvent, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneState>>,
    pub synths: Rc<RefCell<SynthBank>>,
}

/// Click on the canvas: spawn a ball on the wall under the pointer, or while
/// paused remove the ball under it.
pub fn wire_click(w: PointerWiring) {
    let canvas = w.canvas.clone();
    let mut events: Vec<NoteEvent> = Vec::new();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        audio::resume_if_suspended(w.synths.borrow().context());

        let ndc = input::canvas_ndc(&ev, &w.canvas);
        let ray = input::room_camera(&w.canvas).ray_through_ndc(ndc);

        events.clear();
        let outcome = w.scene.borrow_mut().click(&ray, &mut events);
        match outcome {
            ClickOutcome::Spawned { ball, wall } => {
                log::info!("[click] spawned ball {} on {:?} wall", ball.0, wall);
            }
            ClickOutcome::Removed { ball } => {
                w.synths.borrow_mut().remove(ball);
                log::info!("[click] removed ball {}", ball.0);
            }
            ClickOutcome::Nothing => {
                log::debug!("[click] nothing under ndc=({:.2},{:.2})", ndc.x, ndc.y);
                return;
            }
        }
        play_all(&w.synths, &events);
        refresh_hint(&w.scene);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
