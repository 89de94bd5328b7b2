use super::refresh_hint;
use crate::audio::{self, SynthBank};
use crate::dom;
use crate::overlay;
use room_core::controls::{key_action, step_volume, KeyAction};
use room_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<SceneState>>,
    synths: &Rc<RefCell<SynthBank>>,
) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::TogglePause => {
            // keep the page from scrolling on Space
            ev.prevent_default();
            if ev.repeat() {
                return;
            }
            let paused = scene.borrow_mut().toggle_pause();
            log::info!("[keys] paused={}", paused);
            refresh_hint(scene);
        }
        KeyAction::ToggleHint => {
            if let Some(doc) = dom::window_document() {
                overlay::toggle(&doc);
            }
        }
        KeyAction::VolumeUp | KeyAction::VolumeDown => {
            ev.prevent_default();
            let volume = {
                let mut s = scene.borrow_mut();
                s.config.master_volume = step_volume(s.config.master_volume, action);
                s.config.master_volume
            };
            synths.borrow().set_volume(volume);
            log::info!("[keys] volume={:.2}", volume);
            refresh_hint(scene);
        }
    }
    audio::resume_if_suspended(synths.borrow().context());
}

pub fn wire_global_keydown(scene: Rc<RefCell<SceneState>>, synths: Rc<RefCell<SynthBank>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &scene, &synths);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
