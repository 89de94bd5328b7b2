mod keyboard;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_click, PointerWiring};

use crate::audio::SynthBank;
use crate::dom;
use crate::overlay;
use room_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;

// Hint overlay text follows pause state, ball count and volume
fn refresh_hint(scene: &Rc<RefCell<SceneState>>) {
    if let Some(doc) = dom::window_document() {
        let s = scene.borrow();
        overlay::update_hint(&doc, s.is_paused(), s.balls().len(), s.config.master_volume);
    }
}

fn play_all(synths: &Rc<RefCell<SynthBank>>, events: &[room_core::NoteEvent]) {
    if events.is_empty() {
        return;
    }
    let mut bank = synths.borrow_mut();
    for ev in events {
        bank.play(ev);
    }
}
