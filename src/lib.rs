#![cfg(target_arch = "wasm32")]
use crate::constants::{PLAY_BUTTON_ID, ROOM_CANVAS_ID};
use instant::Instant;
use room_core::{RiffConfig, RoomConfig, SceneState, DEFAULT_BPM};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod player;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("musical-room starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

// One wasm module serves both pages; the markup decides which one runs
async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let query = dom::location_query();

    if let Some(button) = document.get_element_by_id(PLAY_BUTTON_ID) {
        let config = RiffConfig::from_query(&query).unwrap_or_else(|e| {
            log::warn!("[config] {}; using defaults", e);
            RiffConfig::default()
        });
        return player::init_player(button, config);
    }

    let canvas_el = document
        .get_element_by_id(ROOM_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{} and #{}", ROOM_CANVAS_ID, PLAY_BUTTON_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let config = RoomConfig::from_query(&query).unwrap_or_else(|e| {
        log::warn!("[config] {}; using defaults", e);
        RoomConfig::default()
    });
    init_room(document, canvas, config).await
}

async fn init_room(
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    config: RoomConfig,
) -> anyhow::Result<()> {
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    // Suspended until the first click or key press
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let synths = audio::SynthBank::new(audio_ctx, config.master_volume, DEFAULT_BPM)
        .map_err(|_| anyhow::anyhow!("audio graph setup failed"))?;
    let synths = Rc::new(RefCell::new(synths));
    log::info!(
        "[room] speed={} offset={} volume={:.2}",
        config.ball_speed,
        config.spawn_offset,
        config.master_volume
    );
    let scene = Rc::new(RefCell::new(SceneState::new(config)));

    overlay::update_hint(&document, false, 0, config.master_volume);
    overlay::show(&document);

    events::wire_click(events::PointerWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        synths: synths.clone(),
    });
    events::wire_global_keydown(scene.clone(), synths.clone());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        synths,
        canvas,
        gpu,
        last_instant: Instant::now(),
        events: Vec::new(),
    }));
    frame::start_loop(move || frame_ctx.borrow_mut().frame());
    Ok(())
}
