//! Player page: a looping background sample with a play/pause button over a
//! bass riff scheduled on the audio clock.

use crate::audio::{self, SynthVoice};
use crate::constants::{RIFF_VELOCITY, SCHEDULE_LOOKAHEAD_SEC, TRIGGER_LATENCY_SEC};
use crate::dom;
use crate::frame;
use room_core::synth::Envelope;
use room_core::transport::{LoopScheduler, PlayerState, SampleLoop};
use room_core::RiffConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct Player {
    ctx: web::AudioContext,
    master: web::GainNode,
    button: web::Element,
    sample_loop: SampleLoop,
    sample: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
    state: PlayerState,
    riff: LoopScheduler,
    riff_voice: SynthVoice,
    envelope: Envelope,
}

impl Player {
    pub fn new(button: web::Element, config: &RiffConfig) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = audio::build_master_bus(&ctx, config.master_volume)
            .map_err(|_| anyhow::anyhow!("master bus"))?;
        let riff_voice =
            SynthVoice::new(&ctx, &master).map_err(|_| anyhow::anyhow!("riff voice"))?;
        let state = PlayerState::default();
        dom::set_text(&button, state.button_label());
        Ok(Self {
            ctx,
            master,
            button,
            sample_loop: SampleLoop::default(),
            sample: None,
            source: None,
            state,
            riff: LoopScheduler::new(config.pattern(), config.bpm),
            riff_voice,
            envelope: Envelope::default(),
        })
    }

    /// Button press: make sure the transport runs, then flip the sample loop.
    pub fn on_button(&mut self) {
        audio::resume_if_suspended(&self.ctx);
        if !self.riff.is_running() {
            self.riff.start(self.ctx.current_time() + TRIGGER_LATENCY_SEC);
            log::info!(
                "[player] riff started, every {:.3}s",
                self.riff.interval_sec()
            );
        }
        let next = self.state.toggled();
        let applied = match next {
            PlayerState::Started => self.start_sample(),
            PlayerState::Stopped => {
                self.stop_sample();
                true
            }
        };
        if applied {
            self.state = next;
            dom::set_text(&self.button, self.state.button_label());
            log::info!("[player] sample {:?}", self.state);
        }
    }

    fn start_sample(&mut self) -> bool {
        let Some(buffer) = &self.sample else {
            log::warn!("[player] {} not loaded yet", self.sample_loop.url);
            return false;
        };
        let src = match web::AudioBufferSourceNode::new(&self.ctx) {
            Ok(s) => s,
            Err(e) => {
                log::error!("[player] AudioBufferSourceNode error: {:?}", e);
                return false;
            }
        };
        src.set_buffer(Some(buffer));
        src.set_loop(true);
        src.set_loop_start(self.sample_loop.loop_start);
        src.set_loop_end(self.sample_loop.loop_end);
        _ = src.connect_with_audio_node(&self.master);
        let when = self.ctx.current_time() + TRIGGER_LATENCY_SEC;
        if let Err(e) = src.start_with_when_and_grain_offset(when, self.sample_loop.loop_start) {
            log::error!("[player] sample start error: {:?}", e);
            return false;
        }
        self.source = Some(src);
        true
    }

    fn stop_sample(&mut self) {
        if let Some(src) = self.source.take() {
            _ = src.stop();
            _ = src.disconnect();
        }
    }

    pub fn set_sample(&mut self, buffer: web::AudioBuffer) {
        self.sample = Some(buffer);
    }

    /// Schedule riff notes falling inside the lookahead window.
    pub fn schedule(&mut self) {
        let now = self.ctx.current_time();
        for n in self.riff.due(now, SCHEDULE_LOOKAHEAD_SEC) {
            _ = self.riff_voice.trigger_attack_release(
                &self.ctx,
                &self.envelope,
                n.note.frequency_hz(),
                n.duration,
                n.time,
                RIFF_VELOCITY,
            );
        }
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }
}

pub fn init_player(button: web::Element, config: RiffConfig) -> anyhow::Result<()> {
    let player = Rc::new(RefCell::new(Player::new(button.clone(), &config)?));
    log::info!(
        "[player] riff {} bpm={} volume={:.2}",
        config.note,
        config.bpm,
        config.master_volume
    );

    // Fetch the sample in the background; presses before it lands only start the riff
    {
        let player = player.clone();
        let ctx = player.borrow().context().clone();
        let url = SampleLoop::default().url;
        spawn_local(async move {
            match audio::load_sample(&ctx, url).await {
                Ok(buffer) => player.borrow_mut().set_sample(buffer),
                Err(e) => log::error!("[player] sample load error: {:?}", e),
            }
        });
    }

    {
        let player = player.clone();
        dom::add_click_listener(&button, move || player.borrow_mut().on_button());
    }

    frame::start_loop(move || player.borrow_mut().schedule());
    Ok(())
}
