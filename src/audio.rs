use crate::constants::{SYNTH_VELOCITY, TRIGGER_LATENCY_SEC};
use fnv::FnvHashMap;
use room_core::synth::Envelope;
use room_core::{BallId, NoteEvent, NoteValue};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// Create a GainNode with an initial value; logs on failure
pub fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("[audio] {} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// Master gain routed to the context destination.
pub fn build_master_bus(audio_ctx: &web::AudioContext, volume: f32) -> Result<web::GainNode, ()> {
    let master = create_gain(audio_ctx, volume, "Master")?;
    _ = master.connect_with_audio_node(&audio_ctx.destination());
    Ok(master)
}

/// Resume a suspended context; browsers only allow this from a user gesture.
pub fn resume_if_suspended(audio_ctx: &web::AudioContext) {
    if audio_ctx.state() != web::AudioContextState::Running {
        _ = audio_ctx.resume();
    }
}

/// A monophonic triangle voice: a new note cuts the one still sounding.
pub struct SynthVoice {
    output: web::GainNode,
    current: Option<web::OscillatorNode>,
}

impl SynthVoice {
    pub fn new(audio_ctx: &web::AudioContext, dest: &web::AudioNode) -> Result<Self, ()> {
        let output = create_gain(audio_ctx, 0.0, "Voice")?;
        _ = output.connect_with_audio_node(dest);
        Ok(Self {
            output,
            current: None,
        })
    }

    pub fn trigger_attack_release(
        &mut self,
        audio_ctx: &web::AudioContext,
        envelope: &Envelope,
        frequency_hz: f32,
        hold_sec: f64,
        when: f64,
        velocity: f32,
    ) -> Result<(), ()> {
        let osc = web::OscillatorNode::new(audio_ctx).map_err(|e| {
            log::error!("[audio] OscillatorNode error: {:?}", e);
        })?;
        osc.set_type(web::OscillatorType::Triangle);
        osc.frequency().set_value(frequency_hz);

        if let Some(prev) = self.current.take() {
            _ = prev.stop_with_when(when);
        }
        let gain = self.output.gain();
        _ = gain.cancel_scheduled_values(when);
        _ = gain.set_value_at_time(0.0, when);
        for bp in envelope.breakpoints(when, hold_sec, velocity) {
            _ = gain.linear_ramp_to_value_at_time(bp.level, bp.time);
        }

        _ = osc.connect_with_audio_node(&self.output);
        _ = osc.start_with_when(when);
        _ = osc.stop_with_when(envelope.end_time(when, hold_sec));
        self.current = Some(osc);
        Ok(())
    }

    /// Silence immediately and detach from the bus.
    pub fn dispose(mut self, now: f64) {
        if let Some(osc) = self.current.take() {
            _ = osc.stop_with_when(now);
        }
        _ = self.output.disconnect();
    }
}

/// One voice per live ball, all feeding a shared master gain.
pub struct SynthBank {
    ctx: web::AudioContext,
    master: web::GainNode,
    voices: FnvHashMap<BallId, SynthVoice>,
    envelope: Envelope,
    note_len: NoteValue,
    bpm: f32,
}

impl SynthBank {
    pub fn new(ctx: web::AudioContext, volume: f32, bpm: f32) -> Result<Self, ()> {
        let master = build_master_bus(&ctx, volume)?;
        Ok(Self {
            ctx,
            master,
            voices: FnvHashMap::default(),
            envelope: Envelope::default(),
            note_len: NoteValue::EIGHTH,
            bpm,
        })
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }

    pub fn set_volume(&self, volume: f32) {
        self.master.gain().set_value(volume);
    }

    pub fn play(&mut self, ev: &NoteEvent) {
        if !self.voices.contains_key(&ev.ball) {
            match SynthVoice::new(&self.ctx, &self.master) {
                Ok(v) => {
                    self.voices.insert(ev.ball, v);
                }
                Err(_) => return,
            }
        }
        let when = self.ctx.current_time() + TRIGGER_LATENCY_SEC;
        let hold = self.note_len.seconds(self.bpm);
        if let Some(voice) = self.voices.get_mut(&ev.ball) {
            _ = voice.trigger_attack_release(
                &self.ctx,
                &self.envelope,
                ev.note.frequency_hz(),
                hold,
                when,
                SYNTH_VELOCITY,
            );
        }
    }

    pub fn remove(&mut self, ball: BallId) {
        if let Some(voice) = self.voices.remove(&ball) {
            voice.dispose(self.ctx.current_time());
        }
    }
}

/// Fetch and decode an audio file relative to the page.
pub async fn load_sample(audio_ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} returned status {}", url, resp.status());
    }
    let array_buffer = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("array_buffer error: {:?}", e))?;
    let array_buffer: js_sys::ArrayBuffer = JsFuture::from(array_buffer)
        .await
        .map_err(|e| anyhow::anyhow!("array_buffer read failed: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not an ArrayBuffer: {:?}", e))?;
    let decoded = audio_ctx
        .decode_audio_data(&array_buffer)
        .map_err(|e| anyhow::anyhow!("decode_audio_data error: {:?}", e))?;
    let buffer: web::AudioBuffer = JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("decode {} failed: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not an AudioBuffer: {:?}", e))?;
    log::info!(
        "[audio] loaded {} ({:.2}s, {} ch)",
        url,
        buffer.duration(),
        buffer.number_of_channels()
    );
    Ok(buffer)
}
