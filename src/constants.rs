// Web frontend tuning constants.
//
// Kept free of `web_sys` so the host-side tests can `include!` this file.

// Directional light strength (each of the three room lights)
pub const LIGHT_INTENSITY: f32 = 0.35;

// Audio scheduling
pub const SCHEDULE_LOOKAHEAD_SEC: f64 = 0.1;
// Small offset so a note triggered "now" is never scheduled in the past
pub const TRIGGER_LATENCY_SEC: f64 = 0.01;

// Synth voice
pub const SYNTH_VELOCITY: f32 = 0.8;
pub const RIFF_VELOCITY: f32 = 0.9;

// Instanced draw: five walls plus balls; grows by powers of two
pub const INITIAL_INSTANCE_CAPACITY: usize = 64;

// DOM ids
pub const ROOM_CANVAS_ID: &str = "app-canvas";
pub const HINT_OVERLAY_ID: &str = "hint-overlay";
pub const PLAY_BUTTON_ID: &str = "playButton";
