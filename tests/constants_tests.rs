// Host-side tests for the web frontend constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_stays_below_saturation() {
    assert!(LIGHT_INTENSITY > 0.0);
    // three lights plus ambient must not exceed full brightness on a wall
    assert!(0.12 + 3.0 * LIGHT_INTENSITY <= 1.2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scheduling_window_covers_a_frame() {
    // at 30 fps a frame is ~33 ms; the lookahead must span several frames
    assert!(SCHEDULE_LOOKAHEAD_SEC > 0.05);
    assert!(TRIGGER_LATENCY_SEC > 0.0);
    assert!(TRIGGER_LATENCY_SEC < SCHEDULE_LOOKAHEAD_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn velocities_are_normalized() {
    assert!(SYNTH_VELOCITY > 0.0 && SYNTH_VELOCITY <= 1.0);
    assert!(RIFF_VELOCITY > 0.0 && RIFF_VELOCITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn instance_buffer_fits_the_walls() {
    assert!(INITIAL_INSTANCE_CAPACITY >= 5);
    assert!(INITIAL_INSTANCE_CAPACITY.is_power_of_two());
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [ROOM_CANVAS_ID, HINT_OVERLAY_ID, PLAY_BUTTON_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
