// Host-side tests for pitch names, note values, the synth envelope and the riff loop.

use room_core::note::{midi_to_hz, Note, NoteParseError, NoteValue};
use room_core::synth::Envelope;
use room_core::transport::{LoopScheduler, PlayerState, RiffPattern, SampleLoop};
use room_core::WALLS;

#[test]
fn midi_to_hz_matches_a4_and_octave() {
    let a4 = midi_to_hz(69.0);
    assert!((a4 - 440.0).abs() < 1e-4);
    let a5 = midi_to_hz(81.0);
    assert!((a5 / a4 - 2.0).abs() < 1e-4);
}

#[test]
fn parses_pitch_names() {
    assert_eq!("C4".parse::<Note>().unwrap().midi(), 60);
    assert_eq!("A4".parse::<Note>().unwrap().midi(), 69);
    assert_eq!("C2".parse::<Note>().unwrap().midi(), 36);
    assert_eq!("F#3".parse::<Note>().unwrap().midi(), 54);
    assert_eq!("Bb2".parse::<Note>().unwrap().midi(), 46);
    assert_eq!("c-1".parse::<Note>().unwrap().midi(), 0);
}

#[test]
fn rejects_bad_pitch_names() {
    assert_eq!("".parse::<Note>(), Err(NoteParseError::Empty));
    assert_eq!("H4".parse::<Note>(), Err(NoteParseError::BadLetter('H')));
    assert!(matches!(
        "C".parse::<Note>(),
        Err(NoteParseError::BadOctave(_))
    ));
    assert!(matches!(
        "C#x".parse::<Note>(),
        Err(NoteParseError::BadOctave(_))
    ));
}

#[test]
fn note_display_round_trips_through_name() {
    for name in ["C2", "F#3", "A4", "B5"] {
        let note: Note = name.parse().unwrap();
        assert_eq!(note.to_string(), name);
    }
}

#[test]
fn wall_notes_are_distinct() {
    for (i, a) in WALLS.iter().enumerate() {
        for b in WALLS.iter().skip(i + 1) {
            assert_ne!(a.note, b.note, "{:?} and {:?} share a note", a.id, b.id);
        }
    }
}

#[test]
fn note_values_at_default_tempo() {
    let eighth: NoteValue = "8n".parse().unwrap();
    let quarter: NoteValue = "4n".parse().unwrap();
    assert_eq!(eighth, NoteValue::EIGHTH);
    assert!((quarter.seconds(120.0) - 0.5).abs() < 1e-9);
    assert!((eighth.seconds(120.0) - 0.25).abs() < 1e-9);
    assert!((NoteValue::WHOLE.seconds(60.0) - 4.0).abs() < 1e-9);
    assert!("3n".parse::<NoteValue>().is_err());
    assert!("0n".parse::<NoteValue>().is_err());
    assert!("8".parse::<NoteValue>().is_err());
}

#[test]
fn envelope_breakpoints_for_a_held_note() {
    let env = Envelope::default();
    let pts = env.breakpoints(1.0, 0.25, 1.0);
    assert!((pts[0].time - 1.005).abs() < 1e-9);
    assert_eq!(pts[0].level, 1.0);
    assert!((pts[1].time - 1.105).abs() < 1e-9);
    assert!((pts[1].level - 0.3).abs() < 1e-6);
    assert!((pts[2].time - 1.25).abs() < 1e-9);
    assert!((pts[3].time - 2.25).abs() < 1e-9);
    assert_eq!(pts[3].level, 0.0);
    for w in pts.windows(2) {
        assert!(w[1].time >= w[0].time);
    }
}

#[test]
fn envelope_short_hold_releases_mid_decay() {
    let env = Envelope::default();
    // Release halfway through the decay
    let pts = env.breakpoints(0.0, 0.055, 1.0);
    assert!((pts[1].time - 0.055).abs() < 1e-9);
    assert!((pts[1].level - 0.65).abs() < 1e-4);
    assert_eq!(pts[2].level, pts[1].level);
    assert!((env.end_time(0.0, 0.055) - 1.055).abs() < 1e-9);
}

#[test]
fn envelope_attack_always_completes() {
    let env = Envelope::default();
    let pts = env.breakpoints(0.0, 0.0, 0.8);
    assert!((pts[0].time - 0.005).abs() < 1e-9);
    assert!((pts[2].time - 0.005).abs() < 1e-9);
    assert_eq!(pts[2].level, 0.8);
}

#[test]
fn riff_schedules_quarter_notes_within_lookahead() {
    let mut sched = LoopScheduler::new(RiffPattern::default(), 120.0);
    assert!(sched.due(0.0, 1.0).is_empty(), "not started yet");
    sched.start(10.0);
    assert!(sched.is_running());

    let first = sched.due(10.0, 0.1);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].time, 10.0);
    assert_eq!(first[0].note.midi(), 36);
    assert!((first[0].duration - 0.25).abs() < 1e-9);

    // Same window again hands out nothing new
    assert!(sched.due(10.05, 0.1).is_empty());

    let next = sched.due(10.45, 0.1);
    assert_eq!(next.len(), 1);
    assert!((next[0].time - 10.5).abs() < 1e-9);
}

#[test]
fn riff_skips_ticks_missed_during_a_stall() {
    let mut sched = LoopScheduler::new(RiffPattern::default(), 120.0);
    sched.start(0.0);
    let _ = sched.due(0.0, 0.1);
    let late = sched.due(7.2, 0.4);
    assert_eq!(late.len(), 1);
    assert!((late[0].time - 7.5).abs() < 1e-9);
}

#[test]
fn riff_stop_halts_scheduling() {
    let mut sched = LoopScheduler::new(RiffPattern::default(), 120.0);
    sched.start(0.0);
    sched.stop();
    assert!(!sched.is_running());
    assert!(sched.due(0.0, 10.0).is_empty());
}

#[test]
fn player_toggle_and_label() {
    let state = PlayerState::default();
    assert_eq!(state, PlayerState::Stopped);
    assert_eq!(state.button_label(), "Play");
    let started = state.toggled();
    assert_eq!(started, PlayerState::Started);
    assert_eq!(started.button_label(), "Pause");
    assert_eq!(started.toggled(), PlayerState::Stopped);
}

#[test]
fn sample_loop_defaults() {
    let sample = SampleLoop::default();
    assert_eq!(sample.url, "RomeroShort.mp3");
    assert_eq!(sample.loop_start, 0.0);
    assert_eq!(sample.loop_end, 5.0);
}

#[test]
fn const_pitch_names_agree_with_runtime_parsing() {
    const RIFF: Note = Note::named("C2");
    assert_eq!(RIFF.midi(), 36);
    for name in ["C4", "F#3", "Bb2", "A-1", "G10"] {
        assert_eq!(Note::named(name), name.parse::<Note>().unwrap(), "{name}");
    }
    let names: Vec<String> = WALLS.iter().map(|w| w.note.to_string()).collect();
    assert_eq!(names, ["C4", "D4", "E4", "G4", "A4"]);
}
