//! Looping riff transport and the background-sample player state.
//!
//! The scheduler works in audio-clock seconds: every frame the frontend asks for
//! the loop ticks falling inside a short lookahead window and schedules them on
//! the audio clock, so note timing does not depend on frame timing.

use crate::note::{Note, NoteValue};
use smallvec::SmallVec;

/// A repeating note: `note` held for `length`, retriggered every `interval`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiffPattern {
    pub note: Note,
    pub length: NoteValue,
    pub interval: NoteValue,
}

const RIFF_NOTE: Note = Note::named("C2");

impl Default for RiffPattern {
    fn default() -> Self {
        Self {
            note: RIFF_NOTE,
            length: NoteValue::EIGHTH,
            interval: NoteValue::QUARTER,
        }
    }
}

/// A note occurrence placed on the audio clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledNote {
    pub note: Note,
    pub time: f64,
    pub duration: f64,
}

pub struct LoopScheduler {
    pattern: RiffPattern,
    bpm: f32,
    origin: Option<f64>,
    next_index: u64,
}

impl RiffPattern {
    /// The default retrigger interval with a configured pitch and length.
    pub fn with_note(note: Note, length: NoteValue) -> Self {
        Self {
            note,
            length,
            ..Self::default()
        }
    }
}

impl LoopScheduler {
    pub fn new(pattern: RiffPattern, bpm: f32) -> Self {
        Self {
            pattern,
            bpm,
            origin: None,
            next_index: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.origin.is_some()
    }

    /// Anchor loop tick zero at audio time `at`.
    pub fn start(&mut self, at: f64) {
        self.origin = Some(at);
        self.next_index = 0;
    }

    pub fn stop(&mut self) {
        self.origin = None;
    }

    pub fn interval_sec(&self) -> f64 {
        self.pattern.interval.seconds(self.bpm)
    }

    /// Collect ticks in `[now, now + lookahead)` not yet handed out.
    ///
    /// Ticks that fell behind `now` (e.g. while the tab was hidden) are skipped
    /// rather than played late in a burst.
    pub fn due(&mut self, now: f64, lookahead: f64) -> SmallVec<[ScheduledNote; 4]> {
        let mut out = SmallVec::new();
        let Some(origin) = self.origin else {
            return out;
        };
        let interval = self.interval_sec();
        if interval <= 0.0 {
            return out;
        }
        let tick_time = |i: u64| origin + i as f64 * interval;
        if tick_time(self.next_index) < now {
            self.next_index = ((now - origin) / interval).ceil().max(0.0) as u64;
        }
        let horizon = now + lookahead;
        let duration = self.pattern.length.seconds(self.bpm);
        while tick_time(self.next_index) < horizon {
            out.push(ScheduledNote {
                note: self.pattern.note,
                time: tick_time(self.next_index),
                duration,
            });
            self.next_index += 1;
        }
        out
    }
}

/// Playback state of the looping background sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Stopped,
    Started,
}

impl PlayerState {
    pub fn toggled(self) -> Self {
        match self {
            PlayerState::Stopped => PlayerState::Started,
            PlayerState::Started => PlayerState::Stopped,
        }
    }

    /// Label for the play/pause button: the action the next press performs.
    pub fn button_label(self) -> &'static str {
        match self {
            PlayerState::Stopped => "Play",
            PlayerState::Started => "Pause",
        }
    }
}

/// Looping region of the background sample.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleLoop {
    pub url: &'static str,
    pub loop_start: f64,
    pub loop_end: f64,
}

impl Default for SampleLoop {
    fn default() -> Self {
        Self {
            url: "RomeroShort.mp3",
            loop_start: 0.0,
            loop_end: 5.0,
        }
    }
}
