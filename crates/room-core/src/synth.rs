//! Envelope maths for the monophonic synth voice. The web frontend turns the
//! breakpoints into `AudioParam` automation.

/// Attack/decay/sustain/release envelope; times in seconds, sustain as a level 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub attack: f64,
    pub decay: f64,
    pub sustain: f32,
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.005,
            decay: 0.1,
            sustain: 0.3,
            release: 1.0,
        }
    }
}

/// A point on the gain curve: ramp linearly to `level` by `time`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub time: f64,
    pub level: f32,
}

impl Envelope {
    /// Breakpoints for a note held from `start` for `hold` seconds at `peak` gain.
    ///
    /// The attack always completes; a hold that ends during the decay releases
    /// from the level the decay had reached.
    pub fn breakpoints(&self, start: f64, hold: f64, peak: f32) -> [Breakpoint; 4] {
        let attack_end = start + self.attack;
        let decay_end = attack_end + self.decay;
        let release_start = (start + hold.max(0.0)).max(attack_end);
        let sustain = peak * self.sustain.clamp(0.0, 1.0);
        let (decay_time, held_level) = if release_start < decay_end {
            let frac = ((release_start - attack_end) / self.decay) as f32;
            (release_start, peak + (sustain - peak) * frac)
        } else {
            (decay_end, sustain)
        };
        [
            Breakpoint {
                time: attack_end,
                level: peak,
            },
            Breakpoint {
                time: decay_time,
                level: held_level,
            },
            Breakpoint {
                time: release_start,
                level: held_level,
            },
            Breakpoint {
                time: release_start + self.release,
                level: 0.0,
            },
        ]
    }

    /// Time after which the voice is silent.
    pub fn end_time(&self, start: f64, hold: f64) -> f64 {
        self.breakpoints(start, hold, 1.0)[3].time
    }
}
