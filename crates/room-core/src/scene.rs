//! Live scene state: the pause flag and the ordered set of balls.

use crate::ball::{boundary_threshold, Ball, BallId};
use crate::config::RoomConfig;
use crate::constants::{MAX_FRAME_DT_SEC, SPHERE_RADIUS};
use crate::note::Note;
use crate::picking::{ray_sphere, Ray};
use crate::room::{pick_wall, WallId};
use std::time::Duration;

/// Why a note was triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteCause {
    Spawn,
    Bounce,
}

/// A note to be played by the ball's own synth voice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteEvent {
    pub ball: BallId,
    pub note: Note,
    pub cause: NoteCause,
}

/// What a click did to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    Spawned { ball: BallId, wall: WallId },
    Removed { ball: BallId },
    Nothing,
}

/// Interaction mode implied by the pause flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickMode {
    Spawn,
    Remove,
}

pub struct SceneState {
    pub config: RoomConfig,
    paused: bool,
    balls: Vec<Ball>,
    next_id: u32,
}

impl SceneState {
    pub fn new(config: RoomConfig) -> Self {
        Self {
            config,
            paused: false,
            balls: Vec::new(),
            next_id: 0,
        }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn click_mode(&self) -> ClickMode {
        if self.paused {
            ClickMode::Remove
        } else {
            ClickMode::Spawn
        }
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Dispatch a click ray: walls spawn while running, balls are removed while paused.
    pub fn click(&mut self, ray: &Ray, out_events: &mut Vec<NoteEvent>) -> ClickOutcome {
        match self.click_mode() {
            ClickMode::Spawn => self.spawn_from_ray(ray, out_events),
            ClickMode::Remove => self.remove_from_ray(ray),
        }
    }

    fn spawn_from_ray(&mut self, ray: &Ray, out_events: &mut Vec<NoteEvent>) -> ClickOutcome {
        let Some(hit) = pick_wall(ray) else {
            return ClickOutcome::Nothing;
        };
        let direction = hit.wall.inward();
        let position = hit.point + direction * self.config.spawn_offset;
        let id = BallId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let ball = Ball {
            speed: self.config.ball_speed,
            ..Ball::new(id, position, direction, hit.wall.note)
        };
        self.balls.push(ball);
        out_events.push(NoteEvent {
            ball: id,
            note: ball.note,
            cause: NoteCause::Spawn,
        });
        ClickOutcome::Spawned {
            ball: id,
            wall: hit.wall.id,
        }
    }

    fn remove_from_ray(&mut self, ray: &Ray) -> ClickOutcome {
        let nearest = self
            .balls
            .iter()
            .enumerate()
            .filter_map(|(i, b)| {
                ray_sphere(ray.origin, ray.dir, b.position, SPHERE_RADIUS).map(|t| (i, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));
        match nearest {
            Some((index, _)) => {
                let removed = self.balls.remove(index);
                ClickOutcome::Removed { ball: removed.id }
            }
            None => ClickOutcome::Nothing,
        }
    }

    /// Advance every ball by `dt` unless paused, pushing a note for each bounce.
    pub fn tick(&mut self, dt: Duration, out_events: &mut Vec<NoteEvent>) {
        if self.paused {
            return;
        }
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);
        let boundary = boundary_threshold();
        for ball in self.balls.iter_mut() {
            let step = ball.advanced(dt_sec, boundary);
            *ball = step.ball;
            if step.bounced {
                log::debug!("[scene] ball {} bounced at {:?}", ball.id.0, ball.position);
                out_events.push(NoteEvent {
                    ball: ball.id,
                    note: ball.note,
                    cause: NoteCause::Bounce,
                });
            }
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(RoomConfig::default())
    }
}
