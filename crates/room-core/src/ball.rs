use crate::constants::{BALL_SPEED, BOUNDARY_MARGIN, ROOM_HALF_EXTENT, SPHERE_RADIUS};
use crate::note::Note;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(pub u32);

/// A musical ball travelling along a fixed axis between two walls.
///
/// Fields:
/// - `position`: world-space center
/// - `direction`: unit travel direction, axis-aligned by construction
/// - `speed`: world units per second
/// - `note`: pitch re-triggered on every bounce
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub id: BallId,
    pub position: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    pub note: Note,
}

/// Result of advancing a ball by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub ball: Ball,
    pub bounced: bool,
}

/// Distance from the room center at which a ball turns around.
#[inline]
pub fn boundary_threshold() -> f32 {
    ROOM_HALF_EXTENT - BOUNDARY_MARGIN
}

/// Reflect `dir` off a plane whose normal is `normal` (unit length).
#[inline]
pub fn reflect(dir: Vec3, normal: Vec3) -> Vec3 {
    dir - 2.0 * dir.dot(normal) * normal
}

impl Ball {
    pub fn new(id: BallId, position: Vec3, direction: Vec3, note: Note) -> Self {
        Self {
            id,
            position,
            direction: direction.normalize_or_zero(),
            speed: BALL_SPEED,
            note,
        }
    }

    /// Signed distance travelled toward the wall the ball is heading for.
    #[inline]
    pub fn axis_distance(&self) -> f32 {
        self.position.dot(self.direction)
    }

    /// Advance by `dt_sec`. When the projection of the new position onto the
    /// travel direction reaches `boundary`, the returned ball carries the
    /// reflected direction and `bounced` is set.
    pub fn advanced(&self, dt_sec: f32, boundary: f32) -> Step {
        let position = self.position + self.direction * self.speed * dt_sec;
        let moved = Ball { position, ..*self };
        if moved.axis_distance() >= boundary {
            // The wall being approached has its normal along the travel axis
            let direction = reflect(self.direction, self.direction);
            Step {
                ball: Ball { direction, ..moved },
                bounced: true,
            }
        } else {
            Step {
                ball: moved,
                bounced: false,
            }
        }
    }

    pub fn radius(&self) -> f32 {
        SPHERE_RADIUS
    }
}
