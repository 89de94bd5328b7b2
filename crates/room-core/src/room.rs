//! Static room geometry and the wall-to-note lookup table.

use crate::constants::ROOM_HALF_EXTENT;
use crate::note::Note;
use crate::picking::{ray_rect, Ray};
use glam::Vec3;

const H: f32 = ROOM_HALF_EXTENT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallId {
    Back,
    Right,
    Left,
    Floor,
    Ceiling,
}

/// One face of the room. `half_u`/`half_v` span the face from its center.
#[derive(Clone, Copy, Debug)]
pub struct Wall {
    pub id: WallId,
    pub center: Vec3,
    pub half_u: Vec3,
    pub half_v: Vec3,
    pub color: u32,
    pub note: Note,
}

impl Wall {
    /// Unit vector from the wall's center toward the room center.
    pub fn inward(&self) -> Vec3 {
        (Vec3::ZERO - self.center).normalize()
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        ray_rect(ray, self.center, self.half_u, self.half_v)
    }
}

/// The room is open on the camera side (+Z).
pub static WALLS: [Wall; 5] = [
    Wall {
        id: WallId::Back,
        center: Vec3::new(0.0, 0.0, -H),
        half_u: Vec3::new(H, 0.0, 0.0),
        half_v: Vec3::new(0.0, H, 0.0),
        color: 0xFF5733,
        note: Note::named("C4"),
    },
    Wall {
        id: WallId::Right,
        center: Vec3::new(H, 0.0, 0.0),
        half_u: Vec3::new(0.0, 0.0, H),
        half_v: Vec3::new(0.0, H, 0.0),
        color: 0x3498DB,
        note: Note::named("D4"),
    },
    Wall {
        id: WallId::Left,
        center: Vec3::new(-H, 0.0, 0.0),
        half_u: Vec3::new(0.0, 0.0, H),
        half_v: Vec3::new(0.0, H, 0.0),
        color: 0x2ECC71,
        note: Note::named("E4"),
    },
    Wall {
        id: WallId::Floor,
        center: Vec3::new(0.0, -H, 0.0),
        half_u: Vec3::new(H, 0.0, 0.0),
        half_v: Vec3::new(0.0, 0.0, H),
        color: 0x9B59B6,
        note: Note::named("G4"),
    },
    Wall {
        id: WallId::Ceiling,
        center: Vec3::new(0.0, H, 0.0),
        half_u: Vec3::new(H, 0.0, 0.0),
        half_v: Vec3::new(0.0, 0.0, H),
        color: 0xFBBC05,
        note: Note::named("A4"),
    },
];

pub fn wall(id: WallId) -> &'static Wall {
    match id {
        WallId::Back => &WALLS[0],
        WallId::Right => &WALLS[1],
        WallId::Left => &WALLS[2],
        WallId::Floor => &WALLS[3],
        WallId::Ceiling => &WALLS[4],
    }
}

/// A ray hit on a wall: which wall, the distance along the ray and the world point.
#[derive(Clone, Copy, Debug)]
pub struct WallHit {
    pub wall: &'static Wall,
    pub t: f32,
    pub point: Vec3,
}

/// Nearest wall hit along `ray`, if any.
pub fn pick_wall(ray: &Ray) -> Option<WallHit> {
    WALLS
        .iter()
        .filter_map(|w| w.intersect(ray).map(|t| (w, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(wall, t)| WallHit {
            wall,
            t,
            point: ray.at(t),
        })
}
