use glam::Vec3;

// Shared room/physics tuning constants used by the web frontend and tests.

// Room layout (world units; the room is a cube centred on the origin)
pub const ROOM_SIZE: f32 = 2500.0;
pub const ROOM_HALF_EXTENT: f32 = ROOM_SIZE / 2.0;

// Balls
pub const SPHERE_RADIUS: f32 = 100.0;
pub const BALL_SPEED: f32 = 900.0; // units per second (15 units per 60 Hz frame)
pub const SPAWN_OFFSET: f32 = 150.0; // how far inside the wall a new ball appears
// Half a radius short of the wall keeps the sphere from clipping through it
pub const BOUNDARY_MARGIN: f32 = SPHERE_RADIUS / 2.0;
pub const BALL_COLOR: u32 = 0x666666;

// Frame integration
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
// One clamped step must stay inside BOUNDARY_MARGIN + SPAWN_OFFSET
pub const MAX_BALL_SPEED: f32 = 1500.0;

// Camera
pub const CAMERA_Z: f32 = ROOM_HALF_EXTENT;
pub const CAMERA_HFOV_DEG: f32 = 120.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 10_000.0;

// Shading
pub const EMISSIVE_COLOR: u32 = 0x072534;
pub const LIGHT_POSITIONS: [Vec3; 3] = [
    Vec3::new(0.0, 750.0, 0.0),
    Vec3::new(375.0, 750.0, 375.0),
    Vec3::new(-375.0, -750.0, -375.0),
];

// Transport
pub const DEFAULT_BPM: f32 = 120.0;
