use room_core::color::hex_to_linear;
use room_core::{Ball, Camera, Wall, BALL_COLOR, EMISSIVE_COLOR, LIGHT_POSITIONS, WALLS};

use crate::constants::LIGHT_INTENSITY;

const KIND_WALL: f32 = 0.0;
const KIND_BALL: f32 = 1.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Instance {
    center_kind: [f32; 4],
    axis_u: [f32; 4],
    axis_v: [f32; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    light_dirs: [[f32; 4]; 3],
    emissive: [f32; 4],
}

pub(crate) fn scene_uniforms(camera: &Camera) -> SceneUniforms {
    let light = |i: usize| {
        let d = LIGHT_POSITIONS[i].normalize();
        [d.x, d.y, d.z, LIGHT_INTENSITY]
    };
    SceneUniforms {
        view_proj: camera.view_proj().to_cols_array_2d(),
        light_dirs: [light(0), light(1), light(2)],
        emissive: hex_to_linear(EMISSIVE_COLOR).to_array(),
    }
}

fn wall_instance(wall: &Wall) -> Instance {
    Instance {
        center_kind: wall.center.extend(KIND_WALL).to_array(),
        axis_u: wall.half_u.extend(0.0).to_array(),
        axis_v: wall.half_v.extend(0.0).to_array(),
        color: hex_to_linear(wall.color).to_array(),
    }
}

/// Rebuild the instance list: the walls first, then one billboard per live ball.
pub(crate) fn fill_instances(out: &mut Vec<Instance>, camera: &Camera, balls: &[Ball]) {
    out.clear();
    out.extend(WALLS.iter().map(wall_instance));
    let (right, up) = camera.basis();
    let color = hex_to_linear(BALL_COLOR).to_array();
    out.extend(balls.iter().map(|b| Instance {
        center_kind: b.position.extend(KIND_BALL).to_array(),
        axis_u: (right * b.radius()).extend(0.0).to_array(),
        axis_v: (up * b.radius()).extend(0.0).to_array(),
        color,
    }));
}
