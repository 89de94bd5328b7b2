//! Camera description and ray casting used to map a click to a scene object.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! converts pointer coordinates to NDC and asks the camera for a world ray.

use crate::constants::{CAMERA_HFOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        let mut cam = Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: 0.0,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        };
        cam.set_aspect(1.0);
        cam
    }
}

impl Camera {
    /// Update the aspect ratio, keeping the horizontal field of view fixed.
    pub fn set_aspect(&mut self, aspect: f32) {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        self.aspect = aspect;
        self.fovy_radians = fovy_for_horizontal(CAMERA_HFOV_DEG.to_radians(), aspect);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space right and up vectors of the image plane.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        (right, up)
    }

    /// Ray from the eye through a point given in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }
}

/// Vertical FOV that yields the given horizontal FOV at `aspect` (width / height).
#[inline]
pub fn fovy_for_horizontal(hfov_radians: f32, aspect: f32) -> f32 {
    2.0 * ((hfov_radians / 2.0).tan() / aspect).atan()
}

/// Map a pixel position inside a `width` x `height` surface to NDC (-1..1, y up).
#[inline]
pub fn pixel_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((2.0 * px.x / w) - 1.0, 1.0 - (2.0 * px.y / h))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    // origin inside the sphere: hit immediately
    if c <= 0.0 {
        return Some(0.0);
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Intersect a ray with a bounded rectangle spanned by `half_u`/`half_v` around `center`.
pub fn ray_rect(ray: &Ray, center: Vec3, half_u: Vec3, half_v: Vec3) -> Option<f32> {
    let normal = half_u.cross(half_v).normalize();
    let denom = ray.dir.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let local = ray.at(t) - center;
    let in_u = local.dot(half_u).abs() <= half_u.length_squared() * (1.0 + 1e-5);
    let in_v = local.dot(half_v).abs() <= half_v.length_squared() * (1.0 + 1e-5);
    (in_u && in_v).then_some(t)
}
