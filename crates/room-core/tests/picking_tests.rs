// Host-side tests for ray casting, camera maths and wall lookup.

use glam::{Vec2, Vec3};
use room_core::picking::{fovy_for_horizontal, pixel_to_ndc, ray_rect, ray_sphere};
use room_core::{pick_wall, Camera, Ray, WallId, CAMERA_HFOV_DEG, CAMERA_Z, ROOM_HALF_EXTENT};

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    let t = ray_sphere(ray_origin, ray_dir, center, 2.0).expect("hit");
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);
    let center = Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_wholly_behind_origin_is_ignored() {
    let center = Vec3::new(0.0, 0.0, -5.0);
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, center, 2.0).is_none());
}

#[test]
fn ray_sphere_from_inside_hits_at_origin() {
    // eye inside the sphere, looking either way
    let center = Vec3::new(0.0, 0.0, -0.5);
    assert_eq!(ray_sphere(Vec3::ZERO, Vec3::Z, center, 2.0), Some(0.0));
    assert_eq!(ray_sphere(Vec3::ZERO, Vec3::NEG_Z, center, 2.0), Some(0.0));
}

#[test]
fn ray_rect_respects_bounds() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::NEG_Z,
    };
    let center = Vec3::new(0.0, 0.0, -10.0);
    let t = ray_rect(&ray, center, Vec3::X, Vec3::Y).expect("hit");
    assert!((t - 10.0).abs() < 1e-5);

    let off = Ray {
        origin: Vec3::new(1.5, 0.0, 0.0),
        dir: Vec3::NEG_Z,
    };
    assert!(ray_rect(&off, center, Vec3::X, Vec3::Y).is_none());
}

#[test]
fn ray_rect_parallel_or_behind_misses() {
    let center = Vec3::new(0.0, 0.0, -10.0);
    let parallel = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::X,
    };
    assert!(ray_rect(&parallel, center, Vec3::X, Vec3::Y).is_none());
    let away = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::Z,
    };
    assert!(ray_rect(&away, center, Vec3::X, Vec3::Y).is_none());
}

#[test]
fn pick_wall_returns_nearest_face() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::new(1.0, -0.2, 0.0).normalize(),
    };
    let hit = pick_wall(&ray).expect("hit");
    assert_eq!(hit.wall.id, WallId::Right);
    assert!((hit.point.x - ROOM_HALF_EXTENT).abs() < 1e-2);

    let down = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::NEG_Y,
    };
    assert_eq!(pick_wall(&down).expect("hit").wall.id, WallId::Floor);
}

#[test]
fn pixel_to_ndc_maps_corners_and_center() {
    let ndc = pixel_to_ndc(Vec2::new(0.0, 0.0), 800.0, 600.0);
    assert_eq!(ndc, Vec2::new(-1.0, 1.0));
    let ndc = pixel_to_ndc(Vec2::new(800.0, 600.0), 800.0, 600.0);
    assert_eq!(ndc, Vec2::new(1.0, -1.0));
    let ndc = pixel_to_ndc(Vec2::new(400.0, 300.0), 800.0, 600.0);
    assert_eq!(ndc, Vec2::ZERO);
}

#[test]
fn horizontal_fov_is_preserved_across_aspects() {
    let hfov = CAMERA_HFOV_DEG.to_radians();
    for aspect in [0.5_f32, 1.0, 16.0 / 9.0, 3.0] {
        let fovy = fovy_for_horizontal(hfov, aspect);
        let back = 2.0 * ((fovy / 2.0).tan() * aspect).atan();
        assert!((back - hfov).abs() < 1e-4, "aspect {}", aspect);
    }
}

#[test]
fn camera_center_ray_points_at_origin() {
    let mut cam = Camera::default();
    cam.set_aspect(16.0 / 9.0);
    let ray = cam.ray_through_ndc(Vec2::ZERO);
    assert_eq!(ray.origin, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4);
}

#[test]
fn camera_edge_ray_matches_horizontal_fov() {
    let mut cam = Camera::default();
    cam.set_aspect(2.0);
    let ray = cam.ray_through_ndc(Vec2::new(1.0, 0.0));
    let angle = ray.dir.x.atan2(-ray.dir.z);
    assert!((angle - (CAMERA_HFOV_DEG / 2.0).to_radians()).abs() < 5e-3);
}

#[test]
fn camera_rejects_degenerate_aspect() {
    let mut cam = Camera::default();
    cam.set_aspect(f32::NAN);
    assert_eq!(cam.aspect, 1.0);
    cam.set_aspect(0.0);
    assert_eq!(cam.aspect, 1.0);
}

#[test]
fn camera_basis_is_right_and_up() {
    let cam = Camera::default();
    let (right, up) = cam.basis();
    assert!((right - Vec3::X).length() < 1e-5);
    assert!((up - Vec3::Y).length() < 1e-5);
}
