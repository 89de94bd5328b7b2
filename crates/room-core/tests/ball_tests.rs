// Host-side tests for the bounce integrator.

use glam::Vec3;
use room_core::ball::{boundary_threshold, reflect, Ball, BallId};
use room_core::{Note, BALL_SPEED, ROOM_HALF_EXTENT, SPHERE_RADIUS};

const DT: f32 = 1.0 / 60.0;

fn ball_at(z: f32, dir: Vec3) -> Ball {
    Ball::new(BallId(0), Vec3::new(0.0, 0.0, z), dir, Note::from_midi(60))
}

#[test]
fn boundary_is_half_extent_minus_half_radius() {
    assert!((boundary_threshold() - (ROOM_HALF_EXTENT - SPHERE_RADIUS / 2.0)).abs() < 1e-4);
    assert!((boundary_threshold() - 1200.0).abs() < 1e-4);
}

#[test]
fn advance_moves_by_direction_times_speed_times_dt() {
    let ball = ball_at(0.0, Vec3::Z);
    let step = ball.advanced(0.5, boundary_threshold());
    assert!(!step.bounced);
    assert!((step.ball.position.z - BALL_SPEED * 0.5).abs() < 1e-3);
    assert_eq!(step.ball.direction, Vec3::Z);
}

#[test]
fn direction_is_normalized_on_construction() {
    let ball = ball_at(0.0, Vec3::new(0.0, 0.0, -7.0));
    assert!((ball.direction.length() - 1.0).abs() < 1e-6);
    assert_eq!(ball.direction, Vec3::NEG_Z);
}

#[test]
fn flips_exactly_when_projection_first_reaches_boundary() {
    let boundary = boundary_threshold();
    let mut ball = ball_at(0.0, Vec3::Z);
    let mut flips = 0;
    for _ in 0..200 {
        let before = ball;
        let step = ball.advanced(DT, boundary);
        let projected = step.ball.position.dot(before.direction);
        if step.bounced {
            flips += 1;
            assert!(projected >= boundary, "flipped early at {}", projected);
            assert_eq!(step.ball.direction, -before.direction);
            ball = step.ball;
            break;
        }
        assert!(projected < boundary, "missed flip at {}", projected);
        ball = step.ball;
    }
    assert_eq!(flips, 1);
    assert!(ball.position.z >= boundary);
}

#[test]
fn after_flip_moves_monotonically_away_from_boundary() {
    let boundary = boundary_threshold();
    let mut ball = ball_at(boundary - 1.0, Vec3::Z);
    let step = ball.advanced(DT, boundary);
    assert!(step.bounced);
    ball = step.ball;
    let mut prev_z = ball.position.z;
    // Far less than a full crossing of the room
    for _ in 0..60 {
        let step = ball.advanced(DT, boundary);
        assert!(!step.bounced, "bounced again right after the flip");
        assert!(step.ball.position.z < prev_z);
        prev_z = step.ball.position.z;
        ball = step.ball;
    }
}

#[test]
fn ball_keeps_bouncing_between_opposite_walls() {
    let boundary = boundary_threshold();
    let mut ball = ball_at(0.0, Vec3::X);
    let mut bounces = 0;
    // ~20 seconds of frames
    for _ in 0..1200 {
        let step = ball.advanced(DT, boundary);
        if step.bounced {
            bounces += 1;
        }
        ball = step.ball;
        assert!(ball.position.x.abs() <= boundary + BALL_SPEED * DT + 1e-3);
    }
    // One crossing of 2 * 1200 units at 900 u/s takes ~2.7 s
    assert!(bounces >= 6, "only {} bounces", bounces);
}

#[test]
fn reflect_along_axis_negates_direction() {
    assert_eq!(reflect(Vec3::Y, Vec3::Y), Vec3::NEG_Y);
    assert_eq!(reflect(Vec3::Y, Vec3::NEG_Y), Vec3::NEG_Y);
    // Grazing direction is untouched by a perpendicular normal
    assert_eq!(reflect(Vec3::X, Vec3::Z), Vec3::X);
}

#[test]
fn advancing_does_not_mutate_the_original() {
    let ball = ball_at(boundary_threshold(), Vec3::Z);
    let copy = ball;
    let step = ball.advanced(DT, boundary_threshold());
    assert!(step.bounced);
    assert_eq!(ball, copy);
}
