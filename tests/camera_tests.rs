// Host-side tests for camera math and orbit controls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/core/camera.rs");
}

use camera::*;
use glam::{Vec3, Vec4};

fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).length() < eps
}

fn controls() -> OrbitControls {
    OrbitControls::from_eye(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 0.5, 200.0)
}

#[test]
fn from_eye_round_trips_the_start_position() {
    let c = controls();
    assert!(approx(c.eye(), Vec3::new(1.0, 0.0, 0.0), 1e-3));
    assert!((c.radius - 1.0).abs() < 1e-6);

    let above = OrbitControls::from_eye(Vec3::new(0.0, 3.0, 4.0), Vec3::ZERO, 0.5, 200.0);
    assert!(approx(above.eye(), Vec3::new(0.0, 3.0, 4.0), 1e-3));
}

#[test]
fn rotation_keeps_distance_to_target() {
    let mut c = controls();
    c.rotate_by_pixels(120.0, -40.0, 800.0);
    c.rotate_by_pixels(-300.0, 90.0, 800.0);
    assert!((c.eye().length() - 1.0).abs() < 1e-4);
}

#[test]
fn full_height_drag_turns_a_full_circle() {
    let mut c = controls();
    let start = c.eye();
    c.rotate_by_pixels(800.0, 0.0, 800.0);
    assert!(approx(c.eye(), start, 1e-3));
}

#[test]
fn polar_angle_never_reaches_the_poles() {
    let mut c = controls();
    c.rotate_by_pixels(0.0, 1.0e6, 100.0);
    assert!(c.polar > 0.0);
    c.rotate_by_pixels(0.0, -1.0e6, 100.0);
    assert!(c.polar < std::f32::consts::PI);
    assert!(c.eye().is_finite());
}

#[test]
fn dolly_scales_and_clamps_radius() {
    let mut c = OrbitControls::from_eye(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 0.5, 20.0);
    c.dolly(-100.0);
    assert!((c.radius - 9.5).abs() < 1e-4);
    c.dolly(100.0);
    assert!((c.radius - 10.0).abs() < 1e-4);
    for _ in 0..200 {
        c.dolly(-1.0);
    }
    assert_eq!(c.radius, 0.5);
    for _ in 0..200 {
        c.dolly(1.0);
    }
    assert_eq!(c.radius, 20.0);
    c.dolly(f32::NAN);
    assert_eq!(c.radius, 20.0);
}

#[test]
fn reset_restores_the_home_view() {
    let mut c = controls();
    let home = c.eye();
    c.rotate_by_pixels(55.0, 33.0, 600.0);
    c.dolly(5.0);
    c.reset();
    assert!(approx(c.eye(), home, 1e-5));
}

#[test]
fn target_projects_to_the_screen_centre() {
    let mut cam = Camera {
        eye: Vec3::ZERO,
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: 75f32.to_radians(),
        znear: 1.0,
        zfar: 10000.0,
    };
    let mut c = OrbitControls::from_eye(Vec3::new(0.0, 4.0, 6.0), Vec3::ZERO, 0.5, 200.0);
    c.rotate_by_pixels(100.0, 20.0, 720.0);
    c.apply(&mut cam);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    assert!((clip.x / clip.w).abs() < 1e-4);
    assert!((clip.y / clip.w).abs() < 1e-4);
}
