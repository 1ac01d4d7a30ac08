// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_constants_are_sane() {
    assert!(SEPARATION > 0.0);
    assert!(AMOUNT_X > 1 && AMOUNT_Z > 1);
    assert!(INITIAL_POINT_SCALE > 0.0);
    assert!(POINT_SCALE > 0.0 && POINT_SCALE <= INITIAL_POINT_SCALE);

    // the grid spans a few dozen world units across
    let span_x = AMOUNT_X as f32 * SEPARATION;
    assert!((span_x - 35.0).abs() < 1e-3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_sane() {
    assert!(MIN_AMPLITUDE > 0.0 && MIN_AMPLITUDE < 1.0);
    assert!(MAX_Y > 0.0);
    assert!(ACTIVE_AREA > 0.0);
    assert!(PITCH_SPLIT_HZ > 0.0);
    assert!(RIPPLE_WAVELENGTH > 0.0);
    assert!(RIPPLE_PHASE_STEP > 0.0 && RIPPLE_PHASE_STEP < 1e-3);
    assert_eq!(HUE_MAX_DEG, 360.0);
    assert!((0.0..=1.0).contains(&SMOOTHING_TIME_CONSTANT));
    assert_eq!(BYTE_AMPLITUDE_MAX, u8::MAX as f64);

    // a full-scale normalized amplitude still fits inside the grid
    let half_span = (AMOUNT_X as f64 * SEPARATION as f64) / 2.0;
    assert!(ACTIVE_AREA * (1.0 - MIN_AMPLITUDE) < half_span);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(ORBIT_MIN_RADIUS > 0.0 && ORBIT_MAX_RADIUS > ORBIT_MIN_RADIUS);

    let eye = CAMERA_EYE;
    let target = CAMERA_TARGET;
    let dist = ((eye[0] - target[0]).powi(2) + (eye[1] - target[1]).powi(2) + (eye[2] - target[2]).powi(2)).sqrt();
    assert!(dist >= ORBIT_MIN_RADIUS && dist <= ORBIT_MAX_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn point_style_constants_are_sane() {
    assert!(POINT_SIZE_FACTOR > 0.0);
    for v in [POINT_SATURATION, POINT_LIGHTNESS, POINT_ALPHA] {
        assert!((0.0..=1.0).contains(&v));
    }
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(STATS_INTERVAL_SEC > 0.0);
    assert!(!CANVAS_ID.is_empty());
}
