// Host-side tests for remapping, distance and colour helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod math {
    include!("../src/core/math.rs");
}

use math::*;

fn rgb_close(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
}

#[test]
fn map_to_value_is_linear() {
    assert_eq!(map_to_value(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    assert_eq!(map_to_value(0.0, -5.0, 5.0, 0.0, 360.0), 180.0);
    let pi = std::f64::consts::PI;
    assert!((map_to_value(1.0, 0.0, 2.8, 0.0, pi) - pi / 2.8).abs() < 1e-12);
}

#[test]
fn map_to_value_extrapolates_without_clamping() {
    assert_eq!(map_to_value(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
    assert_eq!(map_to_value(-10.0, 0.0, 10.0, 0.0, 1.0), -1.0);
    assert!(map_to_value(1.0, 3.0, 3.0, 0.0, 1.0).is_infinite());
    assert!(map_to_value(3.0, 3.0, 3.0, 0.0, 1.0).is_nan());
}

#[test]
fn planar_distance_ignores_height() {
    assert_eq!(planar_distance(3.0, 4.0, 0.0, 0.0), 5.0);
    assert_eq!(planar_distance(-1.0, 0.0, 0.0, 0.0), 1.0);
    assert_eq!(planar_distance(2.0, 2.0, 2.0, 2.0), 0.0);
    assert_eq!(planar_distance(1.0, 2.0, 4.0, 6.0), planar_distance(4.0, 6.0, 1.0, 2.0));
}

#[test]
fn hsl_primary_hues() {
    assert!(rgb_close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
    assert!(rgb_close(hsl_to_rgb(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
    assert!(rgb_close(hsl_to_rgb(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
}

#[test]
fn hsl_zero_saturation_is_grey() {
    assert!(rgb_close(hsl_to_rgb(77.0, 0.0, 0.8), [0.8, 0.8, 0.8]));
}

#[test]
fn hsl_hue_wraps_at_full_turn() {
    assert!(rgb_close(hsl_to_rgb(360.0, 0.5, 0.8), hsl_to_rgb(0.0, 0.5, 0.8)));
    assert!(rgb_close(hsl_to_rgb(-120.0, 0.5, 0.8), hsl_to_rgb(240.0, 0.5, 0.8)));
}

#[test]
fn point_colour_stays_pastel() {
    // saturation 0.5, lightness 0.8 keeps every channel in [0.7, 0.9]
    for hue in (0..360).step_by(15) {
        let rgb = hsl_to_rgb(hue as f32, 0.5, 0.8);
        for c in rgb {
            assert!((0.7 - 1e-5..=0.9 + 1e-5).contains(&c), "hue {hue} channel {c}");
        }
    }
}
