/// Linearly remap `num` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping: values outside the input range extrapolate, and a degenerate
/// input range yields NaN or infinity just like the raw arithmetic does.
#[inline]
pub fn map_to_value(num: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    ((num - in_min) / (in_max - in_min)) * (out_max - out_min) + out_min
}

/// Distance between two points in the X-Z plane.
#[inline]
pub fn planar_distance(x1: f64, z1: f64, x2: f64, z2: f64) -> f64 {
    let dx = x1 - x2;
    let dz = z1 - z2;
    (dx * dx + dz * dz).sqrt()
}

/// Convert HSL (hue in degrees, saturation and lightness in 0..1) to linear-ish RGB in 0..1.
pub fn hsl_to_rgb(hue_deg: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue_deg.rem_euclid(360.0) / 360.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
