// Audio-reactive height field over a fixed point grid.
//
// The grid topology never changes after construction; each frame only the Y
// component of every point and its scale are rewritten. Cross-frame state
// (ripple phase and displayed hue) travels in [`FieldState`] rather than in
// globals, so an update is a function of `(grid, snapshot, state, params)`.

use super::analysis::FrequencySnapshot;
use super::constants::*;
use super::math::{map_to_value, planar_distance};
use std::f64::consts::PI;

/// Dimensions and spacing of the point lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub amount_x: usize,
    pub amount_z: usize,
    pub separation: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            amount_x: AMOUNT_X,
            amount_z: AMOUNT_Z,
            separation: SEPARATION,
        }
    }
}

impl GridLayout {
    pub fn point_count(&self) -> usize {
        self.amount_x * self.amount_z
    }
}

/// Point lattice in the X-Z plane with per-point positions and scales.
///
/// Points are stored row-major: `ix` outer, `iz` inner.
pub struct Grid {
    layout: GridLayout,
    positions: Vec<f32>,
    scales: Vec<f32>,
    dirty: bool,
}

impl Grid {
    pub fn new(layout: GridLayout) -> Self {
        let n = layout.point_count();
        let mut positions = Vec::with_capacity(n * 3);
        let mut scales = Vec::with_capacity(n);
        let sep = layout.separation;
        let half_x = (layout.amount_x as f32 * sep) / 2.0;
        let half_z = (layout.amount_z as f32 * sep) / 2.0;
        for ix in 0..layout.amount_x {
            for iz in 0..layout.amount_z {
                positions.push(ix as f32 * sep - half_x);
                positions.push(0.0);
                positions.push(iz as f32 * sep - half_z);
                scales.push(INITIAL_POINT_SCALE);
            }
        }
        Self {
            layout,
            positions,
            scales,
            dirty: true,
        }
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Flat `[x, y, z, x, y, z, ...]` buffer.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    pub fn point(&self, index: usize) -> [f32; 3] {
        let i = index * 3;
        [
            self.positions[i],
            self.positions[i + 1],
            self.positions[i + 2],
        ]
    }

    pub fn height(&self, index: usize) -> f32 {
        self.positions[index * 3 + 1]
    }

    /// Returns whether the buffers changed since the last call and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// When the ripple phase accumulator advances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhaseAdvance {
    /// `RIPPLE_PHASE_STEP` after every point that takes the ripple branch.
    PerRipplePoint,
    /// A fixed step once per update, independent of grid resolution.
    PerFrame(f64),
}

/// Which height drives the single displayed hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HueSource {
    /// The last point in row-major order.
    LastPoint,
    /// Mean height of the whole grid.
    MeanHeight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub baseline: f64,
    pub max_y: f64,
    pub active_area: f64,
    pub min_amplitude: f64,
    pub pitch_split_hz: f64,
    pub ripple_wavelength: f64,
    pub ripple_height_factor: f64,
    pub point_scale: f32,
    pub phase_advance: PhaseAdvance,
    pub hue_source: HueSource,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            baseline: BASELINE,
            max_y: MAX_Y,
            active_area: ACTIVE_AREA,
            min_amplitude: MIN_AMPLITUDE,
            pitch_split_hz: PITCH_SPLIT_HZ,
            ripple_wavelength: RIPPLE_WAVELENGTH,
            ripple_height_factor: RIPPLE_HEIGHT_FACTOR,
            point_scale: POINT_SCALE,
            phase_advance: PhaseAdvance::PerRipplePoint,
            hue_source: HueSource::LastPoint,
        }
    }
}

/// Values carried from one frame to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldState {
    /// Ripple phase accumulator; never decreases.
    pub count: f64,
    /// Hue in degrees derived from the last update.
    pub last_hue: f32,
}

/// Amplitude above the noise floor, or zero below it.
#[inline]
pub fn gated_amplitude(average_amplitude: f64, min_amplitude: f64) -> f64 {
    if average_amplitude < min_amplitude {
        0.0
    } else {
        average_amplitude - min_amplitude
    }
}

/// Radius of the active region for a gated amplitude.
#[inline]
pub fn active_radius(amplitude: f64, active_area: f64) -> f64 {
    amplitude * active_area
}

/// Strict: a point exactly on the boundary belongs to the ripple.
#[inline]
pub fn is_inside(distance: f64, max_radius: f64) -> bool {
    distance < max_radius
}

/// Height of a point inside the active radius: a raised-cosine bump, or a
/// dimple when the loudest frequency is at or below the pitch split.
pub fn bump_height(
    distance: f64,
    max_radius: f64,
    amplitude: f64,
    loudest_frequency_hz: f64,
    params: &FieldParams,
) -> f64 {
    let scaled = map_to_value(distance, 0.0, max_radius, 0.0, PI);
    let bump = (scaled.cos() + 1.0) * params.max_y * amplitude;
    if loudest_frequency_hz > params.pitch_split_hz {
        params.baseline + bump
    } else {
        params.baseline - bump
    }
}

/// Height of a point outside the active radius for the current ripple phase.
pub fn ripple_height(
    distance: f64,
    max_radius: f64,
    average_amplitude: f64,
    count: f64,
    params: &FieldParams,
) -> f64 {
    let ripple_start = distance - max_radius;
    let scaled = map_to_value(ripple_start, 0.0, params.ripple_wavelength, 0.0, PI);
    let ripple_height = params.ripple_height_factor * average_amplitude;
    params.baseline + (scaled - count).sin() * ripple_height
}

/// Map a height in `[-max_y, max_y]` onto a hue in `[0, 360]`.
#[inline]
pub fn hue_for_height(height: f64, max_y: f64) -> f32 {
    map_to_value(height, -max_y, max_y, 0.0, HUE_MAX_DEG) as f32
}

/// Recompute every point's height and scale for one frame.
///
/// Not idempotent: the ripple phase advances as a side effect, so two calls
/// with the same snapshot and state produce different fields once any point
/// falls outside the active radius. Non-finite snapshot values flow straight
/// into the buffers.
pub fn update(
    grid: &mut Grid,
    snapshot: &FrequencySnapshot,
    state: FieldState,
    params: &FieldParams,
) -> FieldState {
    let loudest = snapshot.loudest_frequency_hz;
    let average = snapshot.average_amplitude;
    let amplitude = gated_amplitude(average, params.min_amplitude);
    let max_radius = active_radius(amplitude, params.active_area);

    let mut count = state.count;
    let mut hue = state.last_hue;
    let mut height_sum = 0.0f64;

    for (point, scale) in grid
        .positions
        .chunks_exact_mut(3)
        .zip(grid.scales.iter_mut())
    {
        let distance = planar_distance(point[0] as f64, point[2] as f64, 0.0, 0.0);
        let height = if is_inside(distance, max_radius) {
            bump_height(distance, max_radius, amplitude, loudest, params)
        } else {
            let h = ripple_height(distance, max_radius, average, count, params);
            if params.phase_advance == PhaseAdvance::PerRipplePoint {
                count += RIPPLE_PHASE_STEP;
            }
            h
        };
        point[1] = height as f32;

        // hue follows the stored value, not the f64 intermediate
        let stored = point[1] as f64;
        height_sum += stored;
        if params.hue_source == HueSource::LastPoint {
            hue = hue_for_height(stored, params.max_y);
        }

        *scale = params.point_scale;
    }

    if let PhaseAdvance::PerFrame(step) = params.phase_advance {
        count += step;
    }
    if params.hue_source == HueSource::MeanHeight && !grid.is_empty() {
        hue = hue_for_height(height_sum / grid.len() as f64, params.max_y);
    }

    grid.dirty = true;
    FieldState {
        count,
        last_hue: hue,
    }
}
