// Field and analysis tuning constants shared by the updater and the web frontend.

// Grid layout
pub const SEPARATION: f32 = 0.07; // world units between neighbouring points
pub const AMOUNT_X: usize = 500;
pub const AMOUNT_Z: usize = 500;
pub const INITIAL_POINT_SCALE: f32 = 0.1;
pub const POINT_SCALE: f32 = 0.02; // scale written on every update

// Height field
pub const BASELINE: f64 = 1.5; // rest height of the plane
pub const MAX_Y: f64 = 5.0; // bump height per unit of gated amplitude
pub const ACTIVE_AREA: f64 = 8.0; // active radius per unit of gated amplitude
pub const MIN_AMPLITUDE: f64 = 0.15; // noise floor
pub const PITCH_SPLIT_HZ: f64 = 600.0; // above: bump, at or below: dimple

// Ripple
pub const RIPPLE_WAVELENGTH: f64 = 0.5;
pub const RIPPLE_HEIGHT_FACTOR: f64 = 0.5; // ripple height per unit of raw amplitude
pub const RIPPLE_PHASE_STEP: f64 = 0.000001; // per outside point

// Hue range the height is mapped onto
pub const HUE_MAX_DEG: f64 = 360.0;

// Analyser
pub const SMOOTHING_TIME_CONSTANT: f64 = 0.85;
pub const BYTE_AMPLITUDE_MAX: f64 = 255.0;
