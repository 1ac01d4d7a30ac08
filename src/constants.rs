// Presenter tuning constants. The numeric core lives in `core::constants`;
// everything here only affects how the field is drawn and navigated.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 10000.0;
pub const CAMERA_EYE: [f32; 3] = [1.0, 0.0, 0.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const ORBIT_MIN_RADIUS: f32 = 0.5;
pub const ORBIT_MAX_RADIUS: f32 = 200.0;

// Point sprites: on-screen diameter in pixels = scale * factor / view depth
pub const POINT_SIZE_FACTOR: f32 = 300.0;

// Point color is hsl(hue, saturation, lightness)
pub const POINT_SATURATION: f32 = 0.5;
pub const POINT_LIGHTNESS: f32 = 0.8;
pub const POINT_ALPHA: f32 = 0.5;

pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

// Frame statistics log interval
pub const STATS_INTERVAL_SEC: f32 = 5.0;

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const FULLSCREEN_LABEL: &str = "FULL SCREEN";
pub const FULLSCREEN_IDLE_OPACITY: &str = "0.5";
pub const FULLSCREEN_HOVER_OPACITY: &str = "1.0";
