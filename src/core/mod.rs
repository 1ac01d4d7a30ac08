pub mod analysis;
pub mod camera;
pub mod config;
pub mod constants;
pub mod field;
pub mod math;

pub use analysis::*;
pub use camera::*;
pub use config::Settings;
pub use field::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
