// Runtime settings: compiled-in defaults, then URL query overrides.
//
// Recognized keys: `grid` (points per side), `sep` (spacing), `hue`
// (`last`|`mean`), `phase` (`point`|`frame`), `amp` (`peak`|`mean`),
// `smoothing` (0..1). Unknown keys are ignored; bad values keep the default
// and produce a warning.

use super::analysis::AmplitudeMetric;
use super::constants::{RIPPLE_PHASE_STEP, SMOOTHING_TIME_CONSTANT};
use super::field::{FieldParams, GridLayout, HueSource, PhaseAdvance};

pub const GRID_SIDE_MIN: usize = 2;
pub const GRID_SIDE_MAX: usize = 1000;
pub const SEPARATION_MIN: f32 = 0.005;
pub const SEPARATION_MAX: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub layout: GridLayout,
    pub field: FieldParams,
    pub amplitude_metric: AmplitudeMetric,
    pub smoothing: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: GridLayout::default(),
            field: FieldParams::default(),
            amplitude_metric: AmplitudeMetric::default(),
            smoothing: SMOOTHING_TIME_CONSTANT,
        }
    }
}

impl Settings {
    /// Parse a `location.search` string (leading `?` optional).
    pub fn from_query(search: &str) -> Self {
        let mut settings = Self::default();
        let query = search.strip_prefix('?').unwrap_or(search);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let Err(msg) = settings.apply(key, value) {
                log::warn!("[config] ignoring {}={}: {}", key, value, msg);
            }
        }
        settings.sanitize();
        settings
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), &'static str> {
        match key {
            "grid" => {
                let side: usize = value.parse().map_err(|_| "expected an integer")?;
                self.layout.amount_x = side;
                self.layout.amount_z = side;
            }
            "sep" => {
                self.layout.separation = value.parse().map_err(|_| "expected a number")?;
            }
            "hue" => {
                self.field.hue_source = match value {
                    "last" => HueSource::LastPoint,
                    "mean" => HueSource::MeanHeight,
                    _ => return Err("expected last|mean"),
                };
            }
            "phase" => {
                self.field.phase_advance = match value {
                    "point" => PhaseAdvance::PerRipplePoint,
                    // one frame of the default grid at the per-point rate
                    "frame" => PhaseAdvance::PerFrame(
                        RIPPLE_PHASE_STEP * GridLayout::default().point_count() as f64,
                    ),
                    _ => return Err("expected point|frame"),
                };
            }
            "amp" => {
                self.amplitude_metric = match value {
                    "peak" => AmplitudeMetric::PeakRun,
                    "mean" => AmplitudeMetric::Mean,
                    _ => return Err("expected peak|mean"),
                };
            }
            "smoothing" => {
                self.smoothing = value.parse().map_err(|_| "expected a number")?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Clamp everything into ranges the analyser and renderer accept.
    pub fn sanitize(&mut self) {
        self.layout.amount_x = self.layout.amount_x.clamp(GRID_SIDE_MIN, GRID_SIDE_MAX);
        self.layout.amount_z = self.layout.amount_z.clamp(GRID_SIDE_MIN, GRID_SIDE_MAX);
        if !self.layout.separation.is_finite() {
            self.layout.separation = GridLayout::default().separation;
        }
        self.layout.separation = self.layout.separation.clamp(SEPARATION_MIN, SEPARATION_MAX);
        if !self.smoothing.is_finite() {
            self.smoothing = SMOOTHING_TIME_CONSTANT;
        }
        self.smoothing = self.smoothing.clamp(0.0, 1.0);
    }
}
