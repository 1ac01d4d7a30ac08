// Camera types shared with the web frontend.
//
// No platform APIs in here; the frontend feeds pointer deltas and wheel
// steps into [`OrbitControls`] and reads back a [`Camera`] each frame.

use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

// Keep the polar angle away from the poles so look_at never sees eye parallel to up.
const POLAR_EPS: f32 = 1e-4;

/// Orbit around a target: drag rotates, wheel dollies.
///
/// Angles follow the usual spherical convention with +Y up: `polar` is
/// measured from +Y, `azimuth` around Y starting at +Z.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub rotate_speed: f32,
    pub dolly_step: f32,
    home: (f32, f32, f32),
}

impl OrbitControls {
    /// Build controls that start with the camera at `eye`.
    pub fn from_eye(eye: Vec3, target: Vec3, min_radius: f32, max_radius: f32) -> Self {
        let offset = eye - target;
        let radius = offset.length().clamp(min_radius, max_radius);
        let (azimuth, polar) = if offset.length_squared() > 0.0 {
            let dir = offset.normalize();
            (dir.x.atan2(dir.z), dir.y.clamp(-1.0, 1.0).acos())
        } else {
            (0.0, std::f32::consts::FRAC_PI_2)
        };
        let polar = polar.clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS);
        Self {
            target,
            radius,
            azimuth,
            polar,
            min_radius,
            max_radius,
            rotate_speed: 1.0,
            dolly_step: 0.95,
            home: (radius, azimuth, polar),
        }
    }

    pub fn eye(&self) -> Vec3 {
        let sin_p = self.polar.sin();
        let offset = Vec3::new(
            self.radius * sin_p * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_p * self.azimuth.cos(),
        );
        self.target + offset
    }

    /// Rotate by a pointer drag of `(dx, dy)` pixels on a viewport `viewport_h` pixels tall.
    ///
    /// A drag across the full viewport height turns a full circle.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_h: f32) {
        let h = viewport_h.max(1.0);
        let tau = std::f32::consts::TAU;
        self.azimuth -= tau * dx / h * self.rotate_speed;
        self.polar = (self.polar - tau * dy / h * self.rotate_speed)
            .clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS);
    }

    /// Dolly in for negative wheel deltas, out for positive ones.
    pub fn dolly(&mut self, wheel_delta_y: f32) {
        if wheel_delta_y == 0.0 || !wheel_delta_y.is_finite() {
            return;
        }
        let factor = if wheel_delta_y < 0.0 {
            self.dolly_step
        } else {
            1.0 / self.dolly_step
        };
        self.radius = (self.radius * factor).clamp(self.min_radius, self.max_radius);
    }

    pub fn reset(&mut self) {
        (self.radius, self.azimuth, self.polar) = self.home;
    }

    /// Write the current eye/target into `camera`.
    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.eye();
        camera.target = self.target;
    }
}
