/// Perspective projection matrices
use crate::transform::{deg_to_rad, Matrix4};

/// Parameters of a perspective projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveParams {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl PerspectiveParams {
    pub fn new(fov_y_degrees: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect,
            z_near,
            z_far,
        }
    }

    /// Same frustum, different aspect ratio (used after a resize)
    pub fn with_aspect(self, aspect: f32) -> Self {
        Self { aspect, ..self }
    }

    pub fn matrix(&self) -> Matrix4 {
        perspective_projection(self.fov_y_degrees, self.aspect, self.z_near, self.z_far)
    }
}

impl Default for PerspectiveParams {
    fn default() -> Self {
        Self::new(40.0, 1.0, 1.0, 100.0)
    }
}

/// Build a perspective projection matrix.
///
/// Callers must supply `0 < fov_y_degrees < 180` and `z_near != z_far`;
/// anything else yields non-finite entries. Only debug builds check.
#[rustfmt::skip]
pub fn perspective_projection(fov_y_degrees: f32, aspect: f32, z_near: f32, z_far: f32) -> Matrix4 {
    debug_assert!(
        fov_y_degrees > 0.0 && fov_y_degrees < 180.0,
        "field of view must be in (0, 180) degrees, got {}",
        fov_y_degrees
    );
    debug_assert!(z_near != z_far, "near and far planes must differ");

    let tan = deg_to_rad(0.5 * fov_y_degrees).tan();
    let a = -(z_far + z_near) / (z_far - z_near);
    let b = -2.0 * z_far * z_near / (z_far - z_near);

    Matrix4::from_column_slice(&[
        0.5 / tan, 0.0,                0.0, 0.0,
        0.0,       0.5 * aspect / tan, 0.0, 0.0,
        0.0,       0.0,                a,   -1.0,
        0.0,       0.0,                b,   0.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_depth_terms() {
        let p = perspective_projection(90.0, 1.0, 1.0, 100.0);
        assert_eq!(p[11], -1.0);
        assert!((p[10] - (-(100.0 + 1.0) / (100.0 - 1.0))).abs() < 1e-6);
        assert!((p[14] - (-2.0 * 100.0 / 99.0)).abs() < 1e-5);
        assert_eq!(p[15], 0.0);
    }

    #[test]
    fn test_projection_scale_terms() {
        // tan(45deg) == 1
        let p = perspective_projection(90.0, 2.0, 1.0, 100.0);
        assert!((p[0] - 0.5).abs() < 1e-6);
        assert!((p[5] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_params_matrix() {
        let params = PerspectiveParams::default().with_aspect(1.5);
        assert_eq!(params.aspect, 1.5);
        assert_eq!(params.fov_y_degrees, 40.0);
        assert_eq!(params.matrix(), perspective_projection(40.0, 1.5, 1.0, 100.0));
    }
}
