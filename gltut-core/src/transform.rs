/// In-place 4x4 transformation matrix helpers
///
/// Matrices are column-major, so the flat index of an element is `4 * col + row`
/// and the translation lives at indices 12, 13 and 14.
use std::f32::consts::PI;

/// A 4x4 column-major transformation matrix, uploaded as 16 floats
pub type Matrix4 = nalgebra::Matrix4<f32>;

/// Convert an angle in degrees to radians
pub fn deg_to_rad(angle: f32) -> f32 {
    angle * PI / 180.0
}

/// Create the identity matrix
pub fn identity() -> Matrix4 {
    Matrix4::identity()
}

/// Overwrite `m` with the identity matrix
pub fn reset_to_identity(m: &mut Matrix4) {
    m.fill_with_identity();
}

/// Rotate `m` about the X axis by `angle` radians
pub fn rotate_x(m: &mut Matrix4, angle: f32) {
    rotate_rows(m, 1, 2, angle);
}

/// Rotate `m` about the Y axis by `angle` radians
pub fn rotate_y(m: &mut Matrix4, angle: f32) {
    rotate_rows(m, 2, 0, angle);
}

/// Rotate `m` about the Z axis by `angle` radians
pub fn rotate_z(m: &mut Matrix4, angle: f32) {
    rotate_rows(m, 0, 1, angle);
}

pub fn translate_x(m: &mut Matrix4, t: f32) {
    m[12] += t;
}

pub fn translate_y(m: &mut Matrix4, t: f32) {
    m[13] += t;
}

pub fn translate_z(m: &mut Matrix4, t: f32) {
    m[14] += t;
}

/// Mix rows `a` and `b` of the upper-left 3x3 block:
/// `a' = c*a - s*b`, `b' = c*b + s*a`.
///
/// Both old values are read before either is written. The translation
/// column and the bottom row are left alone.
fn rotate_rows(m: &mut Matrix4, a: usize, b: usize, angle: f32) {
    let (s, c) = angle.sin_cos();

    for col in 0..3 {
        let va = m[(a, col)];
        let vb = m[(b, col)];
        m[(a, col)] = c * va - s * vb;
        m[(b, col)] = c * vb + s * va;
    }
}
