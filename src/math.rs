/// Rotation matrix around the X axis.
pub fn rotation_x(angle: f64) -> [[f64; 3]; 3] {
    let (sin_a, cos_a) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, cos_a, -sin_a], [0.0, sin_a, cos_a]]
}

/// Rotation matrix around the Y axis.
pub fn rotation_y(angle: f64) -> [[f64; 3]; 3] {
    let (sin_a, cos_a) = angle.sin_cos();
    [[cos_a, 0.0, sin_a], [0.0, 1.0, 0.0], [-sin_a, 0.0, cos_a]]
}

/// Multiplies two 3x3 matrices
pub fn multiply_matrices(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Brightness for an icon at depth `z` on a sphere of `radius`.
///
/// The front of the sphere renders at full intensity; the back never drops
/// below a minimum ambient level so far icons stay legible.
pub fn shade_intensity(z: f64, radius: f64) -> f64 {
    const AMBIENT: f64 = 0.35;
    let t = ((z + radius) / (2.0 * radius)).clamp(0.0, 1.0);
    AMBIENT + (1.0 - AMBIENT) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOLERANCE: f64 = 1e-9;

    fn assert_vec_eq(a: [f64; 3], b: [f64; 3]) {
        for k in 0..3 {
            assert!((a[k] - b[k]).abs() < TOLERANCE, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn quarter_turns_move_the_axes() {
        assert_vec_eq(
            multiply_matrix_vector(&rotation_y(FRAC_PI_2), &[0.0, 0.0, 1.0]),
            [1.0, 0.0, 0.0],
        );
        assert_vec_eq(
            multiply_matrix_vector(&rotation_x(FRAC_PI_2), &[0.0, 1.0, 0.0]),
            [0.0, 0.0, 1.0],
        );
    }

    #[test]
    fn zero_rotation_is_identity() {
        let m = multiply_matrices(&rotation_y(0.0), &rotation_x(0.0));
        assert_vec_eq(multiply_matrix_vector(&m, &[1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn rotation_preserves_length() {
        let m = multiply_matrices(&rotation_y(0.7), &rotation_x(-1.3));
        let v = multiply_matrix_vector(&m, &[3.0, -4.0, 12.0]);
        let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((len - 13.0).abs() < TOLERANCE);
    }

    #[test]
    fn shading_spans_ambient_to_full() {
        assert!((shade_intensity(300.0, 300.0) - 1.0).abs() < TOLERANCE);
        assert!((shade_intensity(-300.0, 300.0) - 0.35).abs() < TOLERANCE);
        let mid = shade_intensity(0.0, 300.0);
        assert!(mid > 0.35 && mid < 1.0);
        assert!(shade_intensity(1000.0, 300.0) <= 1.0);
        assert!(shade_intensity(-1000.0, 300.0) >= 0.35);
    }
}
