use std::f64::consts::PI;

/// Position of item `index` out of `total` on a sphere of `radius`,
/// using a golden-section spiral for even coverage.
///
/// The polar angle steps through uniform-area bands while the azimuth
/// advances by the golden angle each index, so points never cluster on a
/// meridian.
pub fn sphere_position(index: usize, total: usize, radius: f64) -> [f64; 3] {
    debug_assert!(total >= 1);
    debug_assert!(index < total);
    debug_assert!(radius > 0.0);

    // The argument is in (-1, 1) for any valid index; the clamp guards
    // against rounding at the extremes.
    let phi = (-1.0 + (2 * index + 1) as f64 / total as f64)
        .clamp(-1.0, 1.0)
        .acos();
    let theta = PI * (1.0 + 5.0_f64.sqrt()) * index as f64;

    let sin_phi = phi.sin();
    [
        radius * theta.cos() * sin_phi,
        radius * theta.sin() * sin_phi,
        radius * phi.cos(),
    ]
}

/// Lay out `total` items on a sphere of `radius`.
pub fn layout(total: usize, radius: f64) -> Vec<[f64; 3]> {
    (0..total).map(|i| sphere_position(i, total, radius)).collect()
}
