//! Density and nebula field evaluation
//!
//! Both fields evaluate the same per-point harmonic: the angle from the
//! control point to the query tile, rotated by the point's phase, feeds a
//! two-term sine wave that ripples the point's ring. The density field
//! turns that into a scalar bias for the tile classifier; the nebula field
//! into a membership test.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::field::ControlPoint;

/// Distance from the point and the harmonic ripple term at the query tile.
/// `None` when the tile sits exactly on the control point.
fn harmonic(point: &ControlPoint, x: i64, y: i64) -> Option<(f64, f64)> {
    let dx = x as f64 - point.x;
    let dy = y as f64 - point.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist == 0.0 {
        return None;
    }

    let mut angle = (dy / dist).asin();
    if (x as f64) < point.x {
        angle = PI - angle;
    }
    angle += (point.rotation as f64).to_radians();

    let fold = point.fold as f64;
    let ripple = ((fold * angle).sin() + (fold * (1.0 + 1.0 / fold) * angle).sin()) * 10.0;
    Some((dist, ripple))
}

/// Density bias at a centered coordinate. The first gradient point whose
/// rippled ring passes within tolerance wins; zero when none does.
pub fn density_modifier(gradient_points: &[ControlPoint], x: i64, y: i64) -> f64 {
    for point in gradient_points {
        if let Some((dist, ripple)) = harmonic(point, x, y) {
            let result = ((dist - 45.0 + ripple) * FRAC_PI_2).abs();
            if result <= 10.0 {
                return result;
            }
        }
    }
    0.0
}

/// Whether a centered coordinate falls inside any nebula.
pub fn in_nebula(nebula_points: &[ControlPoint], x: i64, y: i64) -> bool {
    nebula_points.iter().any(|point| {
        harmonic(point, x, y).map_or(false, |(dist, ripple)| dist <= (25.0 + ripple) * FRAC_PI_2)
    })
}
