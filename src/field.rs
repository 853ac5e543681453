//! Harmonic control points
//!
//! A galaxy's large-scale structure comes from six control points derived
//! from the seed alone: four gradient points that bias system density into
//! harmonic rings, and two nebula points that define nebula extent. The
//! whole set is a pure function of the seed and cheap to cache per galaxy.

use rand::Rng;
use serde::Serialize;

use crate::sampling::{randint, randrange};
use crate::seeds;

/// Galaxy side length in tiles.
pub const GALAXY_SIZE: i64 = 256;
/// Half the side; generation works in coordinates centered on the origin.
pub const GALAXY_RADIUS: i64 = 128;

/// The two kinds of control point, drawn from one stream in a fixed order:
/// four gradient points first, then two nebula points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ControlPointKind {
    Gradient,
    Nebula,
}

/// A harmonic perturbation center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    /// Number of harmonic lobes around the point.
    pub fold: i64,
    /// Phase offset in degrees.
    pub rotation: i64,
}

/// The six control points of one galaxy, in generation order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldSet {
    pub gradient: Vec<ControlPoint>,
    pub nebula: Vec<ControlPoint>,
}

impl FieldSet {
    /// Derive the control points for a galaxy. Pure function of the seed;
    /// callers querying many tiles should compute this once and share it.
    pub fn generate(seed: &str) -> Self {
        let mut rng = seeds::galaxy_rng(seed);
        let mut gradient = Vec::with_capacity(4);
        let mut nebula = Vec::with_capacity(2);
        let mut angles: Vec<f64> = Vec::with_capacity(6);

        for index in 0..6 {
            let kind = if index < 4 {
                ControlPointKind::Gradient
            } else {
                ControlPointKind::Nebula
            };

            let mut distance = GALAXY_RADIUS as f64 * (rng.gen::<f64>() / 2.0 + 0.25);
            if kind == ControlPointKind::Nebula {
                // Nebulae sit a little further out than gradient rings.
                distance += GALAXY_RADIUS as f64 / 16.0;
            }

            // Historical quirk, kept verbatim for compatibility: the average
            // of the prior angles is taken in degrees, floored, multiplied
            // by pi, then added to a fresh degree draw.
            let previous_avg = if angles.is_empty() {
                0.0
            } else {
                (angles.iter().sum::<f64>() / angles.len() as f64).floor() * std::f64::consts::PI
            };
            let angle = (previous_avg + randrange(&mut rng, 360) as f64) % 360.0;
            angles.push(angle);

            let fold_draw = randint(&mut rng, 2, 5);
            let rotation = randint(&mut rng, 0, 360);

            let point = ControlPoint {
                x: (angle.to_radians().cos() * distance).round(),
                y: (angle.to_radians().sin() * distance).round(),
                // Nebula points ignore the drawn fold (the draw still has to
                // happen so later points see the same stream).
                fold: match kind {
                    ControlPointKind::Gradient => fold_draw,
                    ControlPointKind::Nebula => 1,
                },
                rotation,
            };

            match kind {
                ControlPointKind::Gradient => gradient.push(point),
                ControlPointKind::Nebula => nebula.push(point),
            }
        }

        Self { gradient, nebula }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = FieldSet::generate("andromeda");
        let b = FieldSet::generate("andromeda");
        assert_eq!(a, b);
    }

    #[test]
    fn test_point_counts() {
        let fields = FieldSet::generate("andromeda");
        assert_eq!(fields.gradient.len(), 4);
        assert_eq!(fields.nebula.len(), 2);
    }

    #[test]
    fn test_nebula_fold_is_always_one() {
        for seed in ["andromeda", "triangulum", "m87", "sombrero"] {
            let fields = FieldSet::generate(seed);
            for point in &fields.nebula {
                assert_eq!(point.fold, 1);
            }
        }
    }

    #[test]
    fn test_gradient_fold_in_drawn_range() {
        for seed in ["andromeda", "triangulum", "m87", "sombrero"] {
            let fields = FieldSet::generate(seed);
            for point in &fields.gradient {
                assert!((2..=5).contains(&point.fold), "fold = {}", point.fold);
                assert!((0..=360).contains(&point.rotation));
            }
        }
    }

    #[test]
    fn test_points_stay_within_the_galaxy() {
        // Gradient distance tops out below 0.75 * radius; nebulae add
        // radius/16 on top. Either way every point fits in the square.
        for seed in ["andromeda", "triangulum", "m87"] {
            let fields = FieldSet::generate(seed);
            for point in fields.gradient.iter().chain(&fields.nebula) {
                assert!(point.x.abs() <= GALAXY_RADIUS as f64);
                assert!(point.y.abs() <= GALAXY_RADIUS as f64);
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(
            FieldSet::generate("andromeda"),
            FieldSet::generate("triangulum")
        );
    }
}
