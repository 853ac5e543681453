//! Tile classification
//!
//! Decides, per centered tile coordinate, whether the tile holds a star
//! system and whether that system qualifies for a trade hub. The decision
//! rests on one deterministic per-tile draw (the "core value") shaped by
//! distance from the galactic center and the density field, plus an
//! isolation rule keeping systems out of each other's neighborhoods.

use rand::Rng;
use serde::Serialize;

use crate::density;
use crate::field::{ControlPoint, FieldSet, GALAXY_RADIUS};
use crate::seeds;

/// Base denominator of the per-tile system chance.
pub const SYSTEM_CHANCE: i64 = 8;
/// One in this many qualifying systems carries a trade hub.
pub const TRADE_HUB_CHANCE: i64 = 3;

/// 8-neighbor offsets, N through NW.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// What one tile of the galaxy holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TileClassification {
    Empty,
    System,
    SystemWithTradeHub,
}

impl TileClassification {
    pub fn has_system(&self) -> bool {
        !matches!(self, Self::Empty)
    }

    pub fn has_trade_hub(&self) -> bool {
        matches!(self, Self::SystemWithTradeHub)
    }
}

/// The per-tile deterministic draw. Values of `TRADE_HUB_CHANCE` or less
/// qualify the tile for a system; a value of exactly 1 adds a trade hub.
///
/// The draw comes from a fresh stream keyed by (seed, x, y) so every tile
/// is uncorrelated with its neighbors. The upper bound widens (making
/// systems rarer) near the galactic center and narrows along density rings.
pub fn core_value(seed: &str, x: i64, y: i64, gradient_points: &[ControlPoint]) -> i64 {
    let mut rng = seeds::tile_rng(seed, x, y);

    let radial = if x == 0 && y == 0 {
        // The division has no value at the origin; use a flat constant.
        65536.0
    } else {
        131072.0 / (x * x + y * y) as f64
    };
    let gradient_mod = density::density_modifier(gradient_points, x, y) * 128.0;

    let upper = (SYSTEM_CHANCE as f64 + radial + gradient_mod).floor() as i64 * TRADE_HUB_CHANCE;
    rng.gen_range(1..=upper)
}

/// Classify one centered tile coordinate.
///
/// Neighbor core values are recomputed fresh on every call; `core_value` is
/// pure, so this costs time, never correctness.
pub fn classify(seed: &str, x: i64, y: i64, field_set: &FieldSet) -> TileClassification {
    if x * x + y * y > GALAXY_RADIUS * GALAXY_RADIUS {
        return TileClassification::Empty;
    }

    let value = core_value(seed, x, y, &field_set.gradient);
    if value > TRADE_HUB_CHANCE {
        return TileClassification::Empty;
    }

    // Systems keep their distance: any neighbor that would itself qualify
    // suppresses this tile (and, symmetrically, this tile suppresses it).
    for (dx, dy) in NEIGHBOR_OFFSETS {
        if core_value(seed, x + dx, y + dy, &field_set.gradient) <= TRADE_HUB_CHANCE {
            return TileClassification::Empty;
        }
    }

    if value == 1 {
        TileClassification::SystemWithTradeHub
    } else {
        TileClassification::System
    }
}
