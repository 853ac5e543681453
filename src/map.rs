//! Map query surface
//!
//! Display coordinates in `[0, 256)` map to the centered coordinates the
//! classifier works in by subtracting the galaxy radius. `bulk_tiles` is
//! semantically identical to calling `single_tile` per cell; it exists to
//! amortize the `FieldSet` computation across a region.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify;
use crate::density;
use crate::field::{FieldSet, GALAXY_RADIUS};

/// Everything the map layer needs to know about one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MapTile {
    pub x: i64,
    pub y: i64,
    pub in_nebula: bool,
    pub has_system: bool,
    pub has_trade_hub: bool,
}

/// Query one tile by display coordinates. Pass a cached `FieldSet` when
/// querying many tiles of the same galaxy; otherwise it is recomputed.
pub fn single_tile(seed: &str, x: i64, y: i64, field_set: Option<&FieldSet>) -> MapTile {
    let computed;
    let fields = match field_set {
        Some(fields) => fields,
        None => {
            computed = FieldSet::generate(seed);
            &computed
        }
    };

    let cx = x - GALAXY_RADIUS;
    let cy = y - GALAXY_RADIUS;
    let classification = classify::classify(seed, cx, cy, fields);

    MapTile {
        x,
        y,
        in_nebula: density::in_nebula(&fields.nebula, cx, cy),
        has_system: classification.has_system(),
        has_trade_hub: classification.has_trade_hub(),
    }
}

/// Query an inclusive rectangle given two opposite corners, in any order.
pub fn bulk_tiles(
    seed: &str,
    corner1: (i64, i64),
    corner2: (i64, i64),
) -> BTreeMap<(i64, i64), MapTile> {
    let fields = FieldSet::generate(seed);
    let (min_x, max_x) = (corner1.0.min(corner2.0), corner1.0.max(corner2.0));
    let (min_y, max_y) = (corner1.1.min(corner2.1), corner1.1.max(corner2.1));

    let mut tiles = BTreeMap::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            tiles.insert((x, y), single_tile(seed, x, y, Some(&fields)));
        }
    }
    tiles
}
