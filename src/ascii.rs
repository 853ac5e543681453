//! ASCII rendering for galaxy maps
//!
//! Debug and preview surface used by the CLI binary. One character per
//! tile, top row first.

use std::collections::BTreeMap;

use crate::field::GALAXY_RADIUS;
use crate::map::{self, MapTile};

/// Character for one tile. Trade hubs win over bare systems, systems over
/// nebulae; coordinates outside the circular galaxy render as blank.
pub fn tile_char(tile: &MapTile) -> char {
    let cx = tile.x - GALAXY_RADIUS;
    let cy = tile.y - GALAXY_RADIUS;
    if cx * cx + cy * cy > GALAXY_RADIUS * GALAXY_RADIUS {
        ' '
    } else if tile.has_trade_hub {
        '$'
    } else if tile.has_system {
        '*'
    } else if tile.in_nebula {
        '~'
    } else {
        '.'
    }
}

/// Render an already-queried tile batch as text rows.
pub fn render_tiles(
    tiles: &BTreeMap<(i64, i64), MapTile>,
    corner1: (i64, i64),
    corner2: (i64, i64),
) -> String {
    let (min_x, max_x) = (corner1.0.min(corner2.0), corner1.0.max(corner2.0));
    let (min_y, max_y) = (corner1.1.min(corner2.1), corner1.1.max(corner2.1));

    let width = (max_x - min_x + 2) as usize; // +1 for the newline
    let height = (max_y - min_y + 1) as usize;
    let mut out = String::with_capacity(width * height);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            out.push(tiles.get(&(x, y)).map_or(' ', tile_char));
        }
        out.push('\n');
    }
    out
}

/// Query and render an inclusive region in one call.
pub fn render_region(seed: &str, corner1: (i64, i64), corner2: (i64, i64)) -> String {
    let tiles = map::bulk_tiles(seed, corner1, corner2);
    render_tiles(&tiles, corner1, corner2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_priorities() {
        let mut tile = MapTile {
            x: 128,
            y: 128,
            in_nebula: true,
            has_system: true,
            has_trade_hub: true,
        };
        assert_eq!(tile_char(&tile), '$');
        tile.has_trade_hub = false;
        assert_eq!(tile_char(&tile), '*');
        tile.has_system = false;
        assert_eq!(tile_char(&tile), '~');
        tile.in_nebula = false;
        assert_eq!(tile_char(&tile), '.');
    }

    #[test]
    fn test_out_of_radius_renders_blank() {
        let tile = MapTile {
            x: 0,
            y: 0,
            in_nebula: false,
            has_system: false,
            has_trade_hub: false,
        };
        assert_eq!(tile_char(&tile), ' ');
    }

    #[test]
    fn test_render_dimensions() {
        let text = render_region("andromeda", (120, 120), (139, 129));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        for line in lines {
            assert_eq!(line.chars().count(), 20);
        }
    }
}
