//! System content generation
//!
//! Turns a qualifying tile into a full star system: star type, planets with
//! orbits and yields, an optional asteroid belt, and the trade hub's
//! placement. Contents come from a second per-tile stream, independent of
//! the classification stream, so entering a system never disturbs the map.

use serde::Serialize;

use crate::catalog::{self, PlanetCategory, StarType};
use crate::classify::{self, TileClassification};
use crate::field::{FieldSet, GALAXY_RADIUS};
use crate::sampling::{gaussian, randint, randrange, weighted_choice};
use crate::seeds;

pub const MIN_PLANETS: i64 = 2;
pub const MAX_PLANETS: i64 = 12;

/// Natural trade-hub placement. `level` is the hub's natural level; the
/// consuming layer overlays persisted upgrades on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TradeHub {
    pub exists: bool,
    pub x_offset: i64,
    pub y_offset: i64,
    pub level: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Planet {
    pub angle_degrees: f64,
    pub distance: f64,
    pub x_pos: f64,
    pub y_pos: f64,
    pub category: PlanetCategory,
    pub item: &'static str,
    pub yield_deviation: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SystemContents {
    pub trade_hub: TradeHub,
    pub radius: i64,
    pub star_type: StarType,
    pub has_asteroid_belt: bool,
    pub asteroid_belt_distance: i64,
    pub planets: Vec<Planet>,
}

/// Generate the full contents of the system at display coordinates.
/// `None` when the tile classifies as empty.
pub fn generate_system(seed: &str, galaxy_x: i64, galaxy_y: i64) -> Option<SystemContents> {
    let field_set = FieldSet::generate(seed);
    let classification = classify::classify(
        seed,
        galaxy_x - GALAXY_RADIUS,
        galaxy_y - GALAXY_RADIUS,
        &field_set,
    );
    if classification == TileClassification::Empty {
        return None;
    }

    let mut rng = seeds::system_rng(seed, galaxy_x, galaxy_y);

    // Offset draws run for every system, hub or not, so the rest of the
    // stream (star, planets, belt) is identical either way.
    let x_offset = randint(&mut rng, -1, 1);
    let mut y_offset = randint(&mut rng, -1, 1);
    if x_offset == 0 && y_offset == 0 {
        // Centered on the star is not a place for a trade hub; force ±1.
        y_offset = randint(&mut rng, 0, 1) * -2 + 1;
    }
    let exists = classification == TileClassification::SystemWithTradeHub;
    let trade_hub = TradeHub {
        exists,
        x_offset,
        y_offset,
        level: u32::from(exists),
    };

    let star_type = *weighted_choice(&mut rng, &catalog::STAR_WEIGHTS);

    let planet_count = gaussian(&mut rng, 7.0, 2.0)
        .round()
        .clamp(MIN_PLANETS as f64, MAX_PLANETS as f64) as i64;

    let has_asteroid_belt = randint(&mut rng, 1, 3) == 1;
    let asteroid_belt_distance = if has_asteroid_belt {
        let outermost = (planet_count as f64).powf(0.85).ceil() as i64 + 1;
        randint(&mut rng, 2, outermost)
    } else {
        planet_count + 2
    };

    let mut planets = Vec::with_capacity(planet_count as usize);
    let mut max_distance = 0.0f64;
    for index in 0..planet_count {
        let category = *weighted_choice(&mut rng, &catalog::CATEGORY_WEIGHTS);
        let item = *weighted_choice(&mut rng, category.pool());
        let yield_deviation = gaussian(&mut rng, 1.0, 0.1);

        // Orbits past the belt shift one slot outward.
        let modified_index = index + i64::from(index - 1 >= asteroid_belt_distance);
        let base_distance = 2.0 + modified_index as f64 + 1.5;
        let distance_mod = gaussian(&mut rng, 1.0, 0.1);
        let angle = randrange(&mut rng, 360) as f64;

        let distance = base_distance * distance_mod;
        max_distance = max_distance.max(distance);

        planets.push(Planet {
            angle_degrees: angle,
            distance,
            x_pos: angle.to_radians().cos() * distance,
            y_pos: angle.to_radians().sin() * distance,
            category,
            item,
            yield_deviation,
        });
    }

    Some(SystemContents {
        trade_hub,
        radius: max_distance.ceil() as i64 + 1,
        star_type,
        has_asteroid_belt,
        asteroid_belt_distance,
        planets,
    })
}
