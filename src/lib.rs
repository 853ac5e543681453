//! Deterministic procedural galaxy generation
//!
//! Given a seed string and integer coordinates, computes whether a tile
//! holds a star system, whether that system has a trade hub, and the
//! system's full contents (star type, planets, asteroid belt, trade-hub
//! placement). Nothing is persisted: every query recomputes the same answer
//! from the seed and coordinates alone, so the arithmetic in these modules
//! is the save format and must never change.
//!
//! Entry points: [`single_tile`] and [`bulk_tiles`] for map queries,
//! [`generate_system`] for entering a system.

pub mod ascii;
pub mod catalog;
pub mod classify;
pub mod density;
pub mod field;
pub mod map;
pub mod sampling;
pub mod seeds;
pub mod system;

pub use catalog::{PlanetCategory, StarType};
pub use classify::TileClassification;
pub use field::{ControlPoint, ControlPointKind, FieldSet, GALAXY_RADIUS, GALAXY_SIZE};
pub use map::{bulk_tiles, single_tile, MapTile};
pub use system::{generate_system, Planet, SystemContents, TradeHub};
