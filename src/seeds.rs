//! Seed-stream derivation for galaxy generation
//!
//! Every random draw in the generator comes from a ChaCha8 stream seeded by
//! the SHA-256 digest of a text concatenation of the galaxy seed and, for
//! per-tile streams, the coordinates. Nothing generated is ever persisted,
//! so these derivations are the save format: the same text must map to the
//! same stream forever.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// SHA-256 happens to produce exactly the 32 bytes ChaCha8 wants as a seed.
fn rng_from_text(text: &str) -> ChaCha8Rng {
    let digest = Sha256::digest(text.as_bytes());
    ChaCha8Rng::from_seed(digest.into())
}

/// Stream for control-point generation, keyed by the galaxy seed alone.
pub fn galaxy_rng(seed: &str) -> ChaCha8Rng {
    rng_from_text(seed)
}

/// Independent per-tile stream, keyed by seed and centered coordinates.
/// Coordinates are appended as signed decimal text.
pub fn tile_rng(seed: &str, x: i64, y: i64) -> ChaCha8Rng {
    rng_from_text(&format!("{seed}{x}{y}"))
}

/// Stream for system contents. The y-before-x concatenation order differs
/// from `tile_rng` and must stay that way: changing it would silently
/// regenerate every system players have already visited.
pub fn system_rng(seed: &str, x: i64, y: i64) -> ChaCha8Rng {
    rng_from_text(&format!("{seed}{y}{x}"))
}
