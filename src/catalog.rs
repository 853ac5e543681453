//! Weight tables and item pools
//!
//! Read-only configuration baked into the binary. These constants are part
//! of the save format: changing a single weight silently regenerates every
//! system in every galaxy, so treat them as frozen.

use serde::Serialize;

/// The four star classes a system can form around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StarType {
    Star1,
    Star2,
    Star3,
    BlackHole,
}

impl StarType {
    pub fn name(&self) -> &'static str {
        match self {
            StarType::Star1 => "class I star",
            StarType::Star2 => "class II star",
            StarType::Star3 => "class III star",
            StarType::BlackHole => "black hole",
        }
    }
}

impl std::fmt::Display for StarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The ten buckets a planet can roll into. Each bucket resolves to a
/// concrete item through its own pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlanetCategory {
    NormalBread,
    SpecialBread,
    RareBread,
    BlackChess,
    WhiteChess,
    CommonGem,
    UncommonGem,
    RareGem,
    PreciousGem,
    AnarchyGem,
}

impl PlanetCategory {
    /// The concrete-item pool this category resolves through.
    pub fn pool(&self) -> &'static [(&'static str, u32)] {
        match self {
            PlanetCategory::NormalBread => &NORMAL_BREAD,
            PlanetCategory::SpecialBread => &SPECIAL_BREAD,
            PlanetCategory::RareBread => &RARE_BREAD,
            PlanetCategory::BlackChess => &BLACK_CHESS,
            PlanetCategory::WhiteChess => &WHITE_CHESS,
            PlanetCategory::CommonGem => &COMMON_GEMS,
            PlanetCategory::UncommonGem => &UNCOMMON_GEMS,
            PlanetCategory::RareGem => &RARE_GEMS,
            PlanetCategory::PreciousGem => &PRECIOUS_GEMS,
            PlanetCategory::AnarchyGem => &ANARCHY_GEMS,
        }
    }
}

/// Star-type weights, in draw order.
pub const STAR_WEIGHTS: [(StarType, u32); 4] = [
    (StarType::Star1, 50),
    (StarType::Star2, 22),
    (StarType::Star3, 22),
    (StarType::BlackHole, 6),
];

/// Planet-category weights, in draw order. The anarchy gem is the unique
/// tier and stays rarest.
pub const CATEGORY_WEIGHTS: [(PlanetCategory, u32); 10] = [
    (PlanetCategory::NormalBread, 30),
    (PlanetCategory::SpecialBread, 12),
    (PlanetCategory::RareBread, 5),
    (PlanetCategory::BlackChess, 14),
    (PlanetCategory::WhiteChess, 14),
    (PlanetCategory::CommonGem, 10),
    (PlanetCategory::UncommonGem, 7),
    (PlanetCategory::RareGem, 4),
    (PlanetCategory::PreciousGem, 3),
    (PlanetCategory::AnarchyGem, 1),
];

pub const NORMAL_BREAD: [(&str, u32); 4] = [
    ("bread", 1),
    ("baguette", 1),
    ("croissant", 1),
    ("flatbread", 1),
];

pub const SPECIAL_BREAD: [(&str, u32); 4] = [
    ("pretzel", 1),
    ("bagel", 1),
    ("pancakes", 1),
    ("waffle", 1),
];

pub const RARE_BREAD: [(&str, u32); 3] = [
    ("dumpling", 1),
    ("fortune cookie", 1),
    ("moon cake", 1),
];

// Chess pools are color-biased 3:1 and pawn-heavy within each color,
// mirroring piece counts on a board.
pub const BLACK_CHESS: [(&str, u32); 12] = [
    ("black pawn", 24),
    ("black knight", 6),
    ("black bishop", 6),
    ("black rook", 6),
    ("black queen", 3),
    ("black king", 3),
    ("white pawn", 8),
    ("white knight", 2),
    ("white bishop", 2),
    ("white rook", 2),
    ("white queen", 1),
    ("white king", 1),
];

pub const WHITE_CHESS: [(&str, u32); 12] = [
    ("white pawn", 24),
    ("white knight", 6),
    ("white bishop", 6),
    ("white rook", 6),
    ("white queen", 3),
    ("white king", 3),
    ("black pawn", 8),
    ("black knight", 2),
    ("black bishop", 2),
    ("black rook", 2),
    ("black queen", 1),
    ("black king", 1),
];

pub const COMMON_GEMS: [(&str, u32); 2] = [("quartz", 1), ("topaz", 1)];

pub const UNCOMMON_GEMS: [(&str, u32); 2] = [("amethyst", 1), ("jade", 1)];

pub const RARE_GEMS: [(&str, u32); 2] = [("emerald", 1), ("sapphire", 1)];

pub const PRECIOUS_GEMS: [(&str, u32); 2] = [("ruby", 1), ("diamond", 1)];

pub const ANARCHY_GEMS: [(&str, u32); 1] = [("anarchy", 1)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_pool() {
        for (category, _) in CATEGORY_WEIGHTS {
            assert!(!category.pool().is_empty());
            assert!(category.pool().iter().any(|(_, w)| *w > 0));
        }
    }

    #[test]
    fn test_star_weights_sum() {
        let total: u32 = STAR_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_category_weights_sum() {
        let total: u32 = CATEGORY_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_anarchy_is_the_rarest_category() {
        let anarchy = CATEGORY_WEIGHTS
            .iter()
            .find(|(c, _)| *c == PlanetCategory::AnarchyGem)
            .map(|(_, w)| *w)
            .unwrap();
        for (category, weight) in CATEGORY_WEIGHTS {
            if category != PlanetCategory::AnarchyGem {
                assert!(weight > anarchy);
            }
        }
    }
}
