use crate::state::Hex;

/// Static map oracle exposing terrain layout.
pub trait MapOracle {
    fn dimensions(&self) -> MapDimensions;

    /// Terrain at `hex`, or `None` outside the map.
    fn terrain(&self, hex: Hex) -> Option<TerrainKind>;

    fn contains(&self, hex: Hex) -> bool {
        self.dimensions().contains(hex)
    }

    fn is_passable(&self, hex: Hex) -> bool {
        self.terrain(hex).is_some_and(TerrainKind::is_passable)
    }

    fn is_castle(&self, hex: Hex) -> bool {
        self.terrain(hex).is_some_and(TerrainKind::is_castle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, hex: Hex) -> bool {
        hex.x >= 0
            && hex.y >= 0
            && (hex.x as u32) < self.width
            && (hex.y as u32) < self.height
    }
}

/// Terrain classes relevant to planning.
///
/// Only passability and recruit eligibility matter here; movement costs and
/// defense values belong to the pathfinding and combat collaborators.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TerrainKind {
    #[default]
    Flat,
    Forest,
    Hills,
    Mountains,
    ShallowWater,
    Castle,
    Keep,
    Impassable,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        !matches!(self, TerrainKind::Impassable)
    }

    /// Recruits and recalls can only be placed on castle hexes.
    pub fn is_castle(self) -> bool {
        matches!(self, TerrainKind::Castle | TerrainKind::Keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_reject_negative_and_overflowing_hexes() {
        let dims = MapDimensions::new(4, 3);
        assert!(dims.contains(Hex::new(0, 0)));
        assert!(dims.contains(Hex::new(3, 2)));
        assert!(!dims.contains(Hex::new(4, 0)));
        assert!(!dims.contains(Hex::new(0, 3)));
        assert!(!dims.contains(Hex::new(-1, 1)));
    }

    #[test]
    fn terrain_names_parse_case_insensitively() {
        assert_eq!("Keep".parse::<TerrainKind>().unwrap(), TerrainKind::Keep);
        assert_eq!(
            "shallow_water".parse::<TerrainKind>().unwrap(),
            TerrainKind::ShallowWater
        );
        assert_eq!(TerrainKind::Castle.to_string(), "castle");
        assert!("lava".parse::<TerrainKind>().is_err());
    }

    #[test]
    fn castle_and_keep_accept_recruits() {
        assert!(TerrainKind::Keep.is_castle());
        assert!(TerrainKind::Castle.is_castle());
        assert!(!TerrainKind::Flat.is_castle());
        assert!(!TerrainKind::Impassable.is_passable());
    }
}
