//! In-memory game state implementing every oracle.
//!
//! Intended for tests, tooling and scenario replays. Lookups are linear scans;
//! worlds are expected to hold a few dozen units at most.

use super::{MapDimensions, MapOracle, TeamOracle, TerrainKind, UnitOracle, UnitView};
use crate::state::{Hex, SideId, UnitId};

/// Terrain override for a single hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSpec {
    pub hex: Hex,
    pub terrain: TerrainKind,
}

/// Unit type a side may recruit and its price.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecruitOption {
    pub unit_type: String,
    pub cost: u32,
}

/// Per-side treasury, recruit list, recall list and alliances.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamSpec {
    pub side: SideId,
    pub gold: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub recruits: Vec<RecruitOption>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub recall_list: Vec<UnitId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub allies: Vec<SideId>,
}

impl TeamSpec {
    pub fn new(side: SideId, gold: u32) -> Self {
        Self {
            side,
            gold,
            recruits: Vec::new(),
            recall_list: Vec::new(),
            allies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_recruit(mut self, unit_type: impl Into<String>, cost: u32) -> Self {
        self.recruits.push(RecruitOption {
            unit_type: unit_type.into(),
            cost,
        });
        self
    }

    #[must_use]
    pub fn with_recall(mut self, unit: UnitId) -> Self {
        self.recall_list.push(unit);
        self
    }

    #[must_use]
    pub fn with_ally(mut self, side: SideId) -> Self {
        self.allies.push(side);
        self
    }
}

/// Whole-world fixture: map, units on it and the teams that own them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryWorld {
    pub dimensions: MapDimensions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_terrain: TerrainKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tiles: Vec<TileSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: Vec<UnitView>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub teams: Vec<TeamSpec>,
}

impl MemoryWorld {
    /// Creates an all-flat map without units or teams.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            base_terrain: TerrainKind::Flat,
            tiles: Vec::new(),
            units: Vec::new(),
            teams: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tile(mut self, hex: Hex, terrain: TerrainKind) -> Self {
        self.set_terrain(hex, terrain);
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: UnitView) -> Self {
        self.units.push(unit);
        self
    }

    #[must_use]
    pub fn with_team(mut self, team: TeamSpec) -> Self {
        self.teams.push(team);
        self
    }

    pub fn set_terrain(&mut self, hex: Hex, terrain: TerrainKind) {
        match self.tiles.iter_mut().find(|tile| tile.hex == hex) {
            Some(tile) => tile.terrain = terrain,
            None => self.tiles.push(TileSpec { hex, terrain }),
        }
    }

    pub fn team(&self, side: SideId) -> Option<&TeamSpec> {
        self.teams.iter().find(|team| team.side == side)
    }

    pub fn team_mut(&mut self, side: SideId) -> Option<&mut TeamSpec> {
        self.teams.iter_mut().find(|team| team.side == side)
    }

    /// Removes a unit from the map, as if it had died.
    pub fn remove_unit(&mut self, id: UnitId) -> Option<UnitView> {
        let index = self.units.iter().position(|unit| unit.id == id)?;
        Some(self.units.remove(index))
    }

    /// Teleports a unit; returns `false` if it is not on the map.
    pub fn move_unit(&mut self, id: UnitId, hex: Hex) -> bool {
        match self.units.iter_mut().find(|unit| unit.id == id) {
            Some(unit) => {
                unit.hex = hex;
                true
            }
            None => false,
        }
    }

    /// Places a recall-list unit on the map, dropping it from the list.
    pub fn recall_unit(&mut self, side: SideId, id: UnitId, hex: Hex, weapons: u8) -> bool {
        let Some(team) = self.team_mut(side) else {
            return false;
        };
        let Some(index) = team.recall_list.iter().position(|&unit| unit == id) else {
            return false;
        };
        team.recall_list.remove(index);
        self.units.push(UnitView::new(id, side, hex, weapons));
        true
    }

    /// Takes gold from a side's treasury; returns `false` if it cannot pay.
    pub fn spend_gold(&mut self, side: SideId, amount: u32) -> bool {
        match self.team_mut(side) {
            Some(team) if team.gold >= amount => {
                team.gold -= amount;
                true
            }
            _ => false,
        }
    }

    /// Smallest unit id not yet used on the map or in any recall list.
    pub fn next_unit_id(&self) -> UnitId {
        let on_map = self.units.iter().map(|unit| unit.id.0);
        let recallable = self
            .teams
            .iter()
            .flat_map(|team| team.recall_list.iter().map(|unit| unit.0));
        UnitId(on_map.chain(recallable).max().map_or(0, |max| max + 1))
    }
}

impl MapOracle for MemoryWorld {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn terrain(&self, hex: Hex) -> Option<TerrainKind> {
        if !self.dimensions.contains(hex) {
            return None;
        }
        let terrain = self
            .tiles
            .iter()
            .find(|tile| tile.hex == hex)
            .map_or(self.base_terrain, |tile| tile.terrain);
        Some(terrain)
    }
}

impl UnitOracle for MemoryWorld {
    fn unit(&self, id: UnitId) -> Option<UnitView> {
        self.units.iter().find(|unit| unit.id == id).copied()
    }

    fn unit_at(&self, hex: Hex) -> Option<UnitView> {
        self.units.iter().find(|unit| unit.hex == hex).copied()
    }

    fn in_recall_list(&self, side: SideId, unit: UnitId) -> bool {
        self.team(side)
            .is_some_and(|team| team.recall_list.contains(&unit))
    }
}

impl TeamOracle for MemoryWorld {
    fn gold(&self, side: SideId) -> u32 {
        self.team(side).map_or(0, |team| team.gold)
    }

    fn recruit_cost(&self, side: SideId, unit_type: &str) -> Option<u32> {
        self.team(side)?
            .recruits
            .iter()
            .find(|option| option.unit_type == unit_type)
            .map(|option| option.cost)
    }

    fn is_enemy(&self, side: SideId, other: SideId) -> bool {
        if side == other {
            return false;
        }
        let allied = |a: SideId, b: SideId| self.team(a).is_some_and(|team| team.allies.contains(&b));
        !(allied(side, other) || allied(other, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> MemoryWorld {
        MemoryWorld::new(5, 5)
            .with_tile(Hex::new(1, 1), TerrainKind::Keep)
            .with_unit(UnitView::new(UnitId(1), SideId(1), Hex::new(1, 1), 2))
            .with_team(
                TeamSpec::new(SideId(1), 100)
                    .with_recruit("Spearman", 14)
                    .with_recall(UnitId(7)),
            )
            .with_team(TeamSpec::new(SideId(2), 50))
            .with_team(TeamSpec::new(SideId(3), 50).with_ally(SideId(1)))
    }

    #[test]
    fn terrain_falls_back_to_base_and_stops_at_edges() {
        let world = world();
        assert_eq!(world.terrain(Hex::new(1, 1)), Some(TerrainKind::Keep));
        assert_eq!(world.terrain(Hex::new(2, 2)), Some(TerrainKind::Flat));
        assert_eq!(world.terrain(Hex::new(5, 0)), None);
    }

    #[test]
    fn unit_lookups_by_id_and_hex() {
        let mut world = world();
        assert_eq!(world.unit_at(Hex::new(1, 1)).map(|u| u.id), Some(UnitId(1)));
        assert!(world.move_unit(UnitId(1), Hex::new(2, 2)));
        assert!(world.unit_at(Hex::new(1, 1)).is_none());
        assert!(world.remove_unit(UnitId(1)).is_some());
        assert!(!world.is_alive(UnitId(1)));
    }

    #[test]
    fn liveness_follows_removal() {
        let mut world = world();
        assert!(world.is_alive(UnitId(1)));

        world.remove_unit(UnitId(1));

        assert!(!world.is_alive(UnitId(1)));
        assert!(!world.is_alive(UnitId(7)));
    }

    #[test]
    fn alliances_are_symmetric() {
        let world = world();
        assert!(world.is_enemy(SideId(1), SideId(2)));
        assert!(!world.is_enemy(SideId(1), SideId(3)));
        assert!(!world.is_enemy(SideId(3), SideId(1)));
        assert!(!world.is_enemy(SideId(2), SideId(2)));
    }

    #[test]
    fn recall_moves_unit_onto_map() {
        let mut world = world();
        assert!(world.in_recall_list(SideId(1), UnitId(7)));
        assert_eq!(world.next_unit_id(), UnitId(8));
        assert!(world.recall_unit(SideId(1), UnitId(7), Hex::new(1, 2), 1));
        assert!(!world.in_recall_list(SideId(1), UnitId(7)));
        assert_eq!(world.unit(UnitId(7)).map(|u| u.hex), Some(Hex::new(1, 2)));
    }

    #[test]
    fn gold_and_recruit_costs() {
        let mut world = world();
        assert_eq!(world.recruit_cost(SideId(1), "Spearman"), Some(14));
        assert_eq!(world.recruit_cost(SideId(2), "Spearman"), None);
        assert!(world.spend_gold(SideId(1), 30));
        assert_eq!(world.gold(SideId(1)), 70);
        assert!(!world.spend_gold(SideId(2), 60));
    }
}
