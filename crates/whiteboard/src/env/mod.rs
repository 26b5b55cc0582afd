//! Traits describing the game state the whiteboard plans against.
//!
//! The queue never owns units, terrain or gold. It queries them through the
//! oracles below whenever validation needs the live picture. The [`Env`]
//! aggregate bundles them so validation can reach everything it needs without
//! coupling to a concrete game model.
mod map;
mod memory;
mod teams;
mod units;

pub use map::{MapDimensions, MapOracle, TerrainKind};
pub use memory::{MemoryWorld, RecruitOption, TeamSpec, TileSpec};
pub use teams::TeamOracle;
pub use units::{UnitOracle, UnitView};

/// Aggregates the read-only oracles required by the validation pass.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    units: &'a dyn UnitOracle,
    map: &'a dyn MapOracle,
    teams: &'a dyn TeamOracle,
}

impl<'a> Env<'a> {
    pub fn new(
        units: &'a dyn UnitOracle,
        map: &'a dyn MapOracle,
        teams: &'a dyn TeamOracle,
    ) -> Self {
        Self { units, map, teams }
    }

    /// Uses a single world object that implements every oracle.
    pub fn from_world<W>(world: &'a W) -> Self
    where
        W: UnitOracle + MapOracle + TeamOracle,
    {
        Self::new(world, world, world)
    }

    pub fn units(&self) -> &'a dyn UnitOracle {
        self.units
    }

    pub fn map(&self) -> &'a dyn MapOracle {
        self.map
    }

    pub fn teams(&self) -> &'a dyn TeamOracle {
        self.teams
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("map", &self.map.dimensions())
            .finish_non_exhaustive()
    }
}
