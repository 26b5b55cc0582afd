use crate::state::{Hex, SideId, UnitId};

/// Live unit lookups.
///
/// Implementations answer from the authoritative game state; a unit that died
/// or left the map simply stops being returned.
pub trait UnitOracle {
    fn unit(&self, id: UnitId) -> Option<UnitView>;

    fn unit_at(&self, hex: Hex) -> Option<UnitView>;

    /// Whether `unit` waits in `side`'s recall list.
    fn in_recall_list(&self, side: SideId, unit: UnitId) -> bool;

    /// Whether the unit is still in play. Defaults to a [`Self::unit`] lookup.
    fn is_alive(&self, id: UnitId) -> bool {
        self.unit(id).is_some()
    }
}

/// Snapshot of the unit attributes planning cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitView {
    pub id: UnitId,
    pub side: SideId,
    pub hex: Hex,
    /// Number of attacks the unit can choose from.
    pub weapons: u8,
}

impl UnitView {
    pub const fn new(id: UnitId, side: SideId, hex: Hex, weapons: u8) -> Self {
        Self {
            id,
            side,
            hex,
            weapons,
        }
    }

    pub fn belongs_to(&self, side: SideId) -> bool {
        self.side == side
    }
}
