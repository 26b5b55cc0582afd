use super::{check_castle_hex, check_gold};
use crate::action::{InvalidAction, OverlayKind, PlannedTransition, PlannedWorld};
use crate::state::{Hex, SideId, UnitId};

/// Planned recall of a veteran unit from the side's recall list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecallAction {
    pub unit: UnitId,
    pub hex: Hex,
}

impl RecallAction {
    pub fn new(unit: UnitId, hex: Hex) -> Self {
        Self { unit, hex }
    }
}

impl PlannedTransition for RecallAction {
    fn unit(&self) -> Option<UnitId> {
        Some(self.unit)
    }

    fn validate(&self, side: SideId, world: &PlannedWorld<'_>) -> Result<(), InvalidAction> {
        if !world.env().units().in_recall_list(side, self.unit) {
            return Err(InvalidAction::NotInRecallList { unit: self.unit });
        }
        if world.is_recalled(self.unit) {
            return Err(InvalidAction::AlreadyRecalled { unit: self.unit });
        }
        check_castle_hex(self.hex, world)?;
        check_gold(world.recall_cost(), world)
    }

    fn apply(&self, world: &mut PlannedWorld<'_>) {
        let cost = world.recall_cost();
        world.place(self.hex);
        world.mark_recalled(self.unit);
        world.reserve_gold(cost);
    }

    fn overlay_at(&self, hex: Hex) -> Option<OverlayKind<'_>> {
        (hex == self.hex).then_some(OverlayKind::Recall { unit: self.unit })
    }
}
