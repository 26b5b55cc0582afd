use super::{check_castle_hex, check_gold};
use crate::action::{InvalidAction, OverlayKind, PlannedTransition, PlannedWorld};
use crate::state::{Hex, SideId, UnitId};

/// Planned recruitment of a new unit onto a castle hex.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecruitAction {
    pub unit_type: String,
    pub hex: Hex,
}

impl RecruitAction {
    pub fn new(unit_type: impl Into<String>, hex: Hex) -> Self {
        Self {
            unit_type: unit_type.into(),
            hex,
        }
    }
}

impl PlannedTransition for RecruitAction {
    fn unit(&self) -> Option<UnitId> {
        None
    }

    fn validate(&self, side: SideId, world: &PlannedWorld<'_>) -> Result<(), InvalidAction> {
        let cost = world
            .env()
            .teams()
            .recruit_cost(side, &self.unit_type)
            .ok_or_else(|| InvalidAction::NotRecruitable {
                unit_type: self.unit_type.clone(),
            })?;

        check_castle_hex(self.hex, world)?;
        check_gold(cost, world)
    }

    fn apply(&self, world: &mut PlannedWorld<'_>) {
        let cost = world
            .env()
            .teams()
            .recruit_cost(world.side(), &self.unit_type)
            .unwrap_or(0);
        world.place(self.hex);
        world.reserve_gold(cost);
    }

    fn overlay_at(&self, hex: Hex) -> Option<OverlayKind<'_>> {
        (hex == self.hex).then_some(OverlayKind::Recruit {
            unit_type: &self.unit_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Env, MemoryWorld, TeamSpec, TerrainKind, UnitView};

    fn world(gold: u32) -> MemoryWorld {
        MemoryWorld::new(5, 5)
            .with_tile(Hex::new(1, 1), TerrainKind::Keep)
            .with_tile(Hex::new(1, 2), TerrainKind::Castle)
            .with_tile(Hex::new(2, 1), TerrainKind::Castle)
            .with_unit(UnitView::new(UnitId(1), SideId(1), Hex::new(1, 1), 1))
            .with_team(TeamSpec::new(SideId(1), gold).with_recruit("Spearman", 14))
    }

    #[test]
    fn accepts_affordable_recruit_on_free_castle() {
        let world = world(20);
        let planned = PlannedWorld::new(Env::from_world(&world), SideId(1), 20);
        let recruit = RecruitAction::new("Spearman", Hex::new(1, 2));
        assert_eq!(recruit.validate(SideId(1), &planned), Ok(()));
    }

    #[test]
    fn rejects_unknown_type_occupied_hex_and_open_field() {
        let world = world(20);
        let planned = PlannedWorld::new(Env::from_world(&world), SideId(1), 20);

        let unknown = RecruitAction::new("Dragon", Hex::new(1, 2));
        assert!(matches!(
            unknown.validate(SideId(1), &planned),
            Err(InvalidAction::NotRecruitable { .. })
        ));

        let on_leader = RecruitAction::new("Spearman", Hex::new(1, 1));
        assert_eq!(
            on_leader.validate(SideId(1), &planned),
            Err(InvalidAction::Occupied { hex: Hex::new(1, 1) })
        );

        let in_field = RecruitAction::new("Spearman", Hex::new(3, 3));
        assert_eq!(
            in_field.validate(SideId(1), &planned),
            Err(InvalidAction::NotCastle { hex: Hex::new(3, 3) })
        );
    }

    #[test]
    fn second_recruit_sees_first_reservation() {
        let world = world(20);
        let mut planned = PlannedWorld::new(Env::from_world(&world), SideId(1), 20);

        let first = RecruitAction::new("Spearman", Hex::new(1, 2));
        first.validate(SideId(1), &planned).unwrap();
        first.apply(&mut planned);

        let same_hex = RecruitAction::new("Spearman", Hex::new(1, 2));
        assert_eq!(
            same_hex.validate(SideId(1), &planned),
            Err(InvalidAction::Occupied { hex: Hex::new(1, 2) })
        );

        let second = RecruitAction::new("Spearman", Hex::new(2, 1));
        assert_eq!(
            second.validate(SideId(1), &planned),
            Err(InvalidAction::InsufficientGold {
                needed: 14,
                available: 6
            })
        );
    }
}
