use crate::action::{InvalidAction, OverlayKind, PlannedTransition, PlannedWorld};
use crate::env::UnitView;
use crate::state::{Hex, Route, SideId, UnitId};

/// Planned relocation of a unit along a precomputed route.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub unit: UnitId,
    pub route: Route,
}

impl MoveAction {
    pub fn new(unit: UnitId, route: Route) -> Self {
        Self { unit, route }
    }
}

impl PlannedTransition for MoveAction {
    fn unit(&self) -> Option<UnitId> {
        Some(self.unit)
    }

    fn validate(&self, side: SideId, world: &PlannedWorld<'_>) -> Result<(), InvalidAction> {
        if self.route.is_empty() {
            return Err(InvalidAction::NoMovement { unit: self.unit });
        }
        check_route(self.unit, &self.route, side, world).map(|_| ())
    }

    fn apply(&self, world: &mut PlannedWorld<'_>) {
        world.relocate(self.unit, self.route.destination());
    }

    fn overlay_at(&self, hex: Hex) -> Option<OverlayKind<'_>> {
        let step = self.route.step_index(hex)?;
        Some(OverlayKind::RouteStep {
            step,
            destination: step == self.route.len(),
        })
    }
}

/// Checks that `unit` can walk `route` in the projected world.
///
/// Returns the unit as it stands before moving. Shared with attack-moves.
pub(super) fn check_route(
    unit: UnitId,
    route: &Route,
    side: SideId,
    world: &PlannedWorld<'_>,
) -> Result<UnitView, InvalidAction> {
    let view = world
        .unit(unit)
        .ok_or(InvalidAction::UnitMissing { unit })?;

    if !view.belongs_to(side) {
        return Err(InvalidAction::NotOwned {
            unit,
            owner: view.side,
            side,
        });
    }

    if view.hex != route.source() {
        return Err(InvalidAction::WrongSource {
            unit,
            expected: route.source(),
            actual: view.hex,
        });
    }

    let map = world.env().map();
    for &hex in &route.steps()[1..] {
        if !map.contains(hex) {
            return Err(InvalidAction::OffMap { hex });
        }
        if !map.is_passable(hex) {
            return Err(InvalidAction::Impassable { hex });
        }
        let enemy = world
            .occupant(hex)
            .is_some_and(|occupant| world.is_enemy(occupant.side()));
        if enemy {
            return Err(InvalidAction::BlockedByEnemy { hex });
        }
    }

    let destination = route.destination();
    if !world.is_free_for(destination, Some(unit)) {
        return Err(InvalidAction::Occupied { hex: destination });
    }

    Ok(view)
}
