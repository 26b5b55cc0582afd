use super::movement::check_route;
use crate::action::{InvalidAction, Occupant, OverlayKind, PlannedTransition, PlannedWorld};
use crate::state::{Hex, Route, SideId, UnitId};

/// Planned attack, optionally preceded by a move to the striking hex.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub unit: UnitId,
    /// Hex of the defender.
    pub target: Hex,
    /// Index into the attacker's weapon list.
    pub weapon: u8,
    /// Approach route; stationary when attacking from the current hex.
    pub route: Route,
}

impl AttackAction {
    pub fn new(unit: UnitId, target: Hex, weapon: u8, route: Route) -> Self {
        Self {
            unit,
            target,
            weapon,
            route,
        }
    }

    /// Hex the attacker strikes from.
    pub fn striking_hex(&self) -> Hex {
        self.route.destination()
    }
}

impl PlannedTransition for AttackAction {
    fn unit(&self) -> Option<UnitId> {
        Some(self.unit)
    }

    fn validate(&self, side: SideId, world: &PlannedWorld<'_>) -> Result<(), InvalidAction> {
        let attacker = check_route(self.unit, &self.route, side, world)?;

        let from = self.striking_hex();
        let defender = match world.occupant(self.target) {
            Some(Occupant::Unit(unit)) => unit,
            Some(Occupant::Planned { .. }) => {
                return Err(InvalidAction::NotEnemy { hex: self.target });
            }
            None => return Err(InvalidAction::NoTarget { hex: self.target }),
        };

        if !world.is_enemy(defender.side) {
            return Err(InvalidAction::NotEnemy { hex: self.target });
        }

        if !from.is_adjacent(self.target) {
            return Err(InvalidAction::NotAdjacent {
                from,
                target: self.target,
            });
        }

        if self.weapon >= attacker.weapons {
            return Err(InvalidAction::InvalidWeapon {
                weapon: self.weapon,
                available: attacker.weapons,
            });
        }

        Ok(())
    }

    fn apply(&self, world: &mut PlannedWorld<'_>) {
        if !self.route.is_empty() {
            world.relocate(self.unit, self.striking_hex());
        }
    }

    fn overlay_at(&self, hex: Hex) -> Option<OverlayKind<'_>> {
        let from = self.striking_hex();
        if hex == from {
            return Some(OverlayKind::AttackFrom {
                target: self.target,
                weapon: self.weapon,
            });
        }
        if hex == self.target {
            return Some(OverlayKind::AttackTarget { from });
        }
        let step = self.route.step_index(hex)?;
        Some(OverlayKind::RouteStep {
            step,
            destination: false,
        })
    }
}
