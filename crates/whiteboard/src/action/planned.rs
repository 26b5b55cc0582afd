//! Projected game state used while validating a queue.
//!
//! Each valid action is applied here in queue order, so later actions are
//! checked against the positions, occupied hexes and gold that earlier plans
//! leave behind. Removing a move therefore invalidates an attack that relied
//! on the moved unit having vacated its hex.

use std::collections::{HashMap, HashSet};

use crate::env::{Env, UnitView};
use crate::state::{Hex, SideId, UnitId};

/// What stands on a hex in the projected world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant {
    /// A live unit, at its projected position.
    Unit(UnitView),
    /// A unit that exists only as a planned recruit or recall.
    Planned { side: SideId },
}

impl Occupant {
    pub fn unit_id(&self) -> Option<UnitId> {
        match self {
            Occupant::Unit(unit) => Some(unit.id),
            Occupant::Planned { .. } => None,
        }
    }

    pub fn side(&self) -> SideId {
        match self {
            Occupant::Unit(unit) => unit.side,
            Occupant::Planned { side } => *side,
        }
    }
}

/// The authoritative state overlaid with the effects of already-validated plans.
#[derive(Debug)]
pub struct PlannedWorld<'a> {
    env: Env<'a>,
    side: SideId,
    recall_cost: u32,
    relocated: HashMap<UnitId, Hex>,
    placed: HashMap<Hex, SideId>,
    recalled: HashSet<UnitId>,
    reserved_gold: u32,
}

impl<'a> PlannedWorld<'a> {
    pub fn new(env: Env<'a>, side: SideId, recall_cost: u32) -> Self {
        Self {
            env,
            side,
            recall_cost,
            relocated: HashMap::new(),
            placed: HashMap::new(),
            recalled: HashSet::new(),
            reserved_gold: 0,
        }
    }

    pub fn env(&self) -> &Env<'a> {
        &self.env
    }

    pub fn side(&self) -> SideId {
        self.side
    }

    pub fn recall_cost(&self) -> u32 {
        self.recall_cost
    }

    /// Gold reserved by the recruits and recalls applied so far.
    pub fn reserved_gold(&self) -> u32 {
        self.reserved_gold
    }

    /// Treasury minus reservations of earlier planned actions.
    pub fn spendable_gold(&self) -> u32 {
        self.env
            .teams()
            .gold(self.side)
            .saturating_sub(self.reserved_gold)
    }

    /// Looks a live unit up at its projected position.
    pub fn unit(&self, id: UnitId) -> Option<UnitView> {
        let mut unit = self.env.units().unit(id)?;
        if let Some(&hex) = self.relocated.get(&id) {
            unit.hex = hex;
        }
        Some(unit)
    }

    pub fn occupant(&self, hex: Hex) -> Option<Occupant> {
        if let Some(&side) = self.placed.get(&hex) {
            return Some(Occupant::Planned { side });
        }

        if let Some(unit) = self
            .relocated
            .iter()
            .filter(|&(_, &at)| at == hex)
            .find_map(|(&id, _)| self.unit(id))
        {
            return Some(Occupant::Unit(unit));
        }

        let unit = self.env.units().unit_at(hex)?;
        if self.relocated.contains_key(&unit.id) {
            // Planned to move away; the hex is vacated.
            return None;
        }
        Some(Occupant::Unit(unit))
    }

    /// Whether `hex` is empty, treating `mover` as absent.
    pub fn is_free_for(&self, hex: Hex, mover: Option<UnitId>) -> bool {
        match self.occupant(hex) {
            None => true,
            Some(occupant) => mover.is_some() && occupant.unit_id() == mover,
        }
    }

    /// Whether an earlier planned recall already takes `unit` off the recall list.
    pub fn is_recalled(&self, unit: UnitId) -> bool {
        self.recalled.contains(&unit)
    }

    pub fn is_enemy(&self, side: SideId) -> bool {
        self.env.teams().is_enemy(self.side, side)
    }

    pub(crate) fn relocate(&mut self, unit: UnitId, hex: Hex) {
        self.relocated.insert(unit, hex);
    }

    pub(crate) fn place(&mut self, hex: Hex) {
        self.placed.insert(hex, self.side);
    }

    pub(crate) fn mark_recalled(&mut self, unit: UnitId) {
        self.recalled.insert(unit);
    }

    pub(crate) fn reserve_gold(&mut self, amount: u32) {
        self.reserved_gold = self.reserved_gold.saturating_add(amount);
    }
}
