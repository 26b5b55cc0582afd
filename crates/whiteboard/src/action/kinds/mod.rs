mod combat;
mod movement;
mod recall;
mod recruit;

pub use combat::AttackAction;
pub use movement::MoveAction;
pub use recall::RecallAction;
pub use recruit::RecruitAction;

use crate::action::{InvalidAction, PlannedWorld};
use crate::state::Hex;

/// Shared placement rules for recruits and recalls.
fn check_castle_hex(hex: Hex, world: &PlannedWorld<'_>) -> Result<(), InvalidAction> {
    let map = world.env().map();
    if !map.contains(hex) {
        return Err(InvalidAction::OffMap { hex });
    }
    if !map.is_castle(hex) {
        return Err(InvalidAction::NotCastle { hex });
    }
    if world.occupant(hex).is_some() {
        return Err(InvalidAction::Occupied { hex });
    }
    Ok(())
}

fn check_gold(needed: u32, world: &PlannedWorld<'_>) -> Result<(), InvalidAction> {
    let available = world.spendable_gold();
    if available < needed {
        return Err(InvalidAction::InsufficientGold { needed, available });
    }
    Ok(())
}
