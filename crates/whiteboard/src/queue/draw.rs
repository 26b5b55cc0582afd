//! Rendering hook and debug dump.

use std::fmt;

use super::SideActions;
use crate::action::{HexPainter, Overlay};
use crate::state::Hex;

impl SideActions {
    /// Called by the display for every hex it draws, so queued actions can
    /// paint their symbols there. Never mutates the queue.
    pub fn draw_hex(&self, hex: Hex, painter: &mut dyn HexPainter) {
        if !self.config.draw_overlays {
            return;
        }
        for (order, action) in self.actions.iter().enumerate() {
            if let Some(kind) = action.overlay_at(hex) {
                painter.paint(
                    hex,
                    Overlay {
                        action: action.id(),
                        order,
                        kind,
                    },
                );
            }
        }
    }
}

/// Diagnostic dump of the whole queue. Not a stable format.
impl fmt::Display for SideActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.team_index {
            Some(side) => write!(f, "planned actions of {side}")?,
            None => write!(f, "planned actions of unassigned side")?,
        }
        writeln!(
            f,
            " ({} queued, {} gold spent)",
            self.actions.len(),
            self.gold_spent
        )?;
        for (index, action) in self.actions.iter().enumerate() {
            writeln!(f, "  [{index}] {action}")?;
        }
        Ok(())
    }
}
