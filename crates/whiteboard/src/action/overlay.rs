//! Symbols queued actions paint on the map.

use crate::state::{ActionId, Hex, UnitId};

/// What an action wants drawn on one hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind<'a> {
    /// The hex lies on a planned route; `step` 0 is the source.
    RouteStep { step: usize, destination: bool },
    /// The attacker strikes from this hex.
    AttackFrom { target: Hex, weapon: u8 },
    /// The attacked unit stands on this hex.
    AttackTarget { from: Hex },
    /// A unit of this type will be recruited here.
    Recruit { unit_type: &'a str },
    /// This unit will be recalled here.
    Recall { unit: UnitId },
}

/// Overlay tagged with the action that produced it and its execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlay<'a> {
    pub action: ActionId,
    /// Zero-based position of the action in the queue.
    pub order: usize,
    pub kind: OverlayKind<'a>,
}

/// Rendering collaborator receiving overlays for the hex being drawn.
pub trait HexPainter {
    fn paint(&mut self, hex: Hex, overlay: Overlay<'_>);
}
