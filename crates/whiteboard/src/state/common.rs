use std::fmt;

use arrayvec::ArrayVec;

/// Stable identifier of a unit in the authoritative game state.
///
/// Actions keep this key instead of a reference, so a unit that died between
/// planning and validation is an ordinary lookup miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.0)
    }
}

/// Index of a side (player) in the game's team list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideId(pub u32);

impl fmt::Display for SideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side {}", self.0)
    }
}

/// Identity of a planned action, unique within the queue that created it.
///
/// Overlay holders (arrows, ghost units) keep this id and resolve it through
/// [`crate::queue::SideActions::find`] rather than holding the action itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub u64);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Map hex in offset coordinates.
///
/// Columns are vertical; odd columns sit half a hex lower than even ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    pub x: i32,
    pub y: i32,
}

impl Hex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the six hexes sharing an edge with this one, clockwise from north.
    pub fn neighbors(self) -> ArrayVec<Hex, 6> {
        let Hex { x, y } = self;
        let even = x % 2 == 0;
        let (up, down) = if even { (1, 0) } else { (0, 1) };

        let mut out = ArrayVec::new();
        out.push(Hex::new(x, y - 1));
        out.push(Hex::new(x + 1, y - up));
        out.push(Hex::new(x + 1, y + down));
        out.push(Hex::new(x, y + 1));
        out.push(Hex::new(x - 1, y + down));
        out.push(Hex::new(x - 1, y - up));
        out
    }

    pub fn is_adjacent(self, other: Hex) -> bool {
        self.neighbors().contains(&other)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
