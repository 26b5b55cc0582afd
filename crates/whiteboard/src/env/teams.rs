use crate::state::SideId;

/// Team-level queries: treasury, recruit list and diplomacy.
pub trait TeamOracle {
    /// Gold currently held by `side` in the authoritative state.
    fn gold(&self, side: SideId) -> u32;

    /// Gold cost of recruiting `unit_type`, or `None` if `side` cannot recruit it.
    fn recruit_cost(&self, side: SideId, unit_type: &str) -> Option<u32>;

    fn is_enemy(&self, side: SideId, other: SideId) -> bool;
}
