//! Lookups by identity and by owning unit. All of them are linear scans and
//! report "not found" as `end()`.

use super::{Cursor, SideActions};
use crate::state::{ActionId, UnitId};

impl SideActions {
    /// Position of the action with this id, or `end()` if it is not queued.
    pub fn get_position_of(&self, id: ActionId) -> Cursor {
        self.actions
            .iter()
            .position(|action| action.id() == id)
            .map_or_else(|| self.end(), Cursor::new)
    }

    /// First action of `unit`, searching from the front.
    pub fn find_first_action_of(&self, unit: UnitId) -> Cursor {
        self.find_first_action_of_from(unit, self.begin())
    }

    /// First action of `unit` at or after `start`.
    pub fn find_first_action_of_from(&self, unit: UnitId, start: Cursor) -> Cursor {
        self.actions
            .iter()
            .enumerate()
            .skip(start.index())
            .find(|(_, action)| action.belongs_to(unit))
            .map_or_else(|| self.end(), |(index, _)| Cursor::new(index))
    }

    /// Last action of `unit`, searching backwards from the back.
    pub fn find_last_action_of(&self, unit: UnitId) -> Cursor {
        match self.end().prev() {
            Some(last) => self.find_last_action_of_from(unit, last),
            None => self.end(),
        }
    }

    /// Last action of `unit` at or before `start`.
    ///
    /// A `start` at or past `end()` searches the whole queue.
    pub fn find_last_action_of_from(&self, unit: UnitId, start: Cursor) -> Cursor {
        let upper = (start.index() + 1).min(self.actions.len());
        self.actions[..upper]
            .iter()
            .rposition(|action| action.belongs_to(unit))
            .map_or_else(|| self.end(), Cursor::new)
    }

    pub fn unit_has_actions(&self, unit: UnitId) -> bool {
        self.find_first_action_of(unit) != self.end()
    }

    pub fn count_actions_of(&self, unit: UnitId) -> usize {
        self.actions
            .iter()
            .filter(|action| action.belongs_to(unit))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use crate::queue::{Cursor, SideActions};
    use crate::state::{ActionId, Hex, Route, SideId, UnitId};

    fn step(unit_hex: Hex, to: Hex) -> Route {
        Route::new(vec![unit_hex, to]).unwrap()
    }

    // [0] move u1, [1] recruit, [2] move u2, [3] attack u1
    fn queue() -> SideActions {
        let mut queue = SideActions::new();
        queue.set_team_index(SideId(1));
        queue.queue_move(UnitId(1), step(Hex::new(0, 0), Hex::new(0, 1)));
        queue.queue_recruit("Spearman", Hex::new(3, 3));
        queue.queue_move(UnitId(2), step(Hex::new(4, 0), Hex::new(4, 1)));
        queue.queue_attack(UnitId(1), Hex::new(0, 2), 0, Route::stationary(Hex::new(0, 1)));
        queue
    }

    #[test]
    fn position_of_matches_identity() {
        let queue = queue();
        let id = queue.actions()[2].id();
        assert_eq!(queue.get_position_of(id), Cursor::new(2));
        assert_eq!(queue.get_position_of(ActionId(99)), queue.end());
    }

    #[test]
    fn first_and_last_actions_of_unit() {
        let queue = queue();
        assert_eq!(queue.find_first_action_of(UnitId(1)), Cursor::new(0));
        assert_eq!(queue.find_last_action_of(UnitId(1)), Cursor::new(3));
        assert_eq!(queue.find_first_action_of(UnitId(2)), Cursor::new(2));
        assert_eq!(queue.find_last_action_of(UnitId(2)), Cursor::new(2));
    }

    #[test]
    fn searches_honour_start_position() {
        let queue = queue();
        assert_eq!(
            queue.find_first_action_of_from(UnitId(1), Cursor::new(1)),
            Cursor::new(3)
        );
        assert_eq!(
            queue.find_last_action_of_from(UnitId(1), Cursor::new(2)),
            Cursor::new(0)
        );
        assert_eq!(
            queue.find_first_action_of_from(UnitId(2), Cursor::new(3)),
            queue.end()
        );
        assert_eq!(
            queue.find_last_action_of_from(UnitId(2), Cursor::new(10)),
            Cursor::new(2)
        );
    }

    #[test]
    fn counts_do_not_short_circuit() {
        let queue = queue();
        assert_eq!(queue.count_actions_of(UnitId(1)), 2);
        assert_eq!(queue.count_actions_of(UnitId(2)), 1);
        assert!(queue.unit_has_actions(UnitId(2)));
        assert!(!queue.unit_has_actions(UnitId(7)));
        assert_eq!(queue.count_actions_of(UnitId(7)), 0);
    }

    #[test]
    fn empty_queue_reports_end() {
        let queue = SideActions::new();
        assert_eq!(queue.find_first_action_of(UnitId(1)), queue.end());
        assert_eq!(queue.find_last_action_of(UnitId(1)), queue.end());
        assert!(!queue.unit_has_actions(UnitId(1)));
    }
}
