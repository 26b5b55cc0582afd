//! Running planned actions.
//!
//! Each action is either in progress or finished. A finished action leaves the
//! queue. An unfinished one stays at the front when run through
//! [`SideActions::execute_next`], and is deferred to the back when it was
//! picked out of order through [`SideActions::execute`].

use tracing::debug;

use super::{Cursor, SideActions};
use crate::action::{ActionExecutor, ExecutionStatus};

impl SideActions {
    /// Executes the front action.
    ///
    /// Returns `begin()`: the new front if the action finished, the action
    /// itself otherwise. Returns `end()` when the queue is empty afterwards.
    pub fn execute_next<E>(&mut self, executor: &mut E) -> Cursor
    where
        E: ActionExecutor + ?Sized,
    {
        if self.actions.is_empty() {
            return self.end();
        }

        if self.run(self.begin(), executor).is_finished() {
            self.actions.remove(0);
        }

        if self.actions.is_empty() {
            self.end()
        } else {
            self.begin()
        }
    }

    /// Executes the action at `position`, ahead of its turn.
    ///
    /// A finished action is erased and the position of its follower returned
    /// (or `end()`). An unfinished one moves to the back of the queue, other
    /// actions keeping their relative order, and the position it vacated is
    /// returned: the new next-in-line, or the action itself if it was already
    /// last.
    ///
    /// # Panics
    ///
    /// Panics if the queue is not empty and `position` does not designate an
    /// action.
    pub fn execute<E>(&mut self, position: Cursor, executor: &mut E) -> Cursor
    where
        E: ActionExecutor + ?Sized,
    {
        if self.actions.is_empty() {
            return self.end();
        }
        self.assert_valid_cursor(position, "execute");

        let status = self.run(position, executor);
        let action = self.actions.remove(position.index());
        if !status.is_finished() {
            debug!(action = %action, "deferring unfinished action to the back");
            self.actions.push(action);
        }

        position.min(self.end())
    }

    fn run<E>(&mut self, position: Cursor, executor: &mut E) -> ExecutionStatus
    where
        E: ActionExecutor + ?Sized,
    {
        let action = &mut self.actions[position.index()];
        let status = executor.execute(action);
        action.set_status(status);
        debug!(action = %action, ?status, "executed planned action");
        status
    }
}
