use std::time::Duration;

/// Work the presentation layer runs after a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Clear the success/warning tint.
    RevertFlash,
    /// Accept answers again on the same round (after a wrong answer).
    Resume,
    /// Replace the round with a fresh one (after a correct answer).
    NextRound,
}

/// Cancellation token for one scheduled action.
///
/// A ticket belongs to the round and the answer it was issued for. Any new
/// round (next round, topic switch, new game) or a later answer on the same
/// round makes older tickets stale, and firing a stale ticket does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub(crate) epoch: u64,
    pub(crate) answer: u64,
    pub(crate) action: ScheduledAction,
}

impl Ticket {
    #[must_use]
    pub fn action(&self) -> ScheduledAction {
        self.action
    }
}

/// A ticket plus the delay to wait before firing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledJob {
    pub ticket: Ticket,
    pub delay: Duration,
}

/// What happened when a ticket was fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fired {
    Applied(ScheduledAction),
    Stale,
}
