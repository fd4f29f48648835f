use std::num::NonZeroU32;

use thiserror::Error;

/// Correct answers needed for one sticker unless configured otherwise.
pub const DEFAULT_STICKER_GOAL: u32 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TallyError {
    #[error("sticker goal must be > 0")]
    ZeroGoal,
}

/// Result of recording one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordOutcome {
    pub new_sticker_earned: bool,
}

/// Running score for the current game.
///
/// Every `goal` correct answers (consecutive or not) turn into one sticker and
/// the progress counter starts over. All counters only grow until [`reset`].
///
/// [`reset`]: SessionTally::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTally {
    goal: NonZeroU32,
    correct_count: u32,
    incorrect_count: u32,
    sticker_progress: u32,
    sticker_total: u32,
}

impl SessionTally {
    /// # Errors
    ///
    /// Returns `TallyError::ZeroGoal` if `goal` is zero.
    pub fn new(goal: u32) -> Result<Self, TallyError> {
        NonZeroU32::new(goal)
            .map(Self::with_goal)
            .ok_or(TallyError::ZeroGoal)
    }

    #[must_use]
    pub fn with_goal(goal: NonZeroU32) -> Self {
        Self {
            goal,
            correct_count: 0,
            incorrect_count: 0,
            sticker_progress: 0,
            sticker_total: 0,
        }
    }

    /// Count one answer and report whether it completed a sticker.
    pub fn record(&mut self, correct: bool) -> RecordOutcome {
        if !correct {
            self.incorrect_count = self.incorrect_count.saturating_add(1);
            return RecordOutcome::default();
        }

        self.correct_count = self.correct_count.saturating_add(1);
        self.sticker_progress += 1;
        if self.sticker_progress < self.goal.get() {
            return RecordOutcome::default();
        }

        self.sticker_progress = 0;
        self.sticker_total = self.sticker_total.saturating_add(1);
        RecordOutcome {
            new_sticker_earned: true,
        }
    }

    /// Zero every counter. The goal is kept.
    pub fn reset(&mut self) {
        *self = Self::with_goal(self.goal);
    }

    #[must_use]
    pub fn goal(&self) -> u32 {
        self.goal.get()
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    /// Correct plus incorrect answers.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.correct_count.saturating_add(self.incorrect_count)
    }

    /// Correct answers counted toward the next sticker, always below the goal.
    #[must_use]
    pub fn sticker_progress(&self) -> u32 {
        self.sticker_progress
    }

    #[must_use]
    pub fn sticker_total(&self) -> u32 {
        self.sticker_total
    }
}

impl Default for SessionTally {
    fn default() -> Self {
        Self::with_goal(NonZeroU32::new(DEFAULT_STICKER_GOAL).unwrap_or(NonZeroU32::MIN))
    }
}
