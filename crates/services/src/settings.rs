use std::num::NonZeroU32;
use std::time::Duration;

use learner_core::model::DEFAULT_STICKER_GOAL;

use crate::error::SettingsError;

/// Pause between a correct answer and the next round.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(700);
/// How long the content area stays tinted after an answer.
pub const DEFAULT_FLASH_DELAY: Duration = Duration::from_millis(180);
/// Upper bound for either delay; anything longer reads as a hang to a child.
pub const MAX_DELAY: Duration = Duration::from_secs(10);

/// Tunables for a game session.
///
/// `Default` reproduces the classic pacing: a sticker every 5 correct answers,
/// 700 ms before the next round, a 180 ms flash and an unseeded RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    sticker_goal: NonZeroU32,
    advance_delay: Duration,
    flash_delay: Duration,
    seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sticker_goal: NonZeroU32::new(DEFAULT_STICKER_GOAL).unwrap_or(NonZeroU32::MIN),
            advance_delay: DEFAULT_ADVANCE_DELAY,
            flash_delay: DEFAULT_FLASH_DELAY,
            seed: None,
        }
    }
}

impl GameSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroStickerGoal` if `goal` is zero.
    pub fn with_sticker_goal(mut self, goal: u32) -> Result<Self, SettingsError> {
        self.sticker_goal = NonZeroU32::new(goal).ok_or(SettingsError::ZeroStickerGoal)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `SettingsError::DelayOutOfRange` for zero or overly long delays.
    pub fn with_advance_delay(mut self, delay: Duration) -> Result<Self, SettingsError> {
        self.advance_delay = check_delay("advance delay", delay)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `SettingsError::DelayOutOfRange` for zero or overly long delays.
    pub fn with_flash_delay(mut self, delay: Duration) -> Result<Self, SettingsError> {
        self.flash_delay = check_delay("flash delay", delay)?;
        Ok(self)
    }

    /// Seed the round generator so a session replays identically.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn sticker_goal(&self) -> NonZeroU32 {
        self.sticker_goal
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn flash_delay(&self) -> Duration {
        self.flash_delay
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

fn check_delay(name: &'static str, delay: Duration) -> Result<Duration, SettingsError> {
    if delay.is_zero() || delay > MAX_DELAY {
        return Err(SettingsError::DelayOutOfRange {
            name,
            value: delay,
            max: MAX_DELAY,
        });
    }
    Ok(delay)
}
