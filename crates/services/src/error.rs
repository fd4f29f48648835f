//! Shared error types for the services crate.

use std::time::Duration;

use thiserror::Error;

/// Errors emitted while building `GameSettings`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("sticker goal must be > 0")]
    ZeroStickerGoal,
    #[error("{name} must be between 1 ms and {max:?}, got {value:?}")]
    DelayOutOfRange {
        name: &'static str,
        value: Duration,
        max: Duration,
    },
}
