#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod settings;

pub use error::SettingsError;
pub use game::{
    AnswerReport, Feedback, Fired, GameSession, ScheduledAction, ScheduledJob, ScreenPhase, Ticket,
    Tone,
};
pub use settings::GameSettings;
