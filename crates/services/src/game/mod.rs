mod feedback;
mod schedule;
mod session;

pub use feedback::{Feedback, Tone, instructions};
pub use schedule::{Fired, ScheduledAction, ScheduledJob, Ticket};
pub use session::{AnswerReport, GameSession, ScreenPhase};
