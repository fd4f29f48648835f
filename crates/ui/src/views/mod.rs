mod chrome;
mod dispatch;
mod game;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chrome::{ScoreFooter, StatusLine, StickerBar};
pub use dispatch::{GameIntent, PendingJobs, use_game_dispatcher};
pub use game::{LettersView, LogicView, NumbersView};
