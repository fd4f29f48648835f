mod mode;
mod pictogram;
mod round;
mod shape;
mod tally;

pub use mode::{GameMode, Topic};
pub use pictogram::{Category, Pictogram};
pub use round::{
    Choice, LETTER_OPTIONS, MAX_COUNT, MAX_OPTIONS, MIN_OPTIONS, NUMBER_OPTIONS,
    ODD_ONE_OUT_ITEMS, Prompt, Round, RoundError,
};
pub use shape::{AccentColor, Shape};
pub use tally::{DEFAULT_STICKER_GOAL, RecordOutcome, SessionTally, TallyError};
