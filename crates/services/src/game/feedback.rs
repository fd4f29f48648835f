use learner_core::model::{GameMode, Topic};

/// Color family of a feedback message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
}

/// Text shown under the answer buttons after a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub text: &'static str,
    pub tone: Tone,
}

impl Feedback {
    #[must_use]
    pub fn for_answer(mode: GameMode, correct: bool) -> Self {
        let text = match (mode, correct) {
            (GameMode::Numbers, true) => "Right! 🎉",
            (GameMode::Numbers, false) => "Oh, try again! 🙂",
            (GameMode::Letters, true) => "Super! 🎈",
            (GameMode::Letters, false) => "Not quite, once more! 😊",
            (GameMode::OddOneOut, true) => "Right! That one is different. 🎉",
            (GameMode::OddOneOut, false) => "Not quite, look for the other picture! 🙂",
            (GameMode::ShapeMatch, true) => "Exactly right! 💡",
            (GameMode::ShapeMatch, false) => "Look closely, once more! 👀",
        };
        let tone = if correct { Tone::Success } else { Tone::Warning };
        Self { text, tone }
    }
}

/// Title shown above a round.
#[must_use]
pub fn instructions(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Numbers => "Count the things and pick the right number!",
        GameMode::Letters => "Find the right letter!",
        GameMode::OddOneOut => "Which one doesn't belong?",
        GameMode::ShapeMatch => "Which shape is it?",
    }
}

pub(crate) const PRAISE: [&str; 4] = ["Well done! 👍", "Super! 😊", "Great! 💫", "Brilliant! 👏"];

pub(crate) const ENCOURAGEMENT: [&str; 2] = ["Almost! Try again. 🙂", "No problem, once more! 💪"];

pub(crate) const STICKER_EARNED: &str = "🎉 Super! You earned a sticker! 🌟";

pub(crate) const NEW_GAME: &str = "New game, have fun! 😄";

pub(crate) fn greeting(topic: Topic) -> &'static str {
    match topic {
        Topic::Numbers => "🔢 Numbers: count and pick!",
        Topic::Letters => "🔤 Letters: find the right letter!",
        Topic::Logic => "🧠 Logic: what fits?",
    }
}

pub(crate) fn mix_announcement(topic: Topic) -> &'static str {
    match topic {
        Topic::Numbers => "🔀 Mix → numbers round!",
        Topic::Letters => "🔀 Mix → letters round!",
        Topic::Logic => "🔀 Mix → logic round!",
    }
}
