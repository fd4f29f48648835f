use std::fmt;

use thiserror::Error;

use crate::model::{AccentColor, GameMode, Pictogram, Shape};

/// Largest count a numbers round asks for.
pub const MAX_COUNT: u8 = 5;
/// Option count offered by numbers rounds.
pub const NUMBER_OPTIONS: usize = 4;
/// Option count offered by letters rounds.
pub const LETTER_OPTIONS: usize = 4;
/// Items laid out in an odd-one-out round.
pub const ODD_ONE_OUT_ITEMS: usize = 4;
pub const MIN_OPTIONS: usize = 3;
pub const MAX_OPTIONS: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("a round offers 3 to 4 options, got {0}")]
    OptionCount(usize),

    #[error("option {0} appears more than once")]
    DuplicateOption(Choice),

    #[error("{choice} is not a valid option for {mode} rounds")]
    ChoiceMismatch { mode: GameMode, choice: Choice },

    #[error("correct answer {0} is not among the options")]
    MissingCorrect(Choice),

    #[error("correct answer {0} does not match what is shown")]
    AnswerMismatch(Choice),

    #[error("odd-one-out rounds need exactly one item that differs from the rest")]
    NoSingleOddItem,
}

//
// ─── CHOICE ────────────────────────────────────────────────────────────────────
//

/// One selectable answer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Number(u8),
    Letter(char),
    /// Zero-based position of an item in an odd-one-out row.
    Slot(usize),
    Shape(Shape),
}

impl Choice {
    fn fits(self, mode: GameMode) -> bool {
        match (mode, self) {
            (GameMode::Numbers, Choice::Number(n)) => (1..=MAX_COUNT).contains(&n),
            (GameMode::Letters, Choice::Letter(ch)) => ch.is_ascii_uppercase(),
            (GameMode::OddOneOut, Choice::Slot(slot)) => slot < ODD_ONE_OUT_ITEMS,
            (GameMode::ShapeMatch, Choice::Shape(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Number(n) => write!(f, "{n}"),
            Choice::Letter(ch) => write!(f, "{ch}"),
            // Buttons are numbered from 1 for the child.
            Choice::Slot(slot) => write!(f, "{}", slot + 1),
            Choice::Shape(shape) => write!(f, "{shape}"),
        }
    }
}

//
// ─── PROMPT ────────────────────────────────────────────────────────────────────
//

/// What the round shows above the answer buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Pictograms to count; the count is the answer.
    Count { pictograms: Vec<Pictogram> },
    /// The letter to find.
    Letter { target: char },
    /// A row of items where all but one equal `same`.
    OddOneOut {
        items: [Pictogram; ODD_ONE_OUT_ITEMS],
        same: Pictogram,
    },
    /// A filled figure to name.
    Shape { shape: Shape, accent: AccentColor },
}

impl Prompt {
    #[must_use]
    pub fn mode(&self) -> GameMode {
        match self {
            Prompt::Count { .. } => GameMode::Numbers,
            Prompt::Letter { .. } => GameMode::Letters,
            Prompt::OddOneOut { .. } => GameMode::OddOneOut,
            Prompt::Shape { .. } => GameMode::ShapeMatch,
        }
    }
}

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// A single question: what is shown, the buttons offered, and the right one.
///
/// Options never repeat and always hold the correct answer exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    prompt: Prompt,
    options: Vec<Choice>,
    correct: Choice,
}

impl Round {
    /// Builds a round after checking it is answerable.
    ///
    /// # Errors
    ///
    /// Returns `RoundError` when the options are out of range, repeat, do not suit
    /// the prompt's mode, or when `correct` is missing or contradicts the prompt.
    pub fn new(prompt: Prompt, options: Vec<Choice>, correct: Choice) -> Result<Self, RoundError> {
        check(&prompt, &options, correct)?;
        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    /// Used by the generator, whose rounds satisfy `check` by construction.
    pub(crate) fn assemble(prompt: Prompt, options: Vec<Choice>, correct: Choice) -> Self {
        debug_assert_eq!(check(&prompt, &options, correct), Ok(()));
        Self {
            prompt,
            options,
            correct,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.prompt.mode()
    }

    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[Choice] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> Choice {
        self.correct
    }

    /// See [`crate::validate`].
    #[must_use]
    pub fn is_correct(&self, selection: Choice) -> bool {
        crate::validator::validate(self, selection)
    }
}

fn check(prompt: &Prompt, options: &[Choice], correct: Choice) -> Result<(), RoundError> {
    let mode = prompt.mode();

    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
        return Err(RoundError::OptionCount(options.len()));
    }

    for (index, option) in options.iter().enumerate() {
        if !option.fits(mode) {
            return Err(RoundError::ChoiceMismatch {
                mode,
                choice: *option,
            });
        }
        if options[..index].contains(option) {
            return Err(RoundError::DuplicateOption(*option));
        }
    }

    if !options.contains(&correct) {
        return Err(RoundError::MissingCorrect(correct));
    }

    let consistent = match prompt {
        Prompt::Count { pictograms } => {
            u8::try_from(pictograms.len()).is_ok_and(|count| correct == Choice::Number(count))
        }
        Prompt::Letter { target } => correct == Choice::Letter(*target),
        Prompt::OddOneOut { items, same } => {
            let mut odd = items
                .iter()
                .enumerate()
                .filter(|(_, item)| *item != same)
                .map(|(slot, _)| slot);
            let (Some(slot), None) = (odd.next(), odd.next()) else {
                return Err(RoundError::NoSingleOddItem);
            };
            options.len() == ODD_ONE_OUT_ITEMS && correct == Choice::Slot(slot)
        }
        Prompt::Shape { shape, .. } => correct == Choice::Shape(*shape),
    };

    if consistent {
        Ok(())
    } else {
        Err(RoundError::AnswerMismatch(correct))
    }
}
