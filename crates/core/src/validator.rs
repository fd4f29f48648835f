use crate::model::{Choice, Prompt, Round};

/// Returns true when `selection` answers `round`.
///
/// Odd-one-out selections name a position; the answer is right when the item at
/// that position differs from the repeated item. Every other mode compares the
/// selection with the stored correct answer.
#[must_use]
pub fn validate(round: &Round, selection: Choice) -> bool {
    match (round.prompt(), selection) {
        (Prompt::OddOneOut { items, same }, Choice::Slot(slot)) => {
            items.get(slot).is_some_and(|item| item != same)
        }
        (Prompt::OddOneOut { .. }, _) => false,
        _ => selection == round.correct(),
    }
}
