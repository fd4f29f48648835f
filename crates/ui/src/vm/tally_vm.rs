use learner_core::model::SessionTally;
use services::Tone;

const STICKER: &str = "🌟";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickerBarVm {
    pub stickers: String,
    pub progress: u32,
    pub goal: u32,
}

#[must_use]
pub fn map_sticker_bar(tally: &SessionTally) -> StickerBarVm {
    let count = usize::try_from(tally.sticker_total()).unwrap_or(usize::MAX);
    StickerBarVm {
        stickers: STICKER.repeat(count),
        progress: tally.sticker_progress(),
        goal: tally.goal(),
    }
}

#[must_use]
pub fn score_label(tally: &SessionTally) -> String {
    format!(
        "Correct: {}   |   Attempts: {}",
        tally.correct_count(),
        tally.attempts()
    )
}

#[must_use]
pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "tone-success",
        Tone::Warning => "tone-warning",
    }
}

/// Class for the content card; tinted while a flash is active.
#[must_use]
pub fn flash_class(flash: Option<Tone>) -> &'static str {
    match flash {
        Some(Tone::Success) => "stage flash-success",
        Some(Tone::Warning) => "stage flash-warning",
        None => "stage",
    }
}
