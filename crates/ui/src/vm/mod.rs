mod round_vm;
mod tally_vm;

pub use round_vm::{ChoiceButtonVm, RoundVm, StageVm, map_round};
pub use tally_vm::{StickerBarVm, flash_class, map_sticker_bar, score_label, tone_class};
