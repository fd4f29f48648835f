use learner_core::model::{Choice, Prompt, Round, Shape};
use services::game::instructions;

/// What the content area draws for a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageVm {
    Count { pictograms: Vec<&'static str> },
    Letter { letter: String },
    Items { items: Vec<&'static str> },
    Shape { shape: Shape, color: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceButtonVm {
    pub key: String,
    pub label: String,
    pub choice: Choice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundVm {
    pub title: &'static str,
    pub stage: StageVm,
    pub buttons: Vec<ChoiceButtonVm>,
}

#[must_use]
pub fn map_round(round: &Round) -> RoundVm {
    let stage = match round.prompt() {
        Prompt::Count { pictograms } => StageVm::Count {
            pictograms: pictograms.iter().map(|p| p.as_str()).collect(),
        },
        Prompt::Letter { target } => StageVm::Letter {
            letter: target.to_string(),
        },
        Prompt::OddOneOut { items, .. } => StageVm::Items {
            items: items.iter().map(|p| p.as_str()).collect(),
        },
        Prompt::Shape { shape, accent } => StageVm::Shape {
            shape: *shape,
            color: accent.hex(),
        },
    };

    let buttons = round
        .options()
        .iter()
        .enumerate()
        .map(|(index, choice)| ChoiceButtonVm {
            key: format!("{index}-{choice}"),
            label: choice.to_string(),
            choice: *choice,
        })
        .collect();

    RoundVm {
        title: instructions(round.mode()),
        stage,
        buttons,
    }
}
