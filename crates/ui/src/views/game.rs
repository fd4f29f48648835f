use dioxus::prelude::*;
use learner_core::model::{Shape, Topic};
use services::GameSession;

use super::dispatch::{GameIntent, use_game_dispatcher};
use crate::vm::{StageVm, flash_class, map_round, tone_class};

#[component]
pub fn NumbersView() -> Element {
    rsx! { GameScreen { topic: Topic::Numbers } }
}

#[component]
pub fn LettersView() -> Element {
    rsx! { GameScreen { topic: Topic::Letters } }
}

#[component]
pub fn LogicView() -> Element {
    rsx! { GameScreen { topic: Topic::Logic } }
}

#[component]
fn GameScreen(topic: Topic) -> Element {
    let game = use_context::<Signal<GameSession>>();
    let dispatch = use_game_dispatcher();

    // Entering by URL (rather than the nav bar) still needs a round for this topic.
    use_effect(move || {
        if game.peek().topic() != topic {
            dispatch.call(GameIntent::ShowTopic(topic));
        }
    });

    let session = game.read();
    let vm = map_round(session.round());
    let feedback = session
        .feedback()
        .map(|feedback| (feedback.text, tone_class(feedback.tone)));
    let stage_class = flash_class(session.flash());
    drop(session);

    let stage = match vm.stage {
        StageVm::Count { pictograms } => rsx! {
            div { class: "stage-row",
                for (index, pictogram) in pictograms.into_iter().enumerate() {
                    span { key: "{index}", class: "pictogram", "{pictogram}" }
                }
            }
        },
        StageVm::Letter { letter } => rsx! {
            span { class: "stage-letter", "{letter}" }
        },
        StageVm::Items { items } => rsx! {
            div { class: "stage-row",
                for (index, item) in items.into_iter().enumerate() {
                    span { key: "{index}", class: "pictogram pictogram--large", "{item}" }
                }
            }
        },
        StageVm::Shape { shape, color } => rsx! {
            svg {
                class: "stage-shape",
                view_box: "0 0 240 240",
                width: "240",
                height: "240",
                {match shape {
                    Shape::Circle => rsx! {
                        circle { cx: "120", cy: "120", r: "120", fill: "{color}" }
                    },
                    Shape::Square => rsx! {
                        rect { x: "0", y: "0", width: "240", height: "240", fill: "{color}" }
                    },
                    Shape::Triangle => rsx! {
                        polygon { points: "120,0 0,240 240,240", fill: "{color}" }
                    },
                }}
            }
        },
    };

    let buttons = vm.buttons.into_iter().map(|button| {
        let choice = button.choice;
        rsx! {
            button {
                key: "{button.key}",
                class: "btn btn-primary choice",
                r#type: "button",
                onclick: move |_| dispatch.call(GameIntent::Select(choice)),
                "{button.label}"
            }
        }
    });

    rsx! {
        div { class: "page game-page",
            h2 { class: "round-title", "{vm.title}" }
            div { class: "{stage_class}", {stage} }
            div { class: "choice-row", {buttons} }
            if let Some((text, tone)) = feedback {
                p { class: "feedback {tone}", "{text}" }
            }
        }
    }
}
