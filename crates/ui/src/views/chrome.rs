use dioxus::prelude::*;
use services::GameSession;

use super::dispatch::{GameIntent, use_game_dispatcher};
use crate::vm::{map_sticker_bar, score_label};

#[component]
pub fn StickerBar() -> Element {
    let game = use_context::<Signal<GameSession>>();
    let vm = map_sticker_bar(game.read().tally());

    rsx! {
        div { class: "sticker-bar",
            span { class: "sticker-label", "Stickers:" }
            span { class: "sticker-list", "{vm.stickers}" }
            progress {
                class: "sticker-progress",
                max: "{vm.goal}",
                value: "{vm.progress}",
            }
        }
    }
}

#[component]
pub fn StatusLine() -> Element {
    let game = use_context::<Signal<GameSession>>();
    let status = game.read().status();

    rsx! {
        p { class: "status", "{status}" }
    }
}

#[component]
pub fn ScoreFooter() -> Element {
    let game = use_context::<Signal<GameSession>>();
    let dispatch = use_game_dispatcher();
    let label = score_label(game.read().tally());

    rsx! {
        footer { class: "score-footer",
            span { class: "score", "{label}" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| dispatch.call(GameIntent::NewGame),
                "New game"
            }
        }
    }
}
