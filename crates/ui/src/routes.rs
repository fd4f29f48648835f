use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator};
use learner_core::model::Topic;
use services::GameSession;

use crate::views::{
    GameIntent, LettersView, LogicView, NumbersView, ScoreFooter, StatusLine, StickerBar,
    use_game_dispatcher,
};

#[cfg(test)]
use crate::views::test_harness::GameTestHandles;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", NumbersView)] Numbers {},
        #[route("/letters", LettersView)] Letters {},
        #[route("/logic", LogicView)] Logic {},
}

impl From<Topic> for Route {
    fn from(topic: Topic) -> Self {
        match topic {
            Topic::Numbers => Route::Numbers {},
            Topic::Letters => Route::Letters {},
            Topic::Logic => Route::Logic {},
        }
    }
}

#[component]
fn Layout() -> Element {
    #[cfg(test)]
    {
        let game = use_context::<Signal<GameSession>>();
        let dispatch = use_game_dispatcher();
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(game, dispatch);
            }
        }
    }

    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "🎮 Little Learner" }
                StickerBar {}
            }
            TopicNav {}
            StatusLine {}
            main { class: "content",
                Outlet::<Route> {}
            }
            ScoreFooter {}
        }
    }
}

#[component]
fn TopicNav() -> Element {
    let game = use_context::<Signal<GameSession>>();
    let navigator = use_navigator();
    let dispatch = use_game_dispatcher();

    let topic_buttons = Topic::ALL.into_iter().map(|topic| {
        let label = topic.label();
        rsx! {
            button {
                key: "{label}",
                class: "btn btn-primary nav-topic",
                r#type: "button",
                onclick: move |_| {
                    dispatch.call(GameIntent::ShowTopic(topic));
                    let _ = navigator.push(Route::from(topic));
                },
                "{label}"
            }
        }
    });

    rsx! {
        nav { class: "topic-nav",
            {topic_buttons}
            button {
                class: "btn nav-mix",
                r#type: "button",
                onclick: move |_| {
                    dispatch.call(GameIntent::Mix);
                    let topic = game.peek().topic();
                    let _ = navigator.push(Route::from(topic));
                },
                "🔀 Mix"
            }
        }
    }
}
