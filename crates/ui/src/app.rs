use dioxus::prelude::*;
use dioxus_router::Router;
use services::GameSession;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::PendingJobs;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Little Learner" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                GameShell {}
            }
        }
    }
}

/// Owns the one game session for the window and the jobs scheduled against it.
#[component]
pub fn GameShell() -> Element {
    let ctx = use_context::<AppContext>();
    use_context_provider(|| Signal::new(GameSession::new(ctx.settings())));
    use_context_provider(PendingJobs::new);

    rsx! { Router::<Route> {} }
}
