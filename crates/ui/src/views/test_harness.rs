use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{GameSession, GameSettings};

use crate::app::GameShell;
use crate::context::{UiApp, build_app_context};
use crate::views::GameIntent;

#[derive(Clone)]
struct TestApp {
    settings: GameSettings,
}

impl UiApp for TestApp {
    fn settings(&self) -> GameSettings {
        self.settings
    }
}

#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    game: Rc<RefCell<Option<Signal<GameSession>>>>,
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
}

impl GameTestHandles {
    pub(crate) fn register(&self, game: Signal<GameSession>, dispatch: Callback<GameIntent>) {
        *self.game.borrow_mut() = Some(game);
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    fn game(&self) -> Signal<GameSession> {
        (*self.game.borrow()).expect("game signal registered")
    }

    fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    handles: GameTestHandles,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { GameShell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: GameTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: GameIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_game<T>(&self, f: impl FnOnce(&GameSession) -> T) -> T {
        let game = self.handles.game();
        self.dom.in_runtime(|| f(&game.peek()))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(settings: GameSettings) -> ViewHarness {
    let handles = GameTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ShellHarness,
        ShellHarnessProps {
            app: Arc::new(TestApp { settings }),
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
