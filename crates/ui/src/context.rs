use std::sync::Arc;

use services::GameSettings;

pub trait UiApp: Send + Sync {
    fn settings(&self) -> GameSettings;
}

#[derive(Clone)]
pub struct AppContext {
    settings: GameSettings,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
