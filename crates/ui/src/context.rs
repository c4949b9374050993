use std::sync::Arc;

use dioxus::prelude::*;
use humeur_core::SessionState;
use services::QuestionnaireService;

pub trait UiApp: Send + Sync {
    fn questionnaires(&self) -> Arc<QuestionnaireService>;

    /// Classifier model identifier, shown on the About page.
    fn model_name(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    questionnaires: Arc<QuestionnaireService>,
    model_name: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questionnaires: app.questionnaires(),
            model_name: app.model_name(),
        }
    }

    #[must_use]
    pub fn questionnaires(&self) -> Arc<QuestionnaireService> {
        Arc::clone(&self.questionnaires)
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Owned session state for one window, shared by the views through context.
///
/// Created inside the window's root scope; the signal lives as long as the window.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    state: Signal<SessionState>,
}

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(SessionState::new())
    }

    #[must_use]
    pub fn with_state(state: SessionState) -> Self {
        Self {
            state: Signal::new(state),
        }
    }

    #[must_use]
    pub fn state(&self) -> Signal<SessionState> {
        self.state
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}
