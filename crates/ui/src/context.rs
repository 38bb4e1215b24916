use std::sync::Arc;

use quiz_core::model::{LanguageContext, LanguageSettings};
use services::SessionApi;

use crate::registry::PageRegistry;

pub trait UiApp: Send + Sync {
    fn session_api(&self) -> Arc<dyn SessionApi>;
    fn language_settings(&self) -> LanguageSettings;

    /// Pages known to this client. Hosts may extend the standard set.
    fn page_registry(&self) -> PageRegistry {
        PageRegistry::standard()
    }
}

#[derive(Clone)]
pub struct AppContext {
    session_api: Arc<dyn SessionApi>,
    languages: Arc<LanguageSettings>,
    registry: Arc<PageRegistry>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_api: app.session_api(),
            languages: Arc::new(app.language_settings()),
            registry: Arc::new(app.page_registry()),
        }
    }

    #[must_use]
    pub fn session_api(&self) -> Arc<dyn SessionApi> {
        Arc::clone(&self.session_api)
    }

    #[must_use]
    pub fn languages(&self) -> &LanguageSettings {
        &self.languages
    }

    /// Language state for one location, rebuilt on every navigation.
    #[must_use]
    pub fn language_for(&self, location: &str) -> LanguageContext {
        self.languages.detect(location)
    }

    #[must_use]
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }
}

// Provided by the composition root (`crates/app`) before the first render.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
