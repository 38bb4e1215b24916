mod game;
mod games;
mod home;
mod not_found;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

use dioxus::prelude::*;
use quiz_core::Translator;
use quiz_core::model::{LanguageContext, PageDataError, SessionResult, UpdateResponse};

pub use game::{GameNotStartedView, GameOverView, GameView};
pub use games::GamesView;
pub use home::HomeView;
pub use not_found::NotFoundView;
pub use state::{ErrorNotice, ViewError, ViewState, view_state_from_resource};
pub use welcome::WelcomeView;

pub(crate) fn translator(language: &LanguageContext) -> Translator {
    Translator::new(language.current().code.clone())
}

/// Apply what an update sent back: a fresh result replaces the page, a
/// target is handed to the shell.
pub(crate) fn follow_update(
    response: UpdateResponse,
    on_result: Callback<SessionResult>,
    on_navigate: Callback<String>,
) {
    if let Some(result) = response.result {
        on_result.call(result);
    }
    if let Some(target) = response.navigate_to {
        on_navigate.call(target);
    }
}

pub(crate) fn bad_page_data(err: &PageDataError) -> Element {
    tracing::warn!(error = %err, "page data does not match its template");
    rsx! {
        ErrorNotice { error: ViewError::BadPageData }
    }
}
