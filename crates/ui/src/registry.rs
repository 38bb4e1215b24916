//! Template name to page renderer.

use std::collections::HashMap;

use dioxus::prelude::*;
use quiz_core::model::{LanguageContext, SessionResult, Template};
use services::OnChange;

use crate::views::{
    GameNotStartedView, GameOverView, GameView, GamesView, HomeView, NotFoundView, WelcomeView,
};

/// What every page receives: the session result, the location's single
/// update channel, ways to replace the shown result or move to another
/// location, and the language.
#[derive(Props, Clone, PartialEq)]
pub struct PageProps {
    pub result: SessionResult,
    pub on_change: OnChange,
    pub on_result: Callback<SessionResult>,
    pub on_navigate: Callback<String>,
    pub language: LanguageContext,
}

pub type PageRenderer = fn(PageProps) -> Element;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Renderer(PageRenderer),
    /// Nothing registered; the page renders empty.
    NoRenderer(&'a Template),
}

#[derive(Clone, Default)]
pub struct PageRegistry {
    renderers: HashMap<Template, PageRenderer>,
}

impl PageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every page this client ships with.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Template::Home, HomeView);
        registry.register(Template::Welcome, WelcomeView);
        registry.register(Template::Games, GamesView);
        registry.register(Template::GameNotStarted, GameNotStartedView);
        registry.register(Template::Game, GameView);
        registry.register(Template::GameEnded, GameOverView);
        registry.register(Template::GameResultsPending, GameOverView);
        registry.register(Template::NotFound, NotFoundView);
        registry
    }

    /// Returns the renderer previously registered for `template`, if any.
    pub fn register(&mut self, template: Template, renderer: PageRenderer) -> Option<PageRenderer> {
        self.renderers.insert(template, renderer)
    }

    #[must_use]
    pub fn resolve<'a>(&self, template: &'a Template) -> Resolution<'a> {
        self.renderers
            .get(template)
            .map_or(Resolution::NoRenderer(template), |renderer| {
                Resolution::Renderer(*renderer)
            })
    }

    #[must_use]
    pub fn templates(&self) -> Vec<&Template> {
        self.renderers.keys().collect()
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry")
            .field("templates", &self.templates())
            .finish()
    }
}

/// Hosts the resolved renderer in its own scope, so hooks of one page never
/// mix with another's. Keyed by template at the call site.
#[component]
pub(crate) fn RegisteredPage(renderer: PageRenderer, page: PageProps) -> Element {
    renderer(page)
}
