use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::shell::SessionShell;

/// Every path belongs to the remote router, so the client keeps one
/// catch-all route and resolves the location through `SessionApi`.
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/:..segments", LocationView)]
    Location { segments: Vec<String> },
}

impl Route {
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        let (path, _query) = quiz_core::path::split_query(location);
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Route::Location { segments }
    }

    /// The router-side location, always with a trailing slash.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Route::Location { segments } => location_of(segments),
        }
    }
}

fn location_of(segments: &[String]) -> String {
    let parts: Vec<&str> = segments
        .iter()
        .map(String::as_str)
        .filter(|segment| !segment.is_empty())
        .collect();
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

#[component]
fn LocationView(segments: Vec<String>) -> Element {
    let location = location_of(&segments);
    rsx! {
        SessionShell { key: "{location}", location }
    }
}
