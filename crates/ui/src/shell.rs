use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::Translator;
use quiz_core::model::{Chrome, LanguageContext, SessionResult};
use services::OnChange;

use crate::context::AppContext;
use crate::registry::{PageProps, RegisteredPage, Resolution};
use crate::routes::Route;
use crate::views::{ErrorNotice, ViewError, ViewState, view_state_from_resource};

const BRAND: &str = "Trivia";

/// Chrome plus the page the router picked for `location`.
///
/// Mounted once per location. The session result is fetched again on every
/// navigation, including one that targets the location already shown, and
/// pages may replace it through `on_result`.
#[component]
pub fn SessionShell(location: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let language = ctx.language_for(&location);
    let on_change = OnChange::new(ctx.session_api(), location.clone());

    let mut replaced = use_signal(|| None::<SessionResult>);
    let mut visits = use_signal(|| 0_u64);
    let on_result = use_callback(move |result: SessionResult| {
        tracing::debug!(template = %result.template, "applying session result from update");
        replaced.set(Some(result));
    });

    let on_navigate = {
        let location = location.clone();
        use_callback(move |target: String| {
            if Route::from_location(&target).location() == location {
                tracing::debug!(%target, "reloading current location");
                replaced.set(None);
                *visits.write() += 1;
                return;
            }
            tracing::debug!(%target, "navigating");
            if let Some(failure) = navigator.push(target.clone()) {
                tracing::warn!(%target, ?failure, "navigation failed");
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ShellTestHandles>() {
                handles.register(on_result, on_navigate);
            }
        }
    }

    let resource = {
        let api = ctx.session_api();
        let location = location.clone();
        use_resource(move || {
            let visit = visits();
            let api = api.clone();
            let location = location.clone();
            async move {
                tracing::debug!(%location, visit, "resolving location");
                api.resolve(&location).await.map_err(|err| {
                    tracing::warn!(%location, error = %err, "failed to resolve location");
                    ViewError::Unavailable
                })
            }
        })
    };

    let state = match replaced() {
        Some(result) => ViewState::Ready(result),
        None => view_state_from_resource(&resource),
    };
    let chrome = match &state {
        ViewState::Ready(result) => result.chrome(),
        _ => Chrome::default(),
    };
    let title = chrome.title.clone().unwrap_or_else(|| BRAND.to_string());

    rsx! {
        document::Title { "{title}" }
        Navbar { chrome, language: language.clone(), location: location.clone() }
        main { class: "container",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(error) => rsx! {
                    ErrorNotice { error }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(result) => rsx! {
                    PageOutlet { result, on_change, on_result, on_navigate, language }
                },
            }
        }
    }
}

#[component]
fn PageOutlet(
    result: SessionResult,
    on_change: OnChange,
    on_result: Callback<SessionResult>,
    on_navigate: Callback<String>,
    language: LanguageContext,
) -> Element {
    let ctx = use_context::<AppContext>();
    let renderer = match ctx.registry().resolve(&result.template) {
        Resolution::Renderer(renderer) => renderer,
        Resolution::NoRenderer(template) => {
            tracing::warn!(%template, "no page registered for template");
            return rsx! {};
        }
    };
    let key = result.template.to_string();

    rsx! {
        RegisteredPage {
            key: "{key}",
            renderer,
            page: PageProps { result, on_change, on_result, on_navigate, language },
        }
    }
}

fn switcher_class(active: bool) -> &'static str {
    if active {
        "dropdown-item active"
    } else {
        "dropdown-item"
    }
}

#[component]
fn Navbar(chrome: Chrome, language: LanguageContext, location: String) -> Element {
    let i18n = Translator::new(language.current().code.clone());
    let home = language.link("/");
    let games = language.link("/games/");
    let all_games = i18n.t("All games");
    let logout = i18n.t("Logout");
    let current = language.current().name.clone();
    let switcher = language.switcher(&location);

    rsx! {
        nav { class: "navbar",
            Link { class: "navbar-brand", to: home, "{BRAND}" }
            Link { class: "nav-link", to: games, "{all_games}" }
            div { class: "navbar-end",
                if let Some(name) = chrome.player_name {
                    span { class: "navbar-text player-name", "{name}" }
                }
                if let Some(url) = chrome.logout_url {
                    Link { class: "nav-link", to: url, "{logout}" }
                }
                details { class: "dropdown language-switcher",
                    summary { "{current}" }
                    ul { class: "dropdown-menu",
                        for link in switcher {
                            li { key: "{link.code}",
                                Link {
                                    class: switcher_class(link.active),
                                    to: link.href.clone(),
                                    "{link.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ShellTestHandles {
    on_result: std::rc::Rc<std::cell::RefCell<Option<Callback<SessionResult>>>>,
    on_navigate: std::rc::Rc<std::cell::RefCell<Option<Callback<String>>>>,
}

#[cfg(test)]
impl ShellTestHandles {
    fn register(&self, on_result: Callback<SessionResult>, on_navigate: Callback<String>) {
        *self.on_result.borrow_mut() = Some(on_result);
        *self.on_navigate.borrow_mut() = Some(on_navigate);
    }

    pub(crate) fn on_result(&self) -> Callback<SessionResult> {
        (*self.on_result.borrow()).expect("shell on_result registered")
    }

    pub(crate) fn on_navigate(&self) -> Callback<String> {
        (*self.on_navigate.borrow()).expect("shell on_navigate registered")
    }
}
