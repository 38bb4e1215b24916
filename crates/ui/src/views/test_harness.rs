use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Language, LanguageCode, LanguageSettings};
use services::SessionApi;

use crate::context::{UiApp, build_app_context};
use crate::shell::{SessionShell, ShellTestHandles};
use crate::views::game::QuestionTestHandles;

#[derive(Clone)]
struct TestApp {
    api: Arc<dyn SessionApi>,
    languages: LanguageSettings,
}

impl UiApp for TestApp {
    fn session_api(&self) -> Arc<dyn SessionApi> {
        Arc::clone(&self.api)
    }

    fn language_settings(&self) -> LanguageSettings {
        self.languages.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
struct HarnessLocation(String);

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    location: String,
    handles: QuestionTestHandles,
    shell: ShellTestHandles,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellRouterHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| HarnessLocation(props.location.clone()));
    use_context_provider(|| props.handles.clone());
    use_context_provider(|| props.shell.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let location = use_context::<HarnessLocation>();
    rsx! { SessionShell { location: location.0 } }
}

/// Where the harness lands after the shell pushes another location.
#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let path = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("/");
    rsx! { p { class: "harness-elsewhere", "/{path}/" } }
}

pub struct ShellHarness {
    pub dom: VirtualDom,
    pub handles: QuestionTestHandles,
    pub shell: ShellTestHandles,
}

impl ShellHarness {
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

    /// Let spawned resources and submissions finish and re-render.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_languages() -> LanguageSettings {
    LanguageSettings::new(
        vec![
            Language::new("en", "English").expect("en"),
            Language::new("fr", "Français").expect("fr"),
            Language::new("ru", "Русский").expect("ru"),
        ],
        LanguageCode::new("en").expect("default code"),
        false,
    )
    .expect("language settings")
}

pub fn setup_shell_harness(location: &str, api: Arc<dyn SessionApi>) -> ShellHarness {
    let handles = QuestionTestHandles::default();
    let shell = ShellTestHandles::default();
    let app = Arc::new(TestApp {
        api,
        languages: test_languages(),
    });
    let dom = VirtualDom::new_with_props(
        ShellRouterHarness,
        ShellHarnessProps {
            app,
            location: location.to_string(),
            handles: handles.clone(),
            shell: shell.clone(),
        },
    );
    ShellHarness {
        dom,
        handles,
        shell,
    }
}
