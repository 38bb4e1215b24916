use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::{
    AnswerOption, GameNotStartedPage, GameOverPage, GamePage, LanguageContext, Question,
    RenderableMedia, Template, UpdatePayload,
};
use services::{AnswerSubmitter, OnChange};

use crate::registry::PageProps;
use crate::views::{bad_page_data, follow_update, translator};
use crate::vm::{AnswerOptionVm, QuestionVm, format_datetime};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

pub fn GameNotStartedView(props: PageProps) -> Element {
    let mut starting = use_signal(|| false);

    let page = match props.result.page::<GameNotStartedPage>() {
        Ok(page) => page,
        Err(err) => return bad_page_data(&err),
    };
    let i18n = translator(&props.language);
    let heading = i18n.t("The Game");
    let ends_label = i18n.t("Will end on");
    let start_label = i18n.t("Start the game");
    let ends_at = page.ends_at.map(format_datetime);

    let on_change = props.on_change.clone();
    let on_result = props.on_result;
    let on_navigate = props.on_navigate;
    let start = move |_: MouseEvent| {
        if starting() {
            return;
        }
        starting.set(true);
        let on_change = on_change.clone();
        spawn(async move {
            if let Ok(response) = on_change.send(UpdatePayload::start()).await {
                follow_update(response, on_result, on_navigate);
            }
            starting.set(false);
        });
    };

    rsx! {
        div { class: "page game-not-started",
            h2 { "{heading} \"{page.name}\"" }
            if let Some(ends_at) = ends_at {
                p { "{ends_label} {ends_at}" }
            }
            button {
                class: "btn btn-primary btn-lg",
                r#type: "button",
                disabled: starting(),
                onclick: start,
                "{start_label}"
            }
        }
    }
}

pub fn GameView(props: PageProps) -> Element {
    let page = match props.result.page::<GamePage>() {
        Ok(page) => page,
        Err(err) => return bad_page_data(&err),
    };
    let question_id = page.question.id();

    rsx! {
        div { class: "page game",
            h2 { "{page.name}" }
            QuestionCard {
                key: "{question_id}",
                question: page.question,
                on_change: props.on_change.clone(),
                on_navigate: props.on_navigate,
                language: props.language.clone(),
            }
        }
    }
}

/// Shared by the ended and results-pending templates.
pub fn GameOverView(props: PageProps) -> Element {
    let page = match props.result.page::<GameOverPage>() {
        Ok(page) => page,
        Err(err) => return bad_page_data(&err),
    };
    let i18n = translator(&props.language);
    let thanks = i18n.t("Thank you for participating in a game");
    let pending = props.result.template == Template::GameResultsPending;
    let results_label = i18n.t("Results will be published on");
    let results_at = page.results_at.filter(|_| pending).map(format_datetime);
    let score = page.score.filter(|_| !pending);
    let games = props.language.link("/games/");
    let all_games = i18n.t("All games");

    rsx! {
        div { class: "page game-over",
            h2 { "{page.name}" }
            p { class: "lead", "{thanks}" }
            if let Some(results_at) = results_at {
                p { "{results_label} {results_at}" }
            }
            if let Some(score) = score {
                p { class: "score", "{score}" }
            }
            Link { class: "btn btn-secondary", to: games, "{all_games}" }
        }
    }
}

/// One question and its four answers.
///
/// Keyed by question id at the call site: a new id mounts a fresh card, and
/// unmounting drops the view model, cancelling any answer still in flight.
#[component]
fn QuestionCard(
    question: Question,
    on_change: OnChange,
    on_navigate: Callback<String>,
    language: LanguageContext,
) -> Element {
    let i18n = translator(&language);
    let vm = use_signal(|| QuestionVm::new(question.id()));
    let submitter = AnswerSubmitter::new(on_change);

    let select = use_callback(move |option: AnswerOption| {
        let mut vm = vm;
        let Some(pending) = vm.write().select(option, &submitter) else {
            return;
        };
        spawn(async move {
            let outcome = pending.outcome().await;
            vm.write().apply(outcome);
        });
    });
    let next = use_callback(move |()| {
        let target = vm.read().controller().navigate_target().map(str::to_string);
        if let Some(target) = target {
            on_navigate.call(target);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuestionTestHandles>() {
                handles.register(select, next, vm);
            }
        }
    }

    let card = vm.read().card(&question, &i18n);

    rsx! {
        div { class: card.class,
            div { class: "card-body",
                h5 { class: "card-title", "{card.heading}" }
                if let Some(media) = card.media {
                    MediaView { media }
                }
                p { class: "card-text question-text", "{card.text}" }
                div { class: "answers",
                    for option in card.options {
                        AnswerButton { key: "{option.option.position()}", option, on_select: select }
                    }
                }
                if let Some(target) = card.next_target {
                    a {
                        class: "btn btn-primary next-question",
                        href: "{target}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            next.call(());
                        },
                        "{card.next_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn AnswerButton(option: AnswerOptionVm, on_select: Callback<AnswerOption>) -> Element {
    let choice = option.option;
    rsx! {
        button {
            class: "btn {option.class}",
            r#type: "button",
            disabled: option.disabled,
            "data-answer": "{choice.position()}",
            onclick: move |_| on_select.call(choice),
            "{option.label}"
        }
    }
}

#[component]
fn MediaView(media: RenderableMedia) -> Element {
    let src = media.src().to_string();
    match media {
        RenderableMedia::Audio { .. } => rsx! {
            audio { class: "question-media", controls: true, src: "{src}" }
        },
        RenderableMedia::Video { aspect, .. } => {
            let padding = aspect.padding_percent();
            rsx! {
                div {
                    class: "question-media video-box",
                    style: "position: relative; padding-bottom: {padding}%; height: 0;",
                    video {
                        controls: true,
                        src: "{src}",
                        style: "position: absolute; top: 0; left: 0; width: 100%; height: 100%;",
                    }
                }
            }
        }
        RenderableMedia::Photo { .. } => rsx! {
            img { class: "question-media img-fluid", src: "{src}", alt: "" }
        },
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuestionTestHandles {
    select: Rc<RefCell<Option<Callback<AnswerOption>>>>,
    next: Rc<RefCell<Option<Callback<()>>>>,
    vm: Rc<RefCell<Option<Signal<QuestionVm>>>>,
}

#[cfg(test)]
impl QuestionTestHandles {
    pub(crate) fn register(
        &self,
        select: Callback<AnswerOption>,
        next: Callback<()>,
        vm: Signal<QuestionVm>,
    ) {
        *self.select.borrow_mut() = Some(select);
        *self.next.borrow_mut() = Some(next);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn select(&self) -> Callback<AnswerOption> {
        (*self.select.borrow()).expect("question select registered")
    }

    pub(crate) fn next(&self) -> Callback<()> {
        (*self.next.borrow()).expect("question next registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuestionVm> {
        (*self.vm.borrow()).expect("question vm registered")
    }
}
