use std::sync::Arc;

use async_trait::async_trait;
use dioxus::prelude::*;
use futures::channel::oneshot;
use quiz_core::model::{
    AnswerOption, AnswerPhase, AnswerSubmission, QuestionId, SessionResult, Template,
    UpdatePayload, UpdateResponse,
};
use serde_json::json;
use services::{ApiError, InMemorySessionApi, ScriptedReply, SessionApi, SentUpdate};

use super::test_harness::setup_shell_harness;

fn question(pk: u64) -> serde_json::Value {
    json!({
        "pk": pk,
        "index": 1,
        "total": 5,
        "text": "2+2=?",
        "answer1": "3",
        "answer2": "4",
        "answer3": "5",
        "answer4": "6",
    })
}

fn game_result() -> SessionResult {
    game_with(question(7))
}

fn game_with(question: serde_json::Value) -> SessionResult {
    SessionResult::new(Template::Game)
        .with_field("uuid", "abc")
        .with_field("name", "Spring cup")
        .with_field("question", question)
}

fn following_question() -> serde_json::Value {
    let mut next = question(8);
    next["index"] = json!(2);
    next["text"] = json!("3+3=?");
    next
}

#[tokio::test(flavor = "current_thread")]
async fn shell_renders_chrome_around_home_page() {
    let api = InMemorySessionApi::new();
    api.insert_result(
        "/",
        SessionResult::new(Template::Home)
            .with_field("name", "Ann")
            .with_field("player_name", "Ann")
            .with_field("logout_url", "/logout/"),
    )
    .unwrap();

    let mut harness = setup_shell_harness("/", Arc::new(api));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Hello, Ann"), "missing greeting in {html}");
    assert!(html.contains("All games"), "missing games link in {html}");
    assert!(html.contains("player-name"), "missing player name in {html}");
    assert!(html.contains("/logout/"), "missing logout link in {html}");
    assert!(html.contains("/fr/"), "missing french switch in {html}");
    assert!(html.contains("/ru/"), "missing russian switch in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn language_prefix_translates_chrome_and_links() {
    let api = InMemorySessionApi::new();
    api.insert_result(
        "/ru/games/",
        SessionResult::new(Template::Games).with_field(
            "games",
            json!([{ "uuid": "abc", "name": "Spring cup", "status": "not_started" }]),
        ),
    )
    .unwrap();

    let mut harness = setup_shell_harness("/ru/games/", Arc::new(api));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Все игры"), "missing translated link in {html}");
    assert!(html.contains("Никогда"), "missing never label in {html}");
    assert!(html.contains("/ru/game/abc/"), "missing prefixed row link in {html}");
    assert!(html.contains("Spring cup"), "missing game name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_template_renders_only_chrome() {
    let api = InMemorySessionApi::new();
    api.insert_result(
        "/hall/",
        SessionResult::new(Template::from_name("Leaderboard")).with_field("name", "x"),
    )
    .unwrap();

    let mut harness = setup_shell_harness("/hall/", Arc::new(api));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("All games"), "missing chrome in {html}");
    assert!(!html.contains("class=\"page"), "unexpected page in {html}");
    assert!(!html.contains("Something went wrong"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_location_renders_not_found() {
    let mut harness = setup_shell_harness("/nowhere/", Arc::new(InMemorySessionApi::new()));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Page not found"), "missing title in {html}");
    assert!(html.contains("Visit Home"), "missing home link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn mismatched_page_data_shows_error() {
    let api = InMemorySessionApi::new();
    api.insert_result("/game/abc/", SessionResult::new(Template::Game))
        .unwrap();

    let mut harness = setup_shell_harness("/game/abc/", Arc::new(api));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}

struct UnreachableApi;

#[async_trait]
impl SessionApi for UnreachableApi {
    async fn resolve(&self, location: &str) -> Result<SessionResult, ApiError> {
        Err(ApiError::Unavailable(location.to_string()))
    }

    async fn on_change(
        &self,
        location: &str,
        _payload: &UpdatePayload,
    ) -> Result<UpdateResponse, ApiError> {
        Err(ApiError::Unavailable(location.to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_resolve_shows_error_state() {
    let mut harness = setup_shell_harness("/", Arc::new(UnreachableApi));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn photo_question_renders_image_and_missing_audio_is_skipped() {
    let api = InMemorySessionApi::new();
    let mut photo = question(3);
    photo["question_type"] = json!("photo");
    photo["photo_file"] = json!("/media/cat.jpg");
    api.insert_result(
        "/game/abc/",
        SessionResult::new(Template::Game)
            .with_field("uuid", "abc")
            .with_field("name", "Spring cup")
            .with_field("question", photo),
    )
    .unwrap();
    let mut audio = question(4);
    audio["question_type"] = json!("audio");
    api.insert_result(
        "/game/xyz/",
        SessionResult::new(Template::Game)
            .with_field("uuid", "xyz")
            .with_field("name", "Autumn cup")
            .with_field("question", audio),
    )
    .unwrap();
    let api: Arc<dyn SessionApi> = Arc::new(api);

    let mut harness = setup_shell_harness("/game/abc/", Arc::clone(&api));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("/media/cat.jpg"), "missing photo in {html}");

    let mut harness = setup_shell_harness("/game/xyz/", api);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("2+2=?"), "question hidden by missing media in {html}");
    assert!(!html.contains("<audio"), "unexpected audio in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_a_question_end_to_end() {
    let api = InMemorySessionApi::new();
    api.insert_result("/game/abc/", game_result()).unwrap();
    api.push_reply(
        "/game/abc/",
        ScriptedReply::Respond(UpdateResponse {
            correct_answer: Some(AnswerOption::Second),
            ..UpdateResponse::default()
        }),
    )
    .unwrap();

    let mut harness = setup_shell_harness("/game/abc/", Arc::new(api.clone()));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 1 / 5"), "missing heading in {html}");
    assert!(html.contains("2+2=?"), "missing question in {html}");
    assert_eq!(html.matches("data-answer").count(), 4, "expected four answers in {html}");

    let handles = harness.handles.clone();
    harness
        .dom
        .in_runtime(|| handles.select().call(AnswerOption::Second));
    harness.settle().await;

    assert_eq!(
        api.sent().unwrap(),
        vec![SentUpdate {
            location: "/game/abc/".into(),
            payload: UpdatePayload::Answer(AnswerSubmission {
                question_id: QuestionId::new(7),
                answer: AnswerOption::Second,
            }),
        }]
    );

    let (phase, correct, disabled, next) = harness.dom.in_runtime(|| {
        let vm = handles.vm();
        let vm = vm.read();
        let controller = vm.controller();
        (
            controller.phase(),
            controller.correct_answer(),
            controller.buttons_disabled(),
            controller.navigate_target().map(str::to_string),
        )
    });
    assert_eq!(phase, AnswerPhase::Resolved);
    assert_eq!(correct, Some(AnswerOption::Second));
    assert!(disabled);
    assert_eq!(next, None);

    let html = harness.render();
    assert!(html.contains("answer correct"), "missing reveal in {html}");
    assert!(!html.contains("next-question"), "unexpected next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn second_click_while_waiting_sends_nothing() {
    let api = InMemorySessionApi::new();
    api.insert_result("/game/abc/", game_result()).unwrap();
    api.push_reply("/game/abc/", ScriptedReply::Hang).unwrap();

    let mut harness = setup_shell_harness("/game/abc/", Arc::new(api.clone()));
    harness.rebuild();
    harness.settle().await;

    let handles = harness.handles.clone();
    harness
        .dom
        .in_runtime(|| handles.select().call(AnswerOption::Second));
    harness.settle().await;
    harness
        .dom
        .in_runtime(|| handles.select().call(AnswerOption::Third));
    harness.settle().await;

    assert_eq!(api.sent().unwrap().len(), 1);
    let html = harness.render();
    assert!(html.contains("answer selected"), "missing selection in {html}");
    assert!(!html.contains("answer correct"), "unexpected reveal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn next_question_link_targets_reply_and_leaves_for_it() {
    let api = InMemorySessionApi::new();
    api.insert_result("/game/abc/", game_result()).unwrap();
    api.push_reply(
        "/game/abc/",
        ScriptedReply::Respond(UpdateResponse {
            navigate_to: Some("/game/42/q/2/".into()),
            ..UpdateResponse::default()
        }),
    )
    .unwrap();

    let mut harness = setup_shell_harness("/game/abc/", Arc::new(api));
    harness.rebuild();
    harness.settle().await;

    let handles = harness.handles.clone();
    harness
        .dom
        .in_runtime(|| handles.select().call(AnswerOption::Fourth));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("next-question"), "missing next button in {html}");
    assert!(
        html.contains("href=\"/game/42/q/2/\""),
        "next button does not target the reply in {html}"
    );

    harness.dom.in_runtime(|| handles.next().call(()));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("harness-elsewhere"), "router did not move in {html}");
    assert!(html.contains("/game/42/q/2/"), "wrong destination in {html}");
    assert!(!html.contains("2+2=?"), "old question still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn next_to_the_same_location_loads_the_following_question() {
    let api = InMemorySessionApi::new();
    api.insert_result("/game/abc/", game_result()).unwrap();
    api.push_reply(
        "/game/abc/",
        ScriptedReply::Respond(UpdateResponse {
            correct_answer: Some(AnswerOption::Second),
            navigate_to: Some("/game/abc/".into()),
            ..UpdateResponse::default()
        }),
    )
    .unwrap();

    let mut harness = setup_shell_harness("/game/abc/", Arc::new(api.clone()));
    harness.rebuild();
    harness.settle().await;

    let handles = harness.handles.clone();
    harness
        .dom
        .in_runtime(|| handles.select().call(AnswerOption::Second));
    harness.settle().await;
    assert!(harness.render().contains("answer correct"));

    api.insert_result("/game/abc/", game_with(following_question()))
        .unwrap();
    harness.dom.in_runtime(|| handles.next().call(()));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("3+3=?"), "following question missing in {html}");
    assert!(html.contains("Question 2 / 5"), "stale heading in {html}");
    assert!(!html.contains("2+2=?"), "old question still shown in {html}");
    assert!(!html.contains("answer correct"), "stale reveal in {html}");

    let (question_id, phase) = harness.dom.in_runtime(|| {
        let vm = handles.vm();
        let vm = vm.read();
        (vm.question_id(), vm.controller().phase())
    });
    assert_eq!(question_id, QuestionId::new(8));
    assert_eq!(phase, AnswerPhase::AwaitingSelection);
}

#[tokio::test(flavor = "current_thread")]
async fn new_question_while_answer_pending_starts_fresh() {
    let api = InMemorySessionApi::new();
    api.insert_result("/game/abc/", game_result()).unwrap();
    let (sender, receiver) = oneshot::channel();
    api.push_reply("/game/abc/", ScriptedReply::Deferred(receiver))
        .unwrap();

    let mut harness = setup_shell_harness("/game/abc/", Arc::new(api.clone()));
    harness.rebuild();
    harness.settle().await;

    let handles = harness.handles.clone();
    harness
        .dom
        .in_runtime(|| handles.select().call(AnswerOption::Second));
    harness.settle().await;
    assert!(harness.render().contains("answer selected"));

    let shell = harness.shell.clone();
    harness
        .dom
        .in_runtime(|| shell.on_result().call(game_with(following_question())));
    harness.settle().await;

    // The reply for the first question arrives after it was replaced.
    let _ = sender.send(UpdateResponse {
        correct_answer: Some(AnswerOption::Second),
        navigate_to: Some("/game/abc/".into()),
        ..UpdateResponse::default()
    });
    harness.settle().await;

    let (question_id, phase, selected, next) = harness.dom.in_runtime(|| {
        let vm = handles.vm();
        let vm = vm.read();
        let controller = vm.controller();
        (
            vm.question_id(),
            controller.phase(),
            controller.selected_answer(),
            controller.navigate_target().map(str::to_string),
        )
    });
    assert_eq!(question_id, QuestionId::new(8));
    assert_eq!(phase, AnswerPhase::AwaitingSelection);
    assert_eq!(selected, None);
    assert_eq!(next, None);

    let html = harness.render();
    assert!(html.contains("3+3=?"), "replacement question missing in {html}");
    assert!(!html.contains("answer selected"), "stale selection in {html}");
    assert!(!html.contains("answer correct"), "late reveal applied in {html}");
    assert_eq!(api.sent().unwrap().len(), 1);
}
