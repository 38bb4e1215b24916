use std::sync::Arc;

use quiz_core::model::{
    AnswerController, AnswerOption, AnswerPhase, AnswerSubmission, GamePage, QuestionId,
    ResolveOutcome, SessionResult, Template, UpdatePayload, UpdateResponse,
};
use serde_json::json;
use services::{
    AnswerSubmitter, InMemorySessionApi, OnChange, ScriptedReply, SessionApi, SubmissionOutcome,
};

const LOCATION: &str = "/game/abc/";

fn game_result() -> SessionResult {
    serde_json::from_value(json!({
        "template": "Game",
        "uuid": "abc",
        "name": "Arithmetic",
        "question": {
            "pk": 31, "index": 1, "total": 5, "text": "2+2=?",
            "answer1": "3", "answer2": "4", "answer3": "5", "answer4": "6",
            "question_type": "none"
        }
    }))
    .unwrap()
}

#[tokio::test]
async fn answering_a_question_reveals_the_correct_option() {
    let api = InMemorySessionApi::new();
    api.insert_result(LOCATION, game_result()).unwrap();
    api.push_reply(
        LOCATION,
        ScriptedReply::Respond(UpdateResponse {
            correct_answer: Some(AnswerOption::Second),
            ..UpdateResponse::default()
        }),
    )
    .unwrap();

    let result = api.resolve(LOCATION).await.unwrap();
    assert_eq!(result.template, Template::Game);
    let page: GamePage = result.page().unwrap();
    let question = page.question;
    assert_eq!(question.answer(AnswerOption::Second), "4");

    let submitter = AnswerSubmitter::new(OnChange::new(Arc::new(api.clone()), LOCATION));
    let mut controller = AnswerController::new(question.pk);

    let submission = controller.select(AnswerOption::Second).expect("first pick submits");
    assert!(controller.select(AnswerOption::Fourth).is_none());
    let outcome = submitter.submit(submission).outcome().await;

    let SubmissionOutcome::Resolved(reply) = outcome else {
        panic!("expected a reply");
    };
    assert_eq!(controller.resolve(reply), ResolveOutcome::Applied);
    assert_eq!(controller.phase(), AnswerPhase::Resolved);
    assert_eq!(controller.correct_answer(), Some(AnswerOption::Second));
    assert!(controller.options_disabled());
    assert_eq!(controller.navigate_target(), None);

    let sent = api.sent().unwrap();
    assert_eq!(
        sent.iter().map(|update| &update.payload).collect::<Vec<_>>(),
        [&UpdatePayload::Answer(AnswerSubmission {
            question_id: QuestionId::new(31),
            answer: AnswerOption::Second,
        })]
    );
}

#[tokio::test]
async fn failed_submission_leaves_question_locked_and_unrevealed() {
    let api = InMemorySessionApi::new();
    api.push_reply(LOCATION, ScriptedReply::Fail).unwrap();

    let submitter = AnswerSubmitter::new(OnChange::new(Arc::new(api.clone()), LOCATION));
    let mut controller = AnswerController::new(QuestionId::new(31));
    let submission = controller.select(AnswerOption::First).unwrap();

    let outcome = submitter.submit(submission).outcome().await;
    assert!(matches!(outcome, SubmissionOutcome::Failed(_)));
    assert_eq!(controller.phase(), AnswerPhase::SubmittedPending);
    assert!(controller.buttons_disabled());
    assert_eq!(controller.correct_answer(), None);
    assert_eq!(api.sent().unwrap().len(), 1);
}
