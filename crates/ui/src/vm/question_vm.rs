use futures::future::AbortHandle;
use quiz_core::Translator;
use quiz_core::model::{
    AnswerController, AnswerOption, Question, QuestionId, RenderableMedia, ResolveOutcome, media,
};
use services::{AnswerSubmitter, PendingAnswer, SubmissionOutcome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub option: AnswerOption,
    pub label: String,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub class: &'static str,
    pub heading: String,
    pub text: String,
    pub media: Option<RenderableMedia>,
    pub options: Vec<AnswerOptionVm>,
    pub next_target: Option<String>,
    pub next_label: String,
}

/// Owns the answer lifecycle of the mounted question.
///
/// Built per question id. Dropping it aborts the submission still in flight,
/// so a reply can only ever land on the question it was sent for.
#[derive(Debug)]
pub struct QuestionVm {
    controller: AnswerController,
    in_flight: Option<AbortHandle>,
}

impl QuestionVm {
    #[must_use]
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            controller: AnswerController::new(question_id),
            in_flight: None,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.controller.question_id()
    }

    #[must_use]
    pub fn controller(&self) -> &AnswerController {
        &self.controller
    }

    #[must_use]
    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Record the choice and start its submission.
    ///
    /// Returns `None` when a choice was already made; nothing is sent then.
    pub fn select(
        &mut self,
        option: AnswerOption,
        submitter: &AnswerSubmitter,
    ) -> Option<PendingAnswer> {
        let Some(submission) = self.controller.select(option) else {
            tracing::debug!(
                question_id = %self.question_id(),
                option = option.position(),
                "ignoring selection: answer already chosen"
            );
            return None;
        };
        let pending = submitter.submit(submission);
        self.in_flight = Some(pending.abort_handle());
        Some(pending)
    }

    /// Apply how a submission ended.
    pub fn apply(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Resolved(reply) => {
                let reply_id = reply.question_id;
                match self.controller.resolve(reply) {
                    ResolveOutcome::Applied => self.in_flight = None,
                    ResolveOutcome::Stale => tracing::warn!(
                        question_id = %self.question_id(),
                        %reply_id,
                        "discarding reply for another question"
                    ),
                    ResolveOutcome::NotPending => tracing::debug!(
                        question_id = %self.question_id(),
                        "discarding reply: nothing pending"
                    ),
                }
            }
            // The selection stays locked and unrevealed.
            SubmissionOutcome::Failed(_) => self.in_flight = None,
            SubmissionOutcome::Cancelled => {}
        }
    }

    #[must_use]
    pub fn card(&self, question: &Question, tr: &Translator) -> QuestionCardVm {
        let disabled = self.controller.buttons_disabled();
        let options = question
            .answers()
            .map(|(option, label)| AnswerOptionVm {
                option,
                label: label.to_string(),
                class: self.controller.option_state(option).css_class(),
                disabled,
            })
            .collect();

        let class = match self.controller.answered_correctly() {
            Some(true) => "card question answered-correct",
            Some(false) => "card question answered-incorrect",
            None => "card question",
        };

        QuestionCardVm {
            class,
            heading: format!("{} {} / {}", tr.t("Question"), question.index, question.total),
            text: question.text.clone(),
            media: media::resolve(question),
            options,
            next_target: self.controller.navigate_target().map(str::to_string),
            next_label: tr.t("Next question").to_string(),
        }
    }
}

impl Drop for QuestionVm {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
