//! Per-question answer lifecycle.
//!
//! An `AnswerController` drives one question from "no answer" to "answer
//! resolved" exactly once. It is keyed by the question id: a controller is
//! never reset, a new one is built whenever the question changes.

use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::question::AnswerOption;

//
// ─── WIRE SHAPES ──────────────────────────────────────────────────────────────
//

/// Submission sent when the user picks an option: `{questionId, answer}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub question_id: QuestionId,
    pub answer: AnswerOption,
}

/// Authoritative reply for one submission.
///
/// The server does not echo the question id; it is attached from the request
/// that produced the reply so late replies can be matched against the
/// question that is currently mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerReply {
    pub question_id: QuestionId,
    pub correct_answer: Option<AnswerOption>,
    pub navigate_to: Option<String>,
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerPhase {
    AwaitingSelection,
    SubmittedPending,
    Resolved,
}

/// What happened to a reply handed to `AnswerController::resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Applied,
    /// The reply belongs to another question.
    Stale,
    /// Nothing was pending (no selection yet, or already resolved).
    NotPending,
}

/// Visual state of a single option button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionState {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            OptionState::Idle => "answer",
            OptionState::Selected => "answer selected",
            OptionState::Correct => "answer correct",
            OptionState::Incorrect => "answer incorrect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerController {
    question_id: QuestionId,
    phase: AnswerPhase,
    selected: Option<AnswerOption>,
    correct: Option<AnswerOption>,
    navigate_target: Option<String>,
}

impl AnswerController {
    #[must_use]
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            question_id,
            phase: AnswerPhase::AwaitingSelection,
            selected: None,
            correct: None,
            navigate_target: None,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    #[must_use]
    pub fn phase(&self) -> AnswerPhase {
        self.phase
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<AnswerOption> {
        self.selected
    }

    #[must_use]
    pub fn correct_answer(&self) -> Option<AnswerOption> {
        self.correct
    }

    #[must_use]
    pub fn navigate_target(&self) -> Option<&str> {
        self.navigate_target.as_deref()
    }

    /// Record the user's choice.
    ///
    /// Returns the single submission to send, or `None` when a choice was
    /// already made for this question.
    pub fn select(&mut self, option: AnswerOption) -> Option<AnswerSubmission> {
        if self.phase != AnswerPhase::AwaitingSelection {
            return None;
        }
        self.phase = AnswerPhase::SubmittedPending;
        self.selected = Some(option);
        Some(AnswerSubmission {
            question_id: self.question_id,
            answer: option,
        })
    }

    /// Apply the authoritative reply for this question.
    pub fn resolve(&mut self, reply: AnswerReply) -> ResolveOutcome {
        if reply.question_id != self.question_id {
            return ResolveOutcome::Stale;
        }
        if self.phase != AnswerPhase::SubmittedPending {
            return ResolveOutcome::NotPending;
        }
        self.phase = AnswerPhase::Resolved;
        if reply.correct_answer.is_some() {
            self.correct = reply.correct_answer;
        }
        if reply.navigate_to.is_some() {
            self.navigate_target = reply.navigate_to;
        }
        ResolveOutcome::Applied
    }

    #[must_use]
    pub fn accepts_selection(&self) -> bool {
        self.phase == AnswerPhase::AwaitingSelection
    }

    /// True once the correct answer is known; from then on no option can be
    /// chosen again, whatever the user picked.
    #[must_use]
    pub fn options_disabled(&self) -> bool {
        self.correct.is_some()
    }

    /// Buttons are inert while a submission is pending as well as after the
    /// reveal.
    #[must_use]
    pub fn buttons_disabled(&self) -> bool {
        self.options_disabled() || !self.accepts_selection()
    }

    #[must_use]
    pub fn option_state(&self, option: AnswerOption) -> OptionState {
        match (self.correct, self.selected) {
            (Some(correct), _) if correct == option => OptionState::Correct,
            (Some(_), Some(selected)) if selected == option => OptionState::Incorrect,
            (None, Some(selected)) if selected == option => OptionState::Selected,
            _ => OptionState::Idle,
        }
    }

    /// Whether the user's own choice matched the revealed answer.
    #[must_use]
    pub fn answered_correctly(&self) -> Option<bool> {
        match (self.selected, self.correct) {
            (Some(selected), Some(correct)) => Some(selected == correct),
            _ => None,
        }
    }
}
