use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while reading answer options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerOptionError {
    #[error("invalid answer option: {0} (expected 1-4)")]
    OutOfRange(u8),
}

//
// ─── ANSWER OPTION ────────────────────────────────────────────────────────────
//

/// One of the four answer slots of a question.
///
/// On the wire an option is its 1-based position (`1..=4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AnswerOption {
    First,
    Second,
    Third,
    Fourth,
}

impl AnswerOption {
    /// All options in display order.
    pub const ALL: [AnswerOption; 4] = [
        AnswerOption::First,
        AnswerOption::Second,
        AnswerOption::Third,
        AnswerOption::Fourth,
    ];

    /// Converts a 1-based position to an option.
    ///
    /// # Errors
    ///
    /// Returns `AnswerOptionError::OutOfRange` for anything outside `1..=4`.
    pub fn from_position(value: u8) -> Result<Self, AnswerOptionError> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            _ => Err(AnswerOptionError::OutOfRange(value)),
        }
    }

    /// 1-based position, as sent to and received from the server.
    #[must_use]
    pub fn position(self) -> u8 {
        match self {
            AnswerOption::First => 1,
            AnswerOption::Second => 2,
            AnswerOption::Third => 3,
            AnswerOption::Fourth => 4,
        }
    }
}

impl TryFrom<u8> for AnswerOption {
    type Error = AnswerOptionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_position(value)
    }
}

impl From<AnswerOption> for u8 {
    fn from(option: AnswerOption) -> Self {
        option.position()
    }
}

//
// ─── QUESTION TYPE ────────────────────────────────────────────────────────────
//

/// Kind of media attached to a question.
///
/// The server labels text-only questions either `none` or `text`; both map to
/// `None`. Unrecognised labels are kept so they can be logged, but they never
/// produce media.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    #[default]
    None,
    Audio,
    Video,
    Photo,
    Other(String),
}

impl QuestionType {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "text" => Self::None,
            "audio" => Self::Audio,
            "video" => Self::Video,
            "photo" => Self::Photo,
            _ => Self::Other(label.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            QuestionType::None => "none",
            QuestionType::Audio => "audio",
            QuestionType::Video => "video",
            QuestionType::Photo => "photo",
            QuestionType::Other(label) => label,
        }
    }
}

impl From<String> for QuestionType {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<QuestionType> for String {
    fn from(value: QuestionType) -> Self {
        value.label().to_string()
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A question as delivered inside a `Game` session result.
///
/// Immutable once rendered: moving to the next question replaces the whole
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub pk: QuestionId,
    /// 1-based position within the game.
    pub index: u32,
    pub total: u32,
    pub text: String,
    #[serde(default)]
    pub answer1: String,
    #[serde(default)]
    pub answer2: String,
    #[serde(default)]
    pub answer3: String,
    #[serde(default)]
    pub answer4: String,
    #[serde(default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub audio_file: Option<String>,
    #[serde(default)]
    pub video_file: Option<String>,
    #[serde(default)]
    pub photo_file: Option<String>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.pk
    }

    /// Text of the given answer slot.
    #[must_use]
    pub fn answer(&self, option: AnswerOption) -> &str {
        match option {
            AnswerOption::First => &self.answer1,
            AnswerOption::Second => &self.answer2,
            AnswerOption::Third => &self.answer3,
            AnswerOption::Fourth => &self.answer4,
        }
    }

    /// All four slots paired with their option, in display order.
    pub fn answers(&self) -> impl Iterator<Item = (AnswerOption, &str)> {
        AnswerOption::ALL
            .into_iter()
            .map(move |option| (option, self.answer(option)))
    }
}
