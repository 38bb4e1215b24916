use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::answer::{AnswerReply, AnswerSubmission};
use crate::model::ids::{GameId, QuestionId};
use crate::model::question::{AnswerOption, Question};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
pub enum PageDataError {
    #[error("template {template} is missing page data: {source}")]
    Decode {
        template: Template,
        #[source]
        source: serde_json::Error,
    },
}

//
// ─── TEMPLATE ─────────────────────────────────────────────────────────────────
//

/// Discriminant naming which page a session result should be shown with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Template {
    Home,
    Welcome,
    Games,
    GameNotStarted,
    Game,
    GameEnded,
    GameResultsPending,
    NotFound,
    /// A name this client has no built-in page for.
    Other(String),
}

impl Template {
    pub const BUILT_IN: [Template; 8] = [
        Template::Home,
        Template::Welcome,
        Template::Games,
        Template::GameNotStarted,
        Template::Game,
        Template::GameEnded,
        Template::GameResultsPending,
        Template::NotFound,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Home" | "HomeView" => Self::Home,
            "Welcome" => Self::Welcome,
            "Games" => Self::Games,
            "GameNotStarted" => Self::GameNotStarted,
            "Game" => Self::Game,
            "GameEnded" => Self::GameEnded,
            "GameResultsPending" => Self::GameResultsPending,
            "NotFound" => Self::NotFound,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Template::Home => "Home",
            Template::Welcome => "Welcome",
            Template::Games => "Games",
            Template::GameNotStarted => "GameNotStarted",
            Template::Game => "Game",
            Template::GameEnded => "GameEnded",
            Template::GameResultsPending => "GameResultsPending",
            Template::NotFound => "NotFound",
            Template::Other(name) => name,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<Template> for String {
    fn from(value: Template) -> Self {
        value.name().to_string()
    }
}

//
// ─── SESSION RESULT ───────────────────────────────────────────────────────────
//

/// Router payload for the current location: a template plus its data.
///
/// Replaced wholesale on every navigation or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub template: Template,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Fields every page shares and the shell chrome reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Chrome {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub logout_url: Option<String>,
}

impl SessionResult {
    #[must_use]
    pub fn new(template: Template) -> Self {
        Self {
            template,
            fields: Map::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Decode the page-specific part of the payload.
    ///
    /// # Errors
    ///
    /// Returns `PageDataError::Decode` when the fields do not match `T`.
    pub fn page<T: DeserializeOwned>(&self) -> Result<T, PageDataError> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|source| {
            PageDataError::Decode {
                template: self.template.clone(),
                source,
            }
        })
    }

    /// Chrome fields; wrongly typed values are treated as absent.
    #[must_use]
    pub fn chrome(&self) -> Chrome {
        let text = |key: &str| {
            self.fields
                .get(key)
                .and_then(Value::as_str)
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        };
        Chrome {
            title: text("title"),
            player_name: text("player_name"),
            logout_url: text("logout_url"),
        }
    }
}

//
// ─── PAGE DATA ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomePage {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WelcomePage {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Ended,
    ResultsPending,
}

impl GameStatus {
    /// Translation key for the status label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            GameStatus::NotStarted => "Not started",
            GameStatus::InProgress => "In progress",
            GameStatus::Ended => "Ended",
            GameStatus::ResultsPending => "Results pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSummary {
    pub uuid: GameId,
    pub name: String,
    pub status: GameStatus,
    #[serde(default)]
    pub last_score: Option<u32>,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub last_start: Option<DateTime<Utc>>,
    /// Where the row links to; defaults to `/game/{uuid}/`.
    #[serde(default)]
    pub url: Option<String>,
}

impl GameSummary {
    #[must_use]
    pub fn href(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| format!("/game/{}/", self.uuid))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GamesPage {
    #[serde(default)]
    pub games: Vec<GameSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameNotStartedPage {
    pub uuid: GameId,
    pub name: String,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GamePage {
    pub uuid: GameId,
    pub name: String,
    pub question: Question,
}

/// Data for both the "ended" and the "results pending" pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameOverPage {
    pub uuid: GameId,
    pub name: String,
    #[serde(default)]
    pub results_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub score: Option<u32>,
}

//
// ─── UPDATE CHANNEL WIRE SHAPES ───────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    Start,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}

/// Update request sent through the shared `onChange` channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpdatePayload {
    Answer(AnswerSubmission),
    Action { action: SessionAction },
    Login(Credentials),
}

impl UpdatePayload {
    #[must_use]
    pub fn start() -> Self {
        Self::Action {
            action: SessionAction::Start,
        }
    }

    /// Short label for logs; never includes credentials.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            UpdatePayload::Answer(_) => "answer",
            UpdatePayload::Action { .. } => "action",
            UpdatePayload::Login(_) => "login",
        }
    }
}

/// Server reply to an update: `{correctAnswer?, navigateTo?, result?}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    /// A malformed value is dropped rather than failing the whole reply.
    #[serde(
        default,
        deserialize_with = "lenient_answer",
        skip_serializing_if = "Option::is_none"
    )]
    pub correct_answer: Option<AnswerOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<String>,
    /// A fresh session result replacing the current one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<SessionResult>,
}

fn lenient_answer<'de, D>(deserializer: D) -> Result<Option<AnswerOption>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match AnswerOption::deserialize(&raw) {
        Ok(option) => Ok(Some(option)),
        Err(err) => {
            tracing::warn!(value = %raw, error = %err, "ignoring malformed correct answer");
            Ok(None)
        }
    }
}

impl UpdateResponse {
    /// Attach the identity of the question the request was made for.
    #[must_use]
    pub fn into_reply(self, question_id: QuestionId) -> AnswerReply {
        AnswerReply {
            question_id,
            correct_answer: self.correct_answer,
            navigate_to: self.navigate_to,
        }
    }
}
