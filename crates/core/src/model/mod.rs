pub mod answer;
mod ids;
pub mod language;
pub mod media;
mod question;
mod session;

pub use answer::{
    AnswerController, AnswerPhase, AnswerReply, AnswerSubmission, OptionState, ResolveOutcome,
};
pub use ids::{GameId, ParseIdError, QuestionId};
pub use language::{
    Language, LanguageCode, LanguageContext, LanguageError, LanguageLink, LanguageSettings,
};
pub use media::{AspectBox, RenderableMedia};
pub use question::{AnswerOption, AnswerOptionError, Question, QuestionType};
pub use session::{
    Chrome, Credentials, GameNotStartedPage, GameOverPage, GamePage, GameStatus, GameSummary,
    GamesPage, HomePage, PageDataError, SessionAction, SessionResult, Template, UpdatePayload,
    UpdateResponse, WelcomePage,
};
