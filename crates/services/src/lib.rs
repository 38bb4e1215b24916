#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod http_api;
pub mod memory_api;
pub mod submission;

pub use api::{OnChange, SessionApi};
pub use error::ApiError;
pub use http_api::{DEFAULT_API_URL, HttpApiConfig, HttpSessionApi};
pub use memory_api::{InMemorySessionApi, ScriptedReply, SentUpdate};
pub use submission::{AnswerSubmitter, PendingAnswer, SubmissionOutcome};
