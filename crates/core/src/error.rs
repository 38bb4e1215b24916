use thiserror::Error;

use crate::model::{AnswerOptionError, LanguageError, PageDataError};

/// Any model-level failure, for callers that do not care which.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    AnswerOption(#[from] AnswerOptionError),
    #[error(transparent)]
    Language(#[from] LanguageError),
    #[error(transparent)]
    PageData(#[from] PageDataError),
}
