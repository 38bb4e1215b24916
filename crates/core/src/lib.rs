#![forbid(unsafe_code)]

//! Domain model of the trivia client: questions and their answer lifecycle,
//! session results, language-aware paths and built-in translations.

pub mod error;
pub mod i18n;
pub mod model;
pub mod path;

pub use error::Error;
pub use i18n::Translator;
