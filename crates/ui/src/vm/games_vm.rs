use quiz_core::Translator;
use quiz_core::model::{GameSummary, LanguageContext};

use crate::vm::time_fmt::format_optional_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRowVm {
    pub name: String,
    pub href: String,
    pub status: String,
    pub last_score: String,
    pub position: String,
    pub last_start: String,
}

#[must_use]
pub fn map_game_rows(
    games: &[GameSummary],
    language: &LanguageContext,
    tr: &Translator,
) -> Vec<GameRowVm> {
    games
        .iter()
        .map(|game| GameRowVm {
            name: game.name.clone(),
            href: language.link(&game.href()),
            status: tr.t(game.status.label_key()).to_string(),
            last_score: game.last_score.map_or_else(String::new, |score| score.to_string()),
            position: game.position.map_or_else(String::new, |position| position.to_string()),
            last_start: format_optional_datetime(game.last_start, tr),
        })
        .collect()
}
