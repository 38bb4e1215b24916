//! Built-in translations for the client's own strings.
//!
//! Keys are the English strings; a missing entry falls back to the key.

use crate::model::LanguageCode;

const FR: &[(&str, &str)] = &[
    ("All games", "Tous les jeux"),
    ("Page not found", "Page non trouvée"),
    ("Visit Home", "Visitez la page d'accueil"),
    ("Name", "Nom"),
    ("The Game", "Le jeu"),
    ("Will end on", "Se terminera le"),
    ("Thank you for participating in a game", "Merci d'avoir participé à un jeu"),
    ("Results will be published on", "Les résultats seront publiés le"),
    ("Question", "Question"),
    ("Start the game", "Commencer le jeu"),
    ("Next question", "Question suivante"),
];

const RU: &[(&str, &str)] = &[
    ("All games", "Все игры"),
    ("My games", "Мои игры"),
    ("Page not found", "Страница не найдена"),
    ("Visit Home", "Перейти на главную"),
    ("Name", "Имя"),
    ("The Game", "Игра"),
    ("Will end on", "Закончится"),
    ("Thank you for participating in a game", "Спасибо за участие в игре"),
    ("Results will be published on", "Результаты будут опубликованы"),
    ("Question", "Вопрос"),
    ("Start the game", "Начать игру"),
    (
        "Welcome! Please enter or create a name and a password",
        "Добро пожаловать! Пожалуйста введите или придумайте имя и пароль:",
    ),
    ("Logout", "Выйти"),
    ("Last score", "Последние очки"),
    ("Status", "Статус"),
    ("Never", "Никогда"),
    ("Position", "Место"),
    ("Last start", "Последний старт"),
    ("Next question", "Следующий вопрос"),
];

fn table(code: &str) -> &'static [(&'static str, &'static str)] {
    match code.split('-').next().unwrap_or(code) {
        "fr" => FR,
        "ru" => RU,
        _ => &[],
    }
}

/// Looks up strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    code: LanguageCode,
}

impl Translator {
    #[must_use]
    pub fn new(code: LanguageCode) -> Self {
        Self { code }
    }

    #[must_use]
    pub fn code(&self) -> &LanguageCode {
        &self.code
    }

    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        table(self.code.as_str())
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator(code: &str) -> Translator {
        Translator::new(LanguageCode::new(code).unwrap())
    }

    #[test]
    fn known_keys_are_translated() {
        assert_eq!(translator("fr").t("All games"), "Tous les jeux");
        assert_eq!(translator("ru").t("Next question"), "Следующий вопрос");
    }

    #[test]
    fn fallback_returns_key() {
        assert_eq!(translator("en").t("All games"), "All games");
        assert_eq!(translator("fr").t("Logout"), "Logout");
        assert_eq!(translator("de").t("Status"), "Status");
    }

    #[test]
    fn regional_variants_share_tables() {
        assert_eq!(translator("fr-ca").t("Name"), "Nom");
    }
}
