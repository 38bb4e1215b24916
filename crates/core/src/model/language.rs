use std::fmt;

use thiserror::Error;

use crate::path::{add_language, first_segment, remove_language};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("invalid language code: {0:?}")]
    InvalidCode(String),

    #[error("malformed language entry: {0:?} (expected code:Name)")]
    MalformedEntry(String),

    #[error("no languages configured")]
    Empty,

    #[error("default language {0} is not in the language list")]
    UnknownDefault(String),
}

//
// ─── LANGUAGE CODE ────────────────────────────────────────────────────────────
//

/// Lowercase language tag such as `en`, `fr` or `pt-br`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// # Errors
    ///
    /// Returns `LanguageError::InvalidCode` unless the code is 2-8 ASCII
    /// letters, optionally followed by `-` and a subtag.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LanguageError> {
        let code = raw.as_ref().trim().to_ascii_lowercase();
        let mut parts = code.splitn(2, '-');
        let primary = parts.next().unwrap_or_default();
        let primary_ok = (2..=8).contains(&primary.len())
            && primary.chars().all(|ch| ch.is_ascii_lowercase());
        let subtag_ok = parts
            .next()
            .is_none_or(|sub| !sub.is_empty() && sub.chars().all(|ch| ch.is_ascii_alphanumeric()));
        if !primary_ok || !subtag_ok {
            return Err(LanguageError::InvalidCode(raw.as_ref().to_string()));
        }
        Ok(Self(code))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LanguageCode({})", self.0)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An available language with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: LanguageCode,
    pub name: String,
}

impl Language {
    /// # Errors
    ///
    /// Returns `LanguageError::InvalidCode` for a malformed code.
    pub fn new(code: impl AsRef<str>, name: impl Into<String>) -> Result<Self, LanguageError> {
        let code = LanguageCode::new(code)?;
        let name = name.into();
        let name = if name.trim().is_empty() {
            code.as_str().to_string()
        } else {
            name.trim().to_string()
        };
        Ok(Self { code, name })
    }
}

//
// ─── SETTINGS ─────────────────────────────────────────────────────────────────
//

/// Host-supplied language configuration.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSettings {
    languages: Vec<Language>,
    default: LanguageCode,
    prefix_default: bool,
}

impl LanguageSettings {
    /// # Errors
    ///
    /// Returns `LanguageError::Empty` for an empty list and
    /// `LanguageError::UnknownDefault` when `default` is not listed.
    pub fn new(
        languages: Vec<Language>,
        default: LanguageCode,
        prefix_default: bool,
    ) -> Result<Self, LanguageError> {
        if languages.is_empty() {
            return Err(LanguageError::Empty);
        }
        if !languages.iter().any(|lang| lang.code == default) {
            return Err(LanguageError::UnknownDefault(default.to_string()));
        }
        Ok(Self {
            languages,
            default,
            prefix_default,
        })
    }

    /// Parse `en:English,fr:Français`. A bare code uses itself as the name.
    ///
    /// # Errors
    ///
    /// Returns `LanguageError` for malformed entries or codes.
    pub fn parse_list(raw: &str) -> Result<Vec<Language>, LanguageError> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((code, name)) if !code.trim().is_empty() => Language::new(code, name),
                Some(_) => Err(LanguageError::MalformedEntry(entry.to_string())),
                None => Language::new(entry, ""),
            })
            .collect()
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub fn default_code(&self) -> &LanguageCode {
        &self.default
    }

    #[must_use]
    pub fn prefix_default(&self) -> bool {
        self.prefix_default
    }

    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Language> {
        self.languages
            .iter()
            .find(|lang| lang.code.as_str().eq_ignore_ascii_case(code))
    }

    fn default_language(&self) -> &Language {
        self.find(self.default.as_str())
            .unwrap_or(&self.languages[0])
    }

    /// Resolve the language of a location from its first segment, falling
    /// back to the default language.
    #[must_use]
    pub fn detect(&self, location: &str) -> LanguageContext {
        let current = first_segment(location)
            .and_then(|segment| self.find(segment))
            .unwrap_or_else(|| self.default_language())
            .clone();
        LanguageContext {
            current,
            settings: self.clone(),
        }
    }
}

//
// ─── CONTEXT ──────────────────────────────────────────────────────────────────
//

/// One entry of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLink {
    pub code: LanguageCode,
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// Language state for one rendered location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageContext {
    current: Language,
    settings: LanguageSettings,
}

impl LanguageContext {
    #[must_use]
    pub fn current(&self) -> &Language {
        &self.current
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        self.settings.languages()
    }

    fn localize(&self, code: &LanguageCode, path: &str) -> String {
        if *code == self.settings.default && !self.settings.prefix_default {
            return path.to_string();
        }
        add_language(code.as_str(), path)
    }

    /// Location with the current language prefix removed.
    #[must_use]
    pub fn strip(&self, location: &str) -> String {
        remove_language(self.current.code.as_str(), location)
    }

    /// Internal link to `path` (given without language prefix) in the current
    /// language.
    #[must_use]
    pub fn link(&self, path: &str) -> String {
        self.localize(&self.current.code, path)
    }

    /// The equivalent of `location` under another language.
    #[must_use]
    pub fn switch_to(&self, target: &LanguageCode, location: &str) -> String {
        self.localize(target, &self.strip(location))
    }

    /// Switcher entries for every configured language, in configured order.
    #[must_use]
    pub fn switcher(&self, location: &str) -> Vec<LanguageLink> {
        self.languages()
            .iter()
            .map(|lang| LanguageLink {
                code: lang.code.clone(),
                name: lang.name.clone(),
                href: self.switch_to(&lang.code, location),
                active: lang.code == self.current.code,
            })
            .collect()
    }
}
