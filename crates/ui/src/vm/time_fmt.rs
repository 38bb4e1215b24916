use chrono::{DateTime, Utc};
use quiz_core::Translator;

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// `"Never"` in the reader's language when absent.
#[must_use]
pub fn format_optional_datetime(value: Option<DateTime<Utc>>, tr: &Translator) -> String {
    value.map_or_else(|| tr.t("Never").to_string(), format_datetime)
}
