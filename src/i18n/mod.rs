//! Localised strings and number/date formatting for rendered pages.
//!
//! Keys mirror the storefront's translation files. Subject-specific keys
//! (`product.history.noData`, `item.history.noData`) override the shared
//! ones (`history.noData`) through [`Translator::subject_t`].

mod de;
mod en;
pub mod format;

use crate::domain::subject::SubjectKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    De,
    En,
}

impl Locale {
    /// Accepts a BCP 47 tag; only the primary language subtag matters.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "de" => Some(Locale::De),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    /// `lng` query parameter first, then the first supported language in
    /// `Accept-Language` (in header order), then `default`.
    pub fn negotiate(lng: Option<&str>, accept_language: Option<&str>, default: Locale) -> Self {
        if let Some(locale) = lng.and_then(Locale::from_tag) {
            return locale;
        }

        accept_language
            .into_iter()
            .flat_map(|header| header.split(','))
            .filter_map(|part| part.split(';').next())
            .find_map(Locale::from_tag)
            .unwrap_or(default)
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::De => de::STRINGS,
            Locale::En => en::STRINGS,
        }
    }
}

/// Looks up `key` in the locale's table, then the German table, then gives
/// back the key itself.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self.lookup(key).unwrap_or(key);
        interpolate(template, params)
    }

    /// Subject-prefixed key with a fallback to the shared key.
    pub fn subject_t(&self, subject: SubjectKind, key: &str, params: &[(&str, &str)]) -> String {
        let scoped = subject.key(key);
        match self.lookup(&scoped) {
            Some(template) => interpolate(template, params),
            None => self.t(key, params),
        }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        find(self.locale.table(), key).or_else(|| find(Locale::De.table(), key))
    }
}

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Replaces `{{name}}` placeholders. Unknown placeholders stay as written.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}
