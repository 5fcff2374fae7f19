//! Supported display locales and localized strings with fallback.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Display locale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// English. The fallback locale.
    #[default]
    En,
    /// French.
    Fr,
}

impl Locale {
    /// Locale used when a translation is missing.
    pub const DEFAULT: Self = Self::En;

    /// Every supported locale, fallback first.
    pub const ALL: [Self; 2] = [Self::En, Self::Fr];

    /// Two-letter language code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Parse a language code. Case-insensitive; region suffixes
    /// (`fr-CA`, `en_GB`) are ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        if lang.eq_ignore_ascii_case("en") {
            Some(Self::En)
        } else if lang.eq_ignore_ascii_case("fr") {
            Some(Self::Fr)
        } else {
            None
        }
    }

    /// The other locale. Backs the sidebar language button.
    pub const fn toggle(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

/// A display string keyed by locale.
///
/// Lookups never fail: a missing locale falls back to [`Locale::DEFAULT`],
/// then to whatever entry exists, then to the empty string.
///
/// ```
/// use zenfolio::{Locale, Localized};
///
/// let title = Localized::single("Brand Identity Design");
/// assert_eq!(title.get(Locale::Fr), "Brand Identity Design");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Localized {
    entries: BTreeMap<Locale, String>,
}

impl Localized {
    /// English and French text.
    pub fn new(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self::default().with(Locale::En, en).with(Locale::Fr, fr)
    }

    /// Text in the default locale only.
    pub fn single(text: impl Into<String>) -> Self {
        Self::default().with(Locale::DEFAULT, text)
    }

    /// Set the text for one locale.
    pub fn with(mut self, locale: Locale, text: impl Into<String>) -> Self {
        self.entries.insert(locale, text.into());
        self
    }

    /// Text for `locale`, with fallback.
    pub fn get(&self, locale: Locale) -> &str {
        self.entries
            .get(&locale)
            .or_else(|| self.entries.get(&Locale::DEFAULT))
            .or_else(|| self.entries.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Text for `locale` without fallback.
    pub fn exact(&self, locale: Locale) -> Option<&str> {
        self.entries.get(&locale).map(String::as_str)
    }

    /// Whether every supported locale has its own entry.
    pub fn is_complete(&self) -> bool {
        Locale::ALL.iter().all(|l| self.entries.contains_key(l))
    }

    /// No entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for l in Locale::ALL {
            assert_eq!(Locale::from_code(l.code()), Some(l));
        }
    }

    #[test]
    fn from_code_ignores_case_and_region() {
        assert_eq!(Locale::from_code("FR"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("fr-CA"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("en_GB"), Some(Locale::En));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Locale::En.toggle(), Locale::Fr);
        assert_eq!(Locale::Fr.toggle().toggle(), Locale::Fr);
    }

    #[test]
    fn get_prefers_requested_locale() {
        let s = Localized::new("Videos", "Vidéos");
        assert_eq!(s.get(Locale::En), "Videos");
        assert_eq!(s.get(Locale::Fr), "Vidéos");
        assert!(s.is_complete());
    }

    #[test]
    fn missing_locale_falls_back_to_default() {
        let s = Localized::single("Contact");
        assert_eq!(s.get(Locale::Fr), "Contact");
        assert_eq!(s.exact(Locale::Fr), None);
        assert!(!s.is_complete());
    }

    #[test]
    fn missing_default_falls_back_to_any_entry() {
        let s = Localized::default().with(Locale::Fr, "Accueil");
        assert_eq!(s.get(Locale::En), "Accueil");
    }

    #[test]
    fn empty_yields_empty_string() {
        let s = Localized::default();
        assert!(s.is_empty());
        assert_eq!(s.get(Locale::En), "");
    }
}
