//! Display locale selection.

/// Display language requested by the caller.
///
/// Only Arabic and English are meaningfully distinguished. Tags are compared
/// verbatim: exactly `"ar"` selects [`Locale::Arabic`], every other tag
/// (including regional variants like `"ar-EG"`) behaves like `"en"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Arabic, the source language of the office names.
    #[default]
    Arabic,
    /// English, the translation target.
    English,
}

impl Locale {
    /// Resolves a locale tag to a `Locale`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "ar" { Self::Arabic } else { Self::English }
    }

    /// Returns the canonical tag for this locale.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }
}
