//! Office name lookup functions.

use crate::locale::Locale;
use crate::offices::office_translations;

/// Checks if an office name has an English translation available.
///
/// Absent or empty input yields `false`. The name is trimmed before the
/// lookup to match [`translate_office_name`] behavior.
#[must_use]
pub fn has_english_translation(arabic_name: Option<&str>) -> bool {
    let Some(name) = arabic_name else {
        return false;
    };

    if name.is_empty() {
        return false;
    }

    let trimmed = name.trim();
    office_translations().get(trimmed).is_some_and(|english| !english.is_empty())
}

/// Translates an office name for display.
///
/// Under [`Locale::Arabic`] the input passes through untouched, whitespace
/// included. Otherwise the name is trimmed and looked up; a missing entry
/// falls back to the original, untrimmed input so the caller's string is
/// preserved verbatim.
#[must_use]
pub fn translate_office_name<'a>(arabic_name: Option<&'a str>, locale: Locale) -> Option<&'a str> {
    let name = arabic_name?;

    if locale == Locale::Arabic || name.is_empty() {
        return Some(name);
    }

    let trimmed = name.trim();
    office_translations().get(trimmed).copied().map_or_else(
        || {
            tracing::trace!("No English translation for office name: {name}");
            Some(name)
        },
        Some,
    )
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::offices::known_office_names;

    #[rstest]
    #[case::known_name("الجيزة", true)]
    #[case::trailing_whitespace("الجيزة ", true)]
    #[case::surrounding_whitespace("  مدينة نصر  ", true)]
    #[case::unknown_name("غير معروف", false)]
    #[case::empty("", false)]
    #[case::whitespace_only("   ", false)]
    fn test_has_english_translation(#[case] name: &str, #[case] expected: bool) {
        assert_that!(has_english_translation(Some(name)), eq(expected));
    }

    #[googletest::test]
    fn has_english_translation_absent_input() {
        expect_that!(has_english_translation(None), eq(false));
    }

    #[googletest::test]
    fn has_english_translation_holds_for_every_known_name() {
        for name in known_office_names() {
            expect_that!(has_english_translation(Some(name)), eq(true));

            let padded = format!("{name} ");
            expect_that!(has_english_translation(Some(&padded)), eq(true));
        }
    }

    #[rstest]
    #[case::known_name("الجيزة", Some("Giza"))]
    #[case::trimmed_before_lookup("  الجيزة  ", Some("Giza"))]
    #[case::unknown_falls_back("غير معروف", Some("غير معروف"))]
    #[case::empty_passes_through("", Some(""))]
    fn test_translate_english(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_that!(translate_office_name(Some(name), Locale::English), eq(expected));
    }

    #[rstest]
    #[case::known_name("الجيزة")]
    #[case::unknown_name("غير معروف")]
    #[case::untrimmed("  الجيزة  ")]
    fn test_translate_arabic_is_passthrough(#[case] name: &str) {
        assert_that!(translate_office_name(Some(name), Locale::Arabic), some(eq(name)));
    }

    #[googletest::test]
    fn translate_absent_input_stays_absent() {
        expect_that!(translate_office_name(None, Locale::English), none());
        expect_that!(translate_office_name(None, Locale::Arabic), none());
    }

    #[googletest::test]
    fn unrecognized_tag_behaves_like_english() {
        let locale = Locale::from_tag("fr");

        expect_that!(translate_office_name(Some("الهرم"), locale), some(eq("Haram")));
    }

    #[googletest::test]
    fn fallback_preserves_untrimmed_original() {
        // The existence check trims; the fallback deliberately does not.
        let result = translate_office_name(Some("  غير معروف  "), Locale::English);

        expect_that!(result, some(eq("  غير معروف  ")));
    }
}
