//! office-i18n
//!
//! Arabic to English display translations for the most visited Cairo and
//! Giza offices.

pub mod config;
pub mod locale;
pub mod offices;
pub mod translate;

// Re-export the lookup surface
pub use locale::Locale;
pub use offices::{
    known_office_names,
    office_translations,
};
pub use translate::{
    has_english_translation,
    translate_office_name,
};
