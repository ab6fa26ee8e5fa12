//! Static office name translation table.
//!
//! Covers the most visited offices of the Cairo and Giza governorates.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Arabic office name → English display name, grouped by governorate.
///
/// Keys are stored already trimmed; lookups trim before probing.
const OFFICE_TRANSLATION_PAIRS: &[(&str, &str)] = &[
    // Cairo offices
    ("شبرا فرعي", "Shubra Branch"),
    ("القاهره الرئيسي", "Cairo Main Office"),
    ("الحي السادس - مدينة نصر", "Sixth District - Nasr City"),
    ("باب الخلق", "Bab El-Khalq"),
    ("السعوديه", "Al-Saudiya"),
    ("اسكر", "Askar"),
    ("الافضل", "Al-Afdal"),
    ("الحي الثاني - هليوبوليس", "Second District - Heliopolis"),
    ("بانوراما اكتوبر", "Panorama October"),
    ("القطاميه", "Al-Qatamiya"),
    ("ابو رواش", "Abu Rawash"),
    ("وحدة مرور حدائق الاهرام", "Giza Pyramids Traffic Unit"),
    ("مدينة نصر", "Nasr City"),
    ("المعادي", "Maadi"),
    ("حلوان", "Helwan"),
    ("مصر الجديدة", "Heliopolis"),
    ("الزمالك", "Zamalek"),
    ("المطرية", "Matariya"),
    ("عين شمس", "Ain Shams"),
    ("الزيتون", "El-Zeitoun"),
    ("السيدة زينب", "Sayeda Zeinab"),
    ("الموسكي", "El-Mousky"),
    ("العتبة", "Ataba"),
    ("رمسيس", "Ramses"),
    ("الدقي", "Dokki"),
    ("المهندسين", "Mohandessin"),
    ("الزاوية الحمراء", "Zawya El-Hamra"),
    ("روض الفرج", "Rod El-Farag"),
    ("الساحل", "El-Sahel"),
    ("حدائق القبة", "Hadayek El-Qobba"),
    ("الوايلي", "El-Wayli"),
    ("منشية ناصر", "Manshiet Nasser"),
    ("البساتين", "El-Basatin"),
    ("دار السلام", "Dar El-Salam"),
    ("المرج", "El-Marg"),
    ("عزبة النخل", "Ezbet El-Nakhl"),
    ("التبين", "El-Tabbin"),
    ("15 مايو", "15 May City"),
    ("القاهرة الجديدة", "New Cairo"),
    ("التجمع الخامس", "Fifth Settlement"),
    ("الرحاب", "El-Rehab"),
    ("مدينتي", "Madinaty"),
    ("الشروق", "El-Shorouk"),
    // Giza offices
    ("الجيزة", "Giza"),
    ("الهرم", "Haram"),
    ("فيصل", "Faisal"),
    ("العمرانية", "Omraneya"),
    ("بولاق الدكرور", "Bolaq El-Dakrour"),
    ("الوراق", "El-Warraq"),
    ("امبابة", "Imbaba"),
    ("كرداسة", "Kerdasa"),
    ("اوسيم", "Ausim"),
    ("البدرشين", "El-Badrashein"),
    ("الصف", "El-Saff"),
    ("اطفيح", "Atfih"),
    ("العياط", "El-Ayat"),
    ("الحوامدية", "El-Hawamdiya"),
    ("منشأة القناطر", "Manshaat El-Qanater"),
    ("6 اكتوبر", "6th of October City"),
    ("الشيخ زايد", "Sheikh Zayed"),
    ("حدائق الاهرام", "Hadayek El-Ahram"),
    ("المنيب", "El-Mounib"),
    ("الطالبية", "Talbeya"),
    ("الجيزة الجديدة", "New Giza"),
    ("المريوطية", "Marioutiya"),
    ("ترسا", "Tersa"),
    ("الباويطي", "El-Bawiti"),
    ("الفرافرة", "El-Farafra"),
];

/// Lookup table built once on first access and shared for the process
/// lifetime. Read-only afterwards, so concurrent reads need no locking.
static OFFICE_TRANSLATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| OFFICE_TRANSLATION_PAIRS.iter().copied().collect());

/// Returns the full translation table for direct enumeration.
#[must_use]
pub fn office_translations() -> &'static HashMap<&'static str, &'static str> {
    &OFFICE_TRANSLATIONS
}

/// Returns an iterator over all Arabic office names known to the table.
pub fn known_office_names() -> impl Iterator<Item = &'static str> {
    OFFICE_TRANSLATIONS.keys().copied()
}
