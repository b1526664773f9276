//! ISO language and country code equivalences.
//!
//! Lookup only; absence of a mapping is a normal outcome, never an
//! error. The three-to-two direction is hashed, the two-to-three
//! direction walks the index-parallel lists the way the data is
//! published.

pub(crate) mod data;

use self::data::*;

/// Reduce a three-letter language code to its two-letter form, trying
/// the canonical table first and the retired spellings second.
pub fn reduce_language(code3: &str) -> Option<&'static str> {
    LANGUAGE_3_TO_2
        .get(code3)
        .or_else(|| OBSOLETE_LANGUAGE_3_TO_2.get(code3))
        .copied()
}

/// Reduce a three-letter country code to its two-letter form.
pub fn reduce_country(code3: &str) -> Option<&'static str> {
    COUNTRY_3_TO_2
        .get(code3)
        .or_else(|| OBSOLETE_COUNTRY_3_TO_2.get(code3))
        .copied()
}

fn find(list: &[&str], target: &str) -> Option<usize> {
    list.iter().position(|c| *c == target)
}

/// Expand a two-letter language code to its three-letter form, or the
/// empty string when the tables have no entry.
pub fn iso3_language(language: &str) -> &'static str {
    if let Some(i) = find(LANGUAGES, language) {
        return LANGUAGES3[i];
    }
    if let Some(i) = find(OBSOLETE_LANGUAGES, language) {
        if i < OBSOLETE_LANGUAGES3.len() {
            return OBSOLETE_LANGUAGES3[i];
        }
    }
    ""
}

/// Expand a two-letter country code to its three-letter form, or the
/// empty string when the tables have no entry.
pub fn iso3_country(country: &str) -> &'static str {
    if let Some(i) = find(COUNTRIES, country) {
        return COUNTRIES3[i];
    }
    if let Some(i) = find(OBSOLETE_COUNTRIES, country) {
        return OBSOLETE_COUNTRIES3[i];
    }
    ""
}

/// The current spelling for a retired language code (`iw` -> `he`);
/// identity when the code is not retired.
pub fn current_language(code: &str) -> &str {
    match find(OBSOLETE_LANGUAGES, code) {
        Some(i) => REPLACEMENT_LANGUAGES[i],
        None => code,
    }
}

/// The current code for a deprecated country (`ZR` -> `CD`); identity
/// when the code is not deprecated.
pub fn current_country(code: &str) -> &str {
    match find(DEPRECATED_COUNTRIES, code) {
        Some(i) => REPLACEMENT_COUNTRIES[i],
        None => code,
    }
}

/// All known two-letter (or bare three-letter) language codes, sorted.
pub fn iso_languages() -> &'static [&'static str] {
    LANGUAGES
}

/// All known two-letter country codes, sorted.
pub fn iso_countries() -> &'static [&'static str] {
    COUNTRIES
}
