//! The display-data seam.
//!
//! Display-name localization lives outside this crate; what lives here
//! is the narrow contract a provider must satisfy and the fallback
//! walk every consumer performs: try the requested locale's bundle,
//! retry deprecated codes under their current spelling, follow the
//! bundle's declared fallback locale toward root, and finally give the
//! key itself back. Missing data is never an error.

use log::trace;

use crate::codes;

/// A source of localized display strings, keyed by table, optional
/// subtable, and item, per display locale.
pub trait ResourceProvider {
    /// The string for `item`, or `None` when this locale's bundle does
    /// not carry it.
    fn string(&self, table: &str, subtable: Option<&str>, item: &str, locale: &str) -> Option<String>;

    /// The fallback locale this bundle declares, if any. Empty or
    /// absent means root.
    fn fallback_of(&self, locale: &str) -> Option<String>;
}

/// Walk the fallback chain for a display string; the item key itself is
/// the final answer when nothing else is.
pub fn localized_string(
    provider: &dyn ResourceProvider,
    table: &str,
    subtable: Option<&str>,
    item: &str,
    display_locale: &str,
) -> String {
    if item.is_empty() {
        return String::new();
    }

    let mut locale = crate::locale::name(display_locale);
    // the chain is declared data; cap the walk in case it loops
    for _ in 0..16 {
        if let Some(s) = provider.string(table, subtable, item, &locale) {
            return s;
        }

        // a deprecated code may be filed under its current spelling
        if subtable.is_none() {
            let current = match table {
                "Countries" => codes::current_country(item),
                "Languages" => codes::current_language(item),
                _ => item,
            };
            if current != item {
                if let Some(s) = provider.string(table, subtable, current, &locale) {
                    return s;
                }
            }
        }

        let next = match provider.fallback_of(&locale) {
            Some(f) if !f.is_empty() => f,
            _ => "root".to_string(),
        };
        if next == locale {
            break;
        }
        trace!("display fallback: {locale} -> {next}");
        locale = next;
    }

    item.to_string()
}
