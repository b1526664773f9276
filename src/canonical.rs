//! Identifier canonicalization.
//!
//! Rewrites POSIX, grandfathered, Linux/.NET and legacy ICU spellings
//! into the canonical form, converting currency/collation/calendar
//! variants into keywords along the way. Never fails: an id the tables
//! do not know comes back normalized but otherwise untouched.

pub(crate) mod data;

use log::debug;

use crate::parser::{IdParser, compose_id};

/// A base-name rewrite, optionally carrying a keyword to set when the
/// id itself does not already set it.
pub(crate) struct AliasEntry {
    pub(crate) from: &'static str,
    pub(crate) to: &'static str,
    pub(crate) keyword: Option<&'static str>,
    pub(crate) value: Option<&'static str>,
}

/// A variant token that folds into a keyword.
pub(crate) struct VariantKeyword {
    pub(crate) variant: &'static str,
    pub(crate) keyword: &'static str,
    pub(crate) value: &'static str,
}

/// Returns the canonical form of a locale identifier. POSIX and other
/// grandfathered ids convert to their standard spelling; keywords come
/// out sorted. The empty id stays empty rather than acquiring a
/// default.
pub fn canonicalize(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }

    let mut parser = IdParser::with_mode(id, true);
    let mut base = parser.base_name();
    let mut rewritten = false;

    // convert a trailing currency/collation variant into its keyword
    for vk in data::VARIANT_KEYWORDS {
        let suffix_at = base
            .len()
            .checked_sub(vk.variant.len() + 1)
            .filter(|&i| base[i..].starts_with('_') && base[i + 1..] == *vk.variant);
        if let Some(mut idx) = suffix_at {
            rewritten = true;
            base.truncate(idx);
            if base.ends_with('_') {
                idx -= 1;
                base.truncate(idx);
            }
            parser.set_base_name(base.clone());
            parser.default_keyword_value(vk.keyword, vk.value);
            break;
        }
    }

    // A known legacy id? ASCII-case-insensitive: normalization has
    // already case-folded the base name, which would otherwise miss
    // entries spelled in their traditional case, POSIX "C" above all.
    for entry in data::ALIASES {
        if entry.from.eq_ignore_ascii_case(&base) {
            rewritten = true;
            debug!("canonicalize: alias {} -> {}", entry.from, entry.to);
            parser.set_base_name(entry.to.to_string());
            if let (Some(kw), Some(value)) = (entry.keyword, entry.value) {
                parser.default_keyword_value(kw, value);
            }
            break;
        }
    }

    // Norwegian Nynorsk spelled as a bokmål variant: rewrite the
    // language, keep script and region.
    if !rewritten && parser.language() == "nb" && parser.variant() == "NY" {
        let script = parser.script();
        let country = parser.country();
        parser.set_base_name(compose_id("nn", &script, &country, ""));
    }

    parser.name()
}
