//! The locale identifier value type.
//!
//! A `Locale` is an immutable, normalized identifier string; every
//! accessor re-derives its answer from that string, so two locales are
//! equal exactly when their normalized names are equal. Construction
//! never fails — malformed input normalizes to a best-effort form.

use std::borrow::Cow;
use std::fmt;

use memchr::{memchr, memrchr};

use crate::cache;
use crate::parser::{IdParser, compose_id};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    id: Cow<'static, str>,
}

// Well-known locales, in the spelling the normalizer would produce.
pub const ENGLISH: Locale = Locale::constant("en");
pub const FRENCH: Locale = Locale::constant("fr");
pub const GERMAN: Locale = Locale::constant("de");
pub const ITALIAN: Locale = Locale::constant("it");
pub const JAPANESE: Locale = Locale::constant("ja");
pub const KOREAN: Locale = Locale::constant("ko");
pub const CHINESE: Locale = Locale::constant("zh");
pub const SIMPLIFIED_CHINESE: Locale = Locale::constant("zh_Hans");
pub const TRADITIONAL_CHINESE: Locale = Locale::constant("zh_Hant");
pub const FRANCE: Locale = Locale::constant("fr_FR");
pub const GERMANY: Locale = Locale::constant("de_DE");
pub const ITALY: Locale = Locale::constant("it_IT");
pub const JAPAN: Locale = Locale::constant("ja_JP");
pub const KOREA: Locale = Locale::constant("ko_KR");
pub const CHINA: Locale = Locale::constant("zh_Hans_CN");
pub const TAIWAN: Locale = Locale::constant("zh_Hant_TW");
pub const UK: Locale = Locale::constant("en_GB");
pub const US: Locale = Locale::constant("en_US");
pub const CANADA: Locale = Locale::constant("en_CA");
pub const CANADA_FRENCH: Locale = Locale::constant("fr_CA");
pub const ROOT: Locale = Locale::constant("");

impl Locale {
    /// Build from a raw identifier string; the id is normalized (case,
    /// separators, keyword order) but not canonicalized — use
    /// [`crate::canonicalize`] first to also resolve legacy aliases.
    pub fn new(id: &str) -> Self {
        Locale { id: Cow::Owned(cache::name_of(id)) }
    }

    /// A canonicalized locale: alias resolution plus normalization.
    pub fn new_canonical(id: &str) -> Self {
        Locale { id: Cow::Owned(crate::canonical::canonicalize(id)) }
    }

    const fn constant(id: &'static str) -> Self {
        Locale { id: Cow::Borrowed(id) }
    }

    /// Build from discrete language and country subtags.
    pub fn from_parts(language: &str, country: &str) -> Self {
        Self::new(&compose_id(language, "", country, ""))
    }

    /// Build from discrete language, country, and variant subtags.
    pub fn from_parts_variant(language: &str, country: &str, variant: &str) -> Self {
        Self::new(&compose_id(language, "", country, variant))
    }

    /// The full normalized name, keywords included.
    pub fn name(&self) -> &str {
        &self.id
    }

    /// The normalized name without keywords.
    pub fn base_name(&self) -> String {
        base_name(&self.id)
    }

    /// The lowercase language subtag, or empty.
    pub fn language(&self) -> String {
        IdParser::new(&self.id).language()
    }

    /// The title-case script subtag, or empty.
    pub fn script(&self) -> String {
        IdParser::new(&self.id).script()
    }

    /// The uppercase country subtag, or empty.
    pub fn country(&self) -> String {
        IdParser::new(&self.id).country()
    }

    /// The uppercase variant subtags, or empty.
    pub fn variant(&self) -> String {
        IdParser::new(&self.id).variant()
    }

    /// The value of a keyword (name is case-insensitive), if set.
    pub fn keyword_value(&self, name: &str) -> Option<String> {
        IdParser::new(&self.id).keyword_value(name)
    }

    /// The keyword names, sorted; empty when there are none.
    pub fn keywords(&self) -> Vec<String> {
        IdParser::new(&self.id).keyword_map().keys().cloned().collect()
    }

    /// A copy of this locale with the keyword set, or removed when
    /// `value` is `None`. Empty names and values leave the locale
    /// unchanged.
    pub fn set_keyword_value(&self, name: &str, value: Option<&str>) -> Locale {
        Locale { id: Cow::Owned(set_keyword_value(&self.id, name, value)) }
    }

    /// The parent in the fallback chain: the name minus its last
    /// subtag, keywords preserved. `None` once the root is reached.
    pub fn fallback(&self) -> Option<Locale> {
        if self.id.is_empty() || self.id.starts_with('@') {
            return None;
        }
        Some(Locale { id: Cow::Owned(fallback_string(&self.id)) })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locale({})", self.id)
    }
}

impl From<&str> for Locale {
    fn from(id: &str) -> Self {
        Locale::new(id)
    }
}

// string-level forms of the accessors, for callers that never build a
// Locale value

/// The normalized full name for an identifier (cached).
pub fn name(id: &str) -> String {
    cache::name_of(id)
}

/// The normalized base name; an id with no keyword section passes
/// through untouched.
pub fn base_name(id: &str) -> String {
    if memchr(b'@', id.as_bytes()).is_none() {
        return id.to_string();
    }
    IdParser::new(id).base_name()
}

pub fn language(id: &str) -> String {
    IdParser::new(id).language()
}

pub fn script(id: &str) -> String {
    IdParser::new(id).script()
}

pub fn country(id: &str) -> String {
    IdParser::new(id).country()
}

pub fn variant(id: &str) -> String {
    IdParser::new(id).variant()
}

pub fn keyword_value(id: &str, name: &str) -> Option<String> {
    IdParser::new(id).keyword_value(name)
}

/// The identifier with the keyword set (or removed when `value` is
/// `None`), re-serialized in normalized form.
pub fn set_keyword_value(id: &str, name: &str, value: Option<&str>) -> String {
    let mut parser = IdParser::new(id);
    parser.set_keyword_value(name, value);
    parser.name()
}

/// The normalized name minus its last base-name subtag; the keyword
/// section, if any, is carried over verbatim.
pub fn fallback(id: &str) -> String {
    fallback_string(&name(id))
}

fn fallback_string(id: &str) -> String {
    let bytes = id.as_bytes();
    let limit = memchr(b'@', bytes).unwrap_or(id.len());
    let start = memrchr(b'_', &bytes[..limit]).unwrap_or(0);
    format!("{}{}", &id[..start], &id[limit..])
}
