//! Likely-subtag inference: maximization and minimization.
//!
//! Lookups run over the static table at four fallback levels,
//! `lang_Script_RG` down to bare `lang`; the first hit wins. Subtags
//! the caller supplied are never overwritten, only absent ones are
//! filled from the matched entry. Neither operation can fail: an
//! identifier the table does not cover comes back unchanged.

pub(crate) mod data;

use log::trace;

use crate::locale::Locale;
use crate::parser::IdParser;

const UNDEFINED_LANGUAGE: &str = "und";
const UNDEFINED_SCRIPT: &str = "Zzzz";
const UNDEFINED_REGION: &str = "ZZ";

fn append_tag(tag: &str, buf: &mut String) {
    if !buf.is_empty() {
        buf.push('_');
    }
    buf.push_str(tag);
}

/// Build a tag from the given subtags, filling empty ones from
/// `alternates` (a full tag string) when provided. An absent language
/// becomes `und`. `trailing` is the variant/keyword suffix to reattach;
/// it is re-separated so the output is canonical (one separator after a
/// region, two when the variant follows a region-less base).
fn create_tag_string(lang: &str, script: &str, region: &str, trailing: &str, alternates: &str) -> String {
    let mut parser =
        (!alternates.is_empty()).then(|| IdParser::new(alternates));
    let mut tag = String::new();
    let mut region_appended = false;

    if !lang.is_empty() {
        append_tag(lang, &mut tag);
    } else {
        let alt = parser.as_mut().map(|p| p.language()).unwrap_or_default();
        append_tag(if alt.is_empty() { UNDEFINED_LANGUAGE } else { &alt }, &mut tag);
    }

    if !script.is_empty() {
        append_tag(script, &mut tag);
    } else if let Some(p) = parser.as_mut() {
        let alt = p.script();
        if !alt.is_empty() {
            append_tag(&alt, &mut tag);
        }
    }

    if !region.is_empty() {
        append_tag(region, &mut tag);
        region_appended = true;
    } else if let Some(p) = parser.as_mut() {
        let alt = p.country();
        if !alt.is_empty() {
            append_tag(&alt, &mut tag);
            region_appended = true;
        }
    }

    if !trailing.is_empty() {
        let body = trailing.trim_start_matches('_');
        if body.starts_with('@') {
            tag.push_str(body);
        } else {
            tag.push('_');
            if !region_appended {
                tag.push('_');
            }
            tag.push_str(body);
        }
    }

    tag
}

/// Split an identifier into (language, script, region, trailing),
/// normalizing an absent language to `und` and stripping the explicit
/// unknown script/region markers. `trailing` carries the variant and
/// keyword suffix, if any.
fn parse_tag_string(id: &str) -> (String, String, String, String) {
    let mut parser = IdParser::new(id);
    let (mut lang, mut script, mut region, variant) = parser.parts();

    if lang.is_empty() {
        lang = UNDEFINED_LANGUAGE.to_string();
    }
    if script == UNDEFINED_SCRIPT {
        script.clear();
    }
    if region == UNDEFINED_REGION {
        region.clear();
    }

    let trailing = if !variant.is_empty() {
        match id.find(&variant) {
            Some(i) if i > 0 => id[i - 1..].to_string(),
            // the variant text was rewritten during normalization; put
            // the suffix back together from the parsed pieces
            _ => {
                let keywords = id.find('@').map(|i| &id[i..]).unwrap_or("");
                format!("_{variant}{keywords}")
            }
        }
    } else {
        id.find('@').map(|i| id[i..].to_string()).unwrap_or_default()
    };

    (lang, script, region, trailing)
}

/// The four-level table walk. Returns the maximal tag with `trailing`
/// reattached, or `None` when no level matches. The language always
/// comes from the matched entry (it may be more specific than the
/// input); script and region are only taken for slots the input left
/// empty.
fn create_likely_subtags_string(lang: &str, script: &str, region: &str, trailing: &str) -> Option<String> {
    // language + script + region
    if !script.is_empty() && !region.is_empty() {
        let search = create_tag_string(lang, script, region, "", "");
        if let Some(max) = data::LIKELY_SUBTAGS.get(search.as_str()).copied() {
            return Some(create_tag_string("", "", "", trailing, max));
        }
    }

    // language + script
    if !script.is_empty() {
        let search = create_tag_string(lang, script, "", "", "");
        if let Some(max) = data::LIKELY_SUBTAGS.get(search.as_str()).copied() {
            return Some(create_tag_string("", "", region, trailing, max));
        }
    }

    // language + region
    if !region.is_empty() {
        let search = create_tag_string(lang, "", region, "", "");
        if let Some(max) = data::LIKELY_SUBTAGS.get(search.as_str()).copied() {
            return Some(create_tag_string("", script, "", trailing, max));
        }
    }

    // language alone
    let search = create_tag_string(lang, "", "", "", "");
    if let Some(max) = data::LIKELY_SUBTAGS.get(search.as_str()).copied() {
        return Some(create_tag_string("", script, region, trailing, max));
    }

    trace!("likely-subtags: no entry for {search}");
    None
}

/// Fill in the most likely script and region for an under-specified
/// locale: `zh` becomes `zh_Hans_CN`, `und_TW` becomes `zh_Hant_TW`.
/// Identifiers the table cannot maximize are returned unchanged.
pub fn add_likely_subtags(loc: &Locale) -> Locale {
    let (lang, script, region, trailing) = parse_tag_string(loc.name());
    match create_likely_subtags_string(&lang, &script, &region, &trailing) {
        Some(id) => Locale::new(&id),
        None => loc.clone(),
    }
}

/// Remove every subtag whose absence still maximizes back to the same
/// locale: `zh_Hans_CN` becomes `zh`. The variant and keywords ride
/// along untouched. Returns the input unchanged when nothing can be
/// removed, or when the language is unknown to the table.
pub fn minimize_subtags(loc: &Locale) -> Locale {
    let (lang, script, region, trailing) = parse_tag_string(loc.name());

    let Some(maximized) = create_likely_subtags_string(&lang, &script, &region, "") else {
        return loc.clone();
    };

    // language alone
    if let Some(tag) = create_likely_subtags_string(&lang, "", "", "") {
        if tag == maximized {
            return Locale::new(&create_tag_string(&lang, "", "", &trailing, ""));
        }
    }

    // language + region
    if !region.is_empty() {
        if let Some(tag) = create_likely_subtags_string(&lang, "", &region, "") {
            if tag == maximized {
                return Locale::new(&create_tag_string(&lang, "", &region, &trailing, ""));
            }
        }
    }

    // Language + script, the last chance: all three subtags together
    // would only reproduce the maximal form we already have.
    if !region.is_empty() && !script.is_empty() {
        if let Some(tag) = create_likely_subtags_string(&lang, &script, "", "") {
            if tag == maximized {
                return Locale::new(&create_tag_string(&lang, &script, "", &trailing, ""));
            }
        }
    }

    loc.clone()
}
