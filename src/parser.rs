//! Identifier tokenizer.
//!
//! A cursor over the raw identifier with single-step unget and explicit
//! rollback marks, feeding an append-only normalization buffer. Field
//! extraction is length-driven (4 chars = script, 2-3 chars = region)
//! and never fails: whatever does not fit a field flows into the next
//! one or is dropped. Each parse owns its scanner; nothing is shared
//! between calls.

use std::collections::BTreeMap;

use crate::codes;

pub(crate) const KEYWORD_SEPARATOR: char = '@';
pub(crate) const UNDERSCORE: char = '_';
const HYPHEN: char = '-';
const KEYWORD_ASSIGN: char = '=';
const COMMA: char = ',';
const ITEM_SEPARATOR: char = ';';
const DOT: char = '.';

/// Sentinel returned by the scanner past the end of input.
const DONE: char = '\u{ffff}';

struct Scanner {
    id: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(id: &str) -> Self {
        Scanner { id: id.chars().collect(), pos: 0 }
    }

    /// Returns the character at the cursor and advances. Advances even at
    /// the end of input so that `unget` always rewinds exactly one step.
    fn next(&mut self) -> char {
        if self.pos == self.id.len() {
            self.pos += 1;
            return DONE;
        }
        let c = self.id[self.pos];
        self.pos += 1;
        c
    }

    fn unget(&mut self) {
        self.pos -= 1;
    }

    fn mark(&self) -> usize {
        self.pos
    }

    fn rollback(&mut self, mark: usize) {
        self.pos = mark;
    }

    fn at_terminator(&self) -> bool {
        self.pos >= self.id.len() || is_terminator(self.id[self.pos])
    }

    /// Leaves the cursor on the next terminator or id separator.
    fn skip_until_terminator_or_separator(&mut self) {
        while !is_terminator_or_separator(self.next()) {}
        self.unget();
    }

    /// True if the raw id opens with the experimental/private prefix
    /// `[ixIX][-_].`.
    fn has_experimental_prefix(&self) -> bool {
        if self.id.len() > 2 && matches!(self.id[1], HYPHEN | UNDERSCORE) {
            return matches!(self.id[0], 'x' | 'X' | 'i' | 'I');
        }
        false
    }

    /// True if a keyword assign occurs at or after the cursor.
    fn has_keyword_assign(&self) -> bool {
        self.id[self.pos.min(self.id.len())..].contains(&KEYWORD_ASSIGN)
    }
}

fn is_separator(c: char) -> bool {
    c == UNDERSCORE || c == HYPHEN
}

/// Dot terminates because of the POSIX form, where it precedes the
/// codepage.
fn is_terminator(c: char) -> bool {
    c == KEYWORD_SEPARATOR || c == DONE || c == DOT
}

fn is_terminator_or_separator(c: char) -> bool {
    is_terminator(c) || is_separator(c)
}

/// One-shot parser over a raw locale identifier.
///
/// Accessors re-scan from the start, so they may be called in any order;
/// `parts` and `name` do a single pass. Buffer positions are byte
/// offsets into the normalization buffer, only ever taken at boundaries
/// the parser itself wrote.
pub(crate) struct IdParser {
    scan: Scanner,
    buf: String,
    had_country: bool,
    canonicalizing: bool,
    keywords: Option<BTreeMap<String, String>>,
    base_override: Option<String>,
}

impl IdParser {
    pub(crate) fn new(id: &str) -> Self {
        Self::with_mode(id, false)
    }

    /// In canonicalizing mode an `@` opens the keyword list only when an
    /// `=` follows somewhere after it; a bare `@` suffix stays part of
    /// the POSIX variant.
    pub(crate) fn with_mode(id: &str, canonicalizing: bool) -> Self {
        IdParser {
            scan: Scanner::new(id),
            buf: String::with_capacity(id.len() + 5),
            had_country: false,
            canonicalizing,
            keywords: None,
            base_override: None,
        }
    }

    fn reset(&mut self) {
        self.scan.pos = 0;
        self.buf.clear();
    }

    fn string_from(&self, start: usize) -> String {
        self.buf[start..].to_string()
    }

    /// Truncate the buffer to `pos` and append `s`.
    fn set(&mut self, pos: usize, s: &str) {
        self.buf.truncate(pos);
        self.buf.push_str(s);
    }

    // field extraction, in slot order

    /// Consume the language, lowercased, reducing a three-letter code to
    /// its two-letter form when one exists. Returns the buffer start of
    /// the language (always 0).
    fn parse_language(&mut self) -> usize {
        if self.scan.has_experimental_prefix() {
            let c = self.scan.id[0];
            self.buf.push(c.to_ascii_lowercase());
            self.buf.push(HYPHEN);
            self.scan.pos = 2;
        }

        loop {
            let c = self.scan.next();
            if is_terminator_or_separator(c) {
                break;
            }
            self.buf.push(c.to_ascii_lowercase());
        }
        self.scan.unget();

        if self.buf.len() == 3 {
            if let Some(two) = codes::reduce_language(&self.buf) {
                self.set(0, two);
            }
        }

        0
    }

    fn skip_language(&mut self) {
        if self.scan.has_experimental_prefix() {
            self.scan.pos = 2;
        }
        self.scan.skip_until_terminator_or_separator();
    }

    /// Consume the script if the next segment is exactly four characters,
    /// title-cased into the buffer; anything else rolls back untouched.
    /// Returns the buffer start of the script text.
    fn parse_script(&mut self) -> usize {
        if self.scan.at_terminator() {
            return self.buf.len();
        }
        let scan_mark = self.scan.mark();
        self.scan.pos += 1; // past the separator

        let mut buf_mark = self.buf.len();
        loop {
            let c = self.scan.next();
            if is_terminator_or_separator(c) {
                break;
            }
            if self.buf.len() == buf_mark {
                self.buf.push(UNDERSCORE);
                self.buf.push(c.to_ascii_uppercase());
            } else {
                self.buf.push(c.to_ascii_lowercase());
            }
        }
        self.scan.unget();

        // 4 chars + 1 separator, or it is not a script
        if self.scan.pos - scan_mark != 5 {
            self.scan.rollback(scan_mark);
            self.buf.truncate(buf_mark);
        } else {
            buf_mark += 1; // past the separator
        }
        buf_mark
    }

    fn skip_script(&mut self) {
        if !self.scan.at_terminator() {
            let mark = self.scan.mark();
            self.scan.pos += 1;
            self.scan.skip_until_terminator_or_separator();
            if self.scan.pos - mark != 5 {
                self.scan.rollback(mark);
            }
        }
    }

    /// Consume the region: two or three characters, uppercased, with a
    /// three-letter code reduced to two when the tables know it. Any
    /// other length rolls back. Returns the buffer start of the region.
    fn parse_country(&mut self) -> usize {
        if self.scan.at_terminator() {
            return self.buf.len();
        }
        let scan_mark = self.scan.mark();
        self.scan.pos += 1;

        let mut buf_mark = self.buf.len();
        loop {
            let c = self.scan.next();
            if is_terminator_or_separator(c) {
                break;
            }
            if self.buf.len() == buf_mark {
                self.had_country = true; // variant parsing wants to know
                self.buf.push(UNDERSCORE);
                buf_mark += 1;
            }
            self.buf.push(c.to_ascii_uppercase());
        }
        self.scan.unget();

        let appended = self.buf.len() - buf_mark;
        if appended == 0 {
            // nothing there; leave the cursor where it is
        } else if !(2..=3).contains(&appended) {
            self.scan.rollback(scan_mark);
            buf_mark -= 1; // drop the separator too
            self.buf.truncate(buf_mark);
            self.had_country = false;
        } else if appended == 3 {
            if let Some(two) = codes::reduce_country(&self.buf[buf_mark..]) {
                self.set(buf_mark, two);
            }
        }
        buf_mark
    }

    fn skip_country(&mut self) {
        if !self.scan.at_terminator() {
            self.scan.pos += 1;
            let mark = self.scan.mark();
            self.scan.skip_until_terminator_or_separator();
            let skipped = self.scan.pos - mark;
            if !(2..=3).contains(&skipped) {
                self.scan.rollback(mark);
            }
        }
    }

    /// Consume the variant: the rest of the id up to the keyword list,
    /// uppercased, `-`/`,` folded to `_`. A dot starts POSIX codepage
    /// text, which is dropped. When no region was seen, the variant gets
    /// a second leading separator to keep its slot position. Returns the
    /// buffer start of the variant text.
    fn parse_variant(&mut self) -> usize {
        let mut buf_mark = self.buf.len();

        let mut start = true;
        let mut need_separator = true;
        let mut skipping = false;
        loop {
            let mut c = self.scan.next();
            if c == DONE {
                break;
            }
            if c == DOT {
                start = false;
                skipping = true;
            } else if c == KEYWORD_SEPARATOR {
                if self.scan.has_keyword_assign() {
                    break;
                }
                skipping = false;
                start = false;
                need_separator = true; // another underscore if more text follows
            } else if start {
                start = false;
            } else if !skipping {
                if need_separator {
                    let first = self.buf.len() == buf_mark;
                    need_separator = false;
                    if first && !self.had_country {
                        self.buf.push(UNDERSCORE);
                        buf_mark += 1;
                    }
                    self.buf.push(UNDERSCORE);
                    if first {
                        buf_mark += 1;
                    }
                }
                c = c.to_ascii_uppercase();
                if c == HYPHEN || c == COMMA {
                    c = UNDERSCORE;
                }
                self.buf.push(c);
            }
        }
        self.scan.unget();

        buf_mark
    }

    // public extraction entry points

    pub(crate) fn language(&mut self) -> String {
        self.reset();
        let start = self.parse_language();
        self.string_from(start)
    }

    pub(crate) fn script(&mut self) -> String {
        self.reset();
        self.skip_language();
        let start = self.parse_script();
        self.string_from(start)
    }

    pub(crate) fn country(&mut self) -> String {
        self.reset();
        self.skip_language();
        self.skip_script();
        let start = self.parse_country();
        self.string_from(start)
    }

    pub(crate) fn variant(&mut self) -> String {
        self.reset();
        self.skip_language();
        self.skip_script();
        self.skip_country();
        let start = self.parse_variant();
        self.string_from(start)
    }

    /// Language, script, country, and variant in one pass.
    pub(crate) fn parts(&mut self) -> (String, String, String, String) {
        self.reset();
        let start = self.parse_language();
        let language = self.string_from(start);
        let start = self.parse_script();
        let script = self.string_from(start);
        let start = self.parse_country();
        let country = self.string_from(start);
        let start = self.parse_variant();
        let variant = self.string_from(start);
        (language, script, country, variant)
    }

    /// Replace the parsed base name wholesale; `base_name` and `name`
    /// will serialize this string instead of re-deriving it.
    pub(crate) fn set_base_name(&mut self, base: String) {
        self.base_override = Some(base);
    }

    fn build_base_name(&mut self) {
        if let Some(base) = &self.base_override {
            let base = base.clone();
            self.set(0, &base);
        } else {
            self.reset();
            self.parse_language();
            self.parse_script();
            self.parse_country();
            self.parse_variant();

            // country with no variant leaves a dangling separator
            if self.buf.len() > 1 && self.buf.ends_with(UNDERSCORE) {
                self.buf.pop();
            }
        }
    }

    /// The normalized base form, without keywords.
    pub(crate) fn base_name(&mut self) -> String {
        if let Some(base) = &self.base_override {
            return base.clone();
        }
        self.build_base_name();
        self.buf.clone()
    }

    /// The normalized full form, keywords included.
    pub(crate) fn name(&mut self) -> String {
        self.build_base_name();
        self.append_keywords();
        self.buf.clone()
    }

    // keywords

    /// Position the cursor on the first keyword and return true, or
    /// return false if the id has no keyword list.
    fn seek_keyword_start(&mut self) -> bool {
        let mut i = self.scan.pos.min(self.scan.id.len());
        while i < self.scan.id.len() {
            if self.scan.id[i] == KEYWORD_SEPARATOR {
                if self.canonicalizing {
                    // only a real keyword list, i.e. one with an assign
                    for j in i + 1..self.scan.id.len() {
                        if self.scan.id[j] == KEYWORD_ASSIGN {
                            self.scan.pos = i + 1;
                            return true;
                        }
                    }
                } else if i + 1 < self.scan.id.len() {
                    self.scan.pos = i + 1;
                    return true;
                }
                break;
            }
            i += 1;
        }
        false
    }

    fn scan_keyword(&mut self) -> String {
        let start = self.scan.mark();
        loop {
            let c = self.scan.next();
            if c == DONE || c == KEYWORD_ASSIGN {
                break;
            }
        }
        self.scan.unget();
        let raw: String = self.scan.id[start..self.scan.pos].iter().collect();
        raw.trim().to_lowercase()
    }

    fn scan_value(&mut self) -> String {
        let start = self.scan.mark();
        loop {
            let c = self.scan.next();
            if c == DONE || c == ITEM_SEPARATOR || c == COMMA {
                break;
            }
        }
        self.scan.unget();
        let raw: String = self.scan.id[start..self.scan.pos].iter().collect();
        raw.trim().to_string() // value case is preserved
    }

    /// Parse (once) and return the keyword map. Malformed entries are
    /// dropped without comment: empty keys end the list, empty values
    /// and duplicate keys lose, first occurrence wins.
    pub(crate) fn keyword_map(&mut self) -> &BTreeMap<String, String> {
        if self.keywords.is_none() {
            let mut map = BTreeMap::new();
            if self.seek_keyword_start() {
                loop {
                    let key = self.scan_keyword();
                    if key.is_empty() {
                        break;
                    }
                    let c = self.scan.next();
                    if c != KEYWORD_ASSIGN {
                        if c == DONE {
                            break;
                        }
                        // pair without a value; skip to the separator check
                    } else {
                        let value = self.scan_value();
                        if !value.is_empty() && !map.contains_key(&key) {
                            map.insert(key, value);
                        }
                    }
                    let c = self.scan.next();
                    if c != ITEM_SEPARATOR && c != COMMA {
                        break;
                    }
                }
            }
            self.keywords = Some(map);
        }
        self.keywords.as_ref().expect("just populated")
    }

    fn append_keywords(&mut self) {
        let map = self.keyword_map();
        if map.is_empty() {
            return;
        }
        let rendered: Vec<(String, String)> =
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        for (i, (key, value)) in rendered.iter().enumerate() {
            self.buf.push(if i == 0 { KEYWORD_SEPARATOR } else { COMMA });
            self.buf.push_str(key);
            self.buf.push(KEYWORD_ASSIGN);
            self.buf.push_str(value);
        }
    }

    pub(crate) fn keyword_value(&mut self, name: &str) -> Option<String> {
        let key = name.trim().to_lowercase();
        self.keyword_map().get(&key).cloned()
    }

    /// Set the keyword only if it is not already present.
    pub(crate) fn default_keyword_value(&mut self, name: &str, value: &str) {
        self.put_keyword_value(name, Some(value), false);
    }

    /// Set or (with `None`) remove the keyword. Empty names and values
    /// are ignored, matching the parser's silent-drop policy.
    pub(crate) fn set_keyword_value(&mut self, name: &str, value: Option<&str>) {
        self.put_keyword_value(name, value, true);
    }

    fn put_keyword_value(&mut self, name: &str, value: Option<&str>, reset: bool) {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        let value = value.map(str::trim);
        if value == Some("") {
            return;
        }
        self.keyword_map();
        let map = self.keywords.as_mut().expect("just populated");
        match value {
            Some(v) => {
                if reset || !map.contains_key(&key) {
                    map.insert(key, v.to_string());
                }
            }
            None => {
                if reset {
                    map.remove(&key);
                }
            }
        }
    }
}

/// Join discrete subtags into the flat underscore form. A variant with
/// no country gets the double separator that keeps its slot readable.
pub(crate) fn compose_id(lang: &str, script: &str, country: &str, variant: &str) -> String {
    let mut buf = String::new();
    if !lang.is_empty() {
        buf.push_str(lang);
    }
    if !script.is_empty() {
        buf.push(UNDERSCORE);
        buf.push_str(script);
    }
    if !country.is_empty() {
        buf.push(UNDERSCORE);
        buf.push_str(country);
    }
    if !variant.is_empty() {
        if country.is_empty() {
            buf.push(UNDERSCORE);
        }
        buf.push(UNDERSCORE);
        buf.push_str(variant);
    }
    buf
}
