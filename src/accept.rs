//! HTTP `Accept-Language` parsing and resolution.
//!
//! The parser is a character state machine over the RFC 2616 grammar
//! `range[;q=value][,range[;q=value]]*`, with a lenient mode that
//! tolerates `_` inside ranges and a bare leading `.` in q-values.
//! This is the one place in the crate where malformed input is an
//! error; everything downstream of a successful parse degrades
//! silently.

use log::debug;
use smallvec::SmallVec;
use thiserror::Error;

use crate::canonical::canonicalize;
use crate::locale::Locale;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AcceptError {
    #[error("invalid Accept-Language list at offset {0}")]
    Syntax(usize),
}

struct Range {
    locale: Locale,
    q: f64,
    serial: usize,
}

/// Parse an `Accept-Language` list into locales ordered by preference:
/// q-value descending, ties broken by position (first listed wins).
/// Wildcard ranges are validated but dropped; they can never name an
/// available locale.
pub(crate) fn parse_accept_language(header: &str, lenient: bool) -> Result<Vec<Locale>, AcceptError> {
    let mut ranges: SmallVec<[Range; 4]> = SmallVec::new();
    let mut range_buf = String::new();
    let mut qval_buf = String::new();
    let mut state = 0i32;
    let mut sub_tag = false;
    let mut q1 = false;

    // a trailing comma closes the final entry like any other
    let mut offset = 0;
    for (n, c) in header.chars().chain(std::iter::once(',')).enumerate() {
        offset = n;
        let mut got_entry = false;
        match state {
            0 => {
                // before a language-range
                if c.is_ascii_alphabetic() {
                    range_buf.push(c);
                    state = 1;
                    sub_tag = false;
                } else if c == '*' {
                    range_buf.push(c);
                    state = 2;
                } else if c != ' ' && c != '\t' {
                    state = -1;
                }
            }
            1 => {
                // inside a language-range
                if c.is_ascii_alphabetic() {
                    range_buf.push(c);
                } else if c == '-' {
                    sub_tag = true;
                    range_buf.push(c);
                } else if c == '_' {
                    if lenient {
                        sub_tag = true;
                        range_buf.push(c);
                    } else {
                        state = -1;
                    }
                } else if c.is_ascii_digit() {
                    // digits are only valid past the first subtag
                    if sub_tag {
                        range_buf.push(c);
                    } else {
                        state = -1;
                    }
                } else if c == ',' {
                    got_entry = true;
                } else if c == ' ' || c == '\t' {
                    state = 3;
                } else if c == ';' {
                    state = 4;
                } else {
                    state = -1;
                }
            }
            2 => {
                // saw a wildcard range
                if c == ',' {
                    got_entry = true;
                } else if c == ' ' || c == '\t' {
                    state = 3;
                } else if c == ';' {
                    state = 4;
                } else {
                    state = -1;
                }
            }
            3 => {
                // after a language-range
                if c == ',' {
                    got_entry = true;
                } else if c == ';' {
                    state = 4;
                } else if c != ' ' && c != '\t' {
                    state = -1;
                }
            }
            4 => {
                // before q
                if c == 'q' {
                    state = 5;
                } else if c != ' ' && c != '\t' {
                    state = -1;
                }
            }
            5 => {
                // before the equals sign
                if c == '=' {
                    state = 6;
                } else if c != ' ' && c != '\t' {
                    state = -1;
                }
            }
            6 => {
                // before the q value
                if c == '0' {
                    q1 = false;
                    qval_buf.push(c);
                    state = 7;
                } else if c == '1' {
                    q1 = true;
                    qval_buf.push(c);
                    state = 7;
                } else if c == '.' {
                    if lenient {
                        qval_buf.push(c);
                        state = 8;
                    } else {
                        state = -1;
                    }
                } else if c != ' ' && c != '\t' {
                    state = -1;
                }
            }
            7 => {
                // integer part seen
                if c == '.' {
                    qval_buf.push(c);
                    state = 8;
                } else if c == ',' {
                    got_entry = true;
                } else if c == ' ' || c == '\t' {
                    state = 10;
                } else {
                    state = -1;
                }
            }
            8 => {
                // before the fraction
                if c.is_ascii_digit() {
                    if q1 && c != '0' && !lenient {
                        // a q of 1 only allows zero fraction digits
                        state = -1;
                    } else {
                        qval_buf.push(c);
                        state = 9;
                    }
                } else {
                    state = -1;
                }
            }
            9 => {
                // inside the fraction
                if c.is_ascii_digit() {
                    if q1 && c != '0' && !lenient {
                        state = -1;
                    } else {
                        qval_buf.push(c);
                    }
                } else if c == ',' {
                    got_entry = true;
                } else if c == ' ' || c == '\t' {
                    state = 10;
                } else {
                    state = -1;
                }
            }
            _ => {
                // after the q value
                if c == ',' {
                    got_entry = true;
                } else if c != ' ' && c != '\t' {
                    state = -1;
                }
            }
        }
        if state == -1 {
            return Err(AcceptError::Syntax(n));
        }
        if got_entry {
            let q = if qval_buf.is_empty() {
                1.0
            } else {
                qval_buf.parse::<f64>().unwrap_or(1.0).min(1.0)
            };
            if !range_buf.starts_with('*') {
                ranges.push(Range {
                    locale: Locale::new(&canonicalize(&range_buf)),
                    q,
                    serial: ranges.len(),
                });
            }
            range_buf.clear();
            qval_buf.clear();
            state = 0;
        }
    }
    if state != 0 {
        // the machine covers every exit; just in case
        return Err(AcceptError::Syntax(offset));
    }

    ranges.sort_by(|a, b| b.q.total_cmp(&a.q).then(a.serial.cmp(&b.serial)));
    Ok(ranges.into_iter().map(|r| r.locale).collect())
}

/// Pick an available locale for an HTTP `Accept-Language` list. Returns
/// the matched locale (or `None` when nothing matches at all) and a
/// flag that is `false` exactly when the most-preferred range matched
/// without any parent fallback.
pub fn accept_language(header: &str, available: &[Locale]) -> Result<(Option<Locale>, bool), AcceptError> {
    let candidates = parse_accept_language(header, true)?;
    Ok(accept_language_from(&candidates, available))
}

/// As [`accept_language`], over an already-ordered candidate list
/// (most preferred first).
pub fn accept_language_from(candidates: &[Locale], available: &[Locale]) -> (Option<Locale>, bool) {
    for (rank, candidate) in candidates.iter().enumerate() {
        let mut step = 0usize;
        let mut current = Some(candidate.clone());
        while let Some(loc) = current {
            if let Some(found) = available.iter().find(|avail| **avail == loc) {
                return (Some(found.clone()), !(rank == 0 && step == 0));
            }
            debug!("accept-language: {} unavailable, walking to parent", loc.name());
            step += 1;
            current = loc.fallback();
        }
    }
    (None, true)
}
