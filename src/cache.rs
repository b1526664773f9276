//! Process-wide cache of raw identifier -> normalized name.
//!
//! Normalization is pure, so concurrent misses may race to compute the
//! same value; whichever insert lands last wins and the rest are
//! discarded. The cache is bounded: at the cap the whole map is
//! dropped at once rather than tracking per-entry age.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::parser::IdParser;

const SOFT_CAP: usize = 512;

static NAME_CACHE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();

fn lock() -> std::sync::MutexGuard<'static, HashMap<String, String>> {
    NAME_CACHE
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// The normalized full name for `id`, computed at most once per cached
/// window.
pub(crate) fn name_of(id: &str) -> String {
    if let Some(hit) = lock().get(id) {
        return hit.clone();
    }
    let name = IdParser::new(id).name();
    let mut map = lock();
    if map.len() >= SOFT_CAP {
        map.clear();
    }
    map.insert(id.to_string(), name.clone());
    name
}
