//! Canonicalize identifiers given on the command line.
//!
//! ```sh
//! cargo run --example canonicalize -- en-us zh_CHS "ca_ES_PREEURO" C
//! ```

use locnorm::{Locale, add_likely_subtags, canonicalize, minimize_subtags};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let ids: Vec<&str> = if args.is_empty() {
        vec!["en-us", "zh_CHS", "ca_ES_PREEURO", "C", "en_US.utf8@EURO"]
    } else {
        args.iter().map(String::as_str).collect()
    };

    for id in ids {
        let canonical = canonicalize(id);
        let loc = Locale::new(&canonical);
        println!(
            "{id:24} -> {canonical:24} maximal: {:16} minimal: {}",
            add_likely_subtags(&loc).name(),
            minimize_subtags(&loc).name(),
        );
    }
}
