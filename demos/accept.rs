//! Resolve an Accept-Language header against an available-locale set.
//!
//! ```sh
//! cargo run --example accept -- "fr-CH, fr;q=0.9, en;q=0.8"
//! ```

use locnorm::{Locale, accept_language};

fn main() {
    let header = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fr-CH, fr;q=0.9, en;q=0.8, de;q=0.7, *;q=0.5".to_string());

    let available: Vec<Locale> = ["en", "en_GB", "fr", "de", "zh_Hans"]
        .iter()
        .map(|id| Locale::new(id))
        .collect();

    match accept_language(&header, &available) {
        Ok((Some(matched), was_fallback)) => {
            println!("matched {matched} (fallback: {was_fallback})");
        }
        Ok((None, _)) => println!("no available locale matches"),
        Err(e) => eprintln!("bad header: {e}"),
    }
}
