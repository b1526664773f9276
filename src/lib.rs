pub mod accept;
pub mod canonical;
pub mod codes;
pub mod likely;
pub mod locale;
pub mod provider;

mod cache;
mod parser;

pub use accept::{AcceptError, accept_language, accept_language_from};
pub use canonical::canonicalize;
pub use likely::{add_likely_subtags, minimize_subtags};
pub use locale::Locale;
pub use locale::{
    CANADA, CANADA_FRENCH, CHINA, CHINESE, ENGLISH, FRANCE, FRENCH, GERMAN, GERMANY, ITALIAN,
    ITALY, JAPAN, JAPANESE, KOREA, KOREAN, ROOT, SIMPLIFIED_CHINESE, TAIWAN,
    TRADITIONAL_CHINESE, UK, US,
};
pub use provider::{ResourceProvider, localized_string};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
