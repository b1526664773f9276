#[cfg(test)]
mod integration_tests {

    use std::collections::HashMap;

    use crate::locale::Locale;
    use crate::provider::{ResourceProvider, localized_string};
    use crate::{accept, add_likely_subtags, canonicalize, minimize_subtags};

    #[test]
    fn maximize_fills_script_and_region() {
        assert_eq!(add_likely_subtags(&Locale::new("zh")).name(), "zh_Hans_CN");
        assert_eq!(add_likely_subtags(&Locale::new("zh_TW")).name(), "zh_Hant_TW");
        assert_eq!(add_likely_subtags(&Locale::new("und_TW")).name(), "zh_Hant_TW");
        assert_eq!(add_likely_subtags(&Locale::new("sr")).name(), "sr_Cyrl_RS");
        assert_eq!(add_likely_subtags(&Locale::new("")).name(), "en_Latn_US");
    }

    #[test]
    fn maximize_keeps_supplied_subtags() {
        // region given by the caller survives a script-level table hit
        assert_eq!(add_likely_subtags(&Locale::new("zh_Hant_MO")).name(), "zh_Hant_MO");
        assert_eq!(add_likely_subtags(&Locale::new("ru_UA")).name(), "ru_Cyrl_UA");
    }

    #[test]
    fn maximize_strips_unknown_markers() {
        assert_eq!(add_likely_subtags(&Locale::new("zh_Zzzz_ZZ")).name(), "zh_Hans_CN");
    }

    #[test]
    fn maximize_leaves_unknown_ids_alone() {
        let loc = Locale::new("xx_YY");
        assert_eq!(add_likely_subtags(&loc), loc);
    }

    #[test]
    fn minimize_removes_inferable_subtags() {
        assert_eq!(minimize_subtags(&Locale::new("zh_Hans_CN")).name(), "zh");
        assert_eq!(minimize_subtags(&Locale::new("zh_Hant_TW")).name(), "zh_TW");
        assert_eq!(minimize_subtags(&Locale::new("en_Latn_US")).name(), "en");
    }

    #[test]
    fn maximize_and_minimize_carry_the_suffix() {
        assert_eq!(
            add_likely_subtags(&Locale::new("zh@collation=pinyin")).name(),
            "zh_Hans_CN@collation=pinyin"
        );
        assert_eq!(
            minimize_subtags(&Locale::new("zh_Hans_CN@collation=pinyin")).name(),
            "zh@collation=pinyin"
        );
        assert_eq!(
            add_likely_subtags(&Locale::new("en_US_POSIX")).name(),
            "en_Latn_US_POSIX"
        );
        assert_eq!(
            minimize_subtags(&Locale::new("en_Latn_US_POSIX")).name(),
            "en__POSIX"
        );
    }

    #[test]
    fn canonicalize_then_maximize() {
        // legacy .NET spelling, through the whole pipeline
        let canonical = canonicalize("zh_CHS");
        assert_eq!(canonical, "zh_Hans");
        assert_eq!(add_likely_subtags(&Locale::new(&canonical)).name(), "zh_Hans_CN");
        assert_eq!(minimize_subtags(&Locale::new(&canonical)).name(), "zh");
    }

    #[test]
    fn resolver_consumes_canonicalized_ranges() {
        // POSIX spelling in the header still finds the canonical locale
        let available = [Locale::new("en_US_POSIX"), Locale::new("fr")];
        let (matched, was_fallback) = accept::accept_language("C", &available).unwrap();
        assert_eq!(matched.unwrap().name(), "en_US_POSIX");
        assert!(!was_fallback);
    }

    #[test]
    fn resolver_walks_the_fallback_chain() {
        let available = [Locale::new("zh_Hant"), Locale::new("en")];
        let (matched, was_fallback) =
            accept::accept_language("zh-Hant-TW;q=0.9, en;q=0.1", &available).unwrap();
        assert_eq!(matched.unwrap().name(), "zh_Hant");
        assert!(was_fallback);
    }

    #[test]
    fn locale_from_parts() {
        assert_eq!(Locale::from_parts("EN", "us").name(), "en_US");
        assert_eq!(Locale::from_parts_variant("de", "DE", "posix").name(), "de_DE_POSIX");
        assert_eq!(Locale::from_parts("fr", "").name(), "fr");
    }

    #[test]
    fn equality_follows_the_canonical_string() {
        assert_eq!(Locale::new("EN-us"), Locale::new("en_US"));
        assert_eq!(Locale::new("en@b=2;a=1"), Locale::new("en@a=1,b=2"));
        // semantically equal but spelled differently: not equal without
        // canonicalization
        assert_ne!(Locale::new("zh_CHS"), Locale::new("zh_Hans"));
        assert_eq!(Locale::new_canonical("zh_CHS"), Locale::new("zh_Hans"));
    }

    // a toy provider: per-locale tables plus declared fallbacks

    struct MapProvider {
        strings: HashMap<(String, String), String>,
        fallbacks: HashMap<String, String>,
    }

    impl MapProvider {
        fn new() -> Self {
            MapProvider { strings: HashMap::new(), fallbacks: HashMap::new() }
        }

        fn put(&mut self, locale: &str, item: &str, value: &str) {
            self.strings.insert((locale.to_string(), item.to_string()), value.to_string());
        }
    }

    impl ResourceProvider for MapProvider {
        fn string(&self, _table: &str, _subtable: Option<&str>, item: &str, locale: &str) -> Option<String> {
            self.strings.get(&(locale.to_string(), item.to_string())).cloned()
        }

        fn fallback_of(&self, locale: &str) -> Option<String> {
            self.fallbacks.get(locale).cloned()
        }
    }

    #[test]
    fn display_strings_walk_declared_fallbacks() {
        let mut p = MapProvider::new();
        p.put("root", "fr", "French");
        p.fallbacks.insert("de_AT".to_string(), "de".to_string());
        p.fallbacks.insert("de".to_string(), "root".to_string());

        assert_eq!(localized_string(&p, "Languages", None, "fr", "de_AT"), "French");
    }

    #[test]
    fn display_strings_retry_deprecated_codes() {
        let mut p = MapProvider::new();
        p.put("en", "CD", "Congo - Kinshasa");
        // the caller asks for the deprecated spelling
        assert_eq!(localized_string(&p, "Countries", None, "ZR", "en"), "Congo - Kinshasa");
    }

    #[test]
    fn display_strings_fall_back_to_the_key() {
        let p = MapProvider::new();
        assert_eq!(localized_string(&p, "Languages", None, "tlh", "en"), "tlh");
        assert_eq!(localized_string(&p, "Languages", None, "", "en"), "");
    }
}
