mod prop_tests {
    use proptest::prelude::*;

    use crate::locale::{self, Locale};
    use crate::{add_likely_subtags, canonicalize, minimize_subtags};

    // raw identifier soup: subtags of plausible shapes in random case,
    // with optional POSIX codepage and keyword suffixes
    fn raw_id() -> impl Strategy<Value = String> {
        (
            "[a-zA-Z]{2,3}",
            proptest::option::of("_[a-zA-Z]{4}"),
            proptest::option::of("_[a-zA-Z]{2}"),
            proptest::option::of("_[a-zA-Z]{5,8}"),
            proptest::option::of("\\.[a-z0-9]{1,5}"),
            proptest::option::of("@[a-z]{1,8}=[a-zA-Z0-9]{1,8}(;[a-z]{1,8}=[a-zA-Z0-9]{1,8}){0,2}"),
        )
            .prop_map(|(lang, script, region, variant, codepage, keywords)| {
                let mut id = lang;
                id.push_str(&script.unwrap_or_default());
                id.push_str(&region.unwrap_or_default());
                id.push_str(&variant.unwrap_or_default());
                id.push_str(&codepage.unwrap_or_default());
                id.push_str(&keywords.unwrap_or_default());
                id
            })
    }

    // identifiers the likely-subtags table can say something about
    fn inferable_id() -> impl Strategy<Value = String> {
        (
            prop_oneof![
                Just(""), Just("en"), Just("de"), Just("fr"), Just("ja"),
                Just("ru"), Just("sr"), Just("zh"), Just("und"), Just("az"),
            ],
            prop_oneof![
                Just(""), Just("_Latn"), Just("_Cyrl"), Just("_Hans"), Just("_Hant"),
                Just("_Arab"), Just("_Zzzz"),
            ],
            prop_oneof![
                Just(""), Just("_US"), Just("_DE"), Just("_CN"), Just("_TW"), Just("_RS"),
                Just("_BR"), Just("_ZZ"),
            ],
            prop_oneof![Just(""), Just("_POSIX"), Just("@collation=pinyin")],
        )
            .prop_map(|(l, s, r, suffix)| format!("{l}{s}{r}{suffix}"))
    }

    proptest! {
        #[test]
        fn canonicalize_is_idempotent(id in raw_id()) {
            let once = canonicalize(&id);
            let twice = canonicalize(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalization_is_idempotent(id in raw_id()) {
            let once = locale::name(&id);
            let twice = locale::name(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn keyword_order_does_not_matter(
            a in "[a-j]{1,6}", b in "[k-t]{1,6}",
            va in "[a-zA-Z0-9]{1,6}", vb in "[a-zA-Z0-9]{1,6}",
        ) {
            // distinct alphabets keep the keys distinct
            let forward = locale::name(&format!("en_US@{a}={va};{b}={vb}"));
            let backward = locale::name(&format!("en_US@{b}={vb};{a}={va}"));
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn keywords_come_out_sorted(id in raw_id()) {
            let name = locale::name(&id);
            if let Some(at) = name.find('@') {
                let keys: Vec<&str> = name[at + 1..]
                    .split(',')
                    .map(|pair| pair.split('=').next().unwrap_or(""))
                    .collect();
                let mut sorted = keys.clone();
                sorted.sort_unstable();
                prop_assert_eq!(keys, sorted);
            }
        }

        #[test]
        fn minimize_preserves_the_maximal_form(id in inferable_id()) {
            let loc = Locale::new(&id);
            let minimized = minimize_subtags(&loc);
            let max_from_min = add_likely_subtags(&minimized);
            let max_from_loc = add_likely_subtags(&loc);
            prop_assert_eq!(
                max_from_min.name(),
                max_from_loc.name()
            );
        }

        #[test]
        fn maximize_is_idempotent(id in inferable_id()) {
            let once = add_likely_subtags(&Locale::new(&id));
            let twice = add_likely_subtags(&once);
            prop_assert_eq!(once.name(), twice.name());
        }

        #[test]
        fn canonicalization_never_panics_on_ascii(id in "[ -~]{0,40}") {
            let _ = canonicalize(&id);
            let _ = locale::name(&id);
        }
    }
}
