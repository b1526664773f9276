#[cfg(test)]
mod unit_tests {

    use crate::codes::data::*;
    use crate::locale::{self, Locale};
    use crate::{accept, canonicalize, codes};

    // parser / normalization

    #[test]
    fn normalizes_case_and_separators() {
        assert_eq!(locale::name("EN-us"), "en_US");
        assert_eq!(locale::name("en_us_posix"), "en_US_POSIX");
        assert_eq!(locale::name("ZH-hANT-tw"), "zh_Hant_TW");
    }

    #[test]
    fn field_extraction() {
        let loc = Locale::new("sr_Latn_RS_REVISED");
        assert_eq!(loc.language(), "sr");
        assert_eq!(loc.script(), "Latn");
        assert_eq!(loc.country(), "RS");
        assert_eq!(loc.variant(), "REVISED");
        assert_eq!(loc.base_name(), "sr_Latn_RS_REVISED");
    }

    #[test]
    fn three_letter_language_reduces() {
        assert_eq!(locale::name("heb_IL"), "he_IL");
        assert_eq!(locale::name("deu"), "de");
        // no two-letter form: stays three-letter
        assert_eq!(locale::name("ace_ID"), "ace_ID");
    }

    #[test]
    fn three_letter_country_reduces() {
        assert_eq!(locale::name("es_ESP"), "es_ES");
        // obsolete three-letter form reduces to the obsolete two-letter code
        assert_eq!(locale::name("es_ZAR"), "es_ZR");
    }

    #[test]
    fn script_needs_exactly_four_chars() {
        assert_eq!(locale::script("zh_Hant"), "Hant");
        assert_eq!(locale::script("zh_Han"), "");
        assert_eq!(locale::script("zh_Hants"), "");
        // a four-char second segment is a script even if it looks odd
        assert_eq!(locale::name("en_laTN"), "en_Latn");
    }

    #[test]
    fn country_needs_two_or_three_chars() {
        assert_eq!(locale::country("en_US"), "US");
        assert_eq!(locale::country("en_840"), "840");
        assert_eq!(locale::country("en_USAX"), "");
    }

    #[test]
    fn experimental_prefix_is_preserved() {
        assert_eq!(locale::language("x-klingon"), "x-klingon");
        assert_eq!(locale::language("X_whatever"), "x-whatever");
        assert_eq!(locale::language("i-mingo"), "i-mingo");
    }

    #[test]
    fn posix_codepage_is_dropped() {
        assert_eq!(locale::name("en_US.utf8"), "en_US");
        assert_eq!(canonicalize("en_US.utf8@EURO"), "en_US@currency=EUR");
    }

    #[test]
    fn one_char_torso_lands_in_the_variant_slot() {
        // no formal grammar: "en_A" is neither script nor region, and the
        // two parse paths answer differently on purpose
        assert_eq!(locale::name("en_A"), "en__A");
        assert_eq!(locale::variant("en_A"), "");
    }

    #[test]
    fn trailing_separator_is_trimmed() {
        assert_eq!(locale::name("en_US_"), "en_US");
        assert_eq!(locale::name("en__"), "en");
    }

    // keywords

    #[test]
    fn keywords_are_sorted_and_case_normalized() {
        assert_eq!(
            locale::name("en_US@Currency=USD;COLLATION=phonebook"),
            "en_US@collation=phonebook,currency=USD"
        );
    }

    #[test]
    fn keyword_values_keep_their_case() {
        assert_eq!(locale::keyword_value("de@currency=DEM", "CURRENCY").as_deref(), Some("DEM"));
    }

    #[test]
    fn duplicate_keyword_first_wins() {
        assert_eq!(locale::name("en@a=1;a=2"), "en@a=1");
    }

    #[test]
    fn malformed_keywords_drop_silently() {
        assert_eq!(locale::name("en@a=;b=2"), "en@b=2");
        assert_eq!(locale::name("en@=1"), "en");
        assert_eq!(locale::name("en@a= ;b=2"), "en@b=2");
    }

    #[test]
    fn comma_accepted_as_item_separator() {
        assert_eq!(locale::name("en@a=1,b=2"), "en@a=1,b=2");
    }

    #[test]
    fn set_keyword_value_roundtrip() {
        let loc = Locale::new("de@collation=phonebook");
        let loc = loc.set_keyword_value("currency", Some("EUR"));
        assert_eq!(loc.name(), "de@collation=phonebook,currency=EUR");
        let loc = loc.set_keyword_value("collation", None);
        assert_eq!(loc.name(), "de@currency=EUR");
        let loc = loc.set_keyword_value("currency", None);
        assert_eq!(loc.name(), "de");
        // empty names and values change nothing
        assert_eq!(loc.set_keyword_value("  ", Some("x")).name(), "de");
        assert_eq!(loc.set_keyword_value("currency", Some(" ")).name(), "de");
    }

    #[test]
    fn keyword_names_enumerate_sorted() {
        let loc = Locale::new("en@currency=USD;calendar=japanese");
        assert_eq!(loc.keywords(), vec!["calendar".to_string(), "currency".to_string()]);
        assert!(Locale::new("en").keywords().is_empty());
    }

    // canonicalization

    #[test]
    fn empty_id_stays_empty() {
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn posix_c_alias() {
        assert_eq!(canonicalize("C"), "en_US_POSIX");
    }

    #[test]
    fn preeuro_becomes_currency_keyword() {
        assert_eq!(canonicalize("ca_ES_PREEURO"), "ca_ES@currency=ESP");
        assert_eq!(canonicalize("fr_FR_PREEURO"), "fr_FR@currency=FRF");
    }

    #[test]
    fn euro_variant_becomes_currency_keyword() {
        assert_eq!(canonicalize("de_DE_EURO"), "de_DE@currency=EUR");
        assert_eq!(canonicalize("de__EURO"), "de@currency=EUR");
        // PREEURO must not match on its EURO suffix
        assert_eq!(canonicalize("de_DE_PREEURO"), "de_DE@currency=DEM");
    }

    #[test]
    fn legacy_collation_variants() {
        assert_eq!(canonicalize("de__PHONEBOOK"), "de@collation=phonebook");
        assert_eq!(canonicalize("zh__PINYIN"), "zh@collation=pinyin");
        assert_eq!(canonicalize("es__TRADITIONAL"), "es@collation=traditional");
    }

    #[test]
    fn explicit_keyword_beats_variant_default() {
        assert_eq!(
            canonicalize("de__PHONEBOOK@collation=standard"),
            "de@collation=standard"
        );
        assert_eq!(
            canonicalize("ca_ES_PREEURO@currency=EUR"),
            "ca_ES@currency=EUR"
        );
    }

    #[test]
    fn grandfathered_and_dotnet_aliases() {
        assert_eq!(canonicalize("art_LOJBAN"), "jbo");
        assert_eq!(canonicalize("zh_CHS"), "zh_Hans");
        assert_eq!(canonicalize("zh_CHT"), "zh_Hant");
        assert_eq!(canonicalize("az_AZ_CYRL"), "az_Cyrl_AZ");
        assert_eq!(canonicalize("sr_SP_CYRL"), "sr_Cyrl_RS");
        assert_eq!(canonicalize("zh_GUOYU"), "zh");
        assert_eq!(canonicalize("th_TH_TRADITIONAL"), "th_TH@calendar=buddhist");
    }

    #[test]
    fn norwegian_nynorsk_rewrite() {
        assert_eq!(canonicalize("nb_NO_NY"), "nn_NO");
        assert_eq!(canonicalize("nb__NY"), "nn");
    }

    #[test]
    fn unknown_ids_pass_through_normalized() {
        assert_eq!(canonicalize("xx_YY_FOO"), "xx_YY_FOO");
        assert_eq!(canonicalize("qq-ZZ"), "qq_ZZ");
    }

    // fallback

    #[test]
    fn fallback_strips_last_subtag() {
        assert_eq!(locale::fallback("en_US_POSIX"), "en_US");
        assert_eq!(locale::fallback("en_US"), "en");
        assert_eq!(locale::fallback("en"), "");
        assert_eq!(locale::fallback("zh_Hant_TW@collation=stroke"), "zh_Hant@collation=stroke");
    }

    #[test]
    fn fallback_terminates_at_root() {
        let mut chain = vec![];
        let mut cur = Some(Locale::new("sr_Latn_RS@currency=RSD"));
        while let Some(loc) = cur {
            chain.push(loc.name().to_string());
            cur = loc.fallback();
        }
        assert_eq!(
            chain,
            vec![
                "sr_Latn_RS@currency=RSD",
                "sr_Latn@currency=RSD",
                "sr@currency=RSD",
                "@currency=RSD",
            ]
        );
    }

    // code tables

    #[test]
    fn iso3_expansion() {
        assert_eq!(codes::iso3_language("he"), "heb");
        assert_eq!(codes::iso3_language("en"), "eng");
        assert_eq!(codes::iso3_language("zz"), "");
        assert_eq!(codes::iso3_country("RO"), "ROU");
        assert_eq!(codes::iso3_country("DE"), "DEU");
        assert_eq!(codes::iso3_country("XX"), "");
    }

    #[test]
    fn replacement_codes() {
        assert_eq!(codes::current_language("iw"), "he");
        assert_eq!(codes::current_language("no"), "nb");
        assert_eq!(codes::current_language("fr"), "fr");
        assert_eq!(codes::current_country("ZR"), "CD");
        assert_eq!(codes::current_country("YU"), "RS");
        assert_eq!(codes::current_country("US"), "US");
    }

    #[test]
    fn code_tables_stay_in_lockstep() {
        assert_eq!(LANGUAGES.len(), LANGUAGES3.len());
        assert_eq!(COUNTRIES.len(), COUNTRIES3.len());
        assert_eq!(OBSOLETE_LANGUAGES.len(), REPLACEMENT_LANGUAGES.len());
        assert_eq!(DEPRECATED_COUNTRIES.len(), REPLACEMENT_COUNTRIES.len());
        assert_eq!(OBSOLETE_COUNTRIES.len(), OBSOLETE_COUNTRIES3.len());
        assert!(LANGUAGES.windows(2).all(|w| w[0] < w[1]));
        assert!(COUNTRIES.windows(2).all(|w| w[0] < w[1]));
        // hashed reductions mirror the parallel lists one-to-one
        assert_eq!(LANGUAGE_3_TO_2.len(), LANGUAGES.len());
        assert_eq!(COUNTRY_3_TO_2.len(), COUNTRIES.len());
    }

    // accept-language parsing

    #[test]
    fn quality_ordering_prefers_heavier_ranges() {
        let available = [Locale::new("en"), Locale::new("fr")];
        let (matched, was_fallback) =
            accept::accept_language("en;q=0.5,fr;q=0.9", &available).unwrap();
        assert_eq!(matched.unwrap().name(), "fr");
        assert!(!was_fallback);
    }

    #[test]
    fn ties_keep_listing_order() {
        let available = [Locale::new("de"), Locale::new("fr")];
        let (matched, _) = accept::accept_language("fr, de", &available).unwrap();
        assert_eq!(matched.unwrap().name(), "fr");
    }

    #[test]
    fn wildcard_ranges_never_match() {
        let available = [Locale::new("en")];
        let (matched, was_fallback) = accept::accept_language("*", &available).unwrap();
        assert!(matched.is_none());
        assert!(was_fallback);
    }

    #[test]
    fn malformed_lists_are_rejected() {
        let available = [Locale::new("en")];
        assert!(accept::accept_language("", &available).is_err());
        assert!(accept::accept_language("en;q=abc", &available).is_err());
        assert!(accept::accept_language("4711", &available).is_err());
        assert!(accept::accept_language("en@US", &available).is_err());
    }

    #[test]
    fn lenient_forms_are_accepted() {
        let available = [Locale::new("de_DE")];
        let (matched, was_fallback) =
            accept::accept_language("de_DE;q=.8", &available).unwrap();
        assert_eq!(matched.unwrap().name(), "de_DE");
        assert!(!was_fallback);
    }

    #[test]
    fn oversized_quality_clamps_to_one() {
        let available = [Locale::new("en"), Locale::new("fr")];
        let (matched, _) = accept::accept_language("fr;q=1.5, en;q=0.9", &available).unwrap();
        assert_eq!(matched.unwrap().name(), "fr");
    }

    #[test]
    fn parent_fallback_sets_the_flag() {
        let available = [Locale::new("fr")];
        let (matched, was_fallback) =
            accept::accept_language("fr-CA, de;q=0.5", &available).unwrap();
        assert_eq!(matched.unwrap().name(), "fr");
        assert!(was_fallback);
    }

    #[test]
    fn second_candidate_match_is_a_fallback() {
        let available = [Locale::new("de")];
        let (matched, was_fallback) =
            accept::accept_language("fr;q=0.9, de;q=0.5", &available).unwrap();
        assert_eq!(matched.unwrap().name(), "de");
        assert!(was_fallback);
    }
}
