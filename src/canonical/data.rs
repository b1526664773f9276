//! Alias tables for identifier canonicalization.
//!
//! `ALIASES` is matched against the normalized base name, first match
//! wins. `VARIANT_KEYWORDS` is matched against the trailing variant
//! token before the alias scan runs.

use crate::canonical::{AliasEntry, VariantKeyword};

/* Variant tokens that fold into a keyword: the token is stripped from
   the base name and the keyword is set only if not already present. */
pub(crate) static VARIANT_KEYWORDS: &[VariantKeyword] = &[
    VariantKeyword { variant: "EURO", keyword: "currency", value: "EUR" },
    VariantKeyword { variant: "PINYIN", keyword: "collation", value: "pinyin" }, // Solaris
    VariantKeyword { variant: "STROKE", keyword: "collation", value: "stroke" }, // Solaris
];

macro_rules! alias {
    ($from:literal, $to:literal) => {
        AliasEntry { from: $from, to: $to, keyword: None, value: None }
    };
    ($from:literal, $to:literal, $kw:literal, $val:literal) => {
        AliasEntry { from: $from, to: $to, keyword: Some($kw), value: Some($val) }
    };
}

/* POSIX, grandfathered, Linux/.NET and legacy collation/calendar/currency
   spellings, keyed by normalized base name. */
pub(crate) static ALIASES: &[AliasEntry] = &[
    alias!("C", "en_US_POSIX"),                     // POSIX
    alias!("art__LOJBAN", "jbo"),                   // registered
    alias!("az_AZ_CYRL", "az_Cyrl_AZ"),             // .NET
    alias!("az_AZ_LATN", "az_Latn_AZ"),             // .NET
    alias!("ca_ES_PREEURO", "ca_ES", "currency", "ESP"),
    alias!("cel__GAULISH", "cel__GAULISH"),         // registered
    alias!("de_1901", "de__1901"),                  // registered
    alias!("de_1906", "de__1906"),                  // registered
    alias!("de__PHONEBOOK", "de", "collation", "phonebook"),
    alias!("de_AT_PREEURO", "de_AT", "currency", "ATS"),
    alias!("de_DE_PREEURO", "de_DE", "currency", "DEM"),
    alias!("de_LU_PREEURO", "de_LU", "currency", "EUR"),
    alias!("el_GR_PREEURO", "el_GR", "currency", "GRD"),
    alias!("en__BOONT", "en__BOONT"),               // registered
    alias!("en__SCOUSE", "en__SCOUSE"),             // registered
    alias!("en_BE_PREEURO", "en_BE", "currency", "BEF"),
    alias!("en_IE_PREEURO", "en_IE", "currency", "IEP"),
    alias!("es__TRADITIONAL", "es", "collation", "traditional"),
    alias!("es_ES_PREEURO", "es_ES", "currency", "ESP"),
    alias!("eu_ES_PREEURO", "eu_ES", "currency", "ESP"),
    alias!("fi_FI_PREEURO", "fi_FI", "currency", "FIM"),
    alias!("fr_BE_PREEURO", "fr_BE", "currency", "BEF"),
    alias!("fr_FR_PREEURO", "fr_FR", "currency", "FRF"),
    alias!("fr_LU_PREEURO", "fr_LU", "currency", "LUF"),
    alias!("ga_IE_PREEURO", "ga_IE", "currency", "IEP"),
    alias!("gl_ES_PREEURO", "gl_ES", "currency", "ESP"),
    alias!("hi__DIRECT", "hi", "collation", "direct"),
    alias!("it_IT_PREEURO", "it_IT", "currency", "ITL"),
    alias!("ja_JP_TRADITIONAL", "ja_JP", "calendar", "japanese"),
    alias!("nl_BE_PREEURO", "nl_BE", "currency", "BEF"),
    alias!("nl_NL_PREEURO", "nl_NL", "currency", "NLG"),
    alias!("pt_PT_PREEURO", "pt_PT", "currency", "PTE"),
    alias!("sl__ROZAJ", "sl__ROZAJ"),               // registered
    alias!("sr_SP_CYRL", "sr_Cyrl_RS"),             // .NET
    alias!("sr_SP_LATN", "sr_Latn_RS"),             // .NET
    alias!("sr_YU_CYRILLIC", "sr_Cyrl_RS"),         // Linux
    alias!("th_TH_TRADITIONAL", "th_TH", "calendar", "buddhist"),
    alias!("uz_UZ_CYRILLIC", "uz_Cyrl_UZ"),         // Linux
    alias!("uz_UZ_CYRL", "uz_Cyrl_UZ"),             // .NET
    alias!("uz_UZ_LATN", "uz_Latn_UZ"),             // .NET
    alias!("zh_CHS", "zh_Hans"),                    // .NET
    alias!("zh_CHT", "zh_Hant"),                    // .NET
    alias!("zh_GAN", "zh__GAN"),                    // registered
    alias!("zh__GUOYU", "zh"),                      // registered
    alias!("zh__HAKKA", "zh__HAKKA"),               // registered
    alias!("zh_MIN", "zh__MIN"),                    // registered
    alias!("zh_MIN_NAN", "zh__MINNAN"),             // registered
    alias!("zh_WUU", "zh__WUU"),                    // registered
    alias!("zh__XIANG", "zh__XIANG"),               // registered
    alias!("zh_YUE", "zh__YUE"),                    // registered
];
