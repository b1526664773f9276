//! ISO 639 / ISO 3166 code tables.
//!
//! The two-letter lists are sorted and keep a bare three-letter code for
//! entries with no two-letter form; the `*3` lists are positionally
//! parallel to them (same entry, same index). The positional pairing is
//! what drives the three-to-two reduction maps and the two-to-three
//! expansion scans, so the lists must only ever change in lockstep.

use phf::{Map, phf_map};


/* Two-letter ISO 639 codes (or bare three-letter where no two-letter
   form exists), sorted. */
pub(crate) static LANGUAGES: &[&str] = &[
    "aa", "ab", "ace", "ach", "ada", "ady", "ae", "af", "afa", "afh", "ak",
    "akk", "ale", "alg", "am", "an", "ang", "apa", "ar", "arc", "arn",
    "arp", "art", "arw", "as", "ast", "ath", "aus", "av", "awa", "ay",
    "az", "ba", "bad", "bai", "bal", "ban", "bas", "bat", "be", "bej",
    "bem", "ber", "bg", "bh", "bho", "bi", "bik", "bin", "bla", "bm", "bn",
    "bnt", "bo", "br", "bra", "bs", "btk", "bua", "bug", "byn", "ca",
    "cad", "cai", "car", "cau", "ce", "ceb", "cel", "ch", "chb", "chg",
    "chk", "chm", "chn", "cho", "chp", "chr", "chy", "cmc", "co", "cop",
    "cpe", "cpf", "cpp", "cr", "crh", "crp", "cs", "csb", "cu", "cus",
    "cv", "cy", "da", "dak", "dar", "day", "de", "del", "den", "dgr",
    "din", "doi", "dra", "dsb", "dua", "dum", "dv", "dyu", "dz", "ee",
    "efi", "egy", "eka", "el", "elx", "en", "enm", "eo", "es", "et", "eu",
    "ewo", "fa", "fan", "fat", "ff", "fi", "fiu", "fj", "fo", "fon", "fr",
    "frm", "fro", "fur", "fy", "ga", "gaa", "gay", "gba", "gd", "gem",
    "gez", "gil", "gl", "gmh", "gn", "goh", "gon", "gor", "got", "grb",
    "grc", "gu", "gv", "gwi", "ha", "hai", "haw", "he", "hi", "hil", "him",
    "hit", "hmn", "ho", "hr", "hsb", "ht", "hu", "hup", "hy", "hz", "ia",
    "iba", "id", "ie", "ig", "ii", "ijo", "ik", "ilo", "inc", "ine", "inh",
    "io", "ira", "iro", "is", "it", "iu", "ja", "jbo", "jpr", "jrb", "jv",
    "ka", "kaa", "kab", "kac", "kam", "kar", "kaw", "kbd", "kg", "kha",
    "khi", "kho", "ki", "kj", "kk", "kl", "km", "kmb", "kn", "ko", "kok",
    "kos", "kpe", "kr", "krc", "kro", "kru", "ks", "ku", "kum", "kut",
    "kv", "kw", "ky", "la", "lad", "lah", "lam", "lb", "lez", "lg", "li",
    "ln", "lo", "lol", "loz", "lt", "lu", "lua", "lui", "lun", "luo",
    "lus", "lv", "mad", "mag", "mai", "mak", "man", "map", "mas", "mdf",
    "mdr", "men", "mg", "mga", "mh", "mi", "mic", "min", "mis", "mk",
    "mkh", "ml", "mn", "mnc", "mni", "mno", "mo", "moh", "mos", "mr", "ms",
    "mt", "mul", "mun", "mus", "mwr", "my", "myn", "myv", "na", "nah",
    "nai", "nap", "nb", "nd", "nds", "ne", "new", "ng", "nia", "nic",
    "niu", "nl", "nn", "no", "nog", "non", "nr", "nso", "nub", "nv", "nwc",
    "ny", "nym", "nyn", "nyo", "nzi", "oc", "oj", "om", "or", "os", "osa",
    "ota", "oto", "pa", "paa", "pag", "pal", "pam", "pap", "pau", "peo",
    "phi", "phn", "pi", "pl", "pon", "pra", "pro", "ps", "pt", "qu", "raj",
    "rap", "rar", "rm", "rn", "ro", "roa", "rom", "ru", "rup", "rw", "sa",
    "sad", "sah", "sai", "sal", "sam", "sas", "sat", "sc", "sco", "sd",
    "se", "sel", "sem", "sg", "sga", "sgn", "shn", "si", "sid", "sio",
    "sit", "sk", "sl", "sla", "sm", "sma", "smi", "smj", "smn", "sms",
    "sn", "snk", "so", "sog", "son", "sq", "sr", "srr", "ss", "ssa", "st",
    "su", "suk", "sus", "sux", "sv", "sw", "syr", "ta", "tai", "te", "tem",
    "ter", "tet", "tg", "th", "ti", "tig", "tiv", "tk", "tkl", "tl", "tlh",
    "tli", "tmh", "tn", "to", "tog", "tpi", "tr", "ts", "tsi", "tt", "tum",
    "tup", "tut", "tvl", "tw", "ty", "tyv", "udm", "ug", "uga", "uk",
    "umb", "und", "ur", "uz", "vai", "ve", "vi", "vo", "vot", "wa", "wak",
    "wal", "war", "was", "wen", "wo", "xal", "xh", "yao", "yap", "yi",
    "yo", "ypk", "za", "zap", "zen", "zh", "znd", "zu", "zun",
];

/* Three-letter forms, index-parallel to LANGUAGES. */
pub(crate) static LANGUAGES3: &[&str] = &[
    "aar", "abk", "ace", "ach", "ada", "ady", "ave", "afr", "afa", "afh",
    "aka", "akk", "ale", "alg", "amh", "arg", "ang", "apa", "ara", "arc",
    "arn", "arp", "art", "arw", "asm", "ast", "ath", "aus", "ava", "awa",
    "aym", "aze", "bak", "bad", "bai", "bal", "ban", "bas", "bat", "bel",
    "bej", "bem", "ber", "bul", "bih", "bho", "bis", "bik", "bin", "bla",
    "bam", "ben", "bnt", "bod", "bre", "bra", "bos", "btk", "bua", "bug",
    "byn", "cat", "cad", "cai", "car", "cau", "che", "ceb", "cel", "cha",
    "chb", "chg", "chk", "chm", "chn", "cho", "chp", "chr", "chy", "cmc",
    "cos", "cop", "cpe", "cpf", "cpp", "cre", "crh", "crp", "ces", "csb",
    "chu", "cus", "chv", "cym", "dan", "dak", "dar", "day", "deu", "del",
    "den", "dgr", "din", "doi", "dra", "dsb", "dua", "dum", "div", "dyu",
    "dzo", "ewe", "efi", "egy", "eka", "ell", "elx", "eng", "enm", "epo",
    "spa", "est", "eus", "ewo", "fas", "fan", "fat", "ful", "fin", "fiu",
    "fij", "fao", "fon", "fra", "frm", "fro", "fur", "fry", "gle", "gaa",
    "gay", "gba", "gla", "gem", "gez", "gil", "glg", "gmh", "grn", "goh",
    "gon", "gor", "got", "grb", "grc", "guj", "glv", "gwi", "hau", "hai",
    "haw", "heb", "hin", "hil", "him", "hit", "hmn", "hmo", "hrv", "hsb",
    "hat", "hun", "hup", "hye", "her", "ina", "iba", "ind", "ile", "ibo",
    "iii", "ijo", "ipk", "ilo", "inc", "ine", "inh", "ido", "ira", "iro",
    "isl", "ita", "iku", "jpn", "jbo", "jpr", "jrb", "jaw", "kat", "kaa",
    "kab", "kac", "kam", "kar", "kaw", "kbd", "kon", "kha", "khi", "kho",
    "kik", "kua", "kaz", "kal", "khm", "kmb", "kan", "kor", "kok", "kos",
    "kpe", "kau", "krc", "kro", "kru", "kas", "kur", "kum", "kut", "kom",
    "cor", "kir", "lat", "lad", "lah", "lam", "ltz", "lez", "lug", "lim",
    "lin", "lao", "lol", "loz", "lit", "lub", "lua", "lui", "lun", "luo",
    "lus", "lav", "mad", "mag", "mai", "mak", "man", "map", "mas", "mdf",
    "mdr", "men", "mlg", "mga", "mah", "mri", "mic", "min", "mis", "mkd",
    "mkh", "mal", "mon", "mnc", "mni", "mno", "mol", "moh", "mos", "mar",
    "msa", "mlt", "mul", "mun", "mus", "mwr", "mya", "myn", "myv", "nau",
    "nah", "nai", "nap", "nob", "nde", "nds", "nep", "new", "ndo", "nia",
    "nic", "niu", "nld", "nno", "nor", "nog", "non", "nbl", "nso", "nub",
    "nav", "nwc", "nya", "nym", "nyn", "nyo", "nzi", "oci", "oji", "orm",
    "ori", "oss", "osa", "ota", "oto", "pan", "paa", "pag", "pal", "pam",
    "pap", "pau", "peo", "phi", "phn", "pli", "pol", "pon", "pra", "pro",
    "pus", "por", "que", "raj", "rap", "rar", "roh", "run", "ron", "roa",
    "rom", "rus", "rup", "kin", "san", "sad", "sah", "sai", "sal", "sam",
    "sas", "sat", "srd", "sco", "snd", "sme", "sel", "sem", "sag", "sga",
    "sgn", "shn", "sin", "sid", "sio", "sit", "slk", "slv", "sla", "smo",
    "sma", "smi", "smj", "smn", "sms", "sna", "snk", "som", "sog", "son",
    "sqi", "srp", "srr", "ssw", "ssa", "sot", "sun", "suk", "sus", "sux",
    "swe", "swa", "syr", "tam", "tai", "tel", "tem", "ter", "tet", "tgk",
    "tha", "tir", "tig", "tiv", "tuk", "tkl", "tgl", "tlh", "tli", "tmh",
    "tsn", "ton", "tog", "tpi", "tur", "tso", "tsi", "tat", "tum", "tup",
    "tut", "tvl", "twi", "tah", "tyv", "udm", "uig", "uga", "ukr", "umb",
    "und", "urd", "uzb", "vai", "ven", "vie", "vol", "vot", "wln", "wak",
    "wal", "war", "was", "wen", "wol", "xal", "xho", "yao", "yap", "yid",
    "yor", "ypk", "zha", "zap", "zen", "zho", "znd", "zul", "zun",
];

/* Codes whose spelling was retired; the replacement list is
   index-parallel and carries the current spelling. */
pub(crate) static OBSOLETE_LANGUAGES: &[&str] = &[
    "in", "iw", "ji", "jw", "sh", "no",
];
pub(crate) static REPLACEMENT_LANGUAGES: &[&str] = &[
    "id", "he", "yi", "jv", "sr", "nb",
];

// "no" has no retired three-letter form, hence the shorter list.
pub(crate) static OBSOLETE_LANGUAGES3: &[&str] = &[
    "ind", "heb", "yid", "jaw", "srp",
];

/* Two-letter ISO 3166 codes, sorted. */
pub(crate) static COUNTRIES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AN", "AO", "AQ", "AR", "AS",
    "AT", "AU", "AW", "AX", "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH",
    "BI", "BJ", "BL", "BM", "BN", "BO", "BR", "BS", "BT", "BV", "BW", "BY",
    "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO",
    "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM",
    "FO", "FR", "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM",
    "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM", "HN",
    "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS",
    "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP",
    "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT",
    "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML",
    "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX",
    "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR",
    "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM", "PN",
    "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA",
    "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN",
    "SO", "SR", "ST", "SV", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ",
    "TK", "TL", "TM", "TN", "TO", "TR", "TT", "TV", "TW", "TZ", "UA", "UG",
    "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI", "VN", "VU", "WF",
    "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/* Three-letter forms, index-parallel to COUNTRIES. */
pub(crate) static COUNTRIES3: &[&str] = &[
    "AND", "ARE", "AFG", "ATG", "AIA", "ALB", "ARM", "ANT", "AGO", "ATA",
    "ARG", "ASM", "AUT", "AUS", "ABW", "ALA", "AZE", "BIH", "BRB", "BGD",
    "BEL", "BFA", "BGR", "BHR", "BDI", "BEN", "BLM", "BMU", "BRN", "BOL",
    "BRA", "BHS", "BTN", "BVT", "BWA", "BLR", "BLZ", "CAN", "CCK", "COD",
    "CAF", "COG", "CHE", "CIV", "COK", "CHL", "CMR", "CHN", "COL", "CRI",
    "CUB", "CPV", "CXR", "CYP", "CZE", "DEU", "DJI", "DNK", "DMA", "DOM",
    "DZA", "ECU", "EST", "EGY", "ESH", "ERI", "ESP", "ETH", "FIN", "FJI",
    "FLK", "FSM", "FRO", "FRA", "GAB", "GBR", "GRD", "GEO", "GUF", "GGY",
    "GHA", "GIB", "GRL", "GMB", "GIN", "GLP", "GNQ", "GRC", "SGS", "GTM",
    "GUM", "GNB", "GUY", "HKG", "HMD", "HND", "HRV", "HTI", "HUN", "IDN",
    "IRL", "ISR", "IMN", "IND", "IOT", "IRQ", "IRN", "ISL", "ITA", "JEY",
    "JAM", "JOR", "JPN", "KEN", "KGZ", "KHM", "KIR", "COM", "KNA", "PRK",
    "KOR", "KWT", "CYM", "KAZ", "LAO", "LBN", "LCA", "LIE", "LKA", "LBR",
    "LSO", "LTU", "LUX", "LVA", "LBY", "MAR", "MCO", "MDA", "MNE", "MAF",
    "MDG", "MHL", "MKD", "MLI", "MMR", "MNG", "MAC", "MNP", "MTQ", "MRT",
    "MSR", "MLT", "MUS", "MDV", "MWI", "MEX", "MYS", "MOZ", "NAM", "NCL",
    "NER", "NFK", "NGA", "NIC", "NLD", "NOR", "NPL", "NRU", "NIU", "NZL",
    "OMN", "PAN", "PER", "PYF", "PNG", "PHL", "PAK", "POL", "SPM", "PCN",
    "PRI", "PSE", "PRT", "PLW", "PRY", "QAT", "REU", "ROU", "SRB", "RUS",
    "RWA", "SAU", "SLB", "SYC", "SDN", "SWE", "SGP", "SHN", "SVN", "SJM",
    "SVK", "SLE", "SMR", "SEN", "SOM", "SUR", "STP", "SLV", "SYR", "SWZ",
    "TCA", "TCD", "ATF", "TGO", "THA", "TJK", "TKL", "TLS", "TKM", "TUN",
    "TON", "TUR", "TTO", "TUV", "TWN", "TZA", "UKR", "UGA", "UMI", "USA",
    "URY", "UZB", "VAT", "VCT", "VEN", "VGB", "VIR", "VNM", "VUT", "WLF",
    "WSM", "YEM", "MYT", "ZAF", "ZMB", "ZWE",
];

pub(crate) static OBSOLETE_COUNTRIES: &[&str] = &[
    "FX", "CS", "RO", "TP", "YU", "ZR",
];
pub(crate) static OBSOLETE_COUNTRIES3: &[&str] = &[
    "FXX", "SCG", "ROM", "TMP", "YUG", "ZAR",
];

/* Deprecated region codes whose meaning (not just spelling) moved, and
   the index-parallel current codes: BU->MM, ZR->CD and friends. */
pub(crate) static DEPRECATED_COUNTRIES: &[&str] = &[
    "BU", "CS", "DY", "FX", "HV", "NH", "RH", "TP", "YU", "ZR",
];
pub(crate) static REPLACEMENT_COUNTRIES: &[&str] = &[
    "MM", "RS", "BJ", "FR", "BF", "VU", "ZW", "TL", "RS", "CD",
];

/* Hashed three-to-two reductions, derived from the parallel lists
   above. Entries with no two-letter form map to themselves. */
pub(crate) static LANGUAGE_3_TO_2: Map<&'static str, &'static str> = phf_map! {
    "aar" => "aa", "abk" => "ab", "ace" => "ace", "ach" => "ach",
    "ada" => "ada", "ady" => "ady", "ave" => "ae", "afr" => "af",
    "afa" => "afa", "afh" => "afh", "aka" => "ak", "akk" => "akk",
    "ale" => "ale", "alg" => "alg", "amh" => "am", "arg" => "an",
    "ang" => "ang", "apa" => "apa", "ara" => "ar", "arc" => "arc",
    "arn" => "arn", "arp" => "arp", "art" => "art", "arw" => "arw",
    "asm" => "as", "ast" => "ast", "ath" => "ath", "aus" => "aus",
    "ava" => "av", "awa" => "awa", "aym" => "ay", "aze" => "az",
    "bak" => "ba", "bad" => "bad", "bai" => "bai", "bal" => "bal",
    "ban" => "ban", "bas" => "bas", "bat" => "bat", "bel" => "be",
    "bej" => "bej", "bem" => "bem", "ber" => "ber", "bul" => "bg",
    "bih" => "bh", "bho" => "bho", "bis" => "bi", "bik" => "bik",
    "bin" => "bin", "bla" => "bla", "bam" => "bm", "ben" => "bn",
    "bnt" => "bnt", "bod" => "bo", "bre" => "br", "bra" => "bra",
    "bos" => "bs", "btk" => "btk", "bua" => "bua", "bug" => "bug",
    "byn" => "byn", "cat" => "ca", "cad" => "cad", "cai" => "cai",
    "car" => "car", "cau" => "cau", "che" => "ce", "ceb" => "ceb",
    "cel" => "cel", "cha" => "ch", "chb" => "chb", "chg" => "chg",
    "chk" => "chk", "chm" => "chm", "chn" => "chn", "cho" => "cho",
    "chp" => "chp", "chr" => "chr", "chy" => "chy", "cmc" => "cmc",
    "cos" => "co", "cop" => "cop", "cpe" => "cpe", "cpf" => "cpf",
    "cpp" => "cpp", "cre" => "cr", "crh" => "crh", "crp" => "crp",
    "ces" => "cs", "csb" => "csb", "chu" => "cu", "cus" => "cus",
    "chv" => "cv", "cym" => "cy", "dan" => "da", "dak" => "dak",
    "dar" => "dar", "day" => "day", "deu" => "de", "del" => "del",
    "den" => "den", "dgr" => "dgr", "din" => "din", "doi" => "doi",
    "dra" => "dra", "dsb" => "dsb", "dua" => "dua", "dum" => "dum",
    "div" => "dv", "dyu" => "dyu", "dzo" => "dz", "ewe" => "ee",
    "efi" => "efi", "egy" => "egy", "eka" => "eka", "ell" => "el",
    "elx" => "elx", "eng" => "en", "enm" => "enm", "epo" => "eo",
    "spa" => "es", "est" => "et", "eus" => "eu", "ewo" => "ewo",
    "fas" => "fa", "fan" => "fan", "fat" => "fat", "ful" => "ff",
    "fin" => "fi", "fiu" => "fiu", "fij" => "fj", "fao" => "fo",
    "fon" => "fon", "fra" => "fr", "frm" => "frm", "fro" => "fro",
    "fur" => "fur", "fry" => "fy", "gle" => "ga", "gaa" => "gaa",
    "gay" => "gay", "gba" => "gba", "gla" => "gd", "gem" => "gem",
    "gez" => "gez", "gil" => "gil", "glg" => "gl", "gmh" => "gmh",
    "grn" => "gn", "goh" => "goh", "gon" => "gon", "gor" => "gor",
    "got" => "got", "grb" => "grb", "grc" => "grc", "guj" => "gu",
    "glv" => "gv", "gwi" => "gwi", "hau" => "ha", "hai" => "hai",
    "haw" => "haw", "heb" => "he", "hin" => "hi", "hil" => "hil",
    "him" => "him", "hit" => "hit", "hmn" => "hmn", "hmo" => "ho",
    "hrv" => "hr", "hsb" => "hsb", "hat" => "ht", "hun" => "hu",
    "hup" => "hup", "hye" => "hy", "her" => "hz", "ina" => "ia",
    "iba" => "iba", "ind" => "id", "ile" => "ie", "ibo" => "ig",
    "iii" => "ii", "ijo" => "ijo", "ipk" => "ik", "ilo" => "ilo",
    "inc" => "inc", "ine" => "ine", "inh" => "inh", "ido" => "io",
    "ira" => "ira", "iro" => "iro", "isl" => "is", "ita" => "it",
    "iku" => "iu", "jpn" => "ja", "jbo" => "jbo", "jpr" => "jpr",
    "jrb" => "jrb", "jaw" => "jv", "kat" => "ka", "kaa" => "kaa",
    "kab" => "kab", "kac" => "kac", "kam" => "kam", "kar" => "kar",
    "kaw" => "kaw", "kbd" => "kbd", "kon" => "kg", "kha" => "kha",
    "khi" => "khi", "kho" => "kho", "kik" => "ki", "kua" => "kj",
    "kaz" => "kk", "kal" => "kl", "khm" => "km", "kmb" => "kmb",
    "kan" => "kn", "kor" => "ko", "kok" => "kok", "kos" => "kos",
    "kpe" => "kpe", "kau" => "kr", "krc" => "krc", "kro" => "kro",
    "kru" => "kru", "kas" => "ks", "kur" => "ku", "kum" => "kum",
    "kut" => "kut", "kom" => "kv", "cor" => "kw", "kir" => "ky",
    "lat" => "la", "lad" => "lad", "lah" => "lah", "lam" => "lam",
    "ltz" => "lb", "lez" => "lez", "lug" => "lg", "lim" => "li",
    "lin" => "ln", "lao" => "lo", "lol" => "lol", "loz" => "loz",
    "lit" => "lt", "lub" => "lu", "lua" => "lua", "lui" => "lui",
    "lun" => "lun", "luo" => "luo", "lus" => "lus", "lav" => "lv",
    "mad" => "mad", "mag" => "mag", "mai" => "mai", "mak" => "mak",
    "man" => "man", "map" => "map", "mas" => "mas", "mdf" => "mdf",
    "mdr" => "mdr", "men" => "men", "mlg" => "mg", "mga" => "mga",
    "mah" => "mh", "mri" => "mi", "mic" => "mic", "min" => "min",
    "mis" => "mis", "mkd" => "mk", "mkh" => "mkh", "mal" => "ml",
    "mon" => "mn", "mnc" => "mnc", "mni" => "mni", "mno" => "mno",
    "mol" => "mo", "moh" => "moh", "mos" => "mos", "mar" => "mr",
    "msa" => "ms", "mlt" => "mt", "mul" => "mul", "mun" => "mun",
    "mus" => "mus", "mwr" => "mwr", "mya" => "my", "myn" => "myn",
    "myv" => "myv", "nau" => "na", "nah" => "nah", "nai" => "nai",
    "nap" => "nap", "nob" => "nb", "nde" => "nd", "nds" => "nds",
    "nep" => "ne", "new" => "new", "ndo" => "ng", "nia" => "nia",
    "nic" => "nic", "niu" => "niu", "nld" => "nl", "nno" => "nn",
    "nor" => "no", "nog" => "nog", "non" => "non", "nbl" => "nr",
    "nso" => "nso", "nub" => "nub", "nav" => "nv", "nwc" => "nwc",
    "nya" => "ny", "nym" => "nym", "nyn" => "nyn", "nyo" => "nyo",
    "nzi" => "nzi", "oci" => "oc", "oji" => "oj", "orm" => "om",
    "ori" => "or", "oss" => "os", "osa" => "osa", "ota" => "ota",
    "oto" => "oto", "pan" => "pa", "paa" => "paa", "pag" => "pag",
    "pal" => "pal", "pam" => "pam", "pap" => "pap", "pau" => "pau",
    "peo" => "peo", "phi" => "phi", "phn" => "phn", "pli" => "pi",
    "pol" => "pl", "pon" => "pon", "pra" => "pra", "pro" => "pro",
    "pus" => "ps", "por" => "pt", "que" => "qu", "raj" => "raj",
    "rap" => "rap", "rar" => "rar", "roh" => "rm", "run" => "rn",
    "ron" => "ro", "roa" => "roa", "rom" => "rom", "rus" => "ru",
    "rup" => "rup", "kin" => "rw", "san" => "sa", "sad" => "sad",
    "sah" => "sah", "sai" => "sai", "sal" => "sal", "sam" => "sam",
    "sas" => "sas", "sat" => "sat", "srd" => "sc", "sco" => "sco",
    "snd" => "sd", "sme" => "se", "sel" => "sel", "sem" => "sem",
    "sag" => "sg", "sga" => "sga", "sgn" => "sgn", "shn" => "shn",
    "sin" => "si", "sid" => "sid", "sio" => "sio", "sit" => "sit",
    "slk" => "sk", "slv" => "sl", "sla" => "sla", "smo" => "sm",
    "sma" => "sma", "smi" => "smi", "smj" => "smj", "smn" => "smn",
    "sms" => "sms", "sna" => "sn", "snk" => "snk", "som" => "so",
    "sog" => "sog", "son" => "son", "sqi" => "sq", "srp" => "sr",
    "srr" => "srr", "ssw" => "ss", "ssa" => "ssa", "sot" => "st",
    "sun" => "su", "suk" => "suk", "sus" => "sus", "sux" => "sux",
    "swe" => "sv", "swa" => "sw", "syr" => "syr", "tam" => "ta",
    "tai" => "tai", "tel" => "te", "tem" => "tem", "ter" => "ter",
    "tet" => "tet", "tgk" => "tg", "tha" => "th", "tir" => "ti",
    "tig" => "tig", "tiv" => "tiv", "tuk" => "tk", "tkl" => "tkl",
    "tgl" => "tl", "tlh" => "tlh", "tli" => "tli", "tmh" => "tmh",
    "tsn" => "tn", "ton" => "to", "tog" => "tog", "tpi" => "tpi",
    "tur" => "tr", "tso" => "ts", "tsi" => "tsi", "tat" => "tt",
    "tum" => "tum", "tup" => "tup", "tut" => "tut", "tvl" => "tvl",
    "twi" => "tw", "tah" => "ty", "tyv" => "tyv", "udm" => "udm",
    "uig" => "ug", "uga" => "uga", "ukr" => "uk", "umb" => "umb",
    "und" => "und", "urd" => "ur", "uzb" => "uz", "vai" => "vai",
    "ven" => "ve", "vie" => "vi", "vol" => "vo", "vot" => "vot",
    "wln" => "wa", "wak" => "wak", "wal" => "wal", "war" => "war",
    "was" => "was", "wen" => "wen", "wol" => "wo", "xal" => "xal",
    "xho" => "xh", "yao" => "yao", "yap" => "yap", "yid" => "yi",
    "yor" => "yo", "ypk" => "ypk", "zha" => "za", "zap" => "zap",
    "zen" => "zen", "zho" => "zh", "znd" => "znd", "zul" => "zu",
    "zun" => "zun",
};

pub(crate) static OBSOLETE_LANGUAGE_3_TO_2: Map<&'static str, &'static str> = phf_map! {
    "ind" => "in", "heb" => "iw", "yid" => "ji", "jaw" => "jw",
    "srp" => "sh",
};

pub(crate) static COUNTRY_3_TO_2: Map<&'static str, &'static str> = phf_map! {
    "AND" => "AD", "ARE" => "AE", "AFG" => "AF", "ATG" => "AG",
    "AIA" => "AI", "ALB" => "AL", "ARM" => "AM", "ANT" => "AN",
    "AGO" => "AO", "ATA" => "AQ", "ARG" => "AR", "ASM" => "AS",
    "AUT" => "AT", "AUS" => "AU", "ABW" => "AW", "ALA" => "AX",
    "AZE" => "AZ", "BIH" => "BA", "BRB" => "BB", "BGD" => "BD",
    "BEL" => "BE", "BFA" => "BF", "BGR" => "BG", "BHR" => "BH",
    "BDI" => "BI", "BEN" => "BJ", "BLM" => "BL", "BMU" => "BM",
    "BRN" => "BN", "BOL" => "BO", "BRA" => "BR", "BHS" => "BS",
    "BTN" => "BT", "BVT" => "BV", "BWA" => "BW", "BLR" => "BY",
    "BLZ" => "BZ", "CAN" => "CA", "CCK" => "CC", "COD" => "CD",
    "CAF" => "CF", "COG" => "CG", "CHE" => "CH", "CIV" => "CI",
    "COK" => "CK", "CHL" => "CL", "CMR" => "CM", "CHN" => "CN",
    "COL" => "CO", "CRI" => "CR", "CUB" => "CU", "CPV" => "CV",
    "CXR" => "CX", "CYP" => "CY", "CZE" => "CZ", "DEU" => "DE",
    "DJI" => "DJ", "DNK" => "DK", "DMA" => "DM", "DOM" => "DO",
    "DZA" => "DZ", "ECU" => "EC", "EST" => "EE", "EGY" => "EG",
    "ESH" => "EH", "ERI" => "ER", "ESP" => "ES", "ETH" => "ET",
    "FIN" => "FI", "FJI" => "FJ", "FLK" => "FK", "FSM" => "FM",
    "FRO" => "FO", "FRA" => "FR", "GAB" => "GA", "GBR" => "GB",
    "GRD" => "GD", "GEO" => "GE", "GUF" => "GF", "GGY" => "GG",
    "GHA" => "GH", "GIB" => "GI", "GRL" => "GL", "GMB" => "GM",
    "GIN" => "GN", "GLP" => "GP", "GNQ" => "GQ", "GRC" => "GR",
    "SGS" => "GS", "GTM" => "GT", "GUM" => "GU", "GNB" => "GW",
    "GUY" => "GY", "HKG" => "HK", "HMD" => "HM", "HND" => "HN",
    "HRV" => "HR", "HTI" => "HT", "HUN" => "HU", "IDN" => "ID",
    "IRL" => "IE", "ISR" => "IL", "IMN" => "IM", "IND" => "IN",
    "IOT" => "IO", "IRQ" => "IQ", "IRN" => "IR", "ISL" => "IS",
    "ITA" => "IT", "JEY" => "JE", "JAM" => "JM", "JOR" => "JO",
    "JPN" => "JP", "KEN" => "KE", "KGZ" => "KG", "KHM" => "KH",
    "KIR" => "KI", "COM" => "KM", "KNA" => "KN", "PRK" => "KP",
    "KOR" => "KR", "KWT" => "KW", "CYM" => "KY", "KAZ" => "KZ",
    "LAO" => "LA", "LBN" => "LB", "LCA" => "LC", "LIE" => "LI",
    "LKA" => "LK", "LBR" => "LR", "LSO" => "LS", "LTU" => "LT",
    "LUX" => "LU", "LVA" => "LV", "LBY" => "LY", "MAR" => "MA",
    "MCO" => "MC", "MDA" => "MD", "MNE" => "ME", "MAF" => "MF",
    "MDG" => "MG", "MHL" => "MH", "MKD" => "MK", "MLI" => "ML",
    "MMR" => "MM", "MNG" => "MN", "MAC" => "MO", "MNP" => "MP",
    "MTQ" => "MQ", "MRT" => "MR", "MSR" => "MS", "MLT" => "MT",
    "MUS" => "MU", "MDV" => "MV", "MWI" => "MW", "MEX" => "MX",
    "MYS" => "MY", "MOZ" => "MZ", "NAM" => "NA", "NCL" => "NC",
    "NER" => "NE", "NFK" => "NF", "NGA" => "NG", "NIC" => "NI",
    "NLD" => "NL", "NOR" => "NO", "NPL" => "NP", "NRU" => "NR",
    "NIU" => "NU", "NZL" => "NZ", "OMN" => "OM", "PAN" => "PA",
    "PER" => "PE", "PYF" => "PF", "PNG" => "PG", "PHL" => "PH",
    "PAK" => "PK", "POL" => "PL", "SPM" => "PM", "PCN" => "PN",
    "PRI" => "PR", "PSE" => "PS", "PRT" => "PT", "PLW" => "PW",
    "PRY" => "PY", "QAT" => "QA", "REU" => "RE", "ROU" => "RO",
    "SRB" => "RS", "RUS" => "RU", "RWA" => "RW", "SAU" => "SA",
    "SLB" => "SB", "SYC" => "SC", "SDN" => "SD", "SWE" => "SE",
    "SGP" => "SG", "SHN" => "SH", "SVN" => "SI", "SJM" => "SJ",
    "SVK" => "SK", "SLE" => "SL", "SMR" => "SM", "SEN" => "SN",
    "SOM" => "SO", "SUR" => "SR", "STP" => "ST", "SLV" => "SV",
    "SYR" => "SY", "SWZ" => "SZ", "TCA" => "TC", "TCD" => "TD",
    "ATF" => "TF", "TGO" => "TG", "THA" => "TH", "TJK" => "TJ",
    "TKL" => "TK", "TLS" => "TL", "TKM" => "TM", "TUN" => "TN",
    "TON" => "TO", "TUR" => "TR", "TTO" => "TT", "TUV" => "TV",
    "TWN" => "TW", "TZA" => "TZ", "UKR" => "UA", "UGA" => "UG",
    "UMI" => "UM", "USA" => "US", "URY" => "UY", "UZB" => "UZ",
    "VAT" => "VA", "VCT" => "VC", "VEN" => "VE", "VGB" => "VG",
    "VIR" => "VI", "VNM" => "VN", "VUT" => "VU", "WLF" => "WF",
    "WSM" => "WS", "YEM" => "YE", "MYT" => "YT", "ZAF" => "ZA",
    "ZMB" => "ZM", "ZWE" => "ZW",
};

pub(crate) static OBSOLETE_COUNTRY_3_TO_2: Map<&'static str, &'static str> = phf_map! {
    "FXX" => "FX", "SCG" => "CS", "ROM" => "RO", "TMP" => "TP",
    "YUG" => "YU", "ZAR" => "ZR",
};
