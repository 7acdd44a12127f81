// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639 language code tables.
//!
//! Two-letter ISO 639-1 codes, plus the three-letter ISO 639-2/3 codes for
//! languages that have no two-letter code (mostly South Asian languages
//! found in frontend language pickers).
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// ISO 639-1 codes, sorted for binary search.
const ISO639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", //
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", //
    "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", //
    "da", "de", "dv", "dz", //
    "ee", "el", "en", "eo", "es", "et", "eu", //
    "fa", "ff", "fi", "fj", "fo", "fr", "fy", //
    "ga", "gd", "gl", "gn", "gu", "gv", //
    "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz", //
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", //
    "ja", "jv", //
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", //
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", //
    "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", //
    "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", //
    "oc", "oj", "om", "or", "os", //
    "pa", "pi", "pl", "ps", "pt", //
    "qu", //
    "rm", "rn", "ro", "ru", "rw", //
    "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss", "st",
    "su", "sv", "sw", //
    "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", //
    "ug", "uk", "ur", "uz", //
    "ve", "vi", "vo", //
    "wa", "wo", //
    "xh", //
    "yi", "yo", //
    "za", "zh", "zu",
];

/// ISO 639-2/3 codes for languages without a 639-1 code, sorted.
const ISO639_3: &[&str] = &[
    "awa", "bho", "brx", "ceb", "doi", "fil", "gom", "haw", "hne", "kok", "lus", "mag", "mai",
    "mni", "mwr", "sat", "scn", "tcy", "yue",
];

/// Whether `code` is a lowercase ISO 639-1 two-letter code.
///
/// # Examples
/// ```
/// assert!(i18n_seed::i18n::is_iso639_1("mr"));
/// assert!(!i18n_seed::i18n::is_iso639_1("MR"));
/// assert!(!i18n_seed::i18n::is_iso639_1("mai"));
/// ```
pub fn is_iso639_1(code: &str) -> bool {
    ISO639_1.binary_search(&code).is_ok()
}

/// Whether `code` is one of the supported three-letter ISO 639-2/3 codes.
pub fn is_iso639_3(code: &str) -> bool {
    ISO639_3.binary_search(&code).is_ok()
}

/// Whether `code` is recognised by either table.
pub fn is_known_code(code: &str) -> bool {
    match code.len() {
        2 => is_iso639_1(code),
        3 => is_iso639_3(code),
        _ => false,
    }
}
