// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in language table.

use crate::types::{LanguageEntry, LanguageList};

/// Languages seeded when no custom list is given, as `(code, display name)`.
pub const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("mr", "Marathi"),
    ("te", "Telugu"),
    ("ta", "Tamil"),
    ("gu", "Gujarati"),
    ("kn", "Kannada"),
    ("ml", "Malayalam"),
    ("or", "Odia"),
    ("pa", "Punjabi"),
    ("as", "Assamese"),
    ("ur", "Urdu"),
    ("sa", "Sanskrit"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("it", "Italian"),
    ("tr", "Turkish"),
    ("vi", "Vietnamese"),
    ("pl", "Polish"),
    ("nl", "Dutch"),
    ("th", "Thai"),
    ("id", "Indonesian"),
    ("fa", "Persian"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("sv", "Swedish"),
    ("no", "Norwegian"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("ro", "Romanian"),
    ("hu", "Hungarian"),
    ("cs", "Czech"),
    ("sk", "Slovak"),
    ("uk", "Ukrainian"),
    ("bg", "Bulgarian"),
    ("hr", "Croatian"),
    ("sr", "Serbian"),
    ("ms", "Malay"),
    ("tl", "Filipino"),
    ("sw", "Swahili"),
    ("am", "Amharic"),
    ("zu", "Zulu"),
    ("af", "Afrikaans"),
    ("ga", "Irish"),
    ("ne", "Nepali"),
    ("si", "Sinhala"),
    ("mai", "Maithili"),
    ("sat", "Santali"),
    ("ks", "Kashmiri"),
    ("gom", "Konkani"),
    ("sd", "Sindhi"),
    ("doi", "Dogri"),
    ("mni", "Manipuri"),
];

/// The built-in table as a [`LanguageList`].
pub fn builtin_languages() -> LanguageList {
    let entries = BUILTIN_LANGUAGES
        .iter()
        .map(|(code, name)| LanguageEntry::new(*code, *name))
        .collect();
    LanguageList::new(entries).expect("built-in language table has unique, file-safe codes")
}
