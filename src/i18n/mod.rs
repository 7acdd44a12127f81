// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language tables for seeding.
//!
//! Holds the built-in list of languages that get a placeholder resource,
//! and the ISO 639 code tables used to sanity-check custom lists.
//!
//! ## Built-in languages
//!
//! 58 languages, in seeding order: the scheduled Indian languages first
//! (Marathi through Sanskrit), then widely used world languages, then the
//! remaining Eighth Schedule languages (Maithili, Santali, Kashmiri, Konkani,
//! Sindhi, Dogri, Manipuri). Five of them only have ISO 639-2/3 codes:
//! `mai`, `sat`, `gom`, `doi`, `mni`.

mod iso639;
mod languages;

pub use iso639::{is_iso639_1, is_iso639_3, is_known_code};
pub use languages::{builtin_languages, BUILTIN_LANGUAGES};
