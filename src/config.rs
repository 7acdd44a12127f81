// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration and language list files
//!
//! A language list file is a JSON or YAML sequence of `{code, name}` objects:
//!
//! ```yaml
//! - code: mr
//!   name: Marathi
//! - code: te
//!   name: Telugu
//! ```

use crate::error::{SeedError, SeedResult};
use crate::i18n;
use crate::types::{LanguageEntry, LanguageList};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the canonical template inside the i18n directory.
pub const TEMPLATE_FILE_NAME: &str = "en.json";

/// Everything a seeding run needs.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub languages: LanguageList,
    /// Report what would be created without writing anything.
    pub dry_run: bool,
    /// Stage every file before moving any into place.
    pub atomic: bool,
    /// Create `output_dir` when it does not exist yet.
    pub create_dir: bool,
}

impl SeedConfig {
    /// Config for an i18n directory holding `en.json`, seeded with the built-in languages.
    pub fn for_directory(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            template: dir.join(TEMPLATE_FILE_NAME),
            output_dir: dir,
            languages: i18n::builtin_languages(),
            dry_run: false,
            atomic: false,
            create_dir: false,
        }
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_languages(mut self, languages: LanguageList) -> Self {
        self.languages = languages;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListFormat {
    Json,
    Yaml,
}

impl ListFormat {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ListFormat::Yaml,
            _ => ListFormat::Json,
        }
    }
}

/// Load a language list from a JSON or YAML file, chosen by extension.
pub fn load_language_list(path: &Path) -> SeedResult<LanguageList> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::LanguageListRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_language_list(&content, ListFormat::from_path(path)).map_err(|reason| {
        SeedError::LanguageListParse {
            path: path.to_path_buf(),
            reason,
        }
    })
    .and_then(LanguageList::new)
}

fn parse_language_list(content: &str, format: ListFormat) -> Result<Vec<LanguageEntry>, String> {
    match format {
        ListFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ListFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}

/// The list from `path` if given, otherwise the built-in table.
pub fn resolve_language_list(path: Option<&Path>) -> SeedResult<LanguageList> {
    match path {
        Some(path) => load_language_list(path),
        None => Ok(i18n::builtin_languages()),
    }
}
