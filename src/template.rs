// SPDX-License-Identifier: PMPL-1.0-or-later

//! Canonical translation template
//!
//! The template is loaded once, validated, and then only read. Every seeded
//! resource is an owned clone, so changing one never touches the template
//! or any other output.

use crate::error::{SeedError, SeedResult};
use crate::types::LanguageEntry;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the code -> display name map in every resource.
pub const LANGUAGES_KEY: &str = "languages";

/// A loaded translation resource: a JSON object with a `languages` object.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTemplate {
    path: PathBuf,
    root: Map<String, Value>,
}

impl TranslationTemplate {
    /// Read and validate the template at `path`.
    pub fn load(path: &Path) -> SeedResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse template JSON; `path` is only used in error messages.
    pub fn parse(path: &Path, content: &str) -> SeedResult<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|source| SeedError::TemplateParse {
                path: path.to_path_buf(),
                source,
            })?;
        let Value::Object(root) = value else {
            return Err(SeedError::TemplateNotObject {
                path: path.to_path_buf(),
            });
        };
        if !matches!(root.get(LANGUAGES_KEY), Some(Value::Object(_))) {
            return Err(SeedError::MissingLanguages {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn languages(&self) -> Option<&Map<String, Value>> {
        self.root.get(LANGUAGES_KEY).and_then(Value::as_object)
    }

    /// Number of entries in the template's own `languages` map.
    pub fn language_count(&self) -> usize {
        self.languages().map_or(0, Map::len)
    }

    /// Resource for `entry`: the template with `languages[code] = name`.
    ///
    /// An existing entry for the code keeps its position and takes the new name.
    pub fn seeded_for(&self, entry: &LanguageEntry) -> Value {
        let mut root = self.root.clone();
        if let Some(Value::Object(languages)) = root.get_mut(LANGUAGES_KEY) {
            languages.insert(entry.code.clone(), Value::String(entry.name.clone()));
        }
        Value::Object(root)
    }
}
