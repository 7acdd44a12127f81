// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for i18n-seed

use crate::error::{SeedError, SeedResult};
use crate::i18n;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// A language code paired with its human-readable display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

impl LanguageEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// File name of the resource seeded for this language.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.code)
    }
}

/// Ordered list of languages with unique, file-safe codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageList {
    entries: Vec<LanguageEntry>,
}

impl LanguageList {
    /// Build a list, rejecting duplicate codes and codes that cannot name a file.
    ///
    /// Codes outside the ISO 639 tables are accepted but logged.
    pub fn new(entries: Vec<LanguageEntry>) -> SeedResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_file_safe_code(&entry.code) {
                return Err(SeedError::InvalidCode {
                    code: entry.code.clone(),
                });
            }
            if !seen.insert(entry.code.as_str()) {
                return Err(SeedError::DuplicateCode {
                    code: entry.code.clone(),
                });
            }
            if !i18n::is_known_code(&entry.code) {
                warn!("'{}' is not a known ISO 639 language code", entry.code);
            }
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&LanguageEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }
}

impl<'a> IntoIterator for &'a LanguageList {
    type Item = &'a LanguageEntry;
    type IntoIter = std::slice::Iter<'a, LanguageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn is_file_safe_code(code: &str) -> bool {
    !code.is_empty()
        && !code.starts_with('.')
        && !code
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '\0' || c.is_control())
}

/// What happened to a single language during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedOutcome {
    Created,
    Skipped,
}

/// Summary of one seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReport {
    pub created_at: String,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub atomic: bool,
    /// Codes whose files were written (or would be, on a dry run), in list order.
    pub created: Vec<String>,
    /// Codes whose files already existed.
    pub skipped: Vec<String>,
}

impl SeedReport {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn record(&mut self, code: &str, outcome: SeedOutcome) {
        match outcome {
            SeedOutcome::Created => self.created.push(code.to_string()),
            SeedOutcome::Skipped => self.skipped.push(code.to_string()),
        }
    }
}
