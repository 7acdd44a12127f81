// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for seeding runs

use std::path::PathBuf;
use thiserror::Error;

/// Coarse grouping of [`SeedError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Template missing, unreadable, malformed, or without a `languages` map.
    TemplateLoad,
    /// Output directory missing or unwritable, disk full, permission denied.
    FilesystemWrite,
    /// Language list file unreadable, malformed, or inconsistent.
    LanguageList,
    /// JSON encoding of a seeded resource failed.
    Serialize,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template {path} is not valid JSON: {source}")]
    TemplateParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("template {path} must contain a JSON object at the top level")]
    TemplateNotObject { path: PathBuf },

    #[error("template {path} has no `languages` object")]
    MissingLanguages { path: PathBuf },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move staged file into {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read language list {path}: {source}")]
    LanguageListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("language list {path} is malformed: {reason}")]
    LanguageListParse { path: PathBuf, reason: String },

    #[error("language code '{code}' appears more than once")]
    DuplicateCode { code: String },

    #[error("language code '{code}' cannot be used as a file name")]
    InvalidCode { code: String },

    #[error("failed to encode resource for '{code}': {source}")]
    Serialize {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SeedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeedError::TemplateRead { .. }
            | SeedError::TemplateParse { .. }
            | SeedError::TemplateNotObject { .. }
            | SeedError::MissingLanguages { .. } => ErrorKind::TemplateLoad,
            SeedError::Write { .. } | SeedError::Persist { .. } => ErrorKind::FilesystemWrite,
            SeedError::LanguageListRead { .. }
            | SeedError::LanguageListParse { .. }
            | SeedError::DuplicateCode { .. }
            | SeedError::InvalidCode { .. } => ErrorKind::LanguageList,
            SeedError::Serialize { .. } => ErrorKind::Serialize,
        }
    }
}

pub type SeedResult<T> = std::result::Result<T, SeedError>;
