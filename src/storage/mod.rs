// SPDX-License-Identifier: PMPL-1.0-or-later

//! Writing seeded resources to disk
//!
//! Resources are encoded as UTF-8 JSON with 4-space indentation and literal
//! non-ASCII text. [`write_resource`] writes a file directly; [`StagedBatch`]
//! stages every file as a temp file in the target directory and only moves
//! them into place once all of them were written.

use crate::error::{SeedError, SeedResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const INDENT: &[u8] = b"    ";

/// Encode `value` as pretty JSON with a 4-space indent and no trailing newline.
pub fn encode_resource(code: &str, value: &Value) -> SeedResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|source| SeedError::Serialize {
            code: code.to_string(),
            source,
        })?;
    Ok(buf)
}

/// Create or truncate `path` with `bytes`.
pub fn write_resource(path: &Path, bytes: &[u8]) -> SeedResult<()> {
    fs::write(path, bytes).map_err(|source| SeedError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> SeedResult<()> {
    fs::create_dir_all(dir).map_err(|source| SeedError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

/// Files staged next to their targets, moved into place together.
///
/// Dropping an uncommitted batch deletes every staged file.
pub struct StagedBatch {
    dir: PathBuf,
    staged: Vec<(NamedTempFile, PathBuf)>,
}

impl StagedBatch {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            staged: Vec::new(),
        }
    }

    /// Write `bytes` to a temp file that will become `target` on commit.
    pub fn stage(&mut self, target: PathBuf, bytes: &[u8]) -> SeedResult<()> {
        let write_err = |source| SeedError::Write {
            path: target.clone(),
            source,
        };
        let mut file = tempfile::Builder::new()
            .prefix(".i18n-seed-")
            .suffix(".tmp")
            .tempfile_in(&self.dir)
            .map_err(write_err)?;
        file.write_all(bytes).map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;
        self.staged.push((file, target));
        Ok(())
    }

    /// Move every staged file into place without replacing existing files.
    ///
    /// Returns the target paths in staging order. A failed rename stops the
    /// commit; targets moved before it stay, the remaining temp files are removed.
    pub fn commit(self) -> SeedResult<Vec<PathBuf>> {
        let mut committed = Vec::with_capacity(self.staged.len());
        for (file, target) in self.staged {
            file.persist_noclobber(&target)
                .map_err(|err| SeedError::Persist {
                    path: target.clone(),
                    source: err.error,
                })?;
            committed.push(target);
        }
        Ok(committed)
    }
}
