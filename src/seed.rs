// SPDX-License-Identifier: PMPL-1.0-or-later

//! Seeder: creates a placeholder resource for every language without one
//!
//! One pass over the language list in order. A language whose
//! `<output_dir>/<code>.json` already exists is skipped, whatever the file
//! contains. Every other language gets a copy of the template with its own
//! entry added to `languages`.

use crate::config::SeedConfig;
use crate::error::SeedResult;
use crate::storage::{self, StagedBatch};
use crate::template::TranslationTemplate;
use crate::types::{LanguageEntry, LanguageList, SeedOutcome, SeedReport};
use chrono::Utc;
use log::debug;
use std::path::{Path, PathBuf};

/// Seed `output_dir` from `template` and return how many files were created.
pub fn seed(template: &Path, output_dir: &Path, languages: &LanguageList) -> SeedResult<usize> {
    let config = SeedConfig {
        template: template.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        languages: languages.clone(),
        dry_run: false,
        atomic: false,
        create_dir: false,
    };
    run(&config).map(|report| report.created_count())
}

/// Run a full seeding pass as described by `config`.
///
/// The template is loaded and validated before anything is written.
pub fn run(config: &SeedConfig) -> SeedResult<SeedReport> {
    let template = TranslationTemplate::load(&config.template)?;
    debug!(
        "loaded template {} ({} languages listed)",
        template.path().display(),
        template.language_count()
    );

    let mut report = SeedReport {
        created_at: Utc::now().to_rfc3339(),
        template: config.template.clone(),
        output_dir: config.output_dir.clone(),
        dry_run: config.dry_run,
        atomic: config.atomic,
        created: Vec::new(),
        skipped: Vec::new(),
    };

    let pending = plan(&config.output_dir, &config.languages, &mut report);
    if config.dry_run || pending.is_empty() {
        return Ok(report);
    }

    if config.create_dir {
        storage::ensure_dir(&config.output_dir)?;
    }

    if config.atomic {
        write_atomic(&template, &config.output_dir, &pending)?;
    } else {
        write_direct(&template, &pending)?;
    }

    debug!(
        "seeded {} of {} languages into {}",
        report.created_count(),
        config.languages.len(),
        config.output_dir.display()
    );
    Ok(report)
}

/// Target path of the resource for `entry` inside `output_dir`.
pub fn target_path(output_dir: &Path, entry: &LanguageEntry) -> PathBuf {
    output_dir.join(entry.file_name())
}

/// Decide each language's outcome and collect the ones to write.
fn plan<'a>(
    output_dir: &Path,
    languages: &'a LanguageList,
    report: &mut SeedReport,
) -> Vec<(&'a LanguageEntry, PathBuf)> {
    let mut pending = Vec::new();
    for entry in languages {
        let path = target_path(output_dir, entry);
        if path.exists() {
            debug!("skipping {}: {} exists", entry.code, path.display());
            report.record(&entry.code, SeedOutcome::Skipped);
        } else {
            report.record(&entry.code, SeedOutcome::Created);
            pending.push((entry, path));
        }
    }
    pending
}

fn write_direct(
    template: &TranslationTemplate,
    pending: &[(&LanguageEntry, PathBuf)],
) -> SeedResult<()> {
    for (entry, path) in pending {
        let bytes = storage::encode_resource(&entry.code, &template.seeded_for(entry))?;
        storage::write_resource(path, &bytes)?;
        debug!("created {}", path.display());
    }
    Ok(())
}

fn write_atomic(
    template: &TranslationTemplate,
    output_dir: &Path,
    pending: &[(&LanguageEntry, PathBuf)],
) -> SeedResult<()> {
    let mut batch = StagedBatch::new(output_dir);
    for (entry, path) in pending {
        let bytes = storage::encode_resource(&entry.code, &template.seeded_for(entry))?;
        batch.stage(path.clone(), &bytes)?;
    }
    debug!("staged {} files, moving into place", pending.len());
    for path in batch.commit()? {
        debug!("created {}", path.display());
    }
    Ok(())
}
