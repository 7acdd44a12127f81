// SPDX-License-Identifier: PMPL-1.0-or-later

//! Read-only health check of an i18n directory

use crate::config::SeedConfig;
use crate::seed::target_path;
use crate::template::TranslationTemplate;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

pub fn run_diagnostics(config: &SeedConfig) -> Result<()> {
    println!("i18n-seed diagnostics");

    let checks = collect_checks(config);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// Run every check against `config` without writing anything.
pub fn collect_checks(config: &SeedConfig) -> Vec<Diagnostic> {
    vec![
        Diagnostic::ok("version", format!("i18n-seed {}", env!("CARGO_PKG_VERSION"))),
        check_template(&config.template),
        check_output_dir(&config.output_dir, config.create_dir),
        Diagnostic::ok(
            "language list",
            format!("{} languages configured", config.languages.len()),
        ),
        check_missing(config),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:16} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_template(path: &Path) -> Diagnostic {
    match TranslationTemplate::load(path) {
        Ok(template) => Diagnostic::ok(
            "template",
            format!(
                "{} valid ({} languages listed)",
                path.display(),
                template.language_count()
            ),
        ),
        Err(err) => Diagnostic::error("template", err.to_string()),
    }
}

fn check_output_dir(dir: &Path, create_dir: bool) -> Diagnostic {
    if dir.is_dir() {
        match probe_writable(dir) {
            Ok(()) => Diagnostic::ok("output dir", format!("{} is writable", dir.display())),
            Err(err) => Diagnostic::error("output dir", format!("{:#}", err)),
        }
    } else if dir.exists() {
        Diagnostic::error(
            "output dir",
            format!("{} exists but is not a directory", dir.display()),
        )
    } else if create_dir {
        Diagnostic::warning(
            "output dir",
            format!("{} missing (will be created)", dir.display()),
        )
    } else {
        Diagnostic::error(
            "output dir",
            format!(
                "{} missing (create with mkdir -p {} or pass --create-dir)",
                dir.display(),
                dir.display()
            ),
        )
    }
}

fn probe_writable(dir: &Path) -> Result<()> {
    tempfile::tempfile_in(dir)
        .map(drop)
        .with_context(|| format!("{} is not writable", dir.display()))
}

fn check_missing(config: &SeedConfig) -> Diagnostic {
    let missing: Vec<&str> = config
        .languages
        .iter()
        .filter(|entry| !target_path(&config.output_dir, entry).exists())
        .map(|entry| entry.code.as_str())
        .collect();

    if missing.is_empty() {
        return Diagnostic::ok("language files", "all present".to_string());
    }

    let on_disk = count_json_files(&config.output_dir).unwrap_or(0);
    Diagnostic::warning(
        "language files",
        format!(
            "{} missing ({}); {} JSON files on disk (run `i18n-seed seed` to create)",
            missing.len(),
            missing.join(", "),
            on_disk
        ),
    )
}

fn count_json_files(dir: &Path) -> Result<usize> {
    let count = fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .count();
    Ok(count)
}
