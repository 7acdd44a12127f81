// SPDX-License-Identifier: PMPL-1.0-or-later

//! Colored console summaries

use crate::types::{LanguageList, SeedReport};
use colored::*;

#[derive(Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &SeedReport) {
        if report.dry_run {
            println!("{}", "DRY RUN: no files written".bold().yellow());
        }
        if !report.created.is_empty() {
            let verb = if report.dry_run { "Would create" } else { "Created" };
            println!("  {}: {}", verb, report.created.join(", ").green());
        }
        if !report.skipped.is_empty() {
            println!(
                "  Skipped (already present): {}",
                report.skipped.join(", ").dimmed()
            );
        }
        println!("{}", self.completion_line(report));
    }

    /// One-line outcome, e.g. `Created 3 language files in i18n (55 already present)`.
    pub fn completion_line(&self, report: &SeedReport) -> String {
        let created = report.created_count();
        let noun = if created == 1 { "file" } else { "files" };
        let verb = if report.dry_run { "Would create" } else { "Created" };
        format!(
            "{} {} language {} in {} ({} already present)",
            verb,
            created,
            noun,
            report.output_dir.display(),
            report.skipped_count()
        )
    }

    pub fn print_languages(&self, languages: &LanguageList) {
        println!("{}", format!("{} languages", languages.len()).bold().cyan());
        for entry in languages {
            println!("  {:6} {}", entry.code.bold(), entry.name);
        }
    }
}
