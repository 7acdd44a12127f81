// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run summaries for the console

pub mod formatter;
pub mod output;

use crate::types::{LanguageList, SeedReport};
use anyhow::Result;

pub use formatter::ReportFormatter;
pub use output::OutputFormat;

/// Print a seeding summary in the requested format
pub fn print_report(report: &SeedReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            ReportFormatter::new().print(report);
            Ok(())
        }
        _ => {
            println!("{}", format.serialize(report)?);
            Ok(())
        }
    }
}

/// Print a language list in the requested format
pub fn print_languages(languages: &LanguageList, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            ReportFormatter::new().print_languages(languages);
            Ok(())
        }
        _ => {
            println!("{}", format.serialize(languages)?);
            Ok(())
        }
    }
}
