// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-seed: placeholder translation files for frontend i18n directories.
//!
//! Given a canonical English resource (`en.json`) and an ordered list of
//! languages, creates `<code>.json` for every language that has no file yet.
//! Each new file is the English resource with the language's own entry added
//! to its `languages` map, so a frontend loader finds a file for every
//! language it offers while real translations are pending.
//!
//! Existing files are never touched. Runs are idempotent: a second run over
//! the same directory creates nothing.
//!
//! ```no_run
//! use i18n_seed::{config::SeedConfig, seed};
//!
//! let report = seed::run(&SeedConfig::for_directory("frontend/i18n"))?;
//! println!("created {}", report.created_count());
//! # Ok::<(), i18n_seed::error::SeedError>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod report;
pub mod seed;
pub mod storage;
pub mod template;
pub mod types;
