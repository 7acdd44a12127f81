// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-seed: create placeholder translation files from an English template

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use env_logger::Env;
use i18n_seed::config::{self, SeedConfig};
use i18n_seed::report::{self, OutputFormat};
use i18n_seed::{diagnostics, seed};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "i18n-seed")]
#[command(version)]
#[command(about = "Seed placeholder i18n resource files from an English template")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create `<code>.json` for every language without a file
    Seed {
        #[command(flatten)]
        target: TargetArgs,

        /// Show what would be created without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Stage all files first and only move them into place if every write succeeded
        #[arg(long)]
        atomic: bool,

        /// Summary format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the languages that would be seeded
    Languages {
        /// Language list file (JSON or YAML) replacing the built-in list
        #[arg(short, long, value_name = "FILE")]
        languages: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Inspect the template and i18n directory without writing
    Check {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// i18n directory holding en.json and receiving the new files
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Template to copy [default: DIR/en.json]
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Language list file (JSON or YAML) replacing the built-in list
    #[arg(short, long, value_name = "FILE")]
    languages: Option<PathBuf>,

    /// Create the i18n directory if it does not exist
    #[arg(long)]
    create_dir: bool,
}

impl TargetArgs {
    fn into_config(self) -> Result<SeedConfig> {
        let languages = config::resolve_language_list(self.languages.as_deref())
            .context("loading language list")?;
        let mut seed_config = SeedConfig::for_directory(self.dir).with_languages(languages);
        seed_config.create_dir = self.create_dir;
        if let Some(template) = self.template {
            seed_config = seed_config.with_template(template);
        }
        Ok(seed_config)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.verbosity.into())
        .parse_env(Env::new().filter("I18N_SEED_LOG"))
        .init();

    match cli.command {
        Commands::Seed {
            target,
            dry_run,
            atomic,
            format,
        } => {
            let mut seed_config = target.into_config()?;
            seed_config.dry_run = dry_run;
            seed_config.atomic = atomic;

            let seed_report = seed::run(&seed_config).with_context(|| {
                format!("seeding {}", seed_config.output_dir.display())
            })?;
            report::print_report(&seed_report, format)?;
        }

        Commands::Languages { languages, format } => {
            let list = config::resolve_language_list(languages.as_deref())
                .context("loading language list")?;
            report::print_languages(&list, format)?;
        }

        Commands::Check { target } => {
            let seed_config = target.into_config()?;
            diagnostics::run_diagnostics(&seed_config)?;
        }
    }

    Ok(())
}
