//! genesis validate command

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use prototypes::{LocaleIndex, PrototypeLoader, ValidationReport, Validator};
use shared::ServerConfig;

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Prototype directory (defaults to the configured one)
    #[arg(long)]
    pub prototypes: Option<PathBuf>,

    /// Locale directory (defaults to the configured one)
    #[arg(long)]
    pub locale: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateCommand {
    /// Run every content check. Fails when the report has any issue.
    pub fn run(&self, config: &ServerConfig) -> anyhow::Result<()> {
        let report = self.report(config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }

        if !report.is_ok() {
            anyhow::bail!("validation failed with {} issue(s)", report.issues.len());
        }
        Ok(())
    }

    pub fn report(&self, config: &ServerConfig) -> anyhow::Result<ValidationReport> {
        let prototypes_dir = self.prototypes.as_ref().unwrap_or(&config.prototypes_dir);
        let locale_dir = self.locale.as_ref().unwrap_or(&config.locale_dir);

        let mut loader = PrototypeLoader::new();
        loader
            .load_from_directory(prototypes_dir)
            .with_context(|| format!("scanning {}", prototypes_dir.display()))?;
        let locale = LocaleIndex::load_from_directory(locale_dir)
            .with_context(|| format!("scanning {}", locale_dir.display()))?;

        Ok(Validator::new(&loader, &locale).run())
    }
}

fn print_report(report: &ValidationReport) {
    println!("Total prototype IDs: {}", report.prototype_ids);
    println!("Total referenced IDs: {}", report.referenced_ids);
    println!("Total locale IDs: {}", report.locale_keys);

    for skipped in &report.skipped_files {
        println!("{} {}", style("skipped").yellow(), skipped);
    }

    if report.is_ok() {
        println!("{}", style("All checks passed!").green());
        return;
    }

    println!("{}", style("=== Validation Errors ===").red().bold());
    for issue in &report.issues {
        println!("[{}] {}", style(issue.kind).red(), issue.id);
        for location in &issue.locations {
            println!("   -> {}", location);
        }
    }
}
