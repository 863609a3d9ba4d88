//! CLI companion for the domain generator.
//!
//! Writes the example input workbook and dry-runs workbooks without starting
//! the server.
//!
//! # Usage
//!
//! ```bash
//! # Write the example template (asks before overwriting)
//! cargo run --bin template -- write
//!
//! # Write it somewhere else, no questions asked
//! cargo run --bin template -- write --output /tmp/template.xlsx --yes
//!
//! # Resolve a workbook and print the summary, nothing is written
//! cargo run --bin template -- check tals.xlsx
//! ```
//!
//! # Environment Variables
//!
//! - `INPUT_SHEET`, `EMPTY_ROW_LIMIT`: same meaning as for the server

use domain_generator::application::services::{RunOptions, RunOrchestrator};
use domain_generator::config;
use domain_generator::domain::entities::RowStatus;
use domain_generator::infrastructure::spreadsheet::{CalamineWorkbook, xlsx_writer};
use domain_generator::infrastructure::storage::MemoryArtifactSink;
use domain_generator::infrastructure::template::{CAMPAIGN_NAMES, template_workbook};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};

/// Template and dry-run tool for the domain generator.
#[derive(Parser)]
#[command(name = "template")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the example input workbook
    Write {
        /// Destination file
        #[arg(short, long, default_value = "template/sample_template.xlsx")]
        output: PathBuf,

        /// Overwrite without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Resolve a workbook and print the summary without writing files
    Check {
        /// Workbook to check (.xlsx or .xls)
        file: PathBuf,

        /// Input sheet name (overrides INPUT_SHEET)
        #[arg(short, long)]
        sheet: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Write { output, yes } => write_template(&output, yes),
        Commands::Check { file, sheet } => {
            let config = config::load_from_env().context("Invalid configuration")?;
            let mut options = config.run_options();
            if let Some(sheet) = sheet {
                options.input_sheet = sheet;
            }
            check_workbook(&file, options)
        }
    }
}

/// Writes the example workbook, confirming before overwriting.
fn write_template(output: &Path, skip_confirm: bool) -> Result<()> {
    println!("{}", "📄 Write example template".bright_blue().bold());
    println!();

    if output.exists() && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    xlsx_writer::save_workbook(&template_workbook(), output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {}",
        "✅ Template written to".green().bold(),
        output.display().to_string().cyan()
    );
    println!("  - Sheet1 with 5 sample TAL rows");
    println!("  - {} campaign sheets", CAMPAIGN_NAMES.len());
    println!();

    Ok(())
}

/// Runs the engine over a workbook with an in-memory sink and prints the summary.
///
/// # Output Format
///
/// ```text
/// 🔍 Checking tals.xlsx
///
///   TAL Name             Campaign                       Status   Count  Details
///   ───────────────────────────────────────────────────────────────────────────
///   TAL1                 CampaignX                      Yes      2      Yes
///   TAL2                 CampaignX                      No       0      All countries missing: Mexico
/// ```
fn check_workbook(file: &Path, options: RunOptions) -> Result<()> {
    println!(
        "{} {}",
        "🔍 Checking".bright_blue().bold(),
        file.display().to_string().cyan()
    );
    println!();

    let mut workbook = CalamineWorkbook::open(file)?;
    let mut sink = MemoryArtifactSink::new();
    let report = RunOrchestrator::new(options).run(&mut workbook, &mut sink)?;

    println!(
        "  {:<20} {:<30} {:<8} {:<6} {}",
        "TAL Name".bright_white().bold(),
        "Campaign".bright_white().bold(),
        "Status".bright_white().bold(),
        "Count".bright_white().bold(),
        "Details".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for entry in &report.summary {
        let status = match entry.status {
            RowStatus::Yes => entry.status.as_str().green(),
            RowStatus::Partial => entry.status.as_str().yellow(),
            RowStatus::No | RowStatus::Error => entry.status.as_str().red(),
        };
        let count = entry
            .domain_count
            .map(|c| c.to_string())
            .unwrap_or_default();

        println!(
            "  {:<20} {:<30} {:<8} {:<6} {}",
            entry.entity_name.cyan(),
            entry.campaign_name,
            status,
            count,
            entry.diagnostic.bright_black()
        );
    }

    println!();
    println!(
        "  Rows: {}   Files that would be created: {}",
        report.summary.len().to_string().bright_white().bold(),
        report.files_created.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}
