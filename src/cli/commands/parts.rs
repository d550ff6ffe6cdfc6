//! `cranelog parts` command - Ranked part repair/replacement report
//!
//! Loads the store, tags every history entry against the part vocabulary
//! and prints the frequency list plus sample details for the top parts.

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::analysis::tagger::{PartReport, SAMPLES_PER_PART};
use crate::cli::helpers::truncate_str;
use crate::cli::GlobalOpts;
use crate::core::store::Document;

/// Character cap for a sample line's description
const SAMPLE_LINE_CHARS: usize = 50;

#[derive(clap::Args, Debug)]
pub struct PartsArgs {
    /// Store file to analyze
    #[arg(long, short = 's', default_value = "crane_data.json")]
    pub store: PathBuf,
}

pub fn run(args: PartsArgs, global: &GlobalOpts) -> Result<()> {
    let doc = Document::load(&args.store).map_err(|e| miette::miette!("{}", e))?;
    let report = PartReport::build(&doc);

    if global.verbose {
        println!(
            "{} {} histories across {} equipments",
            style("→").blue(),
            doc.histories.len(),
            doc.equipments.len()
        );
    }

    if report.is_empty() {
        println!("No part events found in {}", args.store.display());
        return Ok(());
    }

    println!("{}", style("Part repair/replacement frequency").bold());
    println!("{}", style("─".repeat(50)).dim());
    for part in report.ranked() {
        println!("  {}: {}", part.name, style(format!("x{}", part.count)).cyan());
    }

    if global.quiet {
        return Ok(());
    }

    println!();
    println!("{}", style("Top parts in detail").bold());
    println!("{}", style("─".repeat(50)).dim());
    for part in report.top_detailed() {
        println!();
        println!(
            "{} ({})",
            style(part.name).green(),
            style(format!("x{}", part.count)).cyan()
        );
        for detail in part.details.iter().take(SAMPLES_PER_PART) {
            println!(
                "  - {}: {} - {}",
                detail.date,
                detail.equipment,
                truncate_str(&detail.description, SAMPLE_LINE_CHARS)
            );
        }
    }
    Ok(())
}
