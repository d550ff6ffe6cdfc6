//! `cranelog import` command - Build the JSON store from the two workbooks
//!
//! The mechanical workbook is imported first so that it creates the
//! equipment set; the electrical workbook then merges into it by code.
//! The store is rebuilt from scratch and written whole on every run.

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::importer::{ImportStats, Importer, Source};
use crate::core::workbook::Workbook;

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Mechanical repair-log workbook
    #[arg(long, short = 'm', default_value = "크레인 기계(2026년도).xlsx")]
    pub mechanical: PathBuf,

    /// Electrical repair-log workbook
    #[arg(long, short = 'e', default_value = "Povim 크레인 전기(26년1월4주차).xlsx")]
    pub electrical: PathBuf,

    /// Store file to write
    #[arg(long, short = 'o', default_value = "crane_data.json")]
    pub output: PathBuf,
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let mut importer = Importer::new();

    let phases = [
        (&args.mechanical, Source::Mechanical),
        (&args.electrical, Source::Electrical),
    ];

    for (path, source) in phases {
        let mut workbook = Workbook::open(path).map_err(|e| miette::miette!("{}", e))?;
        if !global.quiet {
            println!(
                "{} Importing {}",
                style("→").blue(),
                style(workbook.display_name()).yellow()
            );
        }
        if global.verbose {
            println!("  sheets: {:?}", workbook.sheet_names());
        }
        let stats = importer
            .import_workbook(&mut workbook, source)
            .map_err(|e| miette::miette!("{}", e))?;
        if !global.quiet {
            print_phase(&stats, &importer);
        }
    }

    let doc = importer.finish();
    doc.save(&args.output).map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!();
        println!("{}", style("─".repeat(50)).dim());
        println!("{}", style("Import Summary").bold());
        println!("{}", style("─".repeat(50)).dim());
        println!("  Equipments: {}", style(doc.equipments.len()).green());
        println!("  Histories:  {}", style(doc.histories.len()).green());
        println!(
            "{} Wrote store to {}",
            style("✓").green(),
            style(args.output.display()).yellow()
        );
    }
    Ok(())
}

fn print_phase(stats: &ImportStats, importer: &Importer) {
    println!(
        "  {} sheets ({} skipped), {} created, {} merged, {} rows dropped",
        stats.sheets_processed,
        stats.sheets_skipped,
        stats.equipments_created,
        stats.equipments_merged,
        stats.rows_dropped,
    );
    println!(
        "  running totals: {} equipments, {} histories",
        style(importer.equipment_count()).cyan(),
        style(importer.history_count()).cyan(),
    );
}
