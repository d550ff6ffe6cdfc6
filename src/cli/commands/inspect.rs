//! `cranelog inspect` command - Dump workbook structure for manual review
//!
//! Emits a plain-text report a human reads before deciding parsing offsets:
//! the sheet-name list per workbook, then for the first few sheets the grid
//! dimensions and leading rows. Nothing downstream consumes this file.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::workbook::{cell_text, Workbook};

/// Leading rows rendered per inspected sheet
const PREVIEW_ROWS: usize = 20;

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Workbooks to inspect
    #[arg(required = true)]
    pub workbooks: Vec<PathBuf>,

    /// How many sheets to dump per workbook
    #[arg(long, short = 's', default_value = "3")]
    pub sheets: usize,

    /// Report file to write
    #[arg(long, short = 'o', default_value = "workbook_report.txt")]
    pub output: PathBuf,
}

pub fn run(args: InspectArgs, global: &GlobalOpts) -> Result<()> {
    let mut lines: Vec<String> = Vec::new();

    for path in &args.workbooks {
        let mut workbook =
            Workbook::open(path).map_err(|e| miette::miette!("{}", e))?;
        dump_workbook(&mut workbook, args.sheets, &mut lines)
            .map_err(|e| miette::miette!("{}", e))?;
    }

    fs::write(&args.output, lines.join("\n")).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Wrote inspection report to {}",
            style("✓").green(),
            style(args.output.display()).yellow()
        );
    }
    Ok(())
}

fn dump_workbook(
    workbook: &mut Workbook,
    max_sheets: usize,
    lines: &mut Vec<String>,
) -> Result<(), crate::core::WorkbookError> {
    let names = workbook.sheet_names();
    lines.push(format!("=== {} ===", workbook.display_name()));
    lines.push(format!("sheets: {names:?}"));

    for sheet in names.iter().take(max_sheets) {
        let grid = workbook.grid(sheet)?;
        lines.push(String::new());
        lines.push(format!("=== sheet: {sheet} ==="));
        lines.push(format!("columns: {}, rows: {}", grid.width(), grid.height()));
        lines.push(format!("first {PREVIEW_ROWS} rows:"));
        for row in grid.rows().take(PREVIEW_ROWS) {
            let rendered: Vec<String> = row.iter().map(cell_text).collect();
            lines.push(rendered.join("\t"));
        }
    }
    lines.push(String::new());
    Ok(())
}
