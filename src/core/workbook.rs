//! Thin wrapper over calamine xlsx reading
//!
//! The rest of the crate only ever needs "list the sheet names" and "give me
//! a sheet as a 2-D grid of cells"; this module keeps the calamine surface
//! contained to one file.

use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        source: XlsxError,
    },

    #[error("failed to read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        source: XlsxError,
    },
}

/// An open xlsx workbook
pub struct Workbook {
    path: PathBuf,
    book: Xlsx<BufReader<File>>,
}

impl Workbook {
    pub fn open(path: &Path) -> Result<Self, WorkbookError> {
        let book = open_workbook(path).map_err(|source| WorkbookError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            book,
        })
    }

    /// File name for console/report output
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.book.sheet_names().to_vec()
    }

    /// Load one sheet as a cell grid
    pub fn grid(&mut self, sheet: &str) -> Result<SheetGrid, WorkbookError> {
        let range = self
            .book
            .worksheet_range(sheet)
            .map_err(|source| WorkbookError::Sheet {
                sheet: sheet.to_string(),
                source,
            })?;
        Ok(SheetGrid { range })
    }
}

/// A sheet's used cell range, indexed relative to its top-left cell
pub struct SheetGrid {
    range: Range<Data>,
}

impl SheetGrid {
    pub fn height(&self) -> usize {
        self.range.height()
    }

    pub fn width(&self) -> usize {
        self.range.width()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Data> {
        self.range.get((row, col))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Data]> {
        self.range.rows()
    }

    /// Build a grid from in-memory rows, for tests
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<Data>>) -> Self {
        let height = rows.len().max(1) as u32;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(1) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), value);
            }
        }
        Self { range }
    }
}

/// Render a cell as display text; empty and error cells become ""
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_formats() {
        assert_eq!(cell_text(&Data::String("와이어 교체".to_string())), "와이어 교체");
        assert_eq!(cell_text(&Data::Int(3)), "3");
        assert_eq!(cell_text(&Data::Float(3.0)), "3");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Empty), "");
    }
}
