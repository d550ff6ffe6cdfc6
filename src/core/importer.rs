//! Sheet-to-record ETL
//!
//! Each workbook sheet is one crane's repair log: a title row, two
//! header/spacer rows, then dated entries. The mechanical workbook creates
//! the equipment set; the electrical workbook merges into it by the code
//! derived from the sheet name, creating equipment only for codes it has
//! never seen. Rows without a parseable date or a description are noise,
//! not errors, and are dropped without comment.

use std::collections::HashMap;

use chrono::Local;

use crate::core::dates::parse_cell_date;
use crate::core::ids::IdAllocator;
use crate::core::store::Document;
use crate::core::workbook::{cell_text, SheetGrid, Workbook, WorkbookError};
use crate::entities::{
    CraneType, Equipment, HistoryCategory, HistoryEntry, Schedule, Technician,
};

/// First data row; rows 0-2 are title and header/spacer
const DATA_START_ROW: usize = 3;

/// Mechanical-workbook sheet that holds spare parts, not an equipment
const SPARE_PARTS_SHEET: &str = "예비품";

/// Electrical-workbook sheets left at the generic default name
const DEFAULT_SHEET_PREFIX: &str = "Sheet";

/// Suffix token stripped from sheet names to form the merge code
const CODE_SUFFIX_TOKEN: &str = "(H)";

/// Which workbook a sheet came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Mechanical,
    Electrical,
}

impl Source {
    fn technician(self) -> Technician {
        match self {
            Source::Mechanical => Technician::Mechanical,
            Source::Electrical => Technician::Electrical,
        }
    }

    /// Title suffix phrases removed to form the equipment name
    fn name_suffixes(self) -> &'static [&'static str] {
        match self {
            Source::Mechanical => &["기계 수리이력", "수리이력"],
            Source::Electrical => &["전기 수리이력", "수리이력"],
        }
    }

    fn skip_sheet(self, sheet_name: &str) -> bool {
        match self {
            Source::Mechanical => sheet_name == SPARE_PARTS_SHEET,
            Source::Electrical => sheet_name.starts_with(DEFAULT_SHEET_PREFIX),
        }
    }
}

/// Per-workbook import counters
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportStats {
    pub sheets_processed: usize,
    pub sheets_skipped: usize,
    pub equipments_created: usize,
    pub equipments_merged: usize,
    pub histories_added: usize,
    pub rows_dropped: usize,
}

/// One sheet reduced to its title and kept data rows
struct ParsedSheet {
    title: String,
    rows: Vec<ParsedRow>,
    rows_dropped: usize,
}

struct ParsedRow {
    date: String,
    description: String,
    notes: String,
}

/// Builds the record store from the two source workbooks.
///
/// Holds the growing record sets, the code→equipment index used for the
/// cross-workbook merge, and the id sequences. Call [`Importer::import_workbook`]
/// once per workbook (mechanical first), then [`Importer::finish`].
pub struct Importer {
    equipments: Vec<Equipment>,
    histories: Vec<HistoryEntry>,
    by_code: HashMap<String, u32>,
    ids: IdAllocator,
}

impl Importer {
    pub fn new() -> Self {
        Self {
            equipments: Vec::new(),
            histories: Vec::new(),
            by_code: HashMap::new(),
            ids: IdAllocator::new(),
        }
    }

    pub fn equipment_count(&self) -> usize {
        self.equipments.len()
    }

    pub fn history_count(&self) -> usize {
        self.histories.len()
    }

    /// Import every usable sheet of one workbook
    pub fn import_workbook(
        &mut self,
        workbook: &mut Workbook,
        source: Source,
    ) -> Result<ImportStats, WorkbookError> {
        let mut stats = ImportStats::default();
        for sheet_name in workbook.sheet_names() {
            if source.skip_sheet(&sheet_name) {
                stats.sheets_skipped += 1;
                continue;
            }
            let grid = workbook.grid(&sheet_name)?;
            self.import_sheet(&grid, &sheet_name, source, &mut stats);
        }
        Ok(stats)
    }

    /// Import one sheet: find or create its equipment, then append histories
    pub fn import_sheet(
        &mut self,
        grid: &SheetGrid,
        sheet_name: &str,
        source: Source,
        stats: &mut ImportStats,
    ) {
        let parsed = parse_sheet(grid, sheet_name);
        let code = sheet_code(sheet_name);
        stats.sheets_processed += 1;
        stats.rows_dropped += parsed.rows_dropped;

        let equipment_id = match self.by_code.get(&code) {
            Some(&id) => {
                stats.equipments_merged += 1;
                id
            }
            None => {
                let id = self.create_equipment(&parsed.title, code, sheet_name, source);
                stats.equipments_created += 1;
                id
            }
        };

        for row in parsed.rows {
            let category = match source {
                Source::Mechanical => HistoryCategory::classify(&row.description),
                Source::Electrical => HistoryCategory::Repair,
            };
            self.histories.push(HistoryEntry::new(
                self.ids.next_history_id(),
                equipment_id,
                row.date,
                category,
                source.technician(),
                row.description,
                row.notes,
            ));
            stats.histories_added += 1;
        }
    }

    fn create_equipment(
        &mut self,
        title: &str,
        code: String,
        sheet_name: &str,
        source: Source,
    ) -> u32 {
        let id = self.ids.next_equipment_id();
        let name = equipment_name(title, source);
        let crane_type = CraneType::infer(title);
        let notes = match source {
            Source::Mechanical => format!("시트: {sheet_name}"),
            Source::Electrical => format!("시트: {sheet_name} (전기)"),
        };
        self.by_code.insert(code.clone(), id);
        self.equipments
            .push(Equipment::new(id, name, code, crane_type, notes));
        id
    }

    /// Seal the import into a store document
    pub fn finish(self) -> Document {
        Document {
            equipments: self.equipments,
            histories: self.histories,
            schedules: Schedule::placeholders(),
            notifications: Vec::new(),
            export_date: Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        }
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the cross-workbook merge code from a sheet name
fn sheet_code(sheet_name: &str) -> String {
    sheet_name.replace(CODE_SUFFIX_TOKEN, "").trim().to_string()
}

/// Derive the equipment name from a sheet title
fn equipment_name(title: &str, source: Source) -> String {
    let mut name = title.to_string();
    for suffix in source.name_suffixes() {
        name = name.replace(suffix, "");
    }
    name.trim().to_string()
}

/// Reduce a sheet grid to its title and the rows worth keeping.
///
/// Cell (0,0) is the title, falling back to the sheet name when empty.
/// Data rows need a parseable date in column 0 and a non-empty description
/// in column 1; column 2 is an optional note.
fn parse_sheet(grid: &SheetGrid, sheet_name: &str) -> ParsedSheet {
    let title = grid
        .cell(0, 0)
        .map(cell_text)
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| sheet_name.to_string());

    let mut rows = Vec::new();
    let mut rows_dropped = 0;
    for r in DATA_START_ROW..grid.height() {
        let date = grid.cell(r, 0).and_then(parse_cell_date);
        let description = grid
            .cell(r, 1)
            .map(cell_text)
            .unwrap_or_default()
            .trim()
            .to_string();
        let notes = grid
            .cell(r, 2)
            .map(cell_text)
            .unwrap_or_default()
            .trim()
            .to_string();

        match date {
            Some(date) if !description.is_empty() => {
                rows.push(ParsedRow {
                    date,
                    description,
                    notes,
                });
            }
            _ => rows_dropped += 1,
        }
    }

    ParsedSheet {
        title,
        rows,
        rows_dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    /// A minimal repair-log sheet: title, two header rows, then data
    fn log_sheet(title: &str, entries: &[(&str, &str, &str)]) -> SheetGrid {
        let mut rows = vec![
            vec![s(title)],
            vec![s("월별")],
            vec![s("일자"), s("내용"), s("비고")],
        ];
        for (date, desc, note) in entries {
            rows.push(vec![s(date), s(desc), s(note)]);
        }
        SheetGrid::from_rows(rows)
    }

    #[test]
    fn test_sheet_code_strips_suffix_token() {
        assert_eq!(sheet_code("1호기(H)"), "1호기");
        assert_eq!(sheet_code("1호기"), "1호기");
        assert_eq!(sheet_code(" 2호기(H) "), "2호기");
    }

    #[test]
    fn test_equipment_name_strips_report_suffix() {
        assert_eq!(
            equipment_name("1호기 기계 수리이력", Source::Mechanical),
            "1호기"
        );
        assert_eq!(
            equipment_name("Grab Crane 수리이력", Source::Mechanical),
            "Grab Crane"
        );
        assert_eq!(
            equipment_name("1호기 전기 수리이력", Source::Electrical),
            "1호기"
        );
    }

    #[test]
    fn test_parse_sheet_keeps_dated_rows_only() {
        let grid = log_sheet(
            "1호기 기계 수리이력",
            &[
                ("7월23일", "와이어로프 교체", ""),
                ("", "날짜 없는 행", ""),
                ("8월1일", "", "내용 없는 행"),
                ("8월2일", "월간 점검", "이상 없음"),
            ],
        );
        let parsed = parse_sheet(&grid, "1호기(H)");
        assert_eq!(parsed.title, "1호기 기계 수리이력");
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0].date, "2020-07-23");
        assert_eq!(parsed.rows[0].description, "와이어로프 교체");
        assert_eq!(parsed.rows[1].notes, "이상 없음");
    }

    #[test]
    fn test_parse_sheet_title_falls_back_to_sheet_name() {
        let grid = SheetGrid::from_rows(vec![vec![Data::Empty]]);
        let parsed = parse_sheet(&grid, "3호기");
        assert_eq!(parsed.title, "3호기");
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn test_mechanical_rows_classified_by_description() {
        let mut importer = Importer::new();
        let mut stats = ImportStats::default();
        let grid = log_sheet(
            "1호기 기계 수리이력",
            &[
                ("7월23일", "와이어로프 교체", ""),
                ("8월2일", "월간 점검", ""),
            ],
        );
        importer.import_sheet(&grid, "1호기(H)", Source::Mechanical, &mut stats);

        assert_eq!(importer.histories[0].category, HistoryCategory::Repair);
        assert_eq!(
            importer.histories[1].category,
            HistoryCategory::RoutineInspection
        );
        assert_eq!(importer.histories[0].technician, Technician::Mechanical);
    }

    #[test]
    fn test_electrical_merges_into_existing_equipment() {
        let mut importer = Importer::new();
        let mut stats = ImportStats::default();

        let mech = log_sheet("1호기 기계 수리이력", &[("7월23일", "와이어로프 교체", "")]);
        importer.import_sheet(&mech, "1호기(H)", Source::Mechanical, &mut stats);

        let elec = log_sheet("1호기 전기 수리이력", &[("8월1일", "인버터 점검", "")]);
        importer.import_sheet(&elec, "1호기", Source::Electrical, &mut stats);

        assert_eq!(importer.equipment_count(), 1);
        assert_eq!(importer.history_count(), 2);
        assert_eq!(importer.histories[1].equipment_id, importer.equipments[0].id);
        // electrical entries are always repairs, regardless of wording
        assert_eq!(importer.histories[1].category, HistoryCategory::Repair);
        assert_eq!(importer.histories[1].technician, Technician::Electrical);
        assert_eq!(stats.equipments_merged, 1);
    }

    #[test]
    fn test_electrical_creates_equipment_for_unknown_code() {
        let mut importer = Importer::new();
        let mut stats = ImportStats::default();

        let elec = log_sheet("옥외 크레인 전기 수리이력", &[("8월1일", "케이블 교체", "")]);
        importer.import_sheet(&elec, "옥외", Source::Electrical, &mut stats);

        assert_eq!(importer.equipment_count(), 1);
        assert_eq!(importer.equipments[0].name, "옥외 크레인");
        assert!(importer.equipments[0].notes.ends_with("(전기)"));
        assert_eq!(stats.equipments_created, 1);
    }

    #[test]
    fn test_skip_rules_per_source() {
        assert!(Source::Mechanical.skip_sheet("예비품"));
        assert!(!Source::Mechanical.skip_sheet("1호기(H)"));
        assert!(Source::Electrical.skip_sheet("Sheet1"));
        assert!(!Source::Electrical.skip_sheet("1호기"));
    }

    #[test]
    fn test_reimport_is_idempotent_except_export_date() {
        let build = || {
            let mut importer = Importer::new();
            let mut stats = ImportStats::default();
            let mech = log_sheet("1호기 기계 수리이력", &[("7월23일", "와이어로프 교체", "")]);
            importer.import_sheet(&mech, "1호기(H)", Source::Mechanical, &mut stats);
            let elec = log_sheet("1호기 전기 수리이력", &[("8월1일", "인버터 점검", "")]);
            importer.import_sheet(&elec, "1호기", Source::Electrical, &mut stats);
            importer.finish()
        };
        let mut a = build();
        let mut b = build();
        a.export_date = String::new();
        b.export_date = String::new();
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn test_ids_are_dense_across_sheets() {
        let mut importer = Importer::new();
        let mut stats = ImportStats::default();
        for (sheet, title) in [("1호기(H)", "1호기 기계 수리이력"), ("2호기", "2호기 기계 수리이력")] {
            let grid = log_sheet(title, &[("7월23일", "베어링 교체", "")]);
            importer.import_sheet(&grid, sheet, Source::Mechanical, &mut stats);
        }
        let doc = importer.finish();
        assert_eq!(doc.equipments[0].id, 1);
        assert_eq!(doc.equipments[1].id, 2);
        assert_eq!(doc.histories[0].id, 1);
        assert_eq!(doc.histories[1].id, 2);
        assert_eq!(doc.schedules.len(), 2);
        assert!(doc.notifications.is_empty());
    }
}
