//! Equipment entity type

use serde::{Deserialize, Serialize};

/// Crane category, inferred from the sheet title
///
/// Serialized with the Korean wire values the consuming application
/// expects (호이스트 / 갠트리크레인 / 천장크레인).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CraneType {
    #[serde(rename = "호이스트")]
    Hoist,
    #[serde(rename = "갠트리크레인")]
    Gantry,
    #[serde(rename = "천장크레인")]
    Overhead,
}

impl Default for CraneType {
    fn default() -> Self {
        CraneType::Overhead
    }
}

impl std::fmt::Display for CraneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CraneType::Hoist => write!(f, "호이스트"),
            CraneType::Gantry => write!(f, "갠트리크레인"),
            CraneType::Overhead => write!(f, "천장크레인"),
        }
    }
}

impl CraneType {
    /// Infer the crane category from a sheet title.
    ///
    /// Matching is substring-based on the lower-cased title. Exactly three
    /// categories exist; anything without a hoist/jib or grab/port indicator
    /// is an overhead crane.
    pub fn infer(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("hoist") || title.contains("jib") {
            return CraneType::Hoist;
        }
        if title.contains("grab") {
            return CraneType::Gantry;
        }
        if title.contains("llc") || title.contains("항만") || title.contains("port") {
            return CraneType::Gantry;
        }
        CraneType::Overhead
    }
}

/// One crane, created from a workbook sheet
///
/// The `code` is the merge key joining the mechanical and electrical
/// workbooks. Descriptive fields other than name/code/type are fixed
/// values, not derived from the logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Sequential identifier, dense from 1
    pub id: u32,

    /// Human name (sheet title with the report-suffix phrase removed)
    pub name: String,

    /// Merge key (sheet name with the "(H)" token removed, trimmed)
    pub code: String,

    /// Crane category
    #[serde(rename = "type")]
    pub crane_type: CraneType,

    /// Rated capacity in tons, unknown for all imported sheets
    pub capacity: Option<f64>,

    pub location: String,
    pub manufacturer: String,
    pub install_date: String,
    pub status: String,
    pub next_inspection: String,

    /// Free-text provenance note ("시트: <sheet name>")
    pub notes: String,
}

impl Equipment {
    /// Create an equipment record with the fixed descriptive fields
    pub fn new(id: u32, name: String, code: String, crane_type: CraneType, notes: String) -> Self {
        Self {
            id,
            name,
            code,
            crane_type,
            capacity: None,
            location: "공장동".to_string(),
            manufacturer: String::new(),
            install_date: "2016-01-01".to_string(),
            status: "정상".to_string(),
            next_inspection: "2026-03-01".to_string(),
            notes,
        }
    }
}
