//! Maintenance history entity type

use serde::{Deserialize, Serialize};

/// Event category derived from the description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryCategory {
    #[serde(rename = "수리")]
    Repair,
    #[serde(rename = "정기점검")]
    RoutineInspection,
}

impl std::fmt::Display for HistoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryCategory::Repair => write!(f, "수리"),
            HistoryCategory::RoutineInspection => write!(f, "정기점검"),
        }
    }
}

impl HistoryCategory {
    /// Classify a mechanical-log description.
    ///
    /// Descriptions mentioning a repair or replacement term are repairs;
    /// everything else is a routine inspection. Electrical-log entries are
    /// always [`HistoryCategory::Repair`] and never go through this.
    pub fn classify(description: &str) -> Self {
        if description.contains("수리") || description.contains("교체") {
            HistoryCategory::Repair
        } else {
            HistoryCategory::RoutineInspection
        }
    }
}

/// Responsible team, fixed per source workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Technician {
    #[serde(rename = "정비팀")]
    Mechanical,
    #[serde(rename = "전기팀")]
    Electrical,
}

impl std::fmt::Display for Technician {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Technician::Mechanical => write!(f, "정비팀"),
            Technician::Electrical => write!(f, "전기팀"),
        }
    }
}

/// One logged maintenance/repair event
///
/// Every entry references exactly one existing equipment id. The outcome
/// and cost are placeholders; the source logs do not record them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Sequential identifier, dense from 1
    pub id: u32,

    /// Owning equipment
    pub equipment_id: u32,

    /// Normalized `YYYY-MM-DD` date
    pub date: String,

    #[serde(rename = "type")]
    pub category: HistoryCategory,

    pub technician: Technician,

    /// Verbatim log text, never truncated in the store
    pub description: String,

    pub result: String,
    pub cost: u32,
    pub notes: String,
}

impl HistoryEntry {
    /// Create a history entry with the fixed outcome fields
    pub fn new(
        id: u32,
        equipment_id: u32,
        date: String,
        category: HistoryCategory,
        technician: Technician,
        description: String,
        notes: String,
    ) -> Self {
        Self {
            id,
            equipment_id,
            date,
            category,
            technician,
            description,
            result: "양호".to_string(),
            cost: 0,
            notes,
        }
    }
}
