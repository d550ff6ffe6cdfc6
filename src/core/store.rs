//! The JSON record store
//!
//! One document holds everything. The importer rebuilds it from scratch on
//! every run and writes it whole; there is no partial update path.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::entities::{Equipment, HistoryEntry, Notification, Schedule};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write store {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("store {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to encode store: {source}")]
    Encode { source: serde_json::Error },
}

/// Top-level container for the record store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub equipments: Vec<Equipment>,
    pub histories: Vec<HistoryEntry>,
    pub schedules: Vec<Schedule>,
    pub notifications: Vec<Notification>,

    /// Local ISO-8601 timestamp of the run that produced this document
    pub export_date: String,
}

impl Document {
    /// Load a document from a JSON file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the document as pretty-printed JSON, whole file at once
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|source| StoreError::Encode { source })?;
        fs::write(path, json).map_err(|source| StoreError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// Resolve an equipment name by id; missing ids get a sentinel
    pub fn equipment_name(&self, id: u32) -> &str {
        self.equipments
            .iter()
            .find(|eq| eq.id == id)
            .map(|eq| eq.name.as_str())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CraneType, HistoryCategory, Technician};

    fn sample_document() -> Document {
        Document {
            equipments: vec![Equipment::new(
                1,
                "1호기".to_string(),
                "1호기".to_string(),
                CraneType::Overhead,
                "시트: 1호기".to_string(),
            )],
            histories: vec![HistoryEntry::new(
                1,
                1,
                "2020-07-23".to_string(),
                HistoryCategory::Repair,
                Technician::Mechanical,
                "와이어로프 교체".to_string(),
                String::new(),
            )],
            schedules: Schedule::placeholders(),
            notifications: Vec::new(),
            export_date: "2026-02-01T09:00:00".to_string(),
        }
    }

    #[test]
    fn test_document_roundtrip() {
        let doc = sample_document();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("crane_data.json");

        doc.save(&path).unwrap();
        let loaded = Document::load(&path).unwrap();

        assert_eq!(loaded.equipments.len(), 1);
        assert_eq!(loaded.histories.len(), 1);
        assert_eq!(loaded.schedules.len(), 2);
        assert!(loaded.notifications.is_empty());
        assert_eq!(loaded.export_date, doc.export_date);
    }

    #[test]
    fn test_wire_format_keys() {
        let doc = sample_document();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("exportDate").is_some());
        assert!(json["histories"][0].get("equipmentId").is_some());
    }

    #[test]
    fn test_equipment_name_lookup() {
        let doc = sample_document();
        assert_eq!(doc.equipment_name(1), "1호기");
        assert_eq!(doc.equipment_name(99), "unknown");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = Document::load(Path::new("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}
