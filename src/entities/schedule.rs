//! Schedule and notification placeholder types
//!
//! The importer does not derive planned maintenance from the logs; it emits
//! two fixed schedule entries the consuming application seeds its calendar
//! with, and an always-empty notification list.

use serde::{Deserialize, Serialize};

/// A planned maintenance entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: u32,
    pub equipment_id: u32,
    pub date: String,
    #[serde(rename = "type")]
    pub schedule_type: String,
    pub technician: String,
    pub notes: String,
}

/// Reserved for the consuming application; the importer never creates any
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    pub equipment_id: u32,
    pub message: String,
    pub date: String,
}

impl Schedule {
    /// Fixed placeholder entries emitted with every import
    pub fn placeholders() -> Vec<Schedule> {
        vec![
            Schedule {
                id: 1,
                equipment_id: 1,
                date: "2026-02-15".to_string(),
                schedule_type: "정기점검".to_string(),
                technician: "정비팀".to_string(),
                notes: "월간 정기점검".to_string(),
            },
            Schedule {
                id: 2,
                equipment_id: 2,
                date: "2026-02-20".to_string(),
                schedule_type: "안전검사".to_string(),
                technician: "안전팀".to_string(),
                notes: "법정 안전검사".to_string(),
            },
        ]
    }
}
