//! Part tagging and counting
//!
//! Each history description is folded to lowercase once, then every
//! canonical part tests its variants in order; the first variant found stops
//! the variant scan for that part, while other parts still get their turn.
//! A matched part only counts when one of the action keywords also occurs
//! in the folded text - a part name on its own is a mention, not an event.
//! Action keywords are Korean script, so the ASCII fold never alters them.

use crate::core::store::Document;
use crate::entities::HistoryEntry;

use super::vocabulary::{ACTION_KEYWORDS, PART_KEYWORDS};

/// Report cap for the frequency list
pub const MAX_REPORT_PARTS: usize = 30;

/// How many top parts get sample details
pub const DETAIL_PARTS: usize = 10;

/// Samples shown per detailed part
pub const SAMPLES_PER_PART: usize = 3;

/// Character cap on a recorded sample description
pub const SAMPLE_DESC_CHARS: usize = 100;

/// One counted occurrence kept for the detail section
#[derive(Debug, Clone)]
pub struct SampleDetail {
    pub date: String,
    pub equipment: String,
    /// Description capped at [`SAMPLE_DESC_CHARS`] characters
    pub description: String,
}

/// One part's tally, in first-encounter position
#[derive(Debug, Clone)]
pub struct PartCount {
    pub name: &'static str,
    pub count: usize,
    pub details: Vec<SampleDetail>,
}

/// Counted part events, ranked by descending count.
///
/// Ties keep the order in which parts were first counted, which follows the
/// vocabulary order within a single entry and entry order across the store.
#[derive(Debug, Default)]
pub struct PartReport {
    counts: Vec<PartCount>,
}

impl PartReport {
    /// Tag every history entry in the document
    pub fn build(doc: &Document) -> Self {
        let mut report = PartReport::default();
        for history in &doc.histories {
            report.tag_entry(history, doc.equipment_name(history.equipment_id));
        }
        report.counts.sort_by(|a, b| b.count.cmp(&a.count));
        report
    }

    /// Ranked counts, capped for the frequency list
    pub fn ranked(&self) -> &[PartCount] {
        let cap = self.counts.len().min(MAX_REPORT_PARTS);
        &self.counts[..cap]
    }

    /// Top parts that get a detail section
    pub fn top_detailed(&self) -> &[PartCount] {
        let cap = self.counts.len().min(DETAIL_PARTS);
        &self.counts[..cap]
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn tag_entry(&mut self, history: &HistoryEntry, equipment: &str) {
        let folded = history.description.to_lowercase();
        for &(part, variants) in PART_KEYWORDS {
            // first matching variant settles this part; no action keyword
            // means the mention stays uncounted
            if !variants.iter().any(|v| folded.contains(v)) {
                continue;
            }
            if !ACTION_KEYWORDS.iter().any(|a| folded.contains(a)) {
                continue;
            }
            self.record(part, history, equipment);
        }
    }

    fn record(&mut self, part: &'static str, history: &HistoryEntry, equipment: &str) {
        let idx = match self.counts.iter().position(|c| c.name == part) {
            Some(idx) => idx,
            None => {
                self.counts.push(PartCount {
                    name: part,
                    count: 0,
                    details: Vec::new(),
                });
                self.counts.len() - 1
            }
        };
        let entry = &mut self.counts[idx];
        entry.count += 1;
        entry.details.push(SampleDetail {
            date: history.date.clone(),
            equipment: equipment.to_string(),
            description: truncate_chars(&history.description, SAMPLE_DESC_CHARS),
        });
    }
}

/// Character-based truncation; the log text is Korean, so byte slicing
/// would split a code point
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CraneType, Equipment, HistoryCategory, Schedule, Technician};

    fn doc_with_descriptions(descriptions: &[&str]) -> Document {
        let histories = descriptions
            .iter()
            .enumerate()
            .map(|(i, desc)| {
                HistoryEntry::new(
                    i as u32 + 1,
                    1,
                    "2020-07-23".to_string(),
                    HistoryCategory::Repair,
                    Technician::Mechanical,
                    desc.to_string(),
                    String::new(),
                )
            })
            .collect();
        Document {
            equipments: vec![Equipment::new(
                1,
                "1호기".to_string(),
                "1호기".to_string(),
                CraneType::Overhead,
                String::new(),
            )],
            histories,
            schedules: Schedule::placeholders(),
            notifications: Vec::new(),
            export_date: String::new(),
        }
    }

    fn count_of(report: &PartReport, part: &str) -> usize {
        report
            .ranked()
            .iter()
            .find(|c| c.name == part)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    #[test]
    fn test_part_with_action_is_counted_once() {
        let report = PartReport::build(&doc_with_descriptions(&["와이어로프 교체"]));
        assert_eq!(count_of(&report, "Wire Rope"), 1);
        // no other part keyword occurs in the text
        assert_eq!(report.ranked().len(), 1);
    }

    #[test]
    fn test_part_without_action_is_not_counted() {
        let report = PartReport::build(&doc_with_descriptions(&["와이어로프 상태 확인만"]));
        assert!(report.is_empty());
    }

    #[test]
    fn test_multiple_parts_in_one_entry() {
        let report = PartReport::build(&doc_with_descriptions(&["모터 및 브레이크 교체"]));
        assert_eq!(count_of(&report, "Motor"), 1);
        assert_eq!(count_of(&report, "Brake"), 1);
    }

    #[test]
    fn test_first_variant_stops_variant_scan() {
        // "wire rope" and "와이어" both occur; the part still counts once
        let report = PartReport::build(&doc_with_descriptions(&["Wire rope(와이어) 교체"]));
        assert_eq!(count_of(&report, "Wire Rope"), 1);
    }

    #[test]
    fn test_english_keywords_fold_case() {
        let report = PartReport::build(&doc_with_descriptions(&["MOTOR 수리"]));
        assert_eq!(count_of(&report, "Motor"), 1);
    }

    #[test]
    fn test_ranked_is_sorted_desc_with_insertion_ties() {
        let report = PartReport::build(&doc_with_descriptions(&[
            "브레이크 교체",
            "브레이크 점검",
            "모터 교체",
            "펌프 수리",
        ]));
        let names: Vec<_> = report.ranked().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Brake", "Motor", "Pump"]);
        assert_eq!(report.ranked()[0].count, 2);
    }

    #[test]
    fn test_details_record_equipment_and_date() {
        let report = PartReport::build(&doc_with_descriptions(&["펌프 교체"]));
        let detail = &report.ranked()[0].details[0];
        assert_eq!(detail.date, "2020-07-23");
        assert_eq!(detail.equipment, "1호기");
        assert_eq!(detail.description, "펌프 교체");
    }

    #[test]
    fn test_missing_equipment_resolves_to_sentinel() {
        let mut doc = doc_with_descriptions(&["펌프 교체"]);
        doc.histories[0].equipment_id = 99;
        let report = PartReport::build(&doc);
        assert_eq!(report.ranked()[0].details[0].equipment, "unknown");
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        let long = "와".repeat(120);
        assert_eq!(truncate_chars(&long, SAMPLE_DESC_CHARS).chars().count(), 100);
        assert_eq!(truncate_chars("짧다", 100), "짧다");
    }

    #[test]
    fn test_report_caps_at_thirty_parts() {
        // one counted event per vocabulary part; the table has 31 entries
        let descriptions: Vec<String> = PART_KEYWORDS
            .iter()
            .map(|(_, variants)| format!("{} 교체", variants[0]))
            .collect();
        let refs: Vec<&str> = descriptions.iter().map(String::as_str).collect();
        let report = PartReport::build(&doc_with_descriptions(&refs));

        let ranked = report.ranked();
        assert_eq!(ranked.len(), MAX_REPORT_PARTS);
        for pair in ranked.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_empty_store_produces_empty_report() {
        let report = PartReport::build(&doc_with_descriptions(&[]));
        assert!(report.is_empty());
        assert!(report.ranked().is_empty());
    }
}
