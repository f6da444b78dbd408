//! History service
//!
//! Produces the display-ready projection of dose history: each dose joined
//! to its medication, filtered by taken/missed status, grouped by calendar
//! day with the most recent day first.
//!
//! The projection is a pure function of the stored collections and is
//! re-derived on every request, never cached across refreshes.

use crate::config::{DEFAULT_MEDICATION_COLOR, UNKNOWN_MEDICATION_LABEL};
use crate::error::Result;
use crate::storage::{DoseRecord, Medication, Repository};
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;

/// Status filter for the history view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DoseFilter {
    /// Every logged dose
    #[default]
    All,
    /// Doses confirmed taken
    Taken,
    /// Doses missed or still pending
    Missed,
}

/// A dose joined to its medication, if that medication still exists
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedDose {
    #[serde(flatten)]
    pub dose: DoseRecord,
    pub medication: Option<Medication>,
}

impl EnrichedDose {
    /// Medication name, degraded to a placeholder when the reference is
    /// missing
    pub fn display_name(&self) -> &str {
        self.medication
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or(UNKNOWN_MEDICATION_LABEL)
    }

    /// Dosage text, empty when the medication is missing
    pub fn display_dosage(&self) -> &str {
        self.medication
            .as_ref()
            .map(|m| m.dosage.as_str())
            .unwrap_or("")
    }

    pub fn display_color(&self) -> &str {
        self.medication
            .as_ref()
            .map(|m| m.color.as_str())
            .unwrap_or(DEFAULT_MEDICATION_COLOR)
    }
}

/// All doses that fall on one calendar day
#[derive(Debug, Clone, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub entries: Vec<EnrichedDose>,
}

/// Left-join each dose to its medication by id. A dose whose medication no
/// longer exists keeps `medication: None` — a display case, not an error.
pub fn enrich(doses: Vec<DoseRecord>, medications: &[Medication]) -> Vec<EnrichedDose> {
    doses
        .into_iter()
        .map(|dose| {
            let medication = medications
                .iter()
                .find(|m| m.id == dose.medication_id)
                .cloned();
            EnrichedDose { dose, medication }
        })
        .collect()
}

/// Keep the entries matching the filter. `All` is the identity.
pub fn apply_filter(entries: Vec<EnrichedDose>, filter: DoseFilter) -> Vec<EnrichedDose> {
    match filter {
        DoseFilter::All => entries,
        DoseFilter::Taken => entries.into_iter().filter(|e| e.dose.taken).collect(),
        DoseFilter::Missed => entries.into_iter().filter(|e| !e.dose.taken).collect(),
    }
}

/// Partition entries by the local calendar date of their timestamp, most
/// recent day first. Entry order within a day preserves input order.
pub fn group_by_day(entries: Vec<EnrichedDose>) -> Vec<DayGroup> {
    let mut by_date: BTreeMap<NaiveDate, Vec<EnrichedDose>> = BTreeMap::new();

    for entry in entries {
        let date = entry.dose.timestamp.with_timezone(&Local).date_naive();
        by_date.entry(date).or_default().push(entry);
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, entries)| DayGroup { date, entries })
        .collect()
}

/// Service producing the grouped history projection
#[derive(Clone)]
pub struct HistoryService {
    repo: Repository,
}

impl HistoryService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Load both collections and derive the projection for the given filter
    pub async fn grouped_history(&self, filter: DoseFilter) -> Result<Vec<DayGroup>> {
        tracing::info!("Loading dose history (filter: {:?})", filter);

        let doses = self.repo.get_dose_history().await?;
        let medications = self.repo.get_medications().await?;

        let enriched = enrich(doses, &medications);
        let filtered = apply_filter(enriched, filter);

        Ok(group_by_day(filtered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn medication(id: &str, name: &str) -> Medication {
        Medication {
            id: id.to_string(),
            name: name.to_string(),
            dosage: "1 tablet".to_string(),
            color: "#fff".to_string(),
        }
    }

    fn dose(id: &str, med_id: &str, timestamp: chrono::DateTime<Utc>, taken: bool) -> DoseRecord {
        DoseRecord {
            id: id.to_string(),
            medication_id: med_id.to_string(),
            timestamp,
            taken,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> chrono::DateTime<Utc> {
        // Midday-ish local-safe hours so the local calendar date matches
        Local
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_enrich_attaches_medication_iff_id_matches() {
        let meds = vec![medication("m1", "Aspirin")];
        let doses = vec![
            dose("d1", "m1", at(2024, 3, 1, 9), true),
            dose("d2", "m2", at(2024, 3, 1, 21), false),
        ];

        let enriched = enrich(doses, &meds);

        assert!(enriched[0].medication.is_some());
        assert_eq!(enriched[0].display_name(), "Aspirin");

        assert!(enriched[1].medication.is_none());
        assert_eq!(enriched[1].display_name(), "Unknown Medication");
        assert_eq!(enriched[1].display_dosage(), "");
        assert_eq!(enriched[1].display_color(), "#ccc");
    }

    #[test]
    fn test_filter_all_is_identity() {
        let doses = vec![
            dose("d1", "m1", at(2024, 3, 1, 9), true),
            dose("d2", "m1", at(2024, 3, 1, 21), false),
        ];
        let enriched = enrich(doses, &[]);

        let filtered = apply_filter(enriched.clone(), DoseFilter::All);
        assert_eq!(filtered.len(), enriched.len());
    }

    #[test]
    fn test_filter_taken_and_missed_are_exact_subsets() {
        let doses = vec![
            dose("d1", "m1", at(2024, 3, 1, 9), true),
            dose("d2", "m1", at(2024, 3, 1, 12), false),
            dose("d3", "m1", at(2024, 3, 1, 21), true),
        ];
        let enriched = enrich(doses, &[]);

        let taken = apply_filter(enriched.clone(), DoseFilter::Taken);
        assert_eq!(taken.len(), 2);
        assert!(taken.iter().all(|e| e.dose.taken));

        let missed = apply_filter(enriched, DoseFilter::Missed);
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].dose.id, "d2");
    }

    #[test]
    fn test_grouping_is_a_partition_in_descending_date_order() {
        let doses = vec![
            dose("d1", "m1", at(2024, 3, 1, 9), true),
            dose("d2", "m1", at(2024, 3, 3, 9), false),
            dose("d3", "m1", at(2024, 3, 1, 21), true),
            dose("d4", "m1", at(2024, 3, 2, 9), true),
        ];
        let groups = group_by_day(enrich(doses, &[]));

        assert_eq!(groups.len(), 3);

        // Most recent day first, strictly descending
        for pair in groups.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }

        // Every input record appears exactly once
        let mut ids: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.entries.iter().map(|e| e.dose.id.as_str()))
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["d1", "d2", "d3", "d4"]);

        // Same-day entries keep input order
        let day1 = groups.last().unwrap();
        let day1_ids: Vec<&str> = day1.entries.iter().map(|e| e.dose.id.as_str()).collect();
        assert_eq!(day1_ids, vec!["d1", "d3"]);
    }

    #[test]
    fn test_missed_filter_with_unknown_medication() {
        // Scenario: one known medication, one dose referencing a deleted one
        let meds = vec![medication("m1", "Aspirin")];
        let doses = vec![
            dose("d1", "m1", at(2024, 3, 1, 9), true),
            dose("d2", "m2", at(2024, 3, 1, 21), false),
        ];

        let groups = group_by_day(apply_filter(enrich(doses, &meds), DoseFilter::Missed));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries.len(), 1);
        assert_eq!(groups[0].entries[0].dose.id, "d2");
        assert_eq!(groups[0].entries[0].display_name(), "Unknown Medication");
    }

    #[test]
    fn test_group_by_day_empty_input() {
        let groups = group_by_day(Vec::new());
        assert!(groups.is_empty());
    }
}
