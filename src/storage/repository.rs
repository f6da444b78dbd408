//! Typed storage access layer
//!
//! CRUD operations for the three persisted collections. Every mutation goes
//! through the key-value store's serialized read-modify-write, so appends
//! from concurrent tasks cannot lose each other.

use super::kv::KvStore;
use super::models::*;
use crate::config::{DOSE_HISTORY_KEY, MEDICATIONS_KEY, SKIPPED_DOSES_KEY};
use crate::error::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Repository for persisted medication data
#[derive(Clone)]
pub struct Repository {
    store: KvStore,
}

impl Repository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// List all stored medications. Order is unspecified; callers re-sort
    /// as needed.
    pub async fn get_medications(&self) -> Result<Vec<Medication>> {
        self.store.get_collection(MEDICATIONS_KEY).await
    }

    /// Insert or update a medication. A missing id means a new record.
    pub async fn save_medication(&self, req: SaveMedicationRequest) -> Result<Medication> {
        let medication = Medication {
            id: req.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: req.name,
            dosage: req.dosage,
            color: req.color,
        };

        let saved = medication.clone();
        self.store
            .update_collection(MEDICATIONS_KEY, move |mut meds: Vec<Medication>| {
                match meds.iter_mut().find(|m| m.id == medication.id) {
                    Some(existing) => *existing = medication,
                    None => meds.push(medication),
                }
                meds
            })
            .await?;

        tracing::debug!("Saved medication: {}", saved.id);
        Ok(saved)
    }

    /// Delete a medication by id. Dose history referencing it is kept; the
    /// history projection degrades those entries to a placeholder.
    pub async fn delete_medication(&self, id: &str) -> Result<()> {
        let id_owned = id.to_string();
        self.store
            .update_collection(MEDICATIONS_KEY, move |mut meds: Vec<Medication>| {
                meds.retain(|m| m.id != id_owned);
                meds
            })
            .await?;

        tracing::debug!("Deleted medication: {}", id);
        Ok(())
    }

    /// List all logged doses
    pub async fn get_dose_history(&self) -> Result<Vec<DoseRecord>> {
        self.store.get_collection(DOSE_HISTORY_KEY).await
    }

    /// Append a dose record (taken or missed). History is append-only;
    /// records are only ever removed by `clear_all_data`.
    pub async fn record_dose(
        &self,
        medication_id: &str,
        timestamp: DateTime<Utc>,
        taken: bool,
    ) -> Result<DoseRecord> {
        let record = DoseRecord {
            id: Uuid::new_v4().to_string(),
            medication_id: medication_id.to_string(),
            timestamp,
            taken,
        };

        let saved = record.clone();
        self.store
            .update_collection(DOSE_HISTORY_KEY, move |mut doses: Vec<DoseRecord>| {
                doses.push(record);
                doses
            })
            .await?;

        tracing::debug!("Recorded dose: {} (taken: {})", saved.id, saved.taken);
        Ok(saved)
    }

    /// List all skipped doses
    pub async fn get_skipped_doses(&self) -> Result<Vec<SkippedDose>> {
        self.store.get_collection(SKIPPED_DOSES_KEY).await
    }

    /// Append a skip event. Every call appends a new record; skipping the
    /// same dose twice deliberately creates two records.
    pub async fn add_skipped_dose(
        &self,
        med_id: &str,
        name: &str,
        time: &str,
    ) -> Result<SkippedDose> {
        let skipped = SkippedDose {
            med_id: med_id.to_string(),
            name: name.to_string(),
            time: time.to_string(),
            date: Utc::now(),
        };

        let saved = skipped.clone();
        self.store
            .update_collection(SKIPPED_DOSES_KEY, move |mut skips: Vec<SkippedDose>| {
                skips.push(skipped);
                skips
            })
            .await?;

        tracing::debug!("Recorded skipped dose for medication: {}", saved.med_id);
        Ok(saved)
    }

    /// Remove all three collections. Idempotent: clearing an empty store
    /// succeeds. The removal happens under one store lock, so no reader
    /// observes a partial clear.
    pub async fn clear_all_data(&self) -> Result<()> {
        self.store
            .clear(&[MEDICATIONS_KEY, DOSE_HISTORY_KEY, SKIPPED_DOSES_KEY])
            .await?;

        tracing::info!("All medication data cleared");
        Ok(())
    }

    /// Access to the underlying store, for services persisting outside the
    /// three record collections.
    pub fn store(&self) -> &KvStore {
        &self.store
    }
}
