//! Storage models
//!
//! Rust structs representing the persisted record collections. Field names
//! serialize as camelCase to stay compatible with the existing on-disk
//! document layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A medication being tracked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub name: String,
    /// Free-form dose description, e.g. "2 tablets"
    pub dosage: String,
    /// Display-only color tag
    pub color: String,
}

/// One logged dose: taken or missed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseRecord {
    pub id: String,
    /// May reference a medication that has since been deleted; the history
    /// projection tolerates the missing match.
    pub medication_id: String,
    pub timestamp: DateTime<Utc>,
    pub taken: bool,
}

/// A user's decision to skip a scheduled dose.
///
/// Medication identity is denormalized on purpose: the skip record stays
/// valid as an audit entry even if the medication is later edited or
/// deleted. `time` is the scheduled dose slot; `date` is when the skip
/// action happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedDose {
    pub med_id: String,
    pub name: String,
    pub time: String,
    pub date: DateTime<Utc>,
}

/// Save medication request (upsert; id generated when absent)
#[derive(Debug, Clone, Deserialize)]
pub struct SaveMedicationRequest {
    pub id: Option<String>,
    pub name: String,
    pub dosage: String,
    pub color: String,
}
