//! Dose logging commands

use crate::app::AppState;
use crate::cli::DoseCommand;
use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};

pub async fn handle(state: &AppState, command: DoseCommand) -> Result<()> {
    match command {
        DoseCommand::Log {
            medication_id,
            at,
            missed,
        } => log_dose(state, &medication_id, at.as_deref(), !missed).await,
    }
}

async fn log_dose(
    state: &AppState,
    medication_id: &str,
    at: Option<&str>,
    taken: bool,
) -> Result<()> {
    // Logging requires a known medication; enrichment only tolerates
    // references that go stale later.
    let medications = state.repository.get_medications().await?;
    let medication = medications
        .iter()
        .find(|m| m.id == medication_id)
        .ok_or_else(|| AppError::MedicationNotFound(medication_id.to_string()))?;

    let timestamp = match at {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| AppError::Generic(format!("Invalid timestamp {:?}: {}", raw, e)))?,
        None => Utc::now(),
    };

    let record = state
        .repository
        .record_dose(medication_id, timestamp, taken)
        .await?;

    let status = if record.taken { "taken" } else { "missed" };
    println!("Logged {} dose of {} ({})", status, medication.name, record.id);

    Ok(())
}
