//! Skip-dose service
//!
//! Records a user's decision to skip a scheduled dose. Skip events live in
//! their own collection, decoupled from the canonical dose history: they
//! are an independent audit trail and are not merged into the history
//! projection.

use crate::error::Result;
use crate::storage::{Repository, SkippedDose};

/// Service for recording skipped doses
#[derive(Clone)]
pub struct SkipService {
    repo: Repository,
}

impl SkipService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Record a skip for the given dose slot. Each call appends a new
    /// event; callers wanting skip-once semantics must check prior state
    /// themselves.
    pub async fn skip_dose(&self, med_id: &str, name: &str, time: &str) -> Result<SkippedDose> {
        tracing::info!("Skipping dose: {} at {}", med_id, time);

        let skipped = self.repo.add_skipped_dose(med_id, name, time).await?;

        tracing::info!("Skip recorded for medication: {}", skipped.med_id);
        Ok(skipped)
    }

    /// List all recorded skip events
    pub async fn list_skipped(&self) -> Result<Vec<SkippedDose>> {
        self.repo.get_skipped_doses().await
    }
}
